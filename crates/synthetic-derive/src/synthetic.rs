use crate::{naming::Naming, paths::crate_path};
use darling::{FromDeriveInput, FromField, FromMeta, ast::Data, util::PathList};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{DeriveInput, Expr, Generics, Ident, LitStr, Path, Type, ext::IdentExt};

/// Prefix of derived storage keys; matches the runtime default.
const STORAGE_PREFIX: &str = "_";

///
/// SyntheticInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(synthetic), supports(struct_named))]
struct SyntheticInput {
    ident: Ident,
    generics: Generics,
    data: Data<(), SyntheticField>,

    /// Constructor consumes call arguments for fields.
    #[darling(default)]
    constructor: bool,

    #[darling(default)]
    naming: Naming,

    #[darling(default)]
    init: Option<Init>,
}

///
/// Init
/// original constructor: `init(path = "..", params(a, b), variadic, variadic_keywords)`
///

#[derive(Debug, FromMeta)]
struct Init {
    path: Path,

    #[darling(default)]
    params: PathList,

    #[darling(default)]
    variadic: bool,

    #[darling(default)]
    variadic_keywords: bool,
}

///
/// SyntheticField
///

#[derive(Debug, FromField)]
#[darling(attributes(synthetic))]
struct SyntheticField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    default: Option<Expr>,

    #[darling(default)]
    read_only: bool,

    #[darling(default)]
    getter: Option<Ident>,

    #[darling(default)]
    setter: Option<Ident>,

    #[darling(default)]
    storage: Option<LitStr>,

    #[darling(default)]
    validator: Option<Path>,
}

///
/// FieldPlan
/// one field with every name resolved
///

struct FieldPlan<'a> {
    field: &'a SyntheticField,
    ident: &'a Ident,
    name: String,
    getter: String,
    setter: Option<String>,
    storage_key: String,
}

impl<'a> FieldPlan<'a> {
    fn new(field: &'a SyntheticField, naming: Naming) -> Result<Self, darling::Error> {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| darling::Error::custom("Synthetic requires named fields"))?;

        // raw identifiers keep their plain spelling at runtime
        let name = ident.unraw().to_string();
        check_identifier("field name", &name, ident)?;

        if field.read_only && field.setter.is_some() {
            return Err(
                darling::Error::custom("a read_only field cannot name a setter").with_span(ident),
            );
        }

        let getter = match &field.getter {
            Some(getter) => getter.unraw().to_string(),
            None => naming.getter(&name),
        };
        check_identifier("getter name", &getter, ident)?;

        let setter = if field.read_only {
            None
        } else {
            let setter = match &field.setter {
                Some(setter) => setter.unraw().to_string(),
                None => naming.setter(&name),
            };
            check_identifier("setter name", &setter, ident)?;

            Some(setter)
        };

        let storage_key = field
            .storage
            .as_ref()
            .map_or_else(|| format!("{STORAGE_PREFIX}{name}"), LitStr::value);
        if !is_identifier(&storage_key) {
            return Err(storage_error(
                field,
                ident,
                format!("storage key '{storage_key}' is not a valid identifier"),
            ));
        }

        Ok(Self {
            field,
            ident,
            name,
            getter,
            setter,
            storage_key,
        })
    }

    fn accessor_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.getter.as_str()).chain(self.setter.as_deref())
    }

    // Builder call registering this field on the runtime class.
    fn declaration(&self, root: &TokenStream) -> TokenStream {
        let name = &self.name;
        let ty = &self.field.ty;
        let read_only = self.field.read_only;
        let getter = &self.getter;
        let storage_key = &self.storage_key;

        let default = self
            .field
            .default
            .as_ref()
            .map_or_else(|| quote!(::core::default::Default::default()), |expr| quote!(#expr));

        let setter = match &self.setter {
            Some(setter) => quote!(Some(#setter.to_string())),
            None => quote!(None),
        };

        let validator = match &self.field.validator {
            Some(path) => {
                let label = quote!(#path).to_string().replace(' ', "");
                quote!(Some(#root::model::Validator::new(#label, #path)))
            }
            None => quote!(None),
        };

        quote! {
            .field_with(#name, |f| {
                let default: #ty = #default;

                f.default(#root::value::FieldValue::to_value(&default))
                    .validator(#validator)
                    .read_only(#read_only)
                    .getter_name(Some(#getter.to_string()))
                    .setter_name(#setter)
                    .storage_key(Some(#storage_key.to_string()))
            })
        }
    }

    fn accessors(&self) -> TokenStream {
        let ident = self.ident;
        let ty = &self.field.ty;
        let getter = method_ident(&self.getter);

        let setter = self.setter.as_deref().map(|setter| {
            let setter = method_ident(setter);

            quote! {
                pub fn #setter(&mut self, value: #ty) {
                    self.#ident = value;
                }
            }
        });

        quote! {
            #[must_use]
            pub const fn #getter(&self) -> &#ty {
                &self.#ident
            }

            #setter
        }
    }

    fn read(&self, root: &TokenStream) -> TokenStream {
        let ident = self.ident;
        let ty = &self.field.ty;
        let name = &self.name;
        let storage_key = &self.storage_key;

        quote! {
            #ident: #root::traits::read_slot::<#ty>(instance, #name, #storage_key)?
        }
    }
}

// derive_synthetic
pub fn derive_synthetic(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, darling::Error> {
    let parsed = SyntheticInput::from_derive_input(input)?;

    if !parsed.generics.params.is_empty() {
        return Err(
            darling::Error::custom("Synthetic cannot be derived for generic structs")
                .with_span(&parsed.ident),
        );
    }

    let Data::Struct(fields) = &parsed.data else {
        return Err(darling::Error::custom(
            "Synthetic can only be derived for structs with named fields",
        ));
    };

    let plans = fields
        .iter()
        .map(|field| FieldPlan::new(field, parsed.naming))
        .collect::<Result<Vec<_>, _>>()?;
    check_collisions(&plans)?;

    let root = crate_path();
    let ident = &parsed.ident;
    let class_name = ident.to_string();

    let constructor = parsed
        .init
        .as_ref()
        .map(|init| init_constructor(init, &root))
        .transpose()?
        .unwrap_or_else(|| quote!(#root::signature::Constructor::native()));

    let style = Ident::new(parsed.naming.style_variant(), Span::call_site());
    let declarations = plans.iter().map(|plan| plan.declaration(&root));
    let synthesize = parsed
        .constructor
        .then(|| quote!(.synthesize_constructor()));

    let accessors = plans.iter().map(FieldPlan::accessors);
    let reads = plans.iter().map(|plan| plan.read(&root));

    Ok(quote! {
        #[allow(non_snake_case)]
        impl #ident {
            #(#accessors)*
        }

        impl #root::traits::Synthesized for #ident {
            fn class() -> &'static #root::class::Class {
                fn build() -> ::core::result::Result<#root::class::Class, #root::Error> {
                    #root::augment::ClassBuilder::new(#class_name)
                        .constructor(#constructor)
                        .naming(#root::naming::NamingStyle::#style.convention())
                        #(#declarations)*
                        #synthesize
                        .build()
                }

                static CLASS: ::std::sync::LazyLock<#root::class::Class> =
                    ::std::sync::LazyLock::new(|| match build() {
                        Ok(class) => class,
                        Err(err) => panic!("invalid synthetic class `{}`: {err}", #class_name),
                    });

                &CLASS
            }

            fn from_instance(
                instance: &#root::class::Instance,
            ) -> ::core::result::Result<Self, #root::Error> {
                Ok(Self {
                    #(#reads),*
                })
            }
        }
    })
}

// Original constructor from `init(...)`; the signature is checked here so
// the runtime build cannot fail on it.
fn init_constructor(init: &Init, root: &TokenStream) -> Result<TokenStream, darling::Error> {
    let mut params: Vec<String> = Vec::new();

    for path in init.params.iter() {
        let param = path
            .get_ident()
            .ok_or_else(|| darling::Error::custom("parameter must be a plain name").with_span(path))?
            .to_string();

        if params.contains(&param) {
            return Err(
                darling::Error::custom(format!("parameter '{param}' is declared more than once"))
                    .with_span(path),
            );
        }

        params.push(param);
    }

    let path = &init.path;
    let signature = if params.is_empty() {
        quote!(#root::signature::Signature::empty())
    } else {
        quote!(#root::signature::Signature::new([#(#params),*])?)
    };
    let variadic = init
        .variadic
        .then(|| quote!(.with_variadic_positional()));
    let variadic_keywords = init
        .variadic_keywords
        .then(|| quote!(.with_variadic_keyword()));

    Ok(quote! {
        #root::signature::Constructor::new(
            #signature
                #variadic
                #variadic_keywords,
            #path,
        )
    })
}

// The runtime declaration checks, run here so a derived class always builds.
fn check_collisions(plans: &[FieldPlan<'_>]) -> Result<(), darling::Error> {
    let mut errors = darling::Error::accumulator();
    let mut accessors: Vec<&str> = Vec::new();

    for plan in plans {
        for name in plan.accessor_names() {
            if accessors.contains(&name) {
                errors.push(
                    darling::Error::custom(format!(
                        "accessor '{name}' is generated for more than one field"
                    ))
                    .with_span(plan.ident),
                );
            }
            accessors.push(name);
        }
    }

    let mut storage_keys: Vec<&str> = Vec::new();

    for plan in plans {
        let key = plan.storage_key.as_str();

        if accessors.contains(&key) {
            errors.push(storage_error(
                plan.field,
                plan.ident,
                format!(
                    "storage key '{key}' of field '{}' collides with an accessor",
                    plan.name
                ),
            ));
        }
        if storage_keys.contains(&key) {
            errors.push(storage_error(
                plan.field,
                plan.ident,
                format!(
                    "storage key '{key}' of field '{}' is already used by another field",
                    plan.name
                ),
            ));
        }
        storage_keys.push(key);
    }

    errors.finish()
}

// Points at the `storage` literal when there is one, else at the field.
fn storage_error(field: &SyntheticField, ident: &Ident, message: String) -> darling::Error {
    let error = darling::Error::custom(message);

    match &field.storage {
        Some(storage) => error.with_span(storage),
        None => error.with_span(ident),
    }
}

// Same shape the runtime accepts: ASCII letter or `_`, then alphanumerics or `_`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_identifier(what: &str, name: &str, ident: &Ident) -> Result<(), darling::Error> {
    if is_identifier(name) && !matches!(name, "self" | "Self" | "super" | "crate" | "_") {
        return Ok(());
    }

    Err(darling::Error::custom(format!("{what} '{name}' is not a valid identifier")).with_span(ident))
}

// Keywords become raw identifiers, so a field `r#type` gets `fn r#type`.
fn method_ident(name: &str) -> Ident {
    let keyword = syn::parse_str::<Ident>(name).is_err() || name == "gen";

    if keyword {
        Ident::new_raw(name, Span::call_site())
    } else {
        Ident::new(name, Span::call_site())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests;

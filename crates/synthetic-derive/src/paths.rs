use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

/// Env var naming an alternative crate root for generated code.
const CRATE_ENV: &str = "SYNTHETIC_CRATE";

///
/// crate_path
///
/// Root path for generated code. Defaults to the public `::synthetic`
/// facade; `SYNTHETIC_CRATE` overrides it for crates that re-export it.
///

pub fn crate_path() -> TokenStream {
    std::env::var(CRATE_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .and_then(|value| syn::parse_str::<Path>(&value).ok())
        .map_or_else(|| quote!(::synthetic), |path| quote!(#path))
}

use crate::{
    augment::{ClassTransform, ConstructorDeclaration, FieldDeclaration, decorate},
    class::Class,
    config::SyntheticConfig,
    error::Error,
    model::{FieldSpec, FieldSpecBuilder},
    naming::NamingConvention,
    signature::Constructor,
    value::Value,
};
use std::sync::Arc;

///
/// Declaration
///

enum Declaration {
    Field {
        spec: FieldSpecBuilder,
        naming: Arc<dyn NamingConvention>,
    },
    Constructor,
    Transform(Box<dyn ClassTransform>),
}

///
/// ClassBuilder
///
/// Collects every declaration for one class in source order and applies
/// them in a single pass. The returned class is final: nothing is declared
/// on it after `build`.
///

pub struct ClassBuilder {
    name: String,
    constructor: Constructor,
    config: SyntheticConfig,
    naming: Option<Arc<dyn NamingConvention>>,
    declarations: Vec<Declaration>,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructor: Constructor::native(),
            config: SyntheticConfig::default(),
            naming: None,
            declarations: Vec::new(),
        }
    }

    /// The class's own constructor, captured as the original.
    #[must_use]
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = constructor;
        self
    }

    /// Naming and storage defaults for fields declared after this call.
    #[must_use]
    pub fn with_config(mut self, config: SyntheticConfig) -> Self {
        self.config = config;
        self
    }

    /// Convention for fields that do not pick one; overrides the config.
    #[must_use]
    pub fn naming(mut self, naming: Arc<dyn NamingConvention>) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Writable field with a default and nothing else.
    #[must_use]
    pub fn field(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.field_with(name, |f| f.default(default))
    }

    /// Field configured through its spec builder.
    #[must_use]
    pub fn field_with<F>(mut self, name: impl Into<String>, configure: F) -> Self
    where
        F: FnOnce(FieldSpecBuilder) -> FieldSpecBuilder,
    {
        let name = name.into();
        let storage_key = self.config.storage_key(&name);
        let spec = configure(FieldSpec::builder(name).storage_key(Some(storage_key)));

        let naming = self
            .naming
            .clone()
            .unwrap_or_else(|| self.config.naming_convention());

        self.declarations.push(Declaration::Field { spec, naming });
        self
    }

    /// Any prepared transform, in its source position.
    #[must_use]
    pub fn declare(mut self, transform: impl ClassTransform + 'static) -> Self {
        self.declarations
            .push(Declaration::Transform(Box::new(transform)));
        self
    }

    /// Mark the constructor as consuming call arguments.
    #[must_use]
    pub fn synthesize_constructor(mut self) -> Self {
        self.declarations.push(Declaration::Constructor);
        self
    }

    pub fn build(self) -> Result<Class, Error> {
        let transforms = self
            .declarations
            .into_iter()
            .map(|decl| -> Result<Box<dyn ClassTransform>, Error> {
                let transform: Box<dyn ClassTransform> = match decl {
                    Declaration::Field { spec, naming } => {
                        Box::new(FieldDeclaration::new(spec.build()?, naming))
                    }
                    Declaration::Constructor => Box::new(ConstructorDeclaration),
                    Declaration::Transform(transform) => transform,
                };

                Ok(transform)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        let mut class = Class::new(self.name, self.constructor);
        decorate(&mut class, &transforms)?;

        tracing::debug!(
            class = class.name(),
            fields = class.metadata().map_or(0, |m| m.fields().len()),
            "class built"
        );

        Ok(class)
    }
}

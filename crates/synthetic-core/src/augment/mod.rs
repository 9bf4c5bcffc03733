//! Class augmentation: field and constructor declarations applied to a
//! `Class`, plus the builder that applies a whole set of them at once.

mod builder;


pub use builder::ClassBuilder;

use crate::{
    class::Class,
    error::{Error, ValidationError, validate_identifier},
    model::{FieldSpec, Validator},
    naming::NamingConvention,
    value::Value,
};
use std::sync::Arc;

///
/// ClassTransform
///
/// One declaration applied to a class, the Rust form of a class decorator.
///

pub trait ClassTransform {
    fn apply(&self, class: &mut Class) -> Result<(), Error>;
}

/// Apply a stack of transforms written top to bottom in source order.
///
/// Transforms run bottom-up, the order stacked decorators are visited in.
pub fn decorate(class: &mut Class, transforms: &[Box<dyn ClassTransform>]) -> Result<(), Error> {
    for transform in transforms.iter().rev() {
        transform.apply(class)?;
    }

    Ok(())
}

///
/// FieldDeclaration
///

#[derive(Clone)]
pub struct FieldDeclaration {
    spec: FieldSpec,
    naming: Arc<dyn NamingConvention>,
}

/// Declare one synthesized field.
#[allow(clippy::too_many_arguments)]
pub fn make_field_declaration(
    name: impl Into<String>,
    default: impl Into<Value>,
    validator: Option<Validator>,
    read_only: bool,
    naming: Arc<dyn NamingConvention>,
    getter_name: Option<String>,
    setter_name: Option<String>,
    storage_key: Option<String>,
) -> Result<FieldDeclaration, Error> {
    let spec = FieldSpec::builder(name)
        .default(default)
        .validator(validator)
        .read_only(read_only)
        .getter_name(getter_name)
        .setter_name(setter_name)
        .storage_key(storage_key)
        .build()?;

    Ok(FieldDeclaration::new(spec, naming))
}

impl FieldDeclaration {
    #[must_use]
    pub fn new(spec: FieldSpec, naming: Arc<dyn NamingConvention>) -> Self {
        Self { spec, naming }
    }

    #[must_use]
    pub const fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    #[must_use]
    pub fn getter_name(&self) -> String {
        self.spec
            .getter_name()
            .map_or_else(|| self.naming.getter_name(self.spec.name()), ToString::to_string)
    }

    /// Setter name, or `None` for read-only fields.
    #[must_use]
    pub fn setter_name(&self) -> Option<String> {
        if self.spec.is_read_only() {
            return None;
        }

        Some(
            self.spec
                .setter_name()
                .map_or_else(|| self.naming.setter_name(self.spec.name()), ToString::to_string),
        )
    }

    // Every check runs before the class is touched, so a rejected
    // declaration leaves no trace.
    fn check(&self, class: &Class, getter: &str, setter: Option<&str>) -> Result<(), Error> {
        let field = self.spec.name();

        if class.metadata().and_then(|m| m.field(field)).is_some() {
            return Err(Error::duplicate_field(class.name(), field));
        }

        validate_identifier("getter name", getter)?;
        if let Some(setter) = setter {
            validate_identifier("setter name", setter)?;
        }

        let accessors = class.accessors();
        let new_names = std::iter::once(getter).chain(setter);

        let clash = new_names
            .clone()
            .find(|name| accessors.contains(name))
            .or_else(|| setter.filter(|s| *s == getter));

        if let Some(accessor) = clash {
            return Err(ValidationError::AccessorCollision {
                class: class.name().to_string(),
                field: field.to_string(),
                accessor: accessor.to_string(),
            }
            .into());
        }

        // storage keys may not shadow any public accessor, old or new
        let storage_key = self.spec.storage_key();
        let all_names: Vec<&str> = accessors
            .getter_names()
            .chain(accessors.setter_names())
            .chain(new_names.clone())
            .collect();

        if all_names.contains(&storage_key) {
            return Err(storage_collision(class, field, storage_key));
        }

        // nor may two fields share a slot, or a new accessor shadow an
        // existing slot
        if let Some(meta) = class.metadata() {
            for existing in meta.fields() {
                let existing_key = existing.storage_key();

                if existing_key == storage_key {
                    return Err(ValidationError::SharedStorage {
                        class: class.name().to_string(),
                        field: field.to_string(),
                        other: existing.name().to_string(),
                        storage_key: storage_key.to_string(),
                    }
                    .into());
                }
                if new_names.clone().any(|name| name == existing_key) {
                    return Err(storage_collision(class, existing.name(), existing_key));
                }
            }
        }

        Ok(())
    }
}

impl ClassTransform for FieldDeclaration {
    fn apply(&self, class: &mut Class) -> Result<(), Error> {
        let getter = self.getter_name();
        let setter = self.setter_name();

        self.check(class, &getter, setter.as_deref())?;

        class
            .metadata_or_init()
            .insert_field_at_front(self.spec.clone())?;
        class.install_constructor();

        let storage_key = self.spec.storage_key().to_string();
        let accessors = class.accessors_mut();
        accessors.insert_getter(getter, storage_key.clone());
        if let Some(setter) = setter {
            accessors.insert_setter(setter, storage_key);
        }

        tracing::debug!(
            class = class.name(),
            field = self.spec.name(),
            read_only = self.spec.is_read_only(),
            "declared synthesized field"
        );

        Ok(())
    }
}

fn storage_collision(class: &Class, field: &str, storage_key: &str) -> Error {
    ValidationError::StorageCollision {
        class: class.name().to_string(),
        field: field.to_string(),
        storage_key: storage_key.to_string(),
    }
    .into()
}

///
/// ConstructorDeclaration
///
/// Marks the class's constructor as consuming call arguments for its
/// synthesized fields.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ConstructorDeclaration;

#[must_use]
pub const fn make_constructor_declaration() -> ConstructorDeclaration {
    ConstructorDeclaration
}

impl ClassTransform for ConstructorDeclaration {
    fn apply(&self, class: &mut Class) -> Result<(), Error> {
        class.metadata_or_init().set_consumes_arguments(true);
        class.install_constructor();

        tracing::debug!(class = class.name(), "synthesized constructor declared");

        Ok(())
    }
}

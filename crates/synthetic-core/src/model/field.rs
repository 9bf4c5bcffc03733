use crate::{
    config::DEFAULT_STORAGE_PREFIX,
    error::{ValidationError, validate_identifier},
    value::Value,
};
use std::{fmt, sync::Arc};

///
/// Validator
///
/// Predicate recorded alongside a field for use by value-checking layers.
/// Construction never invokes it.
///

#[derive(Clone)]
pub struct Validator {
    label: String,
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Validator {
    pub fn new<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn check(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").field(&self.label).finish()
    }
}

///
/// FieldSpec
///
/// One synthesized field. Immutable once built.
///

#[derive(Clone, Debug)]
pub struct FieldSpec {
    name: String,
    default: Value,
    validator: Option<Validator>,
    read_only: bool,
    getter_name: Option<String>,
    setter_name: Option<String>,
    storage_key: String,
}

impl FieldSpec {
    /// Shorthand for a writable field with no validator or overrides.
    pub fn new(name: impl Into<String>, default: impl Into<Value>) -> Result<Self, ValidationError> {
        Self::builder(name).default(default).build()
    }

    pub fn builder(name: impl Into<String>) -> FieldSpecBuilder {
        FieldSpecBuilder::new(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn default_value(&self) -> &Value {
        &self.default
    }

    #[must_use]
    pub const fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[must_use]
    pub fn getter_name(&self) -> Option<&str> {
        self.getter_name.as_deref()
    }

    #[must_use]
    pub fn setter_name(&self) -> Option<&str> {
        self.setter_name.as_deref()
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

///
/// FieldSpecBuilder
///

#[derive(Debug)]
pub struct FieldSpecBuilder {
    name: String,
    default: Value,
    validator: Option<Validator>,
    read_only: bool,
    getter_name: Option<String>,
    setter_name: Option<String>,
    storage_key: Option<String>,
}

impl FieldSpecBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Value::Null,
            validator: None,
            read_only: false,
            getter_name: None,
            setter_name: None,
            storage_key: None,
        }
    }

    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = value.into();
        self
    }

    #[must_use]
    pub fn validator(mut self, validator: Option<Validator>) -> Self {
        self.validator = validator;
        self
    }

    #[must_use]
    pub const fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    #[must_use]
    pub fn getter_name(mut self, name: Option<String>) -> Self {
        self.getter_name = name;
        self
    }

    #[must_use]
    pub fn setter_name(mut self, name: Option<String>) -> Self {
        self.setter_name = name;
        self
    }

    #[must_use]
    pub fn storage_key(mut self, key: Option<String>) -> Self {
        self.storage_key = key;
        self
    }

    pub fn build(self) -> Result<FieldSpec, ValidationError> {
        validate_identifier("field name", &self.name)?;

        if let Some(getter) = &self.getter_name {
            validate_identifier("getter name", getter)?;
        }
        if let Some(setter) = &self.setter_name {
            validate_identifier("setter name", setter)?;
        }

        let storage_key = match self.storage_key {
            Some(key) => key,
            None => format!("{DEFAULT_STORAGE_PREFIX}{}", self.name),
        };
        validate_identifier("storage key", &storage_key)?;

        Ok(FieldSpec {
            name: self.name,
            default: self.default,
            validator: self.validator,
            read_only: self.read_only,
            getter_name: self.getter_name,
            setter_name: self.setter_name,
            storage_key,
        })
    }
}

///
/// TESTS
///

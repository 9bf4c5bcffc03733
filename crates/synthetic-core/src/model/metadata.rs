use crate::{error::Error, model::field::FieldSpec, signature::Constructor};

///
/// ClassMetadata
///
/// Per-class registry driving the synthesized constructor.
///
/// - `original_constructor` is captured once, when the class is first
///   augmented, and never replaced afterwards.
/// - `fields` is kept in source declaration order. Declarations are
///   visited last-to-first, so each new field goes to the front.
/// - The registry only grows; there is no removal.
///

#[derive(Clone, Debug)]
pub struct ClassMetadata {
    class: String,
    original_constructor: Constructor,
    fields: Vec<FieldSpec>,
    consumes_arguments: bool,
}

impl ClassMetadata {
    #[must_use]
    pub fn new(class: impl Into<String>, original_constructor: Constructor) -> Self {
        Self {
            class: class.into(),
            original_constructor,
            fields: Vec::new(),
            consumes_arguments: false,
        }
    }

    /// Copy of this registry for a derived class.
    ///
    /// The child starts with the parent's fields and flag. It keeps the
    /// parent's original constructor unless it declares its own.
    #[must_use]
    pub fn inherit(&self, class: impl Into<String>, constructor: Option<Constructor>) -> Self {
        Self {
            class: class.into(),
            original_constructor: constructor
                .unwrap_or_else(|| self.original_constructor.clone()),
            fields: self.fields.clone(),
            consumes_arguments: self.consumes_arguments,
        }
    }

    /// Prepend `spec`; fails without modification if the name is taken.
    pub fn insert_field_at_front(&mut self, spec: FieldSpec) -> Result<(), Error> {
        if self.field(spec.name()).is_some() {
            return Err(Error::duplicate_field(&self.class, spec.name()));
        }

        self.fields.insert(0, spec);

        Ok(())
    }

    pub const fn set_consumes_arguments(&mut self, flag: bool) {
        self.consumes_arguments = flag;
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    #[must_use]
    pub const fn original_constructor(&self) -> &Constructor {
        &self.original_constructor
    }

    #[must_use]
    pub const fn consumes_arguments(&self) -> bool {
        self.consumes_arguments
    }
}

///
/// TESTS
///

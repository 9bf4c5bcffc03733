use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure raised while declaring fields on a class or while
/// constructing an instance. Nothing is recovered internally; all variants
/// surface to the code performing augmentation or construction.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("field '{field}' is already declared on class '{class}'")]
    DuplicateField { class: String, field: String },

    #[error("class '{class}' has no member '{member}'")]
    MemberNotFound { class: String, member: String },

    #[error("constructor signature cannot be resolved: {reason}")]
    UnresolvableSignature { reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("field '{field}' holds {found}, expected {expected}")]
    ValueMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },
}

impl Error {
    pub(crate) fn duplicate_field(class: &str, field: &str) -> Self {
        Self::DuplicateField {
            class: class.to_string(),
            field: field.to_string(),
        }
    }

    pub(crate) fn member_not_found(class: &str, member: &str) -> Self {
        Self::MemberNotFound {
            class: class.to_string(),
            member: member.to_string(),
        }
    }

    pub(crate) fn unresolvable_signature(reason: impl Into<String>) -> Self {
        Self::UnresolvableSignature {
            reason: reason.into(),
        }
    }

    /// Build a typed-conversion failure for generated accessors.
    pub fn value_mismatch(field: &str, expected: &'static str, found: &crate::Value) -> Self {
        Self::ValueMismatch {
            field: field.to_string(),
            expected,
            found: found.to_string(),
        }
    }

    #[must_use]
    pub const fn is_duplicate_field(&self) -> bool {
        matches!(self, Self::DuplicateField { .. })
    }

    #[must_use]
    pub const fn is_member_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound { .. })
    }
}

///
/// ValidationError
///
/// A declaration's arguments violate their stated shape.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ValidationError {
    #[error("accessor '{accessor}' for field '{field}' is already defined on class '{class}'")]
    AccessorCollision {
        class: String,
        field: String,
        accessor: String,
    },

    #[error("{what} must not be empty")]
    Empty { what: &'static str },

    #[error("{what} '{name}' is not a valid identifier")]
    InvalidIdentifier { what: &'static str, name: String },

    #[error("storage key '{storage_key}' of field '{field}' is already used by field '{other}' on class '{class}'")]
    SharedStorage {
        class: String,
        field: String,
        other: String,
        storage_key: String,
    },

    #[error("storage key '{storage_key}' of field '{field}' collides with an accessor on class '{class}'")]
    StorageCollision {
        class: String,
        field: String,
        storage_key: String,
    },
}

///
/// ArgumentError
///
/// Forwarded arguments that do not bind to the original constructor's
/// declared signature.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ArgumentError {
    #[error("missing required argument '{param}'")]
    Missing { param: String },

    #[error("got multiple values for argument '{param}'")]
    MultipleValues { param: String },

    #[error("takes {expected} positional arguments but {given} were given")]
    TooManyPositional { expected: usize, given: usize },

    #[error("got an unexpected keyword argument '{keyword}'")]
    UnexpectedKeyword { keyword: String },
}

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid synthetic config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Check that `name` is a plain identifier: an ASCII letter or underscore,
/// followed by ASCII alphanumerics or underscores.
pub(crate) fn validate_identifier(what: &'static str, name: &str) -> Result<(), ValidationError> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Err(ValidationError::Empty { what });
    };

    let valid = (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidIdentifier {
            what,
            name: name.to_string(),
        })
    }
}

///
/// TESTS
///

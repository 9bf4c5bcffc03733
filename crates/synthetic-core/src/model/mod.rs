pub mod field;
pub mod metadata;

pub use field::{FieldSpec, FieldSpecBuilder, Validator};
pub use metadata::ClassMetadata;

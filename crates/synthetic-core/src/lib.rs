//! Core runtime for synthetic: field specs, class metadata, argument
//! reconciliation and the synthesized constructors built from them.

pub mod augment;
pub mod class;
pub mod config;
pub mod constructor;
pub mod error;
pub mod model;
pub mod naming;
pub mod reconcile;
pub mod signature;
pub mod traits;
pub mod value;

pub use error::Error;
pub use value::Value;

///
/// Prelude
///
/// Domain vocabulary only; errors and internals stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        augment::{
            ClassBuilder, ClassTransform, make_constructor_declaration, make_field_declaration,
        },
        class::{Class, Instance},
        model::{FieldSpec, Validator},
        naming::{CamelCase, NamingConvention, Plain, SnakeCase},
        signature::{Arguments, BoundArguments, Constructor, Signature},
        traits::{FieldValue, Synthesized},
        value::Value,
    };
}

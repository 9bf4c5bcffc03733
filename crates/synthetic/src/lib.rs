//! ## Crate layout
//! - `augment`: field and constructor declarations, and the class builder.
//! - `class`: runtime classes, instances and their accessor tables.
//! - `config`: naming and storage defaults, loadable from TOML.
//! - `reconcile`: mapping call arguments onto fields and the original constructor.
//! - `signature`: declared constructor signatures and argument binding.
//! - `value`: the dynamic value type stored in instance slots.
//!
//! `#[derive(Synthetic)]` builds the same runtime class from a plain struct;
//! the `prelude` covers both surfaces.

pub use synthetic_core::{
    augment, class, config, constructor, error, model, naming, reconcile, signature, traits,
    value,
};
pub use synthetic_derive::Synthetic;

// generated code names `::synthetic` even inside this crate
extern crate self as synthetic;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use synthetic_core::{Error, Value};

///
/// Prelude
///

pub mod prelude {
    pub use crate::Synthetic;
    pub use synthetic_core::prelude::*;
}

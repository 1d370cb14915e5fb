//! ## Crate layout
//! - `core`: class descriptors, described predicates, the class collection,
//!   and observability.
//! - `error`: the stable public error type.
//!
//! The `prelude` module is the vocabulary rule code needs; errors and
//! observability stay behind their own paths.

pub use archlens_core as core;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use archlens_core::DEFAULT_DESCRIPTION;
pub use error::{Error, ErrorKind, ErrorOrigin};

///
/// Rule Prelude
/// Descriptors, tokens, collections, predicates and the `Path` marker trait.
///

pub mod prelude {
    pub use crate::core::prelude::*;
}

//! Class descriptors and runtime class tokens.

mod descriptor;
pub(crate) mod package;
mod token;

pub use descriptor::ClassDescriptor;
pub use token::ClassToken;

//! Core runtime for archlens: class descriptors, described predicates, the
//! self-describing class collection, and the observability surface.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod class;
pub mod collection;
pub mod error;
pub mod obs;
pub mod predicate;
pub mod traits;

///
/// CONSTANTS
///

/// Description given to collections built from an unkeyed sequence.
pub const DEFAULT_DESCRIPTION: &str = "classes";

/// Connector between a collection's root prefix and a predicate fragment.
pub const THAT_CONNECTOR: &str = " that ";

/// Sentinel description carried by undescribed predicates.
///
/// Collections never splice this into their description.
pub const UNDESCRIBED: &str = "<undescribed>";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or report types are re-exported here.
///

pub mod prelude {
    pub use crate::{
        class::{ClassDescriptor, ClassToken},
        collection::ClassCollection,
        predicate::{
            DescribedPredicate,
            class::{
                have_fully_qualified_name, have_name_of, have_simple_name, reside_in_any_package,
                reside_in_package,
            },
        },
        traits::Path,
    };
}

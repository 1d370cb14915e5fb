use serde::{Deserialize, Serialize};

///
/// CollectionReport
/// Serializable snapshot of one class collection, for violation reports.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CollectionReport {
    pub description: String,
    pub prefix: String,
    pub classes: Vec<String>,
}

impl CollectionReport {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

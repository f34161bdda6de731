use serde::{Deserialize, Serialize};

use super::transaction::EntryKind;

/// Groups transactions for reporting; transactions reference categories by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            subcategories: Vec::new(),
        }
    }

    pub fn with_subcategories<I, S>(mut self, subcategories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subcategories = subcategories.into_iter().map(Into::into).collect();
        self
    }
}

use crate::ledger::{Category, EntryKind, FinancialDocument, Responsible};

pub const DEFAULT_JOINT_LABEL: &str = "Both";

/// Read-only helpers used when presenting the document.
pub struct LookupService;

impl LookupService {
    /// Display name for a responsible key; unknown keys yield an empty string.
    pub fn responsible_name(document: &FinancialDocument, key: &str, joint_label: &str) -> String {
        match Responsible::parse(key) {
            Some(Responsible::Both) => joint_label.to_string(),
            Some(single) => document
                .users
                .get(single)
                .map(|user| user.name.clone())
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    pub fn categories_by_type(document: &FinancialDocument, kind: EntryKind) -> Vec<&Category> {
        document
            .categories
            .iter()
            .filter(|category| category.kind == kind)
            .collect()
    }

    /// String-keyed variant of [`categories_by_type`](Self::categories_by_type).
    pub fn categories_by_type_name<'a>(
        document: &'a FinancialDocument,
        kind: &str,
    ) -> Vec<&'a Category> {
        EntryKind::parse(kind)
            .map(|kind| Self::categories_by_type(document, kind))
            .unwrap_or_default()
    }
}

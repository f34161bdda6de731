pub mod json_backend;
pub mod memory;

use crate::{errors::FinanceError, ledger::FinancialDocument};

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Persistence provider for the single financial document.
pub trait DocumentStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored yet. A stored document
    /// that cannot be read back is an error, never `None`.
    fn load(&self) -> Result<Option<FinancialDocument>>;
    fn save(&self, document: &FinancialDocument) -> Result<()>;
    /// Human-readable location used in diagnostics.
    fn describe(&self) -> String;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;

pub(crate) fn corrupt(location: &str, err: serde_json::Error) -> FinanceError {
    FinanceError::Persistence(format!(
        "stored document at {} is corrupt ({}); refusing to overwrite it",
        location, err
    ))
}

use std::sync::Mutex;

use crate::{errors::FinanceError, ledger::FinancialDocument};

use super::{corrupt, DocumentStore, Result};

/// In-process store holding the serialized JSON, so documents go through
/// the same encode/decode path as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw text, which need not be valid JSON.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Result<Option<String>> {
        Ok(self.guard()?.clone())
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.blob
            .lock()
            .map_err(|_| FinanceError::Persistence("memory store lock poisoned".into()))
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Option<FinancialDocument>> {
        match self.guard()?.as_deref() {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|err| corrupt(&self.describe(), err)),
            None => Ok(None),
        }
    }

    fn save(&self, document: &FinancialDocument) -> Result<()> {
        let json = serde_json::to_string(document)?;
        *self.guard()? = Some(json);
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}

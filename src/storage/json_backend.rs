use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{app_data_dir, document_file_in, ensure_dir, write_atomic},
    ledger::FinancialDocument,
};

use super::{corrupt, DocumentStore, Result};

/// Stores the document as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at `base`, creating the directory when missing.
    pub fn in_dir(base: &Path) -> Result<Self> {
        ensure_dir(base)?;
        Ok(Self::new(document_file_in(base)))
    }

    pub fn new_default() -> Result<Self> {
        Self::in_dir(&app_data_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Option<FinancialDocument>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&data)
            .map(Some)
            .map_err(|err| corrupt(&self.describe(), err))
    }

    fn save(&self, document: &FinancialDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("`{}`", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FinanceError;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonFileStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonFileStore::in_dir(temp.path()).expect("json store");
        (store, temp)
    }

    #[test]
    fn missing_file_loads_as_none() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_with_temp_dir();
        let document = FinancialDocument::bootstrap("Lucas", "Cecília");
        store.save(&document).expect("save document");
        let loaded = store.load().expect("load document").expect("document present");
        assert_eq!(loaded, document);
        assert!(store.path().ends_with("financialData.json"));
    }

    #[test]
    fn corrupt_file_is_a_persistence_error() {
        let (store, _guard) = store_with_temp_dir();
        fs::write(store.path(), "{ not json").unwrap();
        match store.load() {
            Err(FinanceError::Persistence(message)) => {
                assert!(message.contains("corrupt"), "unexpected message: {message}");
            }
            other => panic!("expected persistence error, got {other:?}"),
        }
    }
}

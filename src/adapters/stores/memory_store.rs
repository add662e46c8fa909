use crate::core::errors::{ExportError, Result};
use crate::core::models::raw_entry::RawEntry;
use crate::core::models::revision::Revision;
use crate::core::traits::secret_store::SecretStore;

/// In-memory store holding a fixed, ordered set of entries.
///
/// Only the latest revision exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<RawEntry>,
}

impl MemoryStore {
    pub fn from_entries(entries: Vec<RawEntry>) -> Self {
        Self { entries }
    }
}

impl SecretStore for MemoryStore {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|e| e.name.clone()).collect())
    }

    fn get(&self, name: &str, revision: &Revision) -> Result<RawEntry> {
        if *revision != Revision::Latest {
            return Err(ExportError::RetrievalFailed {
                name: name.to_string(),
                reason: format!("revision '{revision}' is not available in a snapshot"),
            });
        }

        self.entries
            .iter()
            .find(|e| e.name == name)
            .cloned()
            .ok_or_else(|| ExportError::RetrievalFailed {
                name: name.to_string(),
                reason: "entry not found".into(),
            })
    }

    fn name(&self) -> &str {
        "memory"
    }
}

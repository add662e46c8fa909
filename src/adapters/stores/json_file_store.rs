use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::adapters::stores::memory_store::MemoryStore;
use crate::core::errors::{ExportError, Result};
use crate::core::models::raw_entry::RawEntry;
use crate::core::models::revision::Revision;
use crate::core::traits::secret_store::SecretStore;

/// Store backed by a JSON snapshot file.
///
/// Format: an array of entries, listed in file order.
/// ```json
/// [
///   {
///     "name": "browser/github",
///     "password": "hunter2",
///     "body": "login: octocat",
///     "fields": { "login": "octocat" }
///   }
/// ]
/// ```
/// Every member except `name` is optional.
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

#[derive(Debug, Deserialize)]
struct StoredEntry {
    name: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

impl From<StoredEntry> for RawEntry {
    fn from(stored: StoredEntry) -> Self {
        let entry = RawEntry::new(stored.name)
            .with_password(stored.password)
            .with_body(stored.body);
        stored
            .fields
            .into_iter()
            .fold(entry, |entry, (key, value)| entry.with_field(key, value))
    }
}

impl JsonFileStore {
    /// Read and parse the snapshot at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExportError::StoreFileInvalid {
                path: path.to_path_buf(),
                detail: "file not found".into(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Parse snapshot content; `path` is only used in error messages.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let stored: Vec<StoredEntry> =
            serde_json::from_str(content).map_err(|e| ExportError::StoreFileInvalid {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            inner: MemoryStore::from_entries(stored.into_iter().map(RawEntry::from).collect()),
        })
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SecretStore for JsonFileStore {
    fn list(&self) -> Result<Vec<String>> {
        self.inner.list()
    }

    fn get(&self, name: &str, revision: &Revision) -> Result<RawEntry> {
        self.inner.get(name, revision)
    }

    fn name(&self) -> &str {
        "store file"
    }
}

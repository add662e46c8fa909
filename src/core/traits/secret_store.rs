use crate::core::errors::Result;
use crate::core::models::raw_entry::RawEntry;
use crate::core::models::revision::Revision;

/// Port for read-only access to a secret store.
///
/// Implementations live in `adapters::stores` (e.g. GopassStore, JsonFileStore).
/// The extractor only depends on this trait, never on a concrete backend.
pub trait SecretStore {
    /// All entry names, in the order the store reports them.
    fn list(&self) -> Result<Vec<String>>;

    /// Fetch one entry at the given revision.
    fn get(&self, name: &str, revision: &Revision) -> Result<RawEntry>;

    /// Human-readable name of this store (e.g. "gopass").
    fn name(&self) -> &str;
}

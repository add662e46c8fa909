use std::collections::BTreeMap;

use crate::core::models::raw_entry::RawEntry;

/// Keys that carry no credential data and are dropped before resolution.
pub const NOISE_KEYS: &[&str] = &["comments", "icon", "autotype_enabled"];

/// Working set of an entry's fields, drained as canonical columns claim them.
///
/// Whatever is left at the end becomes the record's `other` map, so a key
/// can never land in two places.
#[derive(Debug, Default)]
pub struct FieldPool {
    fields: BTreeMap<String, String>,
}

impl FieldPool {
    /// Build a pool from an entry, skipping noise keys.
    ///
    /// For repeated keys the first value wins, matching `RawEntry::get`.
    pub fn from_entry(entry: &RawEntry) -> Self {
        let mut fields = BTreeMap::new();
        for key in entry.keys() {
            if NOISE_KEYS.contains(&key) {
                continue;
            }
            if let Some(value) = entry.get(key) {
                fields
                    .entry(key.to_string())
                    .or_insert_with(|| value.to_string());
            }
        }
        Self { fields }
    }

    /// Remove a key and return its value, if it was present.
    pub fn pop(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }

    /// Remove every alias and return the first non-empty value among them.
    ///
    /// All aliases are drained even after a winner is found.
    pub fn pop_first_non_empty(&mut self, aliases: &[&str]) -> String {
        let mut winner = None;
        for alias in aliases {
            let value = self.pop(alias);
            if winner.is_none() {
                winner = value.filter(|v| !v.is_empty());
            }
        }
        winner.unwrap_or_default()
    }

    /// Consume the pool, yielding the unclaimed fields.
    pub fn into_remaining(self) -> BTreeMap<String, String> {
        self.fields
    }
}

use std::collections::BTreeMap;

/// A normalized credential, ready to be handed to a sink.
///
/// Built fresh for every selected entry and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub title: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub url: String,
    pub totp: String,
    pub backup_codes: String,
    /// Reserved column; nothing populates it yet.
    pub seed: String,
    /// Raw entry body, kept only when it looks like it carries OTP data.
    pub body: String,
    /// Fields that matched no canonical column, sorted by key.
    pub other: BTreeMap<String, String>,
}

impl Record {
    /// `other` rendered as `key: value` lines.
    pub fn comment(&self) -> String {
        self.other
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

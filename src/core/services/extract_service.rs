use crate::core::errors::{ExportError, Result};
use crate::core::models::raw_entry::RawEntry;
use crate::core::models::record::Record;
use crate::core::models::revision::Revision;
use crate::core::services::field_pool::FieldPool;
use crate::core::traits::record_sink::RecordSink;
use crate::core::traits::secret_store::SecretStore;

/// Username aliases, highest priority first.
pub const USERNAME_ALIASES: &[&str] = &["login", "user", "username"];

/// Body substrings that mark embedded OTP data. Case-sensitive.
const OTP_MARKERS: &[&str] = &["totp", "otpauth"];

/// What to do when a single entry cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the whole run at the first unreadable entry.
    #[default]
    Abort,
    /// Record the failure and continue with the next name.
    Skip,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct ExtractSummary {
    /// Titles written to the sink, in order.
    pub exported: Vec<String>,
    /// Names outside the prefix.
    pub ignored: usize,
    /// Entries that could not be read (only under `ErrorPolicy::Skip`).
    pub failed: Vec<(String, ExportError)>,
}

/// Turns store entries under a namespace prefix into canonical records.
pub struct ExtractService {
    prefix: String,
    revision: Revision,
    policy: ErrorPolicy,
}

impl ExtractService {
    /// Create an extractor for the given prefix. An empty prefix is rejected.
    pub fn new(
        prefix: impl Into<String>,
        revision: Revision,
        policy: ErrorPolicy,
    ) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(ExportError::InvalidConfig {
                detail: "prefix must not be empty".into(),
            });
        }
        Ok(Self {
            prefix,
            revision,
            policy,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Return the title for `name` if it lives under the prefix.
    ///
    /// A name equal to the prefix itself has no title and is not selected.
    pub fn select<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_prefix(self.prefix.as_str())
            .filter(|title| !title.is_empty())
    }

    /// Normalize one entry into a record. Never fails: absent keys become "".
    ///
    /// Resolution order:
    /// - noise keys are dropped before anything else
    /// - `url`, `email` and `backup_codes` are single-key lookups
    /// - username is the first non-empty of `login`, `user`, `username`,
    ///   and all three are drained
    /// - a present `totp` key (even empty) wins; otherwise the body is kept
    ///   only if it mentions `totp` or `otpauth`
    /// - everything left over goes to `other`
    pub fn normalize(title: &str, entry: &RawEntry) -> Record {
        let mut pool = FieldPool::from_entry(entry);

        let url = pool.pop("url").unwrap_or_default();
        let username = pool.pop_first_non_empty(USERNAME_ALIASES);

        let (totp, body) = match pool.pop("totp") {
            Some(secret) => (secret, String::new()),
            None if looks_like_otp(entry.body()) => (String::new(), entry.body().to_string()),
            None => (String::new(), String::new()),
        };

        let email = pool.pop("email").unwrap_or_default();
        let backup_codes = pool.pop("backup_codes").unwrap_or_default();

        Record {
            title: title.to_string(),
            username,
            email,
            password: entry.password().to_string(),
            url,
            totp,
            backup_codes,
            seed: String::new(),
            body,
            other: pool.into_remaining(),
        }
    }

    /// Normalize every selected name and hand the record to `sink`.
    ///
    /// `names` is the store listing; records reach the sink in that order.
    /// The sink is not flushed here, the caller owns that so it happens on
    /// every exit path.
    pub fn run(
        &self,
        names: &[String],
        store: &dyn SecretStore,
        sink: &mut dyn RecordSink,
    ) -> Result<ExtractSummary> {
        let mut summary = ExtractSummary::default();

        for name in names {
            let Some(title) = self.select(name) else {
                summary.ignored += 1;
                continue;
            };

            let entry = match store.get(name, &self.revision) {
                Ok(entry) => entry,
                Err(e) if self.policy == ErrorPolicy::Skip => {
                    summary.failed.push((name.clone(), e));
                    continue;
                }
                Err(e) => return Err(e),
            };

            let record = Self::normalize(title, &entry);
            sink.write_record(&record)?;
            summary.exported.push(record.title);
        }

        Ok(summary)
    }
}

/// Plain substring test; no parsing of the URI.
fn looks_like_otp(body: &str) -> bool {
    OTP_MARKERS.iter().any(|marker| body.contains(marker))
}

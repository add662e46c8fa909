use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;

use crate::adapters::parsers::akv_parser::AkvParser;
use crate::core::errors::{ExportError, Result};
use crate::core::models::raw_entry::RawEntry;
use crate::core::models::revision::Revision;
use crate::core::traits::secret_store::SecretStore;

/// Secret store that shells out to the system `gopass` binary.
///
/// Entries are read with `--noparsing` and split by `AkvParser`, so the
/// store's own YAML/KV rendering never gets in the way. Calls block until
/// gopass exits; any pinentry or agent timeout is gopass's business.
pub struct GopassStore {
    /// Path to the gopass binary (defaults to "gopass").
    gopass_path: PathBuf,
}

impl GopassStore {
    /// Create a store using the default `gopass` binary.
    pub fn new() -> Self {
        Self {
            gopass_path: PathBuf::from("gopass"),
        }
    }

    /// Create a store with a custom gopass binary path.
    pub fn with_path(gopass_path: PathBuf) -> Self {
        Self { gopass_path }
    }

    /// Check if gopass is available on the system.
    pub fn is_available(&self) -> bool {
        Command::new(&self.gopass_path)
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
    }

    /// Arguments for `get`, without the binary.
    fn show_args(name: &str, revision: &Revision) -> Vec<String> {
        let mut args = vec!["show".to_string(), "--unsafe".into(), "--noparsing".into()];
        // Joined form, so selectors like "-2" are not read as flags.
        if let Revision::Named(sel) = revision {
            args.push(format!("--revision={sel}"));
        }
        args.push("--".into());
        args.push(name.to_string());
        args
    }

    /// Run a gopass command and return stdout on success, stderr on failure.
    fn run_gopass<I, S>(&self, args: I) -> Result<std::result::Result<String, String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new(&self.gopass_path)
            .args(args)
            .output()
            .map_err(|e| ExportError::StoreUnavailable {
                reason: format!("failed to run {}: {e}", self.gopass_path.display()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Ok(Err(format!(
                "gopass exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(Ok(String::from_utf8_lossy(&output.stdout).into_owned()))
    }
}

impl Default for GopassStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore for GopassStore {
    fn list(&self) -> Result<Vec<String>> {
        let stdout = self
            .run_gopass(["ls", "--flat"])?
            .map_err(|reason| ExportError::ListFailed {
                store: self.name().to_string(),
                reason,
            })?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    fn get(&self, name: &str, revision: &Revision) -> Result<RawEntry> {
        let args = Self::show_args(name, revision);
        let content = self
            .run_gopass(&args)?
            .map_err(|reason| ExportError::RetrievalFailed {
                name: name.to_string(),
                reason,
            })?;

        Ok(AkvParser::parse(name, &content))
    }

    fn name(&self) -> &str {
        "gopass"
    }
}

use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::adapters::sinks::{OutputFormat, OutputSink};
use crate::adapters::stores::gopass_store::GopassStore;
use crate::adapters::stores::json_file_store::JsonFileStore;
use crate::cli::{Cli, output};
use crate::config::app_config::{AppConfig, DEFAULT_PREFIX};
use crate::core::errors::{ExportError, Result};
use crate::core::models::revision::Revision;
use crate::core::services::extract_service::{ErrorPolicy, ExtractService, ExtractSummary};
use crate::core::traits::record_sink::RecordSink;
use crate::core::traits::secret_store::SecretStore;

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug)]
struct Settings {
    prefix: String,
    format: OutputFormat,
    revision: Revision,
    policy: ErrorPolicy,
    gopass_binary: PathBuf,
}

impl Settings {
    fn resolve(args: &Cli, config: &AppConfig) -> Self {
        let format = if args.text {
            OutputFormat::Text
        } else if args.csv_requested() {
            OutputFormat::Csv
        } else {
            config.export.format.unwrap_or_default()
        };

        let skip = args.skip_errors || config.export.skip_errors.unwrap_or(false);

        Self {
            prefix: args
                .prefix
                .clone()
                .or_else(|| config.export.prefix.clone())
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            format,
            revision: args
                .revision
                .as_deref()
                .or(config.export.revision.as_deref())
                .map(Revision::parse)
                .unwrap_or_default(),
            policy: if skip {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            },
            gopass_binary: args
                .gopass
                .clone()
                .or_else(|| config.gopass.binary.clone())
                .unwrap_or_else(|| PathBuf::from("gopass")),
        }
    }
}

/// Execute the export.
///
/// Lists the store before any output is produced, then streams one record
/// per selected entry to stdout. The sink is flushed whether or not the
/// run completes.
pub fn execute(args: &Cli) -> Result<()> {
    let config = AppConfig::discover(args.config.as_deref())?;
    let settings = Settings::resolve(args, &config);
    let svc = ExtractService::new(
        settings.prefix.clone(),
        settings.revision.clone(),
        settings.policy,
    )?;

    let store = open_store(args, &settings)?;
    let names = store.list()?;
    output::info(&format!(
        "{} entries listed from {}, exporting those under '{}' at revision {}",
        names.len(),
        store.name(),
        svc.prefix(),
        settings.revision
    ));

    let stdout = io::stdout().lock();
    let mut sink = OutputSink::new(settings.format, BufWriter::new(stdout))?;

    let outcome = svc.run(&names, store.as_ref(), &mut sink);
    let flushed = sink.flush();
    let summary = outcome?;
    flushed?;

    report(&summary);
    Ok(())
}

/// Pick the snapshot file if one was given, else the gopass binary.
fn open_store(args: &Cli, settings: &Settings) -> Result<Box<dyn SecretStore>> {
    if let Some(path) = &args.store_file {
        let store = JsonFileStore::load(path)?;
        output::info(&format!("Reading entries from {}", store.path().display()));
        return Ok(Box::new(store));
    }

    let store = GopassStore::with_path(settings.gopass_binary.clone());
    if !store.is_available() {
        return Err(ExportError::StoreUnavailable {
            reason: format!("'{}' --version failed", settings.gopass_binary.display()),
        });
    }
    Ok(Box::new(store))
}

/// Print per-run diagnostics to stderr.
fn report(summary: &ExtractSummary) {
    for title in &summary.exported {
        output::info(&format!("Exported {title}"));
    }

    for (name, err) in &summary.failed {
        let reason = match err {
            ExportError::RetrievalFailed { reason, .. } => reason.clone(),
            other => other.to_string(),
        };
        output::warning(&format!("Skipped '{name}': {reason}"));
    }

    output::success(&format!(
        "{} record(s) exported, {} entries outside the prefix, {} skipped",
        summary.exported.len(),
        summary.ignored,
        summary.failed.len()
    ));
}

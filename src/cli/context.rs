use std::sync::OnceLock;

/// How chatty diagnostics on stderr should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Map the `--quiet` / `--verbose` flags. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Verbosity::Quiet,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }
}

static VERBOSITY: OnceLock<Verbosity> = OnceLock::new();

/// Initialize the global verbosity. Later calls are ignored.
pub fn init(verbosity: Verbosity) {
    let _ = VERBOSITY.set(verbosity);
}

/// Get the current verbosity, `Normal` if `init` was never called.
pub fn verbosity() -> Verbosity {
    VERBOSITY.get().copied().unwrap_or_default()
}

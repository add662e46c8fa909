use std::fmt;

/// Which revision of an entry to read from the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Revision {
    #[default]
    Latest,
    /// A store-specific selector such as a commit hash or `-1`.
    Named(String),
}

impl Revision {
    /// Parse a selector; `"latest"` (any case) or blank means `Latest`.
    pub fn parse(selector: &str) -> Self {
        let trimmed = selector.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("latest") {
            Revision::Latest
        } else {
            Revision::Named(trimmed.to_string())
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Latest => f.write_str("latest"),
            Revision::Named(sel) => f.write_str(sel),
        }
    }
}

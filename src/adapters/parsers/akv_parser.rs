use crate::core::models::raw_entry::RawEntry;

/// Parses gopass key-value secrets as printed by `gopass show --noparsing`.
///
/// Layout:
/// - first line is the password
/// - following `key: value` lines are fields, keys lowercased as gopass does
/// - the body is everything after the password line, verbatim
///
/// A line only counts as a field when the key is a single word and the
/// colon is followed by whitespace or the end of the line, so URIs such
/// as `otpauth://totp/...` stay in the body only.
pub struct AkvParser;

impl AkvParser {
    /// Parse raw secret content into an entry named `name`. Never fails.
    pub fn parse(name: &str, content: &str) -> RawEntry {
        let mut lines = content.lines();
        let password = lines.next().unwrap_or("").to_string();

        let rest: Vec<&str> = lines.collect();
        let fields = rest
            .iter()
            .filter_map(|line| Self::parse_field(line))
            .collect();

        RawEntry {
            name: name.to_string(),
            fields,
            password,
            body: rest.join("\n"),
        }
    }

    /// Parse a single `key: value` line.
    fn parse_field(line: &str) -> Option<(String, String)> {
        let (key, value) = line.split_once(':')?;
        let key = key.trim();

        if key.is_empty() || key.contains(char::is_whitespace) {
            return None;
        }
        if !value.is_empty() && !value.starts_with(char::is_whitespace) {
            return None;
        }

        Some((key.to_lowercase(), value.trim().to_string()))
    }
}

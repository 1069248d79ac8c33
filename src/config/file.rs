//! Flat key=value config file format.
//!
//! One `key=value` pair per line; `#`-prefixed lines and blank lines are
//! ignored; keys and values are trimmed. Writes go through a temp file
//! plus rename so a crash mid-write never leaves a torn config.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

/// Parse the file text into ordered key/value pairs. Lines that are
/// blank, comments, or missing an `=` are skipped (the latter with a
/// warning).
pub fn parse(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => {
                pairs.push((key.trim().to_string(), value.trim().to_string()));
            }
            None => warn!(line, "config line has no '=', skipping"),
        }
    }
    pairs
}

/// Render pairs back to file text, one pair per line.
pub fn render(pairs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Parse a boolean value; anything other than `true`/`false`
/// (case-insensitive) logs a warning and falls back to the default.
pub fn parse_bool(key: &str, value: &str, default: bool) -> bool {
    match value.to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => {
            warn!(key, value, default, "invalid boolean in config, using default");
            default
        }
    }
}

/// Write `contents` to `path` atomically (temp file + rename). The
/// parent directory is created if missing.
pub fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_blanks() {
        let text = "# comment\n\n  key = value  \nother=x\n";
        let pairs = parse(text);
        assert_eq!(
            pairs,
            vec![
                ("key".to_string(), "value".to_string()),
                ("other".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn parse_keeps_equals_inside_value() {
        let pairs = parse("settings.hotkey=cmd+=\n");
        assert_eq!(pairs[0].1, "cmd+=");
    }

    #[test]
    fn parse_bool_accepts_mixed_case() {
        assert!(parse_bool("k", "TRUE", false));
        assert!(!parse_bool("k", "False", true));
    }

    #[test]
    fn parse_bool_falls_back_on_garbage() {
        assert!(parse_bool("k", "yes", true));
        assert!(!parse_bool("k", "1", false));
    }

    #[test]
    fn render_round_trips_through_parse() {
        let pairs = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "two words".to_string()),
        ];
        assert_eq!(parse(&render(&pairs)), pairs);
    }
}

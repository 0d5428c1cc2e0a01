//! Default text codec: `YYYY-MM` formatter and the dash-splitting parser.

use regex::Regex;
use std::sync::OnceLock;

/// Split on `-` and keep the first two fields. No numeric validation happens here;
/// `from_numbers` rejects non-integer tokens downstream.
pub fn default_parser(text: &str) -> Vec<String> {
    text.split('-').take(2).map(str::to_string).collect()
}

/// Year zero-padded to at least four digits, month to exactly two.
pub fn default_formatter(year: i64, month: u8) -> String {
    format!("{:04}-{:02}", year, month)
}

fn strict_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4,})-(0[1-9]|1[0-2])$").expect("static regex"))
}

/// Only accepts canonical `YYYY-MM` with a month in 01..12.
/// Anything else comes back as a single token holding the whole input,
/// so the resulting `InvalidYear` error names what was rejected.
pub fn strict_parser(text: &str) -> Vec<String> {
    let text = text.trim();
    match strict_re().captures(text) {
        Some(caps) => vec![caps[1].to_string(), caps[2].to_string()],
        None => vec![text.to_string()],
    }
}

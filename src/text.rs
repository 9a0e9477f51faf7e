use regex::Regex;
use std::sync::OnceLock;

/// Lower-cases `text` and collapses every run of non `[a-z0-9]` characters
/// into one hyphen, trimming hyphens at both ends.
///
/// Distinct headings can produce the same slug; callers do not disambiguate.
pub fn slugify(text: &str) -> String {
    static RE_SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let re = RE_SEPARATORS.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());

    let lowered = text.to_lowercase();
    re.replace_all(&lowered, "-").trim_matches('-').to_string()
}

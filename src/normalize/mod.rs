//! Per-field cleanup rules applied while building the mailing list.
//!
//! Every rule is a pure function over a single optional cell so the mapper can
//! compose them column by column.

/// Country written when the export leaves the field blank.
pub const DEFAULT_COUNTRY: &str = "USA";

/// Only this exact spelling is rewritten; "US", "us" and the like pass through.
const SHORT_US: &str = "Us";

/// Rewrites every literal `" and "` in a combined name to `" & "`.
pub fn normalize_conjunction(name: &str) -> String {
    name.replace(" and ", " & ")
}

/// Fills a blank country with [`DEFAULT_COUNTRY`] and expands `"Us"`.
pub fn normalize_country(country: Option<&str>) -> String {
    match country {
        None | Some(SHORT_US) => DEFAULT_COUNTRY.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Capitalises the first character of each whitespace-delimited word and
/// lowercases the rest, leaving the whitespace itself untouched.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;

    for ch in value.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}

/// Case-insensitive comparison key for address deduplication.
pub type DedupKey = (Option<String>, Option<String>, Option<String>);

pub fn dedup_key(
    full_name: Option<&str>,
    address_1: Option<&str>,
    city: Option<&str>,
) -> DedupKey {
    (
        full_name.map(str::to_uppercase),
        address_1.map(str::to_uppercase),
        city.map(str::to_uppercase),
    )
}

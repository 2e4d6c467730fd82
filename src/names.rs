//! Splitting of combined household names such as "John & Jane Doe".
//!
//! Not part of the mapping pipeline; callers use it when a mailing needs one
//! row per person.

/// Splits a combined name on its first ampersand into two full names.
///
/// When the part after the ampersand has several words, its last word is
/// treated as a surname shared by both people:
/// `"John & Jane Doe"` becomes `("John Doe", "Jane Doe")`. A single-word
/// second part is returned as-is, so `"Salt & Pepper"` becomes
/// `("Salt", "Pepper")`. Input without an ampersand, or with an empty side,
/// yields `None`.
pub fn split_shared_last_name(name: &str) -> Option<(String, String)> {
    let (first_part, second_part) = name.split_once('&')?;
    let first_part = first_part.trim();
    let second_part = second_part.trim();
    if first_part.is_empty() || second_part.is_empty() {
        return None;
    }

    let words: Vec<&str> = second_part.split_whitespace().collect();
    match words.split_last() {
        Some((last_name, given)) if !given.is_empty() => Some((
            format!("{first_part} {last_name}"),
            format!("{} {last_name}", given.join(" ")),
        )),
        _ => Some((first_part.to_string(), second_part.to_string())),
    }
}

//! Result line formatting
//!
//! Turns the raw candidate strings returned by the data service into display
//! fragments. The default formatter wraps the first case-insensitive
//! occurrence of the search term in `<b>` markers, preserving the
//! candidate's original casing.

/// Converts candidates plus the search term into display fragments.
///
/// Implementations must return one fragment per candidate, in the same
/// order; they may never drop or reorder candidates.
pub trait ResultFormatter {
    fn format(&self, term: &str, candidates: &[String]) -> Vec<String>;
}

/// Default formatter: bold the matched substring.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoldFormatter;

impl ResultFormatter for BoldFormatter {
    fn format(&self, term: &str, candidates: &[String]) -> Vec<String> {
        candidates
            .iter()
            .map(|value| match find_case_insensitive(value, term) {
                Some((start, end)) => format!(
                    "{}<b>{}</b>{}",
                    &value[..start],
                    &value[start..end],
                    &value[end..]
                ),
                None => value.clone(),
            })
            .collect()
    }
}

/// Find the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Returns the byte range of the match within the original string, so the
/// caller can splice markup around it without disturbing its casing.
/// An empty needle never matches.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }

    let needle_chars: Vec<char> = needle.chars().collect();
    let hay: Vec<(usize, char)> = haystack.char_indices().collect();

    'candidates: for start in 0..hay.len() {
        if start + needle_chars.len() > hay.len() {
            break;
        }
        for (offset, needle_ch) in needle_chars.iter().enumerate() {
            let hay_ch = hay[start + offset].1;
            if !hay_ch.to_lowercase().eq(needle_ch.to_lowercase()) {
                continue 'candidates;
            }
        }
        let begin = hay[start].0;
        let end = match hay.get(start + needle_chars.len()) {
            Some((byte, _)) => *byte,
            None => haystack.len(),
        };
        return Some((begin, end));
    }

    None
}

#[cfg(test)]
#[path = "line_formatter_tests.rs"]
mod line_formatter_tests;

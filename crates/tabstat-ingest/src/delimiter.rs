//! Field delimiter sniffing
//!
//! Best effort only: the first non-empty line decides. Comma wins unless that
//! line holds strictly more tabs than commas.

/// Delimiter guessed from the first non-empty line of `text`
pub fn sniff_delimiter(text: &str) -> u8 {
    let first = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    let commas = first.bytes().filter(|&b| b == b',').count();
    let tabs = first.bytes().filter(|&b| b == b'\t').count();
    if tabs > commas {
        b'\t'
    } else {
        b','
    }
}

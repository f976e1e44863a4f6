//! Name list normalization and shuffling

use rand::seq::SliceRandom;
use rand::Rng;

/// Characters treated as line boundaries in submitted text
///
/// Covers `\n`, `\r` (so `\r\n` too), vertical tab, form feed, the ASCII
/// file/group/record separators, NEL and the Unicode line/paragraph separators.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Whitespace for trimming: Unicode whitespace plus the ASCII separators
/// `\u{1c}`..=`\u{1f}`, which `char::is_whitespace` leaves out
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split free-form text into trimmed, non-empty names
///
/// Order of the surviving lines is preserved; duplicates are kept.
pub fn normalize_names(raw: &str) -> Vec<String> {
    raw.split(is_line_boundary)
        .map(|line| line.trim_matches(is_trimmable))
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Shuffle names in place with a uniform (Fisher-Yates) permutation
pub fn shuffle_names<R: Rng + ?Sized>(names: &mut [String], rng: &mut R) {
    names.shuffle(rng);
}

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Career tokens shorter than this many characters are ignored
const MIN_TOKEN_CHARS: usize = 3;

/// Overlap similarity between two sets (0-1)
///
/// Cosine similarity of the sets' binary indicator vectors:
/// `|A ∩ B| / sqrt(|A| * |B|)`. Either set being empty yields exactly 0.
#[inline]
pub fn set_similarity<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let shared = a.intersection(b).count() as f64;
    let denominator = ((a.len() * b.len()) as f64).sqrt();

    shared / denominator
}

/// Split career text into its set of significant words
///
/// Splits on whitespace and keeps tokens longer than two characters. The
/// caller lowercases first.
pub fn career_tokens(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

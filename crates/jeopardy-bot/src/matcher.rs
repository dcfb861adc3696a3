//! Free-text answer grading.
//!
//! A response is graded against the canonical answer with a token-sort
//! ratio: both strings have their filler words removed and their tokens
//! alphabetically sorted, then the rejoined forms are compared by
//! normalized indel similarity. The answer is scored both as-is and with
//! parenthetical clarifications removed, so "paris" matches
//! "Paris (France)" without penalty.

/// Tokens ignored during comparison.
const BANNED_WORDS: &[&str] = &["a", "the", "of", "and", "&"];

/// A response is correct when the best ratio strictly exceeds this.
const CORRECT_THRESHOLD: f64 = 70.0;

/// Drop banned filler tokens and rejoin with single spaces.
///
/// If every token is filler the original text is returned unchanged, so the
/// comparison never runs against an empty string.
pub fn strip_filler(text: &str) -> String {
    let filtered: Vec<&str> = text
        .split_whitespace()
        .filter(|word| !BANNED_WORDS.iter().any(|banned| word.eq_ignore_ascii_case(banned)))
        .collect();

    if filtered.is_empty() {
        text.to_string()
    } else {
        filtered.join(" ")
    }
}

/// Remove every `(`..`)` span. Non-greedy: the first `)` closes. An
/// unmatched `(` is left in place.
pub fn strip_parentheticals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

/// Similarity of two strings after alphabetically sorting each one's
/// whitespace tokens, as a percentage in `[0, 100]`.
///
/// The sorted tokens are joined without separators before scoring: a
/// response that is one complete token of the answer is then not charged
/// for the missing token boundary ("everest" vs "mount everest" clears the
/// correctness threshold, while a response merely embedded in a longer
/// answer string does not).
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    rapidfuzz::fuzz::ratio(sort_tokens(a).chars(), sort_tokens(b).chars()) * 100.0
}

fn sort_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.concat()
}

/// Grade a free-text response against the canonical answer.
pub fn is_correct(response: &str, canonical_answer: &str) -> bool {
    let response = strip_filler(response.trim().to_lowercase().as_str());
    let answer = canonical_answer.trim().to_lowercase();

    let full = strip_filler(&answer);
    let stripped = strip_filler(&strip_parentheticals(&answer));

    let score = token_sort_ratio(&response, &full).max(token_sort_ratio(&response, &stripped));
    score > CORRECT_THRESHOLD
}

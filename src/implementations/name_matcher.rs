use strsim::normalized_levenshtein;

use crate::models::common::MatchScore;
use crate::traits::name_matcher::NameMatcher;

/// Legal designators that are written several ways in assessor records
const DESIGNATOR_ALIASES: &[(&str, &str)] = &[
    ("corporation", "corp"),
    ("incorporated", "inc"),
    ("company", "co"),
    ("limited", "ltd"),
];

/// Token-sort fuzzy matcher.
///
/// Both names are lowercased, split on anything that is not alphanumeric,
/// legal designators are folded to one spelling, and the tokens are sorted
/// before a normalized Levenshtein comparison. Sorting makes the score
/// independent of word order ("Smith John" == "John Smith").
///
/// Two names that both normalize to nothing (e.g. `""` and `"&"`) score 100;
/// if only one side is empty the score is 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSortMatcher;

impl TokenSortMatcher {
    pub fn new() -> Self {
        TokenSortMatcher
    }
}

impl NameMatcher for TokenSortMatcher {
    fn similarity(&self, a: &str, b: &str) -> MatchScore {
        similarity(a, b)
    }
}

/// Score two names with the token-sort rules described on [`TokenSortMatcher`]
pub fn similarity(a: &str, b: &str) -> MatchScore {
    let a = normalize_name(a);
    let b = normalize_name(b);

    match (a.is_empty(), b.is_empty()) {
        (true, true) => 100,
        (true, false) | (false, true) => 0,
        (false, false) => {
            let ratio = normalized_levenshtein(&a, &b);
            (ratio * 100.0).round().clamp(0.0, 100.0) as MatchScore
        }
    }
}

/// Lowercase, tokenize on non-alphanumerics, fold designators, sort and rejoin
pub fn normalize_name(name: &str) -> String {
    let lowered: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut tokens: Vec<&str> = lowered
        .split_whitespace()
        .map(canonical_token)
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn canonical_token(token: &str) -> &str {
    for (long, short) in DESIGNATOR_ALIASES {
        if *long == token {
            return short;
        }
    }
    token
}

//! Search layer — resolves comma-separated company-name keys against a [`Dataset`].
//!
//! Each key is embedded literally (regex metacharacters escaped) between two
//! ASCII word-boundary assertions and tested against the lowercased record
//! name. The key itself is not lowercased or trimmed, so `"abc"` matches
//! `"ABC Ltd"` but `"ABC"` matches nothing.

use crate::dataset::Dataset;
use crate::types::{Company, MatchResult};
use regex::Regex;
use std::collections::BTreeMap;

/// Separator between keys in the `companyNames` parameter.
pub const KEY_SEPARATOR: char = ',';

/// Build the whole-word pattern for a literal search key.
///
/// Word characters are `[0-9A-Za-z_]`; a boundary sits between a word and a
/// non-word character or at either end of the name.
pub fn word_pattern(key: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(key)))
}

/// Split the raw parameter into keys, in input order. Empty segments are kept.
pub fn split_keys(param: &str) -> impl Iterator<Item = &str> {
    param.split(KEY_SEPARATOR)
}

/// Every record whose lowercased name contains `key` as a whole word, in
/// dataset order.
pub fn find_matches<'a>(key: &str, dataset: &'a Dataset) -> Vec<&'a Company> {
    let pattern = match word_pattern(key) {
        Ok(pattern) => pattern,
        Err(err) => {
            tracing::warn!(key, error = %err, "search key did not compile; treating as no match");
            return Vec::new();
        }
    };

    dataset
        .folded()
        .filter(|(_, folded)| pattern.is_match(folded))
        .map(|(company, _)| company)
        .collect()
}

/// Match and shape a single key.
pub fn resolve_key(key: &str, dataset: &Dataset) -> MatchResult {
    let matches = find_matches(key, dataset);
    MatchResult::from_matches(key, &matches)
}

/// Resolve every key in `param`.
///
/// The result is keyed by the search string, so a repeated key overwrites the
/// earlier entry. Iteration order of the map is lexicographic by key.
pub fn resolve(param: &str, dataset: &Dataset) -> BTreeMap<String, MatchResult> {
    let mut results = BTreeMap::new();
    for key in split_keys(param) {
        let result = resolve_key(key, dataset);
        tracing::debug!(key, count = result.count, "resolved search key");
        results.insert(key.to_string(), result);
    }
    results
}

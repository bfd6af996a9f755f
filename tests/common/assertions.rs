//! Domain-specific assertion macros for ratings harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the key
//! and the full result, so a broken match is obvious without a debugger.

/// Assert that a [`ratings_core::MatchResult`] is a single exact match.
///
/// ```rust
/// assert_exact_match!(results["acme"], "Acme Corp", 4.0);
/// ```
#[macro_export]
macro_rules! assert_exact_match {
    ($result:expr, $name:expr, $rating:expr) => {{
        let result: &ratings_core::MatchResult = &$result;
        if result.count != 1 {
            panic!(
                "assert_exact_match! failed for key {:?}:\n  expected count 1, got {}\n  result: {:?}",
                result.key, result.count, result
            );
        }
        pretty_assertions::assert_eq!(result.exact_match.as_deref(), Some($name));
        pretty_assertions::assert_eq!(result.exact_rating, Some($rating));
    }};
}

/// Assert that a result has `count` matches and null exact fields.
///
/// ```rust
/// assert_no_exact_match!(results["ibm"], 2);
/// ```
#[macro_export]
macro_rules! assert_no_exact_match {
    ($result:expr, $count:expr) => {{
        let result: &ratings_core::MatchResult = &$result;
        let expected: usize = $count;
        if result.count != expected {
            panic!(
                "assert_no_exact_match! failed for key {:?}:\n  expected count {}, got {}\n  result: {:?}",
                result.key, expected, result.count, result
            );
        }
        if result.exact_match.is_some() || result.exact_rating.is_some() {
            panic!(
                "assert_no_exact_match! failed for key {:?}: exact fields must be null\n  result: {:?}",
                result.key, result
            );
        }
    }};
}

/// Assert the set of keys in a response map, in map order.
#[macro_export]
macro_rules! assert_keys {
    ($results:expr, [$($key:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $results.keys().map(String::as_str).collect();
        let expected: Vec<&str> = vec![$($key),*];
        pretty_assertions::assert_eq!(actual, expected, "response keys differ");
    }};
}

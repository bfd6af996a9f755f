//! Core types for ratings-core.
//!
//! This module defines the record shape of the upstream dataset
//! ([`Company`]) and the per-key answer returned to clients ([`MatchResult`]).

use serde::{Deserialize, Serialize};

/// One company record from the upstream dataset.
///
/// Names are not unique; two records with the same name are both returned as
/// separate matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    /// Numeric rating. Records that omit it (or carry `null`) load with `None`.
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Company {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            rating: Some(rating),
        }
    }
}

/// The shaped result for a single search key.
///
/// `exact_match` and `exact_rating` are populated when and only when `count`
/// is exactly 1. Both serialize as explicit `null` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub key: String,
    pub count: usize,
    pub exact_match: Option<String>,
    pub exact_rating: Option<f64>,
}

impl MatchResult {
    /// Shape the matches collected for `key`.
    pub fn from_matches(key: &str, matches: &[&Company]) -> Self {
        match matches {
            [only] => Self {
                key: key.to_string(),
                count: 1,
                exact_match: Some(only.name.clone()),
                exact_rating: only.rating,
            },
            _ => Self {
                key: key.to_string(),
                count: matches.len(),
                exact_match: None,
                exact_rating: None,
            },
        }
    }

    pub fn is_exact(&self) -> bool {
        self.count == 1
    }
}

//! Dataset — the immutable, in-memory list of [`Company`] records.
//!
//! [`Dataset::decode`] turns the raw upstream body into a dataset: inflate
//! according to the configured [`Compression`], then parse a JSON array of
//! `{ name, rating }` objects. Record order is preserved.

use crate::types::Company;
use chrono::{DateTime, Utc};
use flate2::read::{GzDecoder, ZlibDecoder};
use serde::Deserialize;
use std::io::Read;

/// Framing of the compressed upstream payload.
///
/// The upstream resource is named `*.json.gz` but is zlib-framed, so
/// [`Compression::Zlib`] is the default. The two framings are not
/// interchangeable: a gzip stream fails to inflate as zlib and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Zlib,
    Gzip,
    /// Plain JSON, no compression.
    None,
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compression::Zlib => write!(f, "zlib"),
            Compression::Gzip => write!(f, "gzip"),
            Compression::None => write!(f, "none"),
        }
    }
}

/// Errors produced while turning a raw body into a [`Dataset`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to inflate {compression} payload: {source}")]
    Decompress {
        compression: Compression,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, read-only list of company records.
#[derive(Debug, Clone)]
pub struct Dataset {
    companies: Vec<Company>,
    /// Lowercased names, index-aligned with `companies`.
    folded: Vec<String>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    pub fn new(companies: Vec<Company>, source: impl Into<String>) -> Self {
        let folded = companies.iter().map(|c| fold_name(&c.name)).collect();
        Self {
            companies,
            folded,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    /// Inflate and parse a raw upstream body.
    pub fn decode(
        body: &[u8],
        compression: Compression,
        source: impl Into<String>,
    ) -> Result<Self, DecodeError> {
        let json = inflate(body, compression)?;
        let companies: Vec<Company> = serde_json::from_slice(&json)?;
        Ok(Self::new(companies, source))
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Records paired with their lowercased name, in dataset order.
    pub fn folded(&self) -> impl Iterator<Item = (&Company, &str)> {
        self.companies
            .iter()
            .zip(self.folded.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Where the dataset was loaded from (URL or file path).
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Lowercase one character at a time, keeping only the first character of each
/// mapping. `İ` folds to `i` (not `i` + combining dot) and `Σ` always folds to
/// `σ`, never the word-final `ς`.
pub fn fold_name(name: &str) -> String {
    name.chars()
        .map(|ch| ch.to_lowercase().next().unwrap_or(ch))
        .collect()
}

/// Inflate `body` according to `compression`.
pub fn inflate(body: &[u8], compression: Compression) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    let result = match compression {
        Compression::Zlib => ZlibDecoder::new(body).read_to_end(&mut out),
        Compression::Gzip => GzDecoder::new(body).read_to_end(&mut out),
        Compression::None => {
            out.extend_from_slice(body);
            Ok(body.len())
        }
    };
    result.map_err(|source| DecodeError::Decompress {
        compression,
        source,
    })?;
    Ok(out)
}

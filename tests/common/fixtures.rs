//! Static company corpora and payload encoders used across harnesses.

use flate2::write::{GzEncoder, ZlibEncoder};
use ratings_core::Company;
use std::io::Write;

/// The worked example: two IBM records, one Acme.
pub const CORPUS_EXAMPLE: &[(&str, f64)] = &[
    ("IBM", 4.5),
    ("IBM Europe", 3.9),
    ("Acme Corp", 4.0),
];

/// Names chosen to exercise word boundaries, punctuation and case folding.
pub const CORPUS_TRICKY: &[(&str, f64)] = &[
    ("ABC Ltd", 3.1),
    ("abcde holdings", 2.2),
    ("ab corp", 4.8),
    ("AxB Partners", 3.3),
    ("a.b consulting", 3.7),
    ("Smith & Sons", 4.1),
    ("Smith_Bros", 2.9),
    ("Zürich Insurance", 4.4),
];

/// A name that appears twice with different ratings.
pub const CORPUS_DUPLICATES: &[(&str, f64)] = &[("Globex", 3.0), ("Globex", 4.0), ("Initech", 2.5)];

pub fn companies(corpus: &[(&str, f64)]) -> Vec<Company> {
    corpus
        .iter()
        .map(|(name, rating)| Company::new(*name, *rating))
        .collect()
}

/// JSON array body for `corpus`, as the upstream would serve it before compression.
pub fn corpus_json(corpus: &[(&str, f64)]) -> Vec<u8> {
    serde_json::to_vec(&companies(corpus)).unwrap()
}

pub fn zlib(bytes: &[u8]) -> Vec<u8> {
    let mut enc = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    enc.write_all(bytes).unwrap();
    enc.finish().unwrap()
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), flate2::Compression::default());
    enc.write_all(bytes).unwrap();
    enc.finish().unwrap()
}

/// Write the zlib-framed corpus to a temp file and return the handle.
pub fn zlib_fixture_file(corpus: &[(&str, f64)]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&zlib(&corpus_json(corpus))).unwrap();
    file
}

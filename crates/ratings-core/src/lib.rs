//! ratings-core — core library for the company ratings lookup service.
//!
//! This crate holds everything that does not touch the network: the shared
//! record types, layered configuration, decoding of the compressed upstream
//! payload, and the word-boundary matcher.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► Dataset (decode, once) ──► Search ──► API
//! ```
//!
//! The [`Dataset`] is built exactly once at startup and then shared read-only
//! behind an `Arc`; nothing in this crate mutates it after construction.

pub mod config;
pub mod dataset;
pub mod search;
pub mod types;

pub use dataset::{Compression, Dataset, DecodeError};
pub use types::{Company, MatchResult};

//! ratings-api — the HTTP surface of the ratings service.
//!
//! A single route, [`COMPANIES_ROUTE`], answers
//! `GET ?companyNames=a,b,c` with a JSON object keyed by search key.
//!
//! ## Submodules
//! - **`error`**: request-level failures and their plain-text responses.
//! - **`handlers`**: the query handler.
//! - **`server`**: router construction, binding and graceful shutdown.
//! - **`state`**: the shared, read-only request state.

pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use handlers::COMPANIES_ROUTE;
pub use server::{router, serve};
pub use state::AppState;

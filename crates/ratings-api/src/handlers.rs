use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use ratings_core::search;

pub const COMPANIES_ROUTE: &str = "/.netlify/functions/api";

/// Name of the query parameter carrying the comma-separated keys.
pub const COMPANY_NAMES_PARAM: &str = "companyNames";

/// `GET /.netlify/functions/api?companyNames=a,b,c`
///
/// Query pairs are taken as a raw list so a repeated parameter resolves to
/// its first occurrence instead of failing deserialization.
pub async fn handle_companies(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let param = pairs
        .iter()
        .find(|(name, _)| name == COMPANY_NAMES_PARAM)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();

    if param.is_empty() {
        tracing::debug!("rejecting request without companyNames");
        return Err(ApiError::MissingCompanyNames);
    }

    let results = search::resolve(param, state.dataset());
    let body = serde_json::to_vec(&results).map_err(ApiError::Serialization)?;

    tracing::info!(keys = results.len(), "answered company lookup");
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

use crate::core::filter::{render, select_venues};
use crate::core::request::CafeQuery;
use crate::core::{QueryError, VenueLookup};
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

pub fn router<L>(catalog: Arc<L>) -> Router
where
    L: VenueLookup + 'static,
{
    Router::new()
        .route("/cafe", get(cafe_handler::<L>))
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

async fn cafe_handler<L>(
    State(catalog): State<Arc<L>>,
    RawQuery(raw): RawQuery,
) -> Result<String, QueryError>
where
    L: VenueLookup + 'static,
{
    let query = CafeQuery::parse(raw.as_deref(), catalog.as_ref()).inspect_err(|e| {
        tracing::debug!(query = raw.as_deref().unwrap_or_default(), "Rejected request: {}", e);
    })?;

    let names = select_venues(catalog.as_ref(), &query);
    tracing::debug!(
        city = %query.city,
        count = ?query.count,
        search = %query.search,
        matched = names.len(),
        "Serving cafe list"
    );

    Ok(render(&names))
}

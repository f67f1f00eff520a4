use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::pipeline::{sample_locations, EnrichedPosition};
use crate::positions::RawPosition;
use crate::web::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

/// The upstream position service caps one batch at ten timestamps.
pub const MAX_BATCH_COUNT: usize = 10;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LocationsQuery {
    /// Number of hourly positions to fetch (default from configuration).
    pub count: Option<usize>,
    /// RFC 3339 start instant, truncated to the top of its hour (default now).
    pub start: Option<DateTime<Utc>>,
}

impl LocationsQuery {
    fn resolve(&self, state: &AppState) -> ApiResult<(DateTime<Utc>, usize)> {
        let count = self.count.unwrap_or(state.batch_count);
        if count > MAX_BATCH_COUNT {
            return Err(ApiError::Validation(format!(
                "count must be at most {MAX_BATCH_COUNT}"
            )));
        }
        Ok((self.start.unwrap_or_else(Utc::now), count))
    }
}

#[utoipa::path(
    get,
    path = "/api/locations",
    params(LocationsQuery),
    responses(
        (status = 200, description = "Enriched positions in chronological order", body = Vec<EnrichedPosition>),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn locations(
    State(state): State<AppState>,
    Query(query): Query<LocationsQuery>,
) -> ApiResult<Json<Vec<EnrichedPosition>>> {
    let (start, count) = query.resolve(&state)?;

    match state.pipeline.enrich(start, count).await {
        Ok(enriched) => Ok(Json(enriched)),
        Err(e) => {
            // Degrade to the bundled sample rather than an error view.
            log::warn!("pipeline failed, serving bundled sample: {e}");
            Ok(Json(sample_locations()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/locations/raw",
    params(LocationsQuery),
    responses(
        (status = 200, description = "Raw position batch without enrichment", body = Vec<RawPosition>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 502, description = "Position service failure", body = ErrorResponse)
    ),
    tag = "locations"
)]
pub async fn raw_positions(
    State(state): State<AppState>,
    Query(query): Query<LocationsQuery>,
) -> ApiResult<Json<Vec<RawPosition>>> {
    let (start, count) = query.resolve(&state)?;
    let batch = state.positions.fetch_positions(start, count).await?;
    Ok(Json(batch))
}

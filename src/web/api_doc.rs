use utoipa::OpenApi;

use super::error::ErrorResponse;
use crate::pipeline::EnrichedPosition;
use crate::positions::{RawPosition, Units, Visibility};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::locations, super::handlers::raw_positions),
    components(
        schemas(
            EnrichedPosition,
            RawPosition,
            Units,
            Visibility,
            ErrorResponse,
        )
    ),
    info(
        title = "Sat-Spotter Location API",
        description = "Satellite positions enriched with reverse-geocoded place names",
        version = "0.1.0"
    ),
    tags(
        (name = "locations", description = "Enriched position batches")
    )
)]
pub struct ApiDoc;

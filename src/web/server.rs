use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::geocode::HttpGeocoder;
use crate::pipeline::LocationPipeline;
use crate::positions::PositionClient;

use super::api_doc::ApiDoc;
use super::handlers;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<LocationPipeline>,
    pub positions: PositionClient,
    pub batch_count: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let http = reqwest::Client::new();
        let positions = PositionClient::new(
            http.clone(),
            &config.positions.base_url,
            config.satellite.catalog_id,
            config.positions.timeout,
        );
        let geocoder = HttpGeocoder::new(http, &config.geocoder.base_url, config.geocoder.timeout);
        let pipeline = LocationPipeline::new(positions.clone(), Arc::new(geocoder));

        AppState {
            pipeline: Arc::new(pipeline),
            positions,
            batch_count: config.satellite.batch_count,
        }
    }
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let state = AppState::from_config(&config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/locations", get(handlers::locations))
        .route("/api/locations/raw", get(handlers::raw_positions))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}

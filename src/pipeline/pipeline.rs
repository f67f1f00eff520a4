use std::convert::Infallible;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::enriched::EnrichedPosition;
use crate::geocode::ReverseGeocoder;
use crate::parallel::{try_parallel_map, ParallelError};
use crate::positions::{PositionClient, PositionError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("position fetch failed: {0}")]
    Positions(#[from] PositionError),
    #[error("enrichment failed: {0}")]
    Enrich(#[from] ParallelError<Infallible>),
}

/// Fetches one ordered batch of positions and resolves a place name for each
/// of them concurrently, preserving chronological order in the output.
pub struct LocationPipeline {
    positions: PositionClient,
    geocoder: Arc<dyn ReverseGeocoder>,
}

impl LocationPipeline {
    pub fn new(positions: PositionClient, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self {
            positions,
            geocoder,
        }
    }

    /// One position fetch, then one geocode round trip per record. If the
    /// fetch fails the geocoder is never invoked. Individual resolution
    /// failures degrade to the sentinel name inside the geocoder, so the
    /// concurrent mapping itself cannot fail on a geocoding miss.
    pub async fn enrich(
        &self,
        starting_at: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<EnrichedPosition>, PipelineError> {
        let batch = self.positions.fetch_positions(starting_at, count).await?;

        let enriched = try_parallel_map(batch, |position| {
            let geocoder = Arc::clone(&self.geocoder);
            async move {
                let name = geocoder
                    .place_name(position.latitude, position.longitude)
                    .await;
                Ok::<_, Infallible>(EnrichedPosition::new(position, name))
            }
        })
        .await?;

        Ok(enriched)
    }
}

mod enriched;
mod pipeline;
mod sample;

pub use enriched::{kilometers_to_miles, miles_to_kilometers, EnrichedPosition};
pub use pipeline::{LocationPipeline, PipelineError};
pub use sample::sample_locations;

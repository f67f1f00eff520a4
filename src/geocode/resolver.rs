use async_trait::async_trait;

/// Sentinel place name substituted when resolution fails or yields no
/// candidate.
pub const UNKNOWN_PLACE: &str = "Unknown";

/// Resolves a coordinate to a human-readable place name.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Best-effort place name for the coordinate. Never errors: any failure
    /// or empty candidate list degrades to [`UNKNOWN_PLACE`].
    async fn place_name(&self, latitude: f64, longitude: f64) -> String;
}

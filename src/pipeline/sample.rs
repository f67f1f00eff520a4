use super::enriched::EnrichedPosition;

const SAMPLE_JSON: &str = include_str!("sample_locations.json");

/// Fixed enriched dataset served when the live pipeline is unavailable, so
/// consumers never render an empty view.
pub fn sample_locations() -> Vec<EnrichedPosition> {
    serde_json::from_str(SAMPLE_JSON).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sample_decodes() {
        let sample = sample_locations();
        assert_eq!(sample.len(), 10);
        assert_eq!(sample[0].place_name, "Kabinda");
        assert_eq!(sample[2].place_name, "Khövsgöl");
    }

    #[test]
    fn bundled_sample_is_chronological() {
        let sample = sample_locations();
        for pair in sample.windows(2) {
            assert!(pair[0].position.timestamp < pair[1].position.timestamp);
        }
    }
}

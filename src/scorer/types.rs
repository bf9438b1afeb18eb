use serde::{Deserialize, Serialize};

/// Breakdown of an objective evaluation, for reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub score: f64,
    pub pairs: usize,
    /// Contribution of pairs at position distance `d`, stored at index `d - 1`.
    pub by_distance: Vec<f64>,
    pub mean_affinity: f64,
    pub empty_fingerprints: usize,
}

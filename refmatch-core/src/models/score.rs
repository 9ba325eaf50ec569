use serde::{Deserialize, Serialize};

/// Structural similarity between one source transcript and one candidate,
/// both components in `[0, 1]`. Computed once per pair and never mutated;
/// scores are never compared across source transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub genomic: f64,
    pub coding: f64,
}

impl MatchScore {
    pub fn new(genomic: f64, coding: f64) -> Self {
        MatchScore { genomic, coding }
    }

    /// Scale both components by a penalty factor.
    pub fn penalized(self, factor: f64) -> Self {
        MatchScore {
            genomic: self.genomic * factor,
            coding: self.coding * factor,
        }
    }
}

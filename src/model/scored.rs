//! Scored records and scoring weights.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::SummaryRecord;
use crate::utils::round2;

/// User-adjustable weights for the composite score.
///
/// Each weight lives in [0,1]; scoring only proceeds when the three sum to
/// 1.00 after rounding to two decimals ([`WeightConfig::is_valid`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WeightConfig {
    /// Weight of the demand sub-score
    pub demand: f64,
    /// Weight of the delay sub-score
    pub delay: f64,
    /// Weight of the sustainability sub-score
    pub sustainability: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            demand: 0.2,
            delay: 0.3,
            sustainability: 0.5,
        }
    }
}

impl WeightConfig {
    /// Build a weight configuration from the three weights.
    #[must_use]
    pub const fn new(demand: f64, delay: f64, sustainability: f64) -> Self {
        Self {
            demand,
            delay,
            sustainability,
        }
    }

    /// Sum of the three weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.demand + self.delay + self.sustainability
    }

    /// Whether the weights sum to 1.00 within the 0.01 tolerance
    /// (sum rounded to two decimals must equal 1.00).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        round2(self.sum()) == 1.0
    }
}

/// The three normalized sub-scores of a record, each in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    /// `demand / max(demand over subset)`
    pub demand: f64,
    /// `1 − delay / max(delay over subset)`
    pub delay: f64,
    /// [`Sustainability::as_score`](super::Sustainability::as_score)
    pub sustainability: f64,
}

/// A summary record plus its composite score.
///
/// Produced as a fresh value per recompute; never persisted and never
/// written back into the source collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// The underlying record
    pub record: SummaryRecord,
    /// Normalized sub-scores
    pub sub_scores: SubScores,
    /// Weighted composite score in [0,1]
    pub score: f64,
}

/// Per-term weighted contributions of a single record's score.
///
/// The three contributions sum to the record's total score, which lets a
/// caller render "where did this score come from" for the winning record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// `w_demand · demand_score`
    pub demand: f64,
    /// `w_delay · delay_score`
    pub delay: f64,
    /// `w_sustain · sustain_score`
    pub sustainability: f64,
}

impl ScoreBreakdown {
    /// Compute the breakdown from sub-scores and weights.
    #[must_use]
    pub fn new(sub_scores: &SubScores, weights: &WeightConfig) -> Self {
        Self {
            demand: weights.demand * sub_scores.demand,
            delay: weights.delay * sub_scores.delay,
            sustainability: weights.sustainability * sub_scores.sustainability,
        }
    }

    /// Total score, the sum of the three contributions.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.demand + self.delay + self.sustainability
    }
}

//! Metric normalization and weighted composite scoring.
//!
//! All normalization is relative to the *filtered subset*: the maxima are
//! computed once over the subset and reused for every row in it, so scores
//! are only comparable within one recompute cycle.

use crate::model::{ScoredRecord, SubScores, SummaryRecord, WeightConfig};

/// Subset-wide normalization denominators.
///
/// Degenerate maxima are guarded here rather than at every call site:
/// when `max(demand) == 0` every demand term is 0.0 (the metric is all
/// zeros and carries no signal), and when `max(delay) == 0` every delay
/// term is 1.0 (zero delay is the optimum the `1 − delay/max` form
/// rewards). Both guards keep every sub-score inside [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubsetNorms {
    max_demand: f64,
    max_delay: f64,
}

impl SubsetNorms {
    /// Compute the maxima over a subset.
    #[must_use]
    pub fn over(records: &[SummaryRecord]) -> Self {
        let max_demand = records.iter().map(|r| r.demand).fold(0.0, f64::max);
        let max_delay = records.iter().map(|r| r.delay).fold(0.0, f64::max);
        Self {
            max_demand,
            max_delay,
        }
    }

    /// `demand / max(demand)`, in [0,1]; 1.0 for the row(s) holding the max.
    #[must_use]
    pub fn demand_score(&self, demand: f64) -> f64 {
        if self.max_demand == 0.0 {
            0.0
        } else {
            demand / self.max_demand
        }
    }

    /// `1 − delay / max(delay)`, in [0,1]; 1.0 for zero delay.
    #[must_use]
    pub fn delay_score(&self, delay: f64) -> f64 {
        if self.max_delay == 0.0 {
            1.0
        } else {
            1.0 - delay / self.max_delay
        }
    }

    /// True when the demand maximum was zero and the guard is in effect.
    #[must_use]
    pub fn degenerate_demand(&self) -> bool {
        self.max_demand == 0.0
    }

    /// True when the delay maximum was zero and the guard is in effect.
    #[must_use]
    pub fn degenerate_delay(&self) -> bool {
        self.max_delay == 0.0
    }
}

/// Result of a scoring pass over the filtered subset.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    /// The weights do not sum to 1.00 at two decimals; no record was scored.
    InvalidWeights {
        /// The offending sum, for diagnostics
        sum: f64,
    },
    /// Every record scored, in subset order.
    Scored {
        /// Fresh parallel sequence of scored records
        records: Vec<ScoredRecord>,
        /// The normalization used, exposed for breakdown rendering
        norms: SubsetNorms,
    },
}

/// Score the filtered subset with the given weights.
///
/// The subset itself is never mutated; scored records are a fresh parallel
/// sequence. Invalid weights short-circuit before any normalization.
#[must_use]
pub fn score_records(records: &[SummaryRecord], weights: &WeightConfig) -> ScoreOutcome {
    if !weights.is_valid() {
        let sum = weights.sum();
        tracing::debug!(sum, "weights do not sum to 1.00, scoring skipped");
        return ScoreOutcome::InvalidWeights { sum };
    }

    let norms = SubsetNorms::over(records);
    if norms.degenerate_demand() {
        tracing::warn!("subset max demand is 0, demand terms forced to 0.0");
    }
    if norms.degenerate_delay() {
        tracing::warn!("subset max delay is 0, delay terms forced to 1.0");
    }

    let scored = records
        .iter()
        .map(|record| {
            let sub_scores = SubScores {
                demand: norms.demand_score(record.demand),
                delay: norms.delay_score(record.delay),
                sustainability: record.sustainability.as_score(),
            };
            let score = weights.demand * sub_scores.demand
                + weights.delay * sub_scores.delay
                + weights.sustainability * sub_scores.sustainability;
            ScoredRecord {
                record: record.clone(),
                sub_scores,
                score,
            }
        })
        .collect();

    ScoreOutcome::Scored {
        records: scored,
        norms,
    }
}

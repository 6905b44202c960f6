//! Ranking and top-N selection over the scored subset.

use crate::model::{ScoreBreakdown, ScoredRecord, WeightConfig};
use crate::utils::{round1, round2};

/// One row of the ranked list, with display-rounded values.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RankedEntry {
    /// 1-based rank
    pub rank: usize,
    /// The scored record
    pub record: ScoredRecord,
    /// Score rounded to two decimals for display
    pub display_score: f64,
    /// Sustainability percentage rounded to one decimal for display
    pub display_sustainability: f64,
}

/// The top-N result of one recompute cycle.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ranking {
    /// Top entries by score descending, ties in subset order
    pub entries: Vec<RankedEntry>,
    /// Weighted per-term contributions of the winning record
    pub breakdown: ScoreBreakdown,
    /// The N the caller asked for
    pub requested_n: usize,
    /// The N actually used after clamping to `[1, |subset|]`
    pub effective_n: usize,
}

impl Ranking {
    /// The winning record.
    ///
    /// `entries` is never empty: ranking only runs on a non-empty scored
    /// subset and N is clamped to at least 1.
    #[must_use]
    pub fn winner(&self) -> &RankedEntry {
        &self.entries[0]
    }
}

/// Order the scored subset by score descending and keep the top N.
///
/// The sort is stable: records with equal scores keep the order the
/// filter stage yielded, and identical inputs always produce identical
/// rankings. `top_n` outside `[1, |subset|]` is clamped, not rejected.
///
/// Returns `None` for an empty subset; callers are expected to have
/// short-circuited that case already.
#[must_use]
pub fn rank(scored: &[ScoredRecord], weights: &WeightConfig, top_n: usize) -> Option<Ranking> {
    if scored.is_empty() {
        return None;
    }

    let effective_n = top_n.clamp(1, scored.len());
    if effective_n != top_n {
        tracing::warn!(
            requested = top_n,
            clamped = effective_n,
            subset_size = scored.len(),
            "top_n out of range, clamped"
        );
    }

    let mut ordered: Vec<ScoredRecord> = scored.to_vec();
    // Stable sort: ties keep subset order. Scores come from validated,
    // finite inputs, so the partial_cmp fallback is never taken in practice.
    ordered.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ordered.truncate(effective_n);

    let breakdown = ScoreBreakdown::new(&ordered[0].sub_scores, weights);
    let entries = ordered
        .into_iter()
        .enumerate()
        .map(|(idx, record)| RankedEntry {
            rank: idx + 1,
            display_score: round2(record.score),
            display_sustainability: round1(record.record.sustainability.percent()),
            record,
        })
        .collect();

    Some(Ranking {
        entries,
        breakdown,
        requested_n: top_n,
        effective_n,
    })
}

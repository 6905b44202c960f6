//! The scoring/ranking engine.
//!
//! Stages, in pipeline order: [`aggregate`] collapses raw rows per
//! (factory, product, warehouse) key, [`filter`] selects the working
//! subset, [`score`] normalizes metrics and computes the weighted
//! composite, [`rank`] orders by score and selects the top N.
//! [`recompute`] runs the whole cycle and folds the outcome into a single
//! status value: engine conditions (invalid weights, empty subset) are
//! values, never errors.

pub mod aggregate;
pub mod filter;
pub mod rank;
pub mod recompute;
pub mod score;

pub use aggregate::aggregate;
pub use filter::FilterSelection;
pub use rank::{RankedEntry, Ranking};
pub use recompute::{
    PresentationData, Recomputation, RecomputeParams, SeriesEntry, SustainabilitySplit, recompute,
};
pub use score::{ScoreOutcome, SubsetNorms, score_records};

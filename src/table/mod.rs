//! Display-oriented tabular projection of the working subset.
//!
//! The display table is what the presentation/export layer consumes: human
//! column labels, display-rounded values, and a user-chosen sort order that
//! is independent of the Ranker's score ordering.

mod display;
mod sort;

pub use display::{DisplayRow, DisplayTable};
pub use sort::{SortColumn, SortDirection};

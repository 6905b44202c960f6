//! Shared utilities.

mod hash;
mod rounding;

pub use hash::records_hash;
pub use rounding::{round1, round2};

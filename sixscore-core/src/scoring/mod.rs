//! Aggregation of strategy scores and the score → recommendation mapping.

pub mod aggregate;
pub mod recommend;

pub use aggregate::{overall_score, STRATEGY_COUNT};
pub use recommend::recommend;

//! Analysis engine: input validation and orchestration.
//!
//! Validation happens once, when an `AnalysisInput` is built. Everything
//! downstream (evaluators, aggregation, recommendation) is infallible.

pub mod analyzer;
pub mod error;
pub mod input;

pub use analyzer::Analyzer;
pub use error::AnalysisError;
pub use input::{AnalysisInput, Recent, RequiredHistory};

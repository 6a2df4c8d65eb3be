//! ATS compatibility rubric: a deterministic scorer and a per-field
//! breakdown/suggestion generator over the same record shape.

pub mod breakdown;
pub mod scoring;

pub use breakdown::{ats_breakdown, FieldCheck, FieldStatus};
pub use scoring::calculate_ats_score;

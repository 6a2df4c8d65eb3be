//! Two-tier résumé parsing: a remote LLM-backed parser with an always-on
//! local heuristic fallback. Both produce the same [`CandidateRecord`]
//! shape with every key present.
//!
//! [`CandidateRecord`]: crate::models::CandidateRecord

pub mod heuristic;
pub mod llm;
pub mod prompts;

pub use heuristic::HeuristicParser;
pub use llm::LlmParser;

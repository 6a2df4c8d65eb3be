//! Vitae engine — résumé intake pipeline.
//!
//! Ingests an uploaded résumé document (PDF, DOCX, image, or plain text),
//! extracts and normalizes its text, derives a structured candidate record
//! through a two-tier parser (remote LLM with a local heuristic fallback),
//! and scores the record on a deterministic ATS rubric with a per-field
//! breakdown. The pipeline never raises on bad input: unreadable documents
//! degrade to empty extractions and remote failures degrade to heuristic
//! parsing, so a sparse record with a low score *is* the error report.
//!
//! Storage, search, and the HTTP surface live outside this crate; callers
//! hand in a [`RawDocument`] and map the resulting [`CandidateRecord`] into
//! whatever they persist.

pub mod ats;
pub mod config;
pub mod extract;
pub mod llm_client;
pub mod models;
pub mod parse;

pub use ats::{ats_breakdown, calculate_ats_score, FieldCheck, FieldStatus};
pub use config::Config;
pub use extract::{clean_text, Extraction, OcrEngine, RawDocument, TextExtractor};
pub use models::{merge_with_defaults, AtsFields, CandidateRecord, TimelineEntry};
pub use parse::{HeuristicParser, LlmParser};

pub mod record;

pub use record::{merge_with_defaults, AtsFields, CandidateRecord, TimelineEntry};

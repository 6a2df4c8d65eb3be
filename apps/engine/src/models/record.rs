//! The structured extraction result — the contract boundary between parsing
//! and scoring. Every field is always present and defaulted; the LLM path
//! back-fills whatever the model omitted through [`merge_with_defaults`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One employment span. The heuristic parser only fills the years; the
/// remote parser may fill all four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Structured candidate data derived from one résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub professional_summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub ats_score: i64,
    #[serde(default)]
    pub ats_improvement_tips: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub skill_gaps: Vec<String>,
}

impl CandidateRecord {
    /// Flattens this record into the shape the ATS scorer and advisor
    /// consume. Skills are joined the way the persistence layer stores them.
    pub fn ats_fields(&self) -> AtsFields {
        AtsFields {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            skills: self.skills.join(", "),
            experience: self.experience.clone(),
            education: self.education.clone(),
        }
    }
}

impl fmt::Display for CandidateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "Unnamed Resume")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// The six fields the ATS rubric inspects. Callers with a persisted record
/// map it into this shape; `skills` is a comma-joined string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsFields {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
}

impl AtsFields {
    /// Comma-split skill tokens, trimmed, with empties dropped.
    pub fn skill_list(&self) -> Vec<&str> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }
}

/// Merges an arbitrary JSON value (typically a model response) against the
/// zero-valued schema. Absent or wrong-typed keys take their defaults, so
/// the returned record always satisfies the every-key-present invariant.
pub fn merge_with_defaults(partial: Value) -> CandidateRecord {
    let map = match partial {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    CandidateRecord {
        name: string_field(&map, "name"),
        email: string_field(&map, "email"),
        mobile: string_field(&map, "mobile"),
        professional_summary: string_field(&map, "professional_summary"),
        skills: string_list_field(&map, "skills"),
        experience_timeline: timeline_field(&map),
        experience: string_field(&map, "experience"),
        education: string_field(&map, "education"),
        ats_score: score_field(&map),
        ats_improvement_tips: string_list_field(&map, "ats_improvement_tips"),
        strengths: string_list_field(&map, "strengths"),
        weaknesses: string_list_field(&map, "weaknesses"),
        skill_gaps: string_list_field(&map, "skill_gaps"),
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_list_field(map: &Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn timeline_field(map: &Map<String, Value>) -> Vec<TimelineEntry> {
    match map.get("experience_timeline") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(entry) => Some(TimelineEntry {
                    company: string_field(entry, "company"),
                    designation: string_field(entry, "designation"),
                    start: string_field(entry, "start"),
                    end: string_field(entry, "end"),
                }),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Models return scores as numbers, numeric strings, or garbage. Anything
/// that won't coerce becomes 0; the result is pinned to the 0–100 range.
fn score_field(map: &Map<String, Value>) -> i64 {
    let raw = match map.get("ats_score") {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    raw.unwrap_or(0).clamp(0, 100)
}

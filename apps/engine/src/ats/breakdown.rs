//! Per-field ATS breakdown and improvement suggestions.
//!
//! A presentation-oriented sibling of the scorer, not a refactor of it: the
//! pass/fail thresholds here are deliberately simpler and looser in places,
//! and the two must stay independently correct.

use std::fmt;

use serde::Serialize;

use crate::models::AtsFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Ok,
    Missing,
    Weak,
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldStatus::Ok => "ok",
            FieldStatus::Missing => "missing",
            FieldStatus::Weak => "weak",
        };
        write!(f, "{label}")
    }
}

/// One line of the breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub field: &'static str,
    pub status: FieldStatus,
}

/// Classifies each rubric field and collects one fixed suggestion per
/// failing field. Always returns exactly six checks, in the order Name,
/// Email, Phone, Skills, Experience, Education.
pub fn ats_breakdown(fields: &AtsFields) -> (Vec<FieldCheck>, Vec<String>) {
    let mut breakdown = Vec::with_capacity(6);
    let mut suggestions = Vec::new();

    let mut check = |field: &'static str, passed: bool, fail_status: FieldStatus, tip: &str| {
        if passed {
            breakdown.push(FieldCheck {
                field,
                status: FieldStatus::Ok,
            });
        } else {
            breakdown.push(FieldCheck {
                field,
                status: fail_status,
            });
            suggestions.push(tip.to_string());
        }
    };

    check(
        "Name",
        fields.name.trim().chars().count() >= 3,
        FieldStatus::Missing,
        "Add your full name.",
    );
    check(
        "Email",
        !fields.email.is_empty(),
        FieldStatus::Missing,
        "Add a professional email address.",
    );
    check(
        "Phone",
        !fields.mobile.is_empty(),
        FieldStatus::Missing,
        "Add a contact phone number.",
    );
    check(
        "Skills",
        fields.skill_list().len() >= 5,
        FieldStatus::Weak,
        "Add at least 5 relevant skills.",
    );
    check(
        "Experience",
        fields.experience.trim().chars().count() >= 75,
        FieldStatus::Weak,
        "Add detailed work experience with responsibilities.",
    );
    check(
        "Education",
        fields.education.trim().chars().count() >= 40,
        FieldStatus::Weak,
        "Add your education details clearly.",
    );

    (breakdown, suggestions)
}

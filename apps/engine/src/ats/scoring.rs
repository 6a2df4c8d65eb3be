//! Deterministic ATS compatibility scoring.
//!
//! Six independent weighted checks summing to exactly 100. The clamp is
//! defensive only; no combination of tiers exceeds it.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::AtsFields;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"\+?\d[\d\-\s]{6,}\d").unwrap();
}

/// Scores a record shape on the 0–100 ATS rubric.
///
/// Weights: name 10, email 10, mobile 10, skills up to 25, experience up
/// to 25, education up to 20.
pub fn calculate_ats_score(fields: &AtsFields) -> i64 {
    let mut score = 0;

    if fields.name.trim().chars().count() >= 3 {
        score += 10;
    }

    if !fields.email.is_empty() && EMAIL_RE.is_match(&fields.email) {
        score += 10;
    }

    if !fields.mobile.is_empty() && PHONE_RE.is_match(&fields.mobile) {
        score += 10;
    }

    let skill_count = fields.skill_list().len();
    if skill_count >= 5 {
        score += 25;
    } else if skill_count >= 3 {
        score += 15;
    } else if skill_count >= 1 {
        score += 8;
    }

    let experience_len = fields.experience.trim().chars().count();
    if experience_len >= 150 {
        score += 25;
    } else if experience_len >= 75 {
        score += 15;
    } else if experience_len >= 30 {
        score += 8;
    }

    let education_len = fields.education.trim().chars().count();
    if education_len >= 80 {
        score += 20;
    } else if education_len >= 40 {
        score += 12;
    } else if education_len >= 20 {
        score += 6;
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maximal_fields() -> AtsFields {
        AtsFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            mobile: "+1 415-555-0199".to_string(),
            skills: "rust, sql, docker, kubernetes, grpc".to_string(),
            experience: "e".repeat(150),
            education: "u".repeat(80),
        }
    }

    #[test]
    fn test_maximal_record_scores_exactly_100() {
        assert_eq!(calculate_ats_score(&maximal_fields()), 100);
    }

    #[test]
    fn test_empty_record_scores_zero() {
        assert_eq!(calculate_ats_score(&AtsFields::default()), 0);
    }

    #[test]
    fn test_skills_subscore_is_monotonic() {
        let skills_score = |skills: &str| {
            calculate_ats_score(&AtsFields {
                skills: skills.to_string(),
                ..Default::default()
            })
        };
        assert_eq!(skills_score(""), 0);
        assert_eq!(skills_score("rust"), 8);
        assert_eq!(skills_score("rust, sql, docker"), 15);
        assert_eq!(skills_score("rust, sql, docker, kubernetes, grpc"), 25);
    }

    #[test]
    fn test_experience_tier_boundaries() {
        let experience_score = |len: usize| {
            calculate_ats_score(&AtsFields {
                experience: "x".repeat(len),
                ..Default::default()
            })
        };
        assert_eq!(experience_score(29), 0);
        assert_eq!(experience_score(30), 8);
        assert_eq!(experience_score(74), 8);
        assert_eq!(experience_score(75), 15);
        assert_eq!(experience_score(149), 15);
        assert_eq!(experience_score(150), 25);
    }

    #[test]
    fn test_education_tier_boundaries() {
        let education_score = |len: usize| {
            calculate_ats_score(&AtsFields {
                education: "x".repeat(len),
                ..Default::default()
            })
        };
        assert_eq!(education_score(19), 0);
        assert_eq!(education_score(20), 6);
        assert_eq!(education_score(40), 12);
        assert_eq!(education_score(80), 20);
    }

    #[test]
    fn test_short_name_scores_nothing() {
        let fields = AtsFields {
            name: " Al ".to_string(),
            ..Default::default()
        };
        assert_eq!(calculate_ats_score(&fields), 0);
    }

    #[test]
    fn test_invalid_email_scores_nothing() {
        let fields = AtsFields {
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        assert_eq!(calculate_ats_score(&fields), 0);
    }

    #[test]
    fn test_score_never_exceeds_100() {
        let mut fields = maximal_fields();
        fields.experience = format!("  {}  ", "e".repeat(400));
        assert_eq!(calculate_ats_score(&fields), 100);
    }
}

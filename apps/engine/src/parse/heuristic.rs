//! Regex/keyword résumé parsing — always available, no external calls.
//!
//! This parser is deliberately shallow: it finds contact details, a skills
//! window, and bare year spans, and leaves the experience/education bodies
//! empty. The remote parser produces the richer record; this one guarantees
//! there is always *a* record.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{CandidateRecord, TimelineEntry};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"\+?\d[\d\-\s]{6,}\d").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref SKILLS_HEADING_RE: Regex = Regex::new(r"(?i)skills").unwrap();
    static ref SKILL_TOKEN_RE: Regex = Regex::new(r"[A-Za-z+#.\-]{3,}").unwrap();
    static ref YEAR_SPAN_RE: Regex =
        Regex::new(r"\b((?:19|20)\d{2})\b[^\d]{0,5}\b((?:19|20)\d{2})\b").unwrap();
}

/// Characters of text inspected after a "skills" heading.
const SKILLS_WINDOW_CHARS: usize = 350;
/// Maximum number of skill tokens kept.
const MAX_SKILLS: usize = 20;

const LOW_SCORE_TIPS: &[&str] = &[
    "Add clear skills section.",
    "Add structured work experience with dates.",
    "Include contact details clearly.",
];
const HIGH_SCORE_TIPS: &[&str] = &["Improve formatting and add measurable achievements."];

/// Heuristic résumé parser. Total: every input, including the empty string,
/// yields a fully-populated [`CandidateRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicParser;

impl HeuristicParser {
    pub fn parse(&self, text: &str) -> CandidateRecord {
        let mut record = CandidateRecord::default();
        if text.is_empty() {
            return record;
        }

        if let Some(m) = EMAIL_RE.find(text) {
            record.email = m.as_str().to_string();
        }

        if let Some(m) = PHONE_RE.find(text) {
            record.mobile = WHITESPACE_RE.replace_all(m.as_str(), " ").into_owned();
        }

        record.skills = extract_skills(text);
        record.experience_timeline = extract_timeline(text);

        record.ats_improvement_tips = if presence_score(&record) < 50 {
            LOW_SCORE_TIPS
        } else {
            HIGH_SCORE_TIPS
        }
        .iter()
        .map(|tip| tip.to_string())
        .collect();

        record
    }
}

/// Tokenizes a fixed-size window after the first "skills" occurrence,
/// deduplicating on first appearance.
fn extract_skills(text: &str) -> Vec<String> {
    let Some(heading) = SKILLS_HEADING_RE.find(text) else {
        return Vec::new();
    };

    let window: String = text[heading.start()..]
        .chars()
        .take(SKILLS_WINDOW_CHARS)
        .collect();

    let mut skills: Vec<String> = Vec::new();
    for token in SKILL_TOKEN_RE.find_iter(&window) {
        let token = token.as_str().to_string();
        if !skills.contains(&token) {
            skills.push(token);
        }
        if skills.len() == MAX_SKILLS {
            break;
        }
    }
    skills
}

/// Every non-overlapping pair of 4-digit years separated by at most five
/// non-digit characters becomes one employment span, in text order.
fn extract_timeline(text: &str) -> Vec<TimelineEntry> {
    YEAR_SPAN_RE
        .captures_iter(text)
        .map(|caps| TimelineEntry {
            company: String::new(),
            designation: String::new(),
            start: caps[1].to_string(),
            end: caps[2].to_string(),
        })
        .collect()
}

/// Six-field presence score on a 0–100 scale, used only to pick which tip
/// set to attach. This is NOT the authoritative ATS score — that one is
/// computed by the scorer over the persisted record.
fn presence_score(record: &CandidateRecord) -> i64 {
    let present = [
        !record.name.is_empty(),
        !record.email.is_empty(),
        !record.mobile.is_empty(),
        !record.skills.is_empty(),
        !record.experience.is_empty(),
        !record.education.is_empty(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count() as i64;

    present * 100 / 6
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\njane.doe@example.com\n+1 415-555-0199\n\
        Skills: Rust, SQL, Docker, Kubernetes, gRPC\n\
        Acme Corp 2019 - 2021\nGlobex 2021-2024";

    #[test]
    fn test_empty_input_returns_zero_schema() {
        let record = HeuristicParser.parse("");
        assert_eq!(record, CandidateRecord::default());
        assert!(record.ats_improvement_tips.is_empty());
    }

    #[test]
    fn test_email_first_match_wins() {
        let record = HeuristicParser.parse("a@example.com then b@example.org");
        assert_eq!(record.email, "a@example.com");
    }

    #[test]
    fn test_phone_whitespace_collapsed() {
        let record = HeuristicParser.parse("call +1 415  555\t0199 now");
        assert_eq!(record.mobile, "+1 415 555 0199");
    }

    #[test]
    fn test_skills_window_tokenized_and_deduplicated() {
        let record = HeuristicParser.parse("Skills: Rust, SQL, Rust, C++, C#");
        assert_eq!(record.skills, vec!["Skills", "Rust", "SQL", "C++"]);
    }

    #[test]
    fn test_skills_absent_without_heading() {
        let record = HeuristicParser.parse("Rust, SQL, Docker");
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_skills_capped_at_twenty() {
        let mut text = String::from("skills ");
        for i in 0..30 {
            text.push_str(&format!("token{i:02} "));
        }
        let record = HeuristicParser.parse(&text);
        assert_eq!(record.skills.len(), 20);
    }

    #[test]
    fn test_timeline_spans_in_text_order() {
        let record = HeuristicParser.parse(SAMPLE);
        assert_eq!(record.experience_timeline.len(), 2);
        assert_eq!(record.experience_timeline[0].start, "2019");
        assert_eq!(record.experience_timeline[0].end, "2021");
        assert_eq!(record.experience_timeline[1].start, "2021");
        assert_eq!(record.experience_timeline[1].end, "2024");
        assert_eq!(record.experience_timeline[0].company, "");
    }

    #[test]
    fn test_years_too_far_apart_not_paired() {
        let record = HeuristicParser.parse("2019 until around 2021");
        assert!(record.experience_timeline.is_empty());
    }

    #[test]
    fn test_out_of_range_years_ignored() {
        let record = HeuristicParser.parse("1850 - 1875");
        assert!(record.experience_timeline.is_empty());
    }

    #[test]
    fn test_experience_and_education_bodies_stay_empty() {
        let record = HeuristicParser.parse(SAMPLE);
        assert_eq!(record.experience, "");
        assert_eq!(record.education, "");
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_sparse_text_gets_low_score_tips() {
        let record = HeuristicParser.parse("just an email: a@example.com");
        assert_eq!(record.ats_improvement_tips.len(), 3);
    }

    #[test]
    fn test_contact_plus_skills_gets_high_score_tip() {
        // email + phone + skills = 3 of 6 fields = 50, which clears the
        // below-50 threshold.
        let record = HeuristicParser.parse(SAMPLE);
        assert_eq!(
            record.ats_improvement_tips,
            vec!["Improve formatting and add measurable achievements."]
        );
    }
}

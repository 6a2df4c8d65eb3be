// Prompt constants for the parse module.

/// Structured-extraction prompt. Replace `{resume_text}` before sending.
/// The key list mirrors `CandidateRecord`; anything else the model invents
/// is discarded during the defaults merge.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract structured information from this resume.

Return ONLY valid JSON with keys:

{
  "name": "",
  "email": "",
  "mobile": "",
  "professional_summary": "",
  "skills": [],
  "experience_timeline": [{"company": "", "designation": "", "start": "", "end": ""}],
  "experience": "",
  "education": "",
  "ats_score": 0,
  "ats_improvement_tips": [],
  "strengths": [],
  "weaknesses": [],
  "skill_gaps": []
}

RULES:
- Do not invent details not in the resume.
- Missing fields -> empty strings/lists.
- ats_score must be an integer 0-100.
- JSON only.

Resume text:
"""
{resume_text}
""""#;

pub fn extraction_prompt(resume_text: &str) -> String {
    EXTRACTION_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

//! Resume Validator — heuristic gate deciding whether uploaded text is a resume.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Section headings commonly found in resumes. Substring matches, so
/// "work experience" and "experience" can both hit on the same text.
const SECTION_KEYWORDS: [&str; 7] = [
    "experience",
    "education",
    "skills",
    "projects",
    "internship",
    "certification",
    "work experience",
];

/// Job-title words that signal a resume rather than an arbitrary document.
const ROLE_KEYWORDS: [&str; 6] = [
    "engineer",
    "developer",
    "analyst",
    "intern",
    "scientist",
    "manager",
];

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").expect("email regex must compile")
    })
}

fn year_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(19|20)\d{2}").expect("year regex must compile"))
}

/// The raw heuristic signals behind the resume-likelihood gate.
/// Exposed separately from the boolean so handlers can log them.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSignals {
    pub section_hits: usize,
    pub role_hits: usize,
    pub has_email: bool,
    pub has_years: bool,
    pub word_count: usize,
}

impl ResumeSignals {
    pub fn compute(text: &str) -> Self {
        let text = text.to_lowercase();

        let section_hits = SECTION_KEYWORDS
            .iter()
            .filter(|s| text.contains(*s))
            .count();
        let role_hits = ROLE_KEYWORDS.iter().filter(|r| text.contains(*r)).count();

        ResumeSignals {
            section_hits,
            role_hits,
            has_email: email_regex().is_match(&text),
            has_years: year_regex().is_match(&text),
            word_count: text.split_whitespace().count(),
        }
    }

    /// The gate: all four conditions must hold. No partial credit — a false
    /// here means the document is rejected outright.
    pub fn passes_gate(&self) -> bool {
        self.word_count > 200
            && self.section_hits >= 2
            && (self.has_email || self.has_years)
            && self.role_hits >= 1
    }
}

/// Convenience wrapper: compute signals and apply the gate in one call.
pub fn is_likely_resume(text: &str) -> bool {
    ResumeSignals::compute(text).passes_gate()
}

//! Skill Extractor — matches a fixed keyword vocabulary against resume text.

/// The recognized skill vocabulary, in output order. Matching is plain
/// substring containment on lower-cased text; there is intentionally no
/// word-boundary check, so e.g. "ai" also matches inside longer words.
/// A known false-positive risk, kept as-is.
const SKILL_VOCABULARY: [&str; 13] = [
    "python",
    "machine learning",
    "deep learning",
    "data analysis",
    "statistics",
    "sql",
    "streamlit",
    "nlp",
    "ai",
    "prompt engineering",
    "pandas",
    "numpy",
    "scikit-learn",
];

/// Scans `text` for known skill keywords and returns their canonical
/// title-cased labels, preserving vocabulary order. Deterministic; an empty
/// result means "no skills detected" and is valid.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text = text.to_lowercase();

    SKILL_VOCABULARY
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| title_case(keyword))
        .collect()
}

/// Title-cases a keyword: the first letter of every alphabetic run is
/// upper-cased, the rest lower-cased. Runs are delimited by any non-letter,
/// so "scikit-learn" becomes "Scikit-Learn" and "ai" becomes "Ai".
/// The casing is load-bearing: the role mapper compares these labels exactly.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_was_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_was_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_letter = true;
        } else {
            out.push(c);
            prev_was_letter = false;
        }
    }

    out
}

//! Prompt builders for the three advisory variants. Pure string assembly —
//! deterministic for a given input, so they are tested directly.

/// Hard cap on how much resume text is embedded in the critique prompt.
/// Bounds request size and cost.
const RESUME_EXCERPT_CHARS: usize = 1200;

pub fn career_explanation_prompt(skills: &[String], roles: &[String]) -> String {
    format!(
        "The candidate has skills: {}.\n\
         Suggested roles: {}.\n\n\
         Explain clearly and concisely why these roles are suitable.",
        skills.join(", "),
        roles.join(", ")
    )
}

pub fn improvement_prompt(resume_text: &str) -> String {
    let excerpt: String = resume_text.chars().take(RESUME_EXCERPT_CHARS).collect();

    format!(
        "You are a senior technical resume reviewer.\n\n\
         Analyze the resume below and provide ONLY improvement suggestions.\n\n\
         Rules:\n\
         - Do NOT rewrite the entire resume\n\
         - Do NOT repeat resume content verbatim\n\
         - Identify weak bullet points\n\
         - Suggest how to improve them\n\
         - Mention what should be replaced and why\n\
         - Focus on impact, clarity, and technical depth\n\
         - Use bullet points for suggestions\n\n\
         Resume:\n{excerpt}"
    )
}

pub fn interview_prompt(skills: &[String], roles: &[String]) -> String {
    format!(
        "You are an interviewer.\n\n\
         Candidate skills: {}\n\
         Target roles: {}\n\n\
         Generate 6 interview questions:\n\
         - 3 technical questions\n\
         - 3 behavioral questions\n\
         Format as a numbered list.\n\
         Do not include special tokens.\n\
         Ensure the response is complete.",
        skills.join(", "),
        roles.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_prompt_embeds_skills_and_roles() {
        let prompt = career_explanation_prompt(
            &["Python".to_string(), "Sql".to_string()],
            &["Backend / Data Engineer".to_string()],
        );
        assert!(prompt.contains("skills: Python, Sql."));
        assert!(prompt.contains("Suggested roles: Backend / Data Engineer."));
    }

    #[test]
    fn test_improvement_prompt_truncates_to_exactly_1200_chars() {
        let long_resume = "x".repeat(5000);
        let prompt = improvement_prompt(&long_resume);

        let embedded = prompt.split("Resume:\n").nth(1).unwrap();
        assert_eq!(embedded.chars().count(), 1200);
    }

    #[test]
    fn test_improvement_prompt_keeps_short_resume_whole() {
        let prompt = improvement_prompt("Short resume body");
        assert!(prompt.ends_with("Resume:\nShort resume body"));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // Multibyte input must not be cut mid-character.
        let resume = "é".repeat(2000);
        let prompt = improvement_prompt(&resume);
        let embedded = prompt.split("Resume:\n").nth(1).unwrap();
        assert_eq!(embedded.chars().count(), 1200);
    }

    #[test]
    fn test_interview_prompt_asks_for_six_questions() {
        let prompt = interview_prompt(
            &["Python".to_string()],
            &["Machine Learning Engineer".to_string()],
        );
        assert!(prompt.contains("Generate 6 interview questions"));
        assert!(prompt.contains("3 technical"));
        assert!(prompt.contains("3 behavioral"));
    }
}

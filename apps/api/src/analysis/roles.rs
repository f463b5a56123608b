//! Role Mapper — static rules from skill co-occurrence to suggested roles.

/// Maps detected skills to suggested job roles. Rules are evaluated in fixed
/// order and every matching rule contributes, so the output order is stable.
/// Membership is exact string equality against the extractor's title-cased
/// labels ("Ai", "Sql" — not "AI"/"SQL"). Always returns at least one role.
pub fn suggest_roles(skills: &[String]) -> Vec<String> {
    let has = |label: &str| skills.iter().any(|s| s == label);

    let mut roles = Vec::new();

    if has("Python") && has("Machine Learning") {
        roles.push("Machine Learning Engineer".to_string());
    }

    if has("Statistics") && has("Data Analysis") {
        roles.push("Data Analyst".to_string());
    }

    if has("Prompt Engineering") || has("Ai") {
        roles.push("Generative AI / Prompt Engineer".to_string());
    }

    if has("Python") && has("Sql") {
        roles.push("Backend / Data Engineer".to_string());
    }

    if roles.is_empty() {
        roles.push("Software Engineer (Entry Level)".to_string());
    }

    roles
}

//! Post-processing of model output.
//!
//! mistral-7b-instruct occasionally leaks its chat-template tokens into the
//! completion text. They are removed by literal substring replacement, in a
//! fixed order, after a successful response — a pure pass so it can be
//! tested on its own.

/// Artifact tokens removed from model output, in replacement order.
const ARTIFACT_TOKENS: [&str; 3] = ["<s>", "[INST]", "[/INST]"];

/// Removes known chat-template artifacts and trims surrounding whitespace.
pub fn strip_model_artifacts(text: &str) -> String {
    let mut cleaned = text.to_string();
    for token in ARTIFACT_TOKENS {
        cleaned = cleaned.replace(token, "");
    }
    cleaned.trim().to_string()
}

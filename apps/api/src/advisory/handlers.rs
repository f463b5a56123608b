//! Axum route handlers for the three advisory triggers.
//!
//! Each handler runs one advisory call, substitutes the variant's literal
//! fallback message when the result is absent, caches the final text on the
//! session, and returns it. An advisory failure is never an HTTP error —
//! the `generated` flag tells the client which case it got.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::advisory;
use crate::errors::AppError;
use crate::session::{AdvisoryKind, ResumeSession};
use crate::state::AppState;

/// Shown when the career-explanation call fails; the rule-based results the
/// client already holds remain valid.
pub const CAREER_FALLBACK: &str =
    "AI service is currently unavailable. Skills and role suggestions are still valid.";
pub const IMPROVEMENTS_FALLBACK: &str =
    "Resume improvement analysis is temporarily unavailable.";
pub const INTERVIEW_FALLBACK: &str = "Interview questions are temporarily unavailable.";

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub resume_id: Uuid,
    pub text: String,
    /// True when `text` is model output, false when it is the fallback.
    pub generated: bool,
}

/// POST /api/v1/resumes/:id/advice/career
pub async fn handle_career_explanation(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<AdviceResponse>, AppError> {
    let session = load_session(&state, resume_id).await?;

    let result =
        advisory::career_explanation(state.advisory.as_ref(), &session.skills, &session.roles)
            .await;

    finish(&state, resume_id, AdvisoryKind::Career, result, CAREER_FALLBACK).await
}

/// POST /api/v1/resumes/:id/advice/improvements
pub async fn handle_improvement_suggestions(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<AdviceResponse>, AppError> {
    let session = load_session(&state, resume_id).await?;

    let result =
        advisory::improvement_suggestions(state.advisory.as_ref(), &session.resume_text).await;

    finish(
        &state,
        resume_id,
        AdvisoryKind::Improvements,
        result,
        IMPROVEMENTS_FALLBACK,
    )
    .await
}

/// POST /api/v1/resumes/:id/advice/interview
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<AdviceResponse>, AppError> {
    let session = load_session(&state, resume_id).await?;

    let result =
        advisory::interview_questions(state.advisory.as_ref(), &session.skills, &session.roles)
            .await;

    finish(
        &state,
        resume_id,
        AdvisoryKind::Interview,
        result,
        INTERVIEW_FALLBACK,
    )
    .await
}

async fn load_session(state: &AppState, resume_id: Uuid) -> Result<ResumeSession, AppError> {
    state
        .sessions
        .get(resume_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))
}

/// Caches the outcome on the session and builds the response. The session
/// slot always ends up holding either model text or the fallback string.
async fn finish(
    state: &AppState,
    resume_id: Uuid,
    kind: AdvisoryKind,
    result: Option<String>,
    fallback: &str,
) -> Result<Json<AdviceResponse>, AppError> {
    let generated = result.is_some();
    let text = result.unwrap_or_else(|| fallback.to_string());

    // The session can only vanish here if it was evicted mid-request.
    if !state.sessions.set_advisory(resume_id, kind, text.clone()).await {
        return Err(AppError::NotFound(format!("Resume {resume_id} not found")));
    }

    Ok(Json(AdviceResponse {
        resume_id,
        text,
        generated,
    }))
}

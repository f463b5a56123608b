//! Axum route handlers for resume upload and session retrieval.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::roles::suggest_roles;
use crate::analysis::skills::extract_skills;
use crate::analysis::validator::ResumeSignals;
use crate::errors::AppError;
use crate::extract::text_from_pdf;
use crate::session::ResumeSession;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub resume_id: Uuid,
    pub resume_text: String,
    pub skills: Vec<String>,
    pub roles: Vec<String>,
}

/// POST /api/v1/resumes
///
/// Multipart PDF upload. Pipeline: extract text → likelihood gate →
/// skills → roles → session. A rejected document stops at the gate;
/// nothing downstream is computed or stored for it.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let bytes = read_file_field(multipart).await?;
    let resume_text = text_from_pdf(&bytes)?;

    let signals = ResumeSignals::compute(&resume_text);
    debug!("Resume signals: {signals:?}");

    if !signals.passes_gate() {
        return Err(AppError::UnprocessableEntity(
            "This document does not appear to be a valid resume.".to_string(),
        ));
    }

    let skills = extract_skills(&resume_text);
    let roles = suggest_roles(&skills);

    let session = ResumeSession::new(resume_text.clone(), skills.clone(), roles.clone());
    let resume_id = state.sessions.insert(session).await;

    info!(
        "Resume {resume_id} accepted: {} skills, {} suggested roles",
        skills.len(),
        roles.len()
    );

    Ok(Json(UploadResponse {
        resume_id,
        resume_text,
        skills,
        roles,
    }))
}

/// GET /api/v1/resumes/:id
///
/// Full session snapshot, including any cached advisory results. Absent
/// advisory fields mean "not yet requested".
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeSession>, AppError> {
    let session = state
        .sessions
        .get(resume_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    Ok(Json(session))
}

/// Reads the uploaded document out of the multipart body. Accepts the first
/// field named "file"; anything else is skipped.
async fn read_file_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        return Ok(bytes);
    }

    Err(AppError::Validation(
        "Missing multipart field 'file'".to_string(),
    ))
}

//! In-memory per-upload sessions.
//!
//! Each successful upload creates one session holding the extracted resume
//! text, the rule-based analysis, and the three advisory result slots.
//! Nothing is persisted: sessions live in process memory and the store is
//! capacity-bounded with oldest-first eviction.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Upper bound on concurrently held sessions.
const MAX_SESSIONS: usize = 64;

/// Which of the three advisory slots a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKind {
    Career,
    Improvements,
    Interview,
}

/// One uploaded resume and everything derived from it.
///
/// The advisory fields start absent ("not yet requested") and are only ever
/// written on an explicit trigger. A present value is either sanitized model
/// output or the variant's literal fallback message — never an error object.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSession {
    pub id: Uuid,
    pub resume_text: String,
    pub skills: Vec<String>,
    pub roles: Vec<String>,
    pub career_explanation: Option<String>,
    pub improvement_suggestions: Option<String>,
    pub interview_questions: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ResumeSession {
    pub fn new(resume_text: String, skills: Vec<String>, roles: Vec<String>) -> Self {
        ResumeSession {
            id: Uuid::new_v4(),
            resume_text,
            skills,
            roles,
            career_explanation: None,
            improvement_suggestions: None,
            interview_questions: None,
            created_at: Utc::now(),
        }
    }
}

/// Thread-safe handle to the session map. Cloning shares the same store.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, ResumeSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Inserts a session, evicting the oldest one if the store is full.
    pub async fn insert(&self, session: ResumeSession) -> Uuid {
        let id = session.id;
        let mut map = self.inner.write().await;

        if map.len() >= MAX_SESSIONS {
            if let Some(oldest) = map.values().min_by_key(|s| s.created_at).map(|s| s.id) {
                map.remove(&oldest);
                tracing::debug!("Session store full; evicted oldest session {oldest}");
            }
        }

        map.insert(id, session);
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<ResumeSession> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Stores an advisory result, overwriting any previous value for that
    /// slot. Returns false if the session no longer exists.
    pub async fn set_advisory(&self, id: Uuid, kind: AdvisoryKind, text: String) -> bool {
        let mut map = self.inner.write().await;
        let Some(session) = map.get_mut(&id) else {
            return false;
        };

        let slot = match kind {
            AdvisoryKind::Career => &mut session.career_explanation,
            AdvisoryKind::Improvements => &mut session.improvement_suggestions,
            AdvisoryKind::Interview => &mut session.interview_questions,
        };
        *slot = Some(text);

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> ResumeSession {
        ResumeSession::new(
            "resume text".to_string(),
            vec!["Python".to_string()],
            vec!["Software Engineer (Entry Level)".to_string()],
        )
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trips() {
        let store = SessionStore::new();
        let id = store.insert(sample_session()).await;

        let session = store.get(id).await.expect("session should exist");
        assert_eq!(session.skills, vec!["Python"]);
        assert!(session.career_explanation.is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = SessionStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_advisory_slot_written_and_overwritten() {
        let store = SessionStore::new();
        let id = store.insert(sample_session()).await;

        assert!(
            store
                .set_advisory(id, AdvisoryKind::Career, "first answer".to_string())
                .await
        );
        assert_eq!(
            store.get(id).await.unwrap().career_explanation.as_deref(),
            Some("first answer")
        );

        // A repeated trigger overwrites the cached value.
        store
            .set_advisory(id, AdvisoryKind::Career, "second answer".to_string())
            .await;
        assert_eq!(
            store.get(id).await.unwrap().career_explanation.as_deref(),
            Some("second answer")
        );
    }

    #[tokio::test]
    async fn test_advisory_slots_are_independent() {
        let store = SessionStore::new();
        let id = store.insert(sample_session()).await;

        store
            .set_advisory(id, AdvisoryKind::Interview, "questions".to_string())
            .await;

        let session = store.get(id).await.unwrap();
        assert!(session.career_explanation.is_none());
        assert!(session.improvement_suggestions.is_none());
        assert_eq!(session.interview_questions.as_deref(), Some("questions"));
    }

    #[tokio::test]
    async fn test_set_advisory_on_missing_session_returns_false() {
        let store = SessionStore::new();
        assert!(
            !store
                .set_advisory(Uuid::new_v4(), AdvisoryKind::Career, "text".to_string())
                .await
        );
    }

    #[tokio::test]
    async fn test_store_evicts_oldest_at_capacity() {
        let store = SessionStore::new();

        let first = store.insert(sample_session()).await;
        for _ in 0..MAX_SESSIONS {
            store.insert(sample_session()).await;
        }

        assert!(store.get(first).await.is_none());
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::pkg::internal::adaptors::feedback::mutators::FeedbackMutator;
use crate::pkg::internal::adaptors::feedback::spec::{Decision, FeedbackDraft};
use crate::pkg::internal::adaptors::interviews::selectors::InterviewSelector;
use crate::pkg::internal::adaptors::interviews::spec::ApplicationDetail;
use crate::pkg::internal::api::client::ApiClient;
use crate::pkg::internal::session::SessionStore;
use crate::pkg::portal::state::{Page, PageState};
use crate::prelude::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    // prerequisites missing (no session token or no loaded detail), nothing was sent
    Skipped,
    // a submission was already in flight
    Busy,
}

#[derive(Debug)]
pub struct ApplicationDetailsPage {
    pub details: Page<ApplicationDetail>,
    draft: Mutex<FeedbackDraft>,
    submitting: AtomicBool,
}

impl ApplicationDetailsPage {
    pub fn new() -> Self {
        ApplicationDetailsPage {
            details: Page::new(),
            draft: Mutex::new(FeedbackDraft::default()),
            submitting: AtomicBool::new(false),
        }
    }

    pub async fn load(&self, api: &ApiClient, session: &SessionStore, interview_id: i64) {
        let epoch = self.details.begin_load();
        match InterviewSelector::new(api, session).details(interview_id).await {
            Ok(Some(detail)) => {
                self.details.complete(epoch, Ok(detail));
            }
            Ok(None) => {
                self.details.cancel(epoch);
            }
            Err(err) => {
                tracing::error!("failed to fetch interview details: {}", &err);
                self.details.complete(epoch, Err(err));
            }
        }
    }

    pub fn draft(&self) -> FeedbackDraft {
        self.draft.lock().expect("draft poisoned").clone()
    }

    pub fn set_comments(&self, comments: &str) {
        self.draft.lock().expect("draft poisoned").comments = comments.into();
    }

    pub fn set_score(&self, score: &str) {
        self.draft.lock().expect("draft poisoned").score = score.into();
    }

    pub fn set_decision(&self, decision: Decision) {
        self.draft.lock().expect("draft poisoned").decision = decision;
    }

    // at most one submission in flight; the draft resets only once the portal accepts it
    pub async fn submit_feedback(
        &self,
        api: &ApiClient,
        session: &SessionStore,
    ) -> Result<SubmitOutcome> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::warn!("feedback submission already in flight, refusing another");
            return Ok(SubmitOutcome::Busy);
        }
        let outcome = self.do_submit(api, session).await;
        self.submitting.store(false, Ordering::SeqCst);
        outcome
    }

    async fn do_submit(&self, api: &ApiClient, session: &SessionStore) -> Result<SubmitOutcome> {
        let detail = match self.details.state() {
            PageState::Loaded(detail) => detail,
            _ => {
                tracing::warn!("no application details loaded, skipping feedback submission");
                return Ok(SubmitOutcome::Skipped);
            }
        };
        let payload = self.draft().to_payload(&detail)?;
        match FeedbackMutator::new(api, session)
            .submit(payload.interview_id, &payload)
            .await?
        {
            Some(()) => {
                *self.draft.lock().expect("draft poisoned") = FeedbackDraft::default();
                Ok(SubmitOutcome::Submitted)
            }
            None => Ok(SubmitOutcome::Skipped),
        }
    }

    pub fn teardown(&self) {
        self.details.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;
    use crate::pkg::internal::session::TOKEN_KEY;
    use crate::pkg::testsupport::serve;

    fn detail_payload() -> serde_json::Value {
        json!({
            "InterviewId": 7,
            "ApplicationId": 70,
            "applicantName": "Asha Rao",
            "Email": "asha@example.com",
            "resumePath": "/resumes/asha.pdf",
            "keywordScore": 81.5,
            "CurrentRound": 2,
            "teamsLink": "https://teams/x",
            "scheduledTime": "2024-02-01T10:00:00Z"
        })
    }

    fn portal(hits: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route("/api/interviews/7", get(|| async { Json(detail_payload()) }))
            .route(
                "/api/feedback/7",
                post(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        "ok"
                    }
                }),
            )
    }

    #[tokio::test]
    async fn test_successful_submit_resets_draft() -> Result<()> {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = serve(portal(hits.clone())).await;
        let api = ApiClient::with_base_url(&base)?;
        let session = SessionStore::new();
        session.set(TOKEN_KEY, "tok");

        let page = ApplicationDetailsPage::new();
        page.load(&api, &session, 7).await;
        page.set_comments("strong candidate");
        page.set_score("8");
        page.set_decision(Decision::Accepted);

        let outcome = page.submit_feedback(&api, &session).await?;
        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(page.draft(), FeedbackDraft::default());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_submit_preserves_draft() -> Result<()> {
        let app = Router::new()
            .route("/api/interviews/7", get(|| async { Json(detail_payload()) }))
            .route(
                "/api/feedback/7",
                post(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );
        let base = serve(app).await;
        let api = ApiClient::with_base_url(&base)?;
        let session = SessionStore::new();
        session.set(TOKEN_KEY, "tok");

        let page = ApplicationDetailsPage::new();
        page.load(&api, &session, 7).await;
        page.set_comments("strong candidate");
        page.set_score("8");

        let res = page.submit_feedback(&api, &session).await;
        assert!(res.is_err());
        assert_eq!(page.draft().comments, "strong candidate");
        assert_eq!(page.draft().score, "8");
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_without_loaded_details_is_skipped() -> Result<()> {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = serve(portal(hits.clone())).await;
        let api = ApiClient::with_base_url(&base)?;
        let session = SessionStore::new();
        session.set(TOKEN_KEY, "tok");

        let page = ApplicationDetailsPage::new();
        page.set_comments("typed before the page loaded");
        let outcome = page.submit_feedback(&api, &session).await?;
        assert_eq!(outcome, SubmitOutcome::Skipped);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_submits_send_exactly_one_request() -> Result<()> {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = serve(portal(hits.clone())).await;
        let api = ApiClient::with_base_url(&base)?;
        let session = SessionStore::new();
        session.set(TOKEN_KEY, "tok");

        let page = ApplicationDetailsPage::new();
        page.load(&api, &session, 7).await;
        page.set_comments("strong candidate");
        page.set_score("8");

        let (first, second) = tokio::join!(
            page.submit_feedback(&api, &session),
            page.submit_feedback(&api, &session)
        );
        let outcomes = [first?, second?];
        assert!(outcomes.contains(&SubmitOutcome::Submitted));
        assert!(outcomes.contains(&SubmitOutcome::Busy));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_detail_fetch_is_contained() -> Result<()> {
        let app = Router::new().route(
            "/api/interviews/7",
            get(|| async { (axum::http::StatusCode::NOT_FOUND, "gone") }),
        );
        let base = serve(app).await;
        let api = ApiClient::with_base_url(&base)?;
        let session = SessionStore::new();
        session.set(TOKEN_KEY, "tok");

        let page = ApplicationDetailsPage::new();
        page.load(&api, &session, 7).await;
        assert!(matches!(page.details.state(), PageState::Failed(_)));
        // the page stays usable: a submit attempt skips instead of panicking
        let outcome = page.submit_feedback(&api, &session).await?;
        assert_eq!(outcome, SubmitOutcome::Skipped);
        Ok(())
    }
}

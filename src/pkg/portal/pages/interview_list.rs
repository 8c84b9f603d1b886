use crate::pkg::internal::adaptors::interviews::selectors::InterviewSelector;
use crate::pkg::internal::adaptors::interviews::spec::InterviewSummary;
use crate::pkg::internal::api::client::ApiClient;
use crate::pkg::internal::session::{SessionStore, INTERVIEW_ID_KEY};
use crate::pkg::portal::state::Page;

#[derive(Debug, Default)]
pub struct InterviewListPage {
    pub interviews: Page<Vec<InterviewSummary>>,
}

impl InterviewListPage {
    pub fn new() -> Self {
        InterviewListPage {
            interviews: Page::new(),
        }
    }

    pub async fn load(&self, api: &ApiClient, session: &SessionStore) {
        let epoch = self.interviews.begin_load();
        match InterviewSelector::new(api, session).list_for_interviewer().await {
            Ok(Some(interviews)) => {
                self.interviews.complete(epoch, Ok(interviews));
            }
            Ok(None) => {
                self.interviews.cancel(epoch);
            }
            Err(err) => {
                tracing::error!("failed to fetch interviews: {}", &err);
                self.interviews.complete(epoch, Err(err));
            }
        }
    }

    // the list's view action: remember which interview was chosen before navigating
    pub fn select(&self, interview: &InterviewSummary, session: &SessionStore) {
        session.set(INTERVIEW_ID_KEY, &interview.interview_id.to_string());
    }

    pub fn teardown(&self) {
        self.interviews.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;
    use crate::pkg::internal::session::{TOKEN_KEY, USER_ID_KEY};
    use crate::pkg::portal::state::PageState;
    use crate::pkg::testsupport::serve;
    use crate::prelude::Result;

    #[tokio::test]
    async fn test_load_without_session_stays_idle() -> Result<()> {
        let app = Router::new().route(
            "/api/interviews/interviewer",
            get(|| async { Json(json!([])) }),
        );
        let base = serve(app).await;
        let api = ApiClient::with_base_url(&base)?;
        let session = SessionStore::new();

        let page = InterviewListPage::new();
        page.load(&api, &session).await;
        assert_eq!(page.interviews.state(), PageState::Idle);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_failure_lands_in_failed_state() -> Result<()> {
        let app = Router::new().route(
            "/api/interviews/interviewer",
            get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(app).await;
        let api = ApiClient::with_base_url(&base)?;
        let session = SessionStore::new();
        session.set(TOKEN_KEY, "tok");
        session.set(USER_ID_KEY, "interviewer-1");

        let page = InterviewListPage::new();
        page.load(&api, &session).await;
        assert!(matches!(page.interviews.state(), PageState::Failed(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_and_render_orders_recent_first() -> Result<()> {
        let app = Router::new().route(
            "/api/interviews/interviewer",
            get(|| async {
                Json(json!([
                    {"interviewId": 1, "applicationId": 10, "scheduledTime": "2024-01-01T10:00:00Z"},
                    {"interviewId": 2, "applicationId": 11, "scheduledTime": "2024-02-01T10:00:00Z"}
                ]))
            }),
        );
        let base = serve(app).await;
        let api = ApiClient::with_base_url(&base)?;
        let session = SessionStore::new();
        session.set(TOKEN_KEY, "tok");
        session.set(USER_ID_KEY, "interviewer-1");

        let page = InterviewListPage::new();
        page.load(&api, &session).await;
        let out = crate::pkg::portal::render::interview_list(&page.interviews.state());
        let pos_11 = out.find("\n11 ").expect("row for application 11");
        let pos_10 = out.find("\n10 ").expect("row for application 10");
        assert!(pos_11 < pos_10);
        Ok(())
    }

    #[tokio::test]
    async fn test_select_caches_interview_id_in_session() -> Result<()> {
        let app = Router::new().route(
            "/api/interviews/interviewer",
            get(|| async {
                Json(json!([
                    {"interviewId": 2, "applicationId": 11, "scheduledTime": "2024-02-01T10:00:00Z"}
                ]))
            }),
        );
        let base = serve(app).await;
        let api = ApiClient::with_base_url(&base)?;
        let session = SessionStore::new();
        session.set(TOKEN_KEY, "tok");
        session.set(USER_ID_KEY, "interviewer-1");

        let page = InterviewListPage::new();
        page.load(&api, &session).await;
        let interviews = match page.interviews.state() {
            PageState::Loaded(interviews) => interviews,
            other => panic!("expected Loaded, got {:?}", other),
        };
        page.select(&interviews[0], &session);
        assert_eq!(session.interview_id().as_deref(), Some("2"));
        Ok(())
    }
}

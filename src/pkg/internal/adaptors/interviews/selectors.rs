use standard_error::{Interpolate, StandardError};

use crate::pkg::internal::api::client::ApiClient;
use crate::pkg::internal::api::spec::ResourceOps;
use crate::pkg::internal::normalize::{
    canonicalize, canonicalize_list, APPLICATION_DETAIL_FIELDS, INTERVIEW_SUMMARY_FIELDS,
};
use crate::pkg::internal::session::SessionStore;
use crate::prelude::Result;

use super::spec::{ApplicationDetail, InterviewSummary};

pub struct InterviewSelector<'a> {
    api: &'a ApiClient,
    session: &'a SessionStore,
}

impl<'a> InterviewSelector<'a> {
    pub fn new(api: &'a ApiClient, session: &'a SessionStore) -> Self {
        InterviewSelector { api, session }
    }

    // most recent first; None without touching the network when the session is incomplete
    pub async fn list_for_interviewer(&self) -> Result<Option<Vec<InterviewSummary>>> {
        let token = match (self.session.token(), self.session.user_id()) {
            (Some(token), Some(_)) => token,
            _ => {
                tracing::warn!("token or interviewer id missing, skipping interview fetch");
                return Ok(None);
            }
        };
        let raw = self
            .api
            .fetch_resource("/api/interviews/interviewer", &token)
            .await?;
        let canonical = canonicalize_list(&raw, INTERVIEW_SUMMARY_FIELDS);
        let mut interviews: Vec<InterviewSummary> = serde_json::from_value(canonical)
            .map_err(|e| StandardError::new("ERR-DECODE-002").interpolate_err(e.to_string()))?;
        interviews.sort_by(|a, b| b.scheduled_time.cmp(&a.scheduled_time));
        Ok(Some(interviews))
    }

    pub async fn details(&self, interview_id: i64) -> Result<Option<ApplicationDetail>> {
        let token = match self.session.token() {
            Some(token) => token,
            None => {
                tracing::warn!("token missing, skipping detail fetch");
                return Ok(None);
            }
        };
        let raw = self
            .api
            .fetch_resource(&format!("/api/interviews/{}", interview_id), &token)
            .await?;
        let canonical = canonicalize(&raw, APPLICATION_DETAIL_FIELDS);
        let detail: ApplicationDetail = serde_json::from_value(canonical)
            .map_err(|e| StandardError::new("ERR-DECODE-003").interpolate_err(e.to_string()))?;
        Ok(Some(detail))
    }
}

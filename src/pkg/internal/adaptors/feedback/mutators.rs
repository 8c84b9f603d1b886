use crate::pkg::internal::api::client::ApiClient;
use crate::pkg::internal::api::spec::ResourceOps;
use crate::pkg::internal::session::SessionStore;
use crate::prelude::Result;

use super::spec::FeedbackPayload;

pub struct FeedbackMutator<'a> {
    api: &'a ApiClient,
    session: &'a SessionStore,
}

impl<'a> FeedbackMutator<'a> {
    pub fn new(api: &'a ApiClient, session: &'a SessionStore) -> Self {
        FeedbackMutator { api, session }
    }

    pub async fn submit(&self, interview_id: i64, payload: &FeedbackPayload) -> Result<Option<()>> {
        let token = match self.session.token() {
            Some(token) => token,
            None => {
                tracing::warn!("token missing, skipping feedback submission");
                return Ok(None);
            }
        };
        self.api
            .submit_resource(&format!("/api/feedback/{}", interview_id), &token, payload)
            .await?;
        tracing::info!("feedback submitted for interview {}", interview_id);
        Ok(Some(()))
    }
}

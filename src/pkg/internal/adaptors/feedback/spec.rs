use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use standard_error::{Interpolate, StandardError};
use validator::Validate;

use crate::pkg::internal::adaptors::interviews::spec::ApplicationDetail;
use crate::prelude::Result;

// the wire contract carries the outcome twice, as the status string and the integer result code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[default]
    Accepted,
    Rejected,
}

impl Decision {
    pub fn result_code(&self) -> u8 {
        match self {
            Decision::Accepted => 0,
            Decision::Rejected => 1,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Accepted => write!(f, "Accepted"),
            Decision::Rejected => write!(f, "Rejected"),
        }
    }
}

impl FromStr for Decision {
    type Err = StandardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "accepted" => Ok(Decision::Accepted),
            "rejected" => Ok(Decision::Rejected),
            other => Err(StandardError::new("ERR-FEEDBACK-000")
                .interpolate_err(format!("unknown decision '{}'", other))),
        }
    }
}

// comments and score stay free text until submission derives the typed payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackDraft {
    pub comments: String,
    pub score: String,
    pub decision: Decision,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    #[validate(length(min = 1, message = "comments are required"))]
    pub comments: String,
    #[validate(range(min = 0, max = 10, message = "score must be between 0 and 10"))]
    pub score: i32,
    pub status: Decision,
    pub application_id: i64,
    pub interview_id: i64,
    pub result: u8,
}

impl FeedbackDraft {
    // fails before anything is sent when the draft or detail record is incomplete,
    // leaving the draft untouched for another attempt
    pub fn to_payload(&self, detail: &ApplicationDetail) -> Result<FeedbackPayload> {
        let application_id = detail
            .application_id
            .ok_or_else(|| StandardError::new("ERR-FEEDBACK-001: application id missing"))?;
        let interview_id = detail
            .interview_id
            .ok_or_else(|| StandardError::new("ERR-FEEDBACK-002: interview id missing"))?;
        let score: i32 = self.score.trim().parse().map_err(|_| {
            StandardError::new("ERR-FEEDBACK-003")
                .interpolate_err(format!("score '{}' is not a number", self.score))
        })?;
        let payload = FeedbackPayload {
            comments: self.comments.clone(),
            score,
            status: self.decision,
            application_id,
            interview_id,
            result: self.decision.result_code(),
        };
        payload
            .validate()
            .map_err(|e| StandardError::new("ERR-FEEDBACK-004").interpolate_err(e.to_string()))?;
        Ok(payload)
    }
}

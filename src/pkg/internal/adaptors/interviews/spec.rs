use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSummary {
    pub interview_id: i64,
    pub application_id: i64,
    pub job_title: Option<String>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub teams_link: Option<String>,
}

// every field optional: the normalizer drops fields the backend omitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetail {
    pub interview_id: Option<i64>,
    pub application_id: Option<i64>,
    pub applicant_name: Option<String>,
    pub email: Option<String>,
    pub resume_path: Option<String>,
    pub keyword_score: Option<f64>,
    pub current_round: Option<i32>,
    pub teams_link: Option<String>,
    pub scheduled_time: Option<DateTime<Utc>>,
}

use chrono::{DateTime, Utc};

use crate::pkg::internal::adaptors::interviews::spec::{ApplicationDetail, InterviewSummary};
use crate::pkg::portal::state::PageState;

fn format_time(time: &Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => "unknown".into(),
    }
}

fn or_unknown<T: ToString>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "unknown".into(),
    }
}

pub fn interview_list(state: &PageState<Vec<InterviewSummary>>) -> String {
    match state {
        PageState::Idle => "No interviews scheduled".into(),
        PageState::Loading => "Loading interviews...".into(),
        PageState::Failed(reason) => format!("Failed to load interviews: {}", reason),
        PageState::Loaded(interviews) if interviews.is_empty() => {
            "No interviews scheduled".into()
        }
        PageState::Loaded(interviews) => {
            let mut out = String::from("Scheduled Interviews\n");
            out.push_str(&format!(
                "{:<14} {:<28} {:<22} {}\n",
                "APPLICATION", "JOB TITLE", "SCHEDULED", "INTERVIEW"
            ));
            for interview in interviews {
                out.push_str(&format!(
                    "{:<14} {:<28} {:<22} {}\n",
                    interview.application_id,
                    interview.job_title.as_deref().unwrap_or("N/A"),
                    format_time(&interview.scheduled_time),
                    interview.interview_id,
                ));
            }
            out
        }
    }
}

pub fn application_details(state: &PageState<ApplicationDetail>) -> String {
    match state {
        PageState::Idle => "No interview selected".into(),
        PageState::Loading => "Loading interview details...".into(),
        PageState::Failed(reason) => format!("Failed to load interview details: {}", reason),
        PageState::Loaded(detail) => {
            let mut out = String::from("Interview Details\n");
            out.push_str(&format!(
                "Interview ID:   {}\n",
                or_unknown(&detail.interview_id)
            ));
            out.push_str(&format!(
                "Application ID: {}\n",
                or_unknown(&detail.application_id)
            ));
            out.push_str(&format!(
                "Name:           {}\n",
                or_unknown(&detail.applicant_name)
            ));
            out.push_str(&format!("Email:          {}\n", or_unknown(&detail.email)));
            out.push_str(&format!(
                "Resume:         {}\n",
                or_unknown(&detail.resume_path)
            ));
            out.push_str(&format!(
                "Keyword Score:  {}\n",
                or_unknown(&detail.keyword_score)
            ));
            out.push_str(&format!(
                "Current Round:  {}\n",
                or_unknown(&detail.current_round)
            ));
            out.push_str(&format!(
                "Teams Link:     {}\n",
                or_unknown(&detail.teams_link)
            ));
            out.push_str(&format!(
                "Scheduled Time: {}\n",
                format_time(&detail.scheduled_time)
            ));
            out
        }
    }
}

use clap::{Parser, Subcommand};

use crate::pkg::internal::adaptors::feedback::spec::Decision;
use crate::pkg::internal::api::client::ApiClient;
use crate::pkg::internal::session::{SessionStore, INTERVIEW_ID_KEY};
use crate::pkg::portal::pages::application_details::{ApplicationDetailsPage, SubmitOutcome};
use crate::pkg::portal::pages::interview_list::InterviewListPage;
use crate::pkg::portal::render;
use crate::prelude::Result;

#[derive(Parser)]
#[command(about = "careers portal client for interviewers")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Show the scheduled interviews for the session's interviewer
    Interviews,
    /// Show application details for one interview
    Application { interview_id: i64 },
    /// Submit feedback for one interview
    Feedback {
        interview_id: i64,
        #[arg(long)]
        comments: String,
        #[arg(long)]
        score: String,
        #[arg(long, default_value = "accepted")]
        decision: String,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    let session = SessionStore::from_env();
    let api = ApiClient::new()?;
    match args.command {
        Some(SubCommandType::Interviews) => {
            let page = InterviewListPage::new();
            page.load(&api, &session).await;
            println!("{}", render::interview_list(&page.interviews.state()));
            page.teardown();
        }
        Some(SubCommandType::Application { interview_id }) => {
            // same caching the list's view action performs before navigating
            session.set(INTERVIEW_ID_KEY, &interview_id.to_string());
            let page = ApplicationDetailsPage::new();
            page.load(&api, &session, interview_id).await;
            println!("{}", render::application_details(&page.details.state()));
            page.teardown();
        }
        Some(SubCommandType::Feedback {
            interview_id,
            comments,
            score,
            decision,
        }) => {
            let decision: Decision = decision.parse()?;
            let page = ApplicationDetailsPage::new();
            page.load(&api, &session, interview_id).await;
            page.set_comments(&comments);
            page.set_score(&score);
            page.set_decision(decision);
            match page.submit_feedback(&api, &session).await {
                Ok(SubmitOutcome::Submitted) => println!("Feedback submitted successfully!"),
                Ok(SubmitOutcome::Skipped) => {
                    println!("Feedback not sent, session or interview details missing")
                }
                Ok(SubmitOutcome::Busy) => println!("A submission is already in flight"),
                Err(err) => {
                    tracing::error!("feedback submit failed: {}", &err);
                    println!("Failed to submit feedback.");
                }
            }
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}

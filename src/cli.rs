// src/cli.rs
use crate::auth::verifier::normalize_email;
use crate::db::users::find_user_by_email;
use crate::db::verifications::review_upload;
use crate::db::Database;
use crate::domain::verification::VerificationStatus;
use crate::errors::ServerError;
use tracing::warn;

#[derive(Debug, clap::Parser)]
#[command(version, about = "HomeFinder rental listing browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Default, clap::Subcommand)]
pub enum Command {
    /// Run the web server (default)
    #[default]
    Serve,

    /// Approve or reject the ID card a user uploaded
    ReviewId {
        /// The user's sign-in email
        email: String,

        #[arg(value_enum)]
        decision: Decision,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Decision {
    Approve,
    Reject,
}

/// Applies an operator's decision to the user's current ID upload.
pub fn review_id(
    db: &Database,
    email: &str,
    decision: Decision,
    now: i64,
) -> Result<VerificationStatus, ServerError> {
    let email = normalize_email(email)?;

    db.with_conn(|conn| {
        let user = find_user_by_email(conn, &email)?
            .ok_or_else(|| {
                warn!(%email, "no user with this email");
                ServerError::NotFound
            })?;
        review_upload(conn, user.id, decision == Decision::Approve, now)
    })
}

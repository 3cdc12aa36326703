use std::sync::Arc;

use anyhow::bail;
use barcart_config::Config;
use barcart_form::{ContactForm, SubmitOutcome};
use barcart_models::email_address::EmailAddress;
use barcart_transport_http::{HttpSubmissionTransport, HttpSubmissionTransportConfig};
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit a test inquiry via the configured submission endpoint
    Test {
        /// The sender's email address
        email: EmailAddress,
        #[arg(long, default_value = "Test")]
        first_name: String,
        #[arg(long, default_value = "Inquiry")]
        last_name: String,
        #[arg(long, default_value = "other")]
        event_type: String,
        #[arg(long, default_value = "Submission endpoint test inquiry.")]
        message: String,
        /// Subscribe to the newsletter
        #[arg(long)]
        newsletter: bool,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Test {
                email,
                first_name,
                last_name,
                event_type,
                message,
                newsletter,
            } => {
                test(
                    config, email, first_name, last_name, event_type, message, newsletter,
                )
                .await
            }
        }
    }
}

async fn test(
    config: Config,
    email: EmailAddress,
    first_name: String,
    last_name: String,
    event_type: String,
    message: String,
    newsletter: bool,
) -> anyhow::Result<()> {
    let transport = HttpSubmissionTransport::new(HttpSubmissionTransportConfig {
        base_url: Arc::new(config.submission.base_url),
        request_timeout: config.submission.request_timeout.into(),
    })?;

    let mut form = ContactForm::new(transport);
    let draft = form.draft_mut();
    draft.first_name = first_name;
    draft.last_name = last_name;
    draft.email = email.into_inner();
    draft.event_type = event_type;
    draft.message = message;
    draft.newsletter = newsletter;

    match form.submit().await {
        SubmitOutcome::Accepted(submission) => {
            println!(
                "Inquiry stored with id {} at {}",
                *submission.id, submission.created_at
            );
            Ok(())
        }
        SubmitOutcome::Invalid => {
            for (field, message) in form.errors().messages() {
                eprintln!("{field}: {message}");
            }
            bail!("Inquiry is invalid");
        }
        SubmitOutcome::Failed => bail!("Failed to submit inquiry"),
        SubmitOutcome::Suppressed => unreachable!(),
    }
}

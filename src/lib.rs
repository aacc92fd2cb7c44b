//! Library root for `pr-slack-notifier`.
//!
//! Pr-slack-notifier is a GitHub Action that forwards pull request activity to
//! the people involved as Slack direct messages:
//! - Tells authors about new comments, reviews, and approvals
//! - Tells reviewers when they are assigned
//! - Tells requested reviewers when a pull request is merged or closed
//!
//! GitHub logins are mapped to Slack direct message channels through a user
//! directory supplied as an action input.  The chat integration sits behind a
//! trait so it can be swapped out (or mocked) without touching the dispatch logic.

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, directory::UserDirectory, event::Event, types::Void, workflow::WorkflowContext};
use rustls::crypto;
use tracing::{error, info, warn};

/// Public async entry for the binary crate.
///
/// Handles the single event the workflow runner provided:
/// - Loads the user directory (a missing or invalid one is a no-op)
/// - Reads and validates the event payload
/// - Sends one direct message per recipient
///
/// Errors are only returned for failures that should fail the workflow step.
pub async fn start(config: Config, context: WorkflowContext) -> Void {
    info!("Starting pr-slack-notifier for `{}` ...", context.event_name);

    // Load the user directory.

    let Some(json) = config.user_directory_json() else {
        warn!("[user directory] No Slack user info was provided; nothing to do.");
        return Ok(());
    };

    let directory = match UserDirectory::parse(json) {
        Ok(directory) => directory,
        Err(err) => {
            error!("[user directory] {:#}; nothing to do.", err);
            return Ok(());
        }
    };

    info!("Loaded {} user(s) from the directory.", directory.len());

    // Parse the event.

    let payload = context.load_payload()?;

    let Some(event) = Event::parse(&context.event_name, payload)? else {
        info!("Event `{}` is not one that sends notifications; skipping.", context.event_name);
        return Ok(());
    };

    // Start the crypto provider.
    if crypto::ring::default_provider().install_default().is_err() {
        warn!("A crypto provider was already installed.");
    }

    // Initialize the runtime and notify.

    let runtime = runtime::Runtime::new(config)?;
    let deliveries = runtime.handle(&event, &directory).await;

    let sent = deliveries.iter().filter(|d| d.is_sent()).count();
    info!("Done: {} of {} notification(s) sent.", sent, deliveries.len());

    Ok(())
}

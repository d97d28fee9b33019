//! Contact form submission boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend endpoint yet. `submit_contact` stands in for one by
//! waiting a fixed delay in the browser and succeeding. A real integration
//! replaces the body of this function and maps its failures to
//! `SubmitError`, which the form surfaces as a form-level message.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use crate::state::contact::ContactSubmission;

/// Simulated network latency for a submission.
pub const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Form-level submission failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("We couldn't send your message: {0}")]
    Rejected(String),
    #[error("We couldn't reach the server. Please try again.")]
    Unreachable,
}

/// Deliver a validated submission. No retry, no timeout, not cancellable.
///
/// # Errors
///
/// The simulated boundary never fails; see `SubmitError` for the categories a
/// real backend reports.
#[cfg_attr(not(feature = "hydrate"), allow(clippy::unused_async, unused_variables))]
pub async fn submit_contact(submission: &ContactSubmission) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        log::debug!(
            "contact submission started (message {} chars)",
            submission.message.chars().count()
        );
        gloo_timers::future::sleep(SIMULATED_SUBMIT_DELAY).await;
    }
    Ok(())
}

#![cfg(not(feature = "hydrate"))]

use super::*;

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "John Doe".to_owned(),
        email: "john@example.com".to_owned(),
        phone: "+9100000-0000".to_owned(),
        message: "Hello".to_owned(),
    }
}

#[test]
fn simulated_submit_succeeds() {
    assert_eq!(futures::executor::block_on(submit_contact(&submission())), Ok(()));
}

#[test]
fn simulated_delay_is_one_second() {
    assert_eq!(SIMULATED_SUBMIT_DELAY, Duration::from_secs(1));
}

#[test]
fn submit_error_messages_are_form_level() {
    assert_eq!(
        SubmitError::Unreachable.to_string(),
        "We couldn't reach the server. Please try again."
    );
    assert_eq!(
        SubmitError::Rejected("mailbox full".to_owned()).to_string(),
        "We couldn't send your message: mailbox full"
    );
}

use super::*;

#[test]
fn default_is_unsubscribed() {
    let state = NewsletterState::default();
    assert!(!state.subscribed);
    assert!(state.email.is_empty());
}

#[test]
fn subscribe_with_email_is_terminal() {
    let mut state = NewsletterState::default();
    state.set_email("me@example.com".to_owned());
    assert!(state.subscribe());
    assert!(state.subscribed);
    assert!(state.email.is_empty());
}

#[test]
fn subscribe_requires_non_blank_email() {
    let mut state = NewsletterState::default();
    assert!(!state.subscribe());
    state.set_email("   ".to_owned());
    assert!(!state.subscribe());
    assert!(!state.subscribed);
}

#[test]
fn subscribe_skips_format_checks() {
    let mut state = NewsletterState::default();
    state.set_email("not-an-email".to_owned());
    assert!(state.subscribe());
}

#[test]
fn second_subscribe_is_noop() {
    let mut state = NewsletterState::default();
    state.set_email("me@example.com".to_owned());
    state.subscribe();
    state.set_email("other@example.com".to_owned());
    assert!(!state.subscribe());
    assert!(state.subscribed);
}

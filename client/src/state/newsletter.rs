//! Footer newsletter signup. Subscribing is terminal for the page session.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterState {
    pub email: String,
    pub subscribed: bool,
}

impl NewsletterState {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Accept any non-blank email. Returns `true` when the state changed.
    pub fn subscribe(&mut self) -> bool {
        if self.subscribed || self.email.trim().is_empty() {
            return false;
        }
        self.subscribed = true;
        self.email.clear();
        true
    }
}

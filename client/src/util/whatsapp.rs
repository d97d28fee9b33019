//! Outbound WhatsApp deep links.
//!
//! `wa.me` accepts a prefilled message in the `text` query parameter. The
//! message is percent-encoded; the number is passed through as configured.

#[cfg(test)]
#[path = "whatsapp_test.rs"]
mod whatsapp_test;

use crate::content::brand::WHATSAPP_NUMBER;
use crate::content::pricing::Plan;

const WA_BASE: &str = "https://wa.me/";

/// Plain chat link used by the "Join Now" buttons.
#[must_use]
pub fn join_link() -> String {
    format!("{WA_BASE}{WHATSAPP_NUMBER}")
}

/// Prefilled inquiry message for a pricing plan.
#[must_use]
pub fn plan_inquiry_message(plan: &Plan) -> String {
    format!("Hello I want to contact you for {} Plan priced for {}", plan.name, plan.price)
}

/// Chat link carrying the plan inquiry message.
#[must_use]
pub fn plan_inquiry_link(plan: &Plan) -> String {
    message_link(&plan_inquiry_message(plan))
}

/// Chat link with an arbitrary prefilled message.
#[must_use]
pub fn message_link(text: &str) -> String {
    format!("{}?text={}", join_link(), urlencoding::encode(text))
}

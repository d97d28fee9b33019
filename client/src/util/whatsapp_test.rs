use super::*;
use crate::content::pricing::PLANS;

#[test]
fn join_link_points_at_configured_number() {
    assert_eq!(join_link(), "https://wa.me/+917479109758");
}

#[test]
fn plan_inquiry_message_names_plan_and_price() {
    let pro = PLANS.iter().find(|p| p.name == "Pro").unwrap();
    assert_eq!(plan_inquiry_message(pro), "Hello I want to contact you for Pro Plan priced for 1499");
}

#[test]
fn plan_inquiry_link_percent_encodes_text() {
    let basic = PLANS.iter().find(|p| p.name == "Basic").unwrap();
    assert_eq!(
        plan_inquiry_link(basic),
        "https://wa.me/+917479109758?text=Hello%20I%20want%20to%20contact%20you%20for%20Basic%20Plan%20priced%20for%20999"
    );
}

#[test]
fn message_link_escapes_reserved_characters() {
    let link = message_link("a&b=c?");
    assert!(link.ends_with("?text=a%26b%3Dc%3F"), "{link}");
}

#[test]
fn every_plan_link_is_space_free() {
    for plan in PLANS {
        let link = plan_inquiry_link(plan);
        assert!(!link.contains(' '), "{link}");
        assert!(link.contains(plan.name));
    }
}

//! Email shape check for form input.
//!
//! This is a structural check (one `@`, dotted domain, no whitespace), not
//! deliverability. It rejects the obvious typos a visitor makes before a
//! submission ever leaves the page.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

/// Returns `true` when `raw` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    valid_local_part(local) && valid_domain(domain)
}

fn valid_local_part(local: &str) -> bool {
    !local.is_empty() && !local.starts_with('.') && !local.ends_with('.') && !local.contains("..")
}

fn valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    }) && labels.last().is_some_and(|tld| tld.chars().count() >= 2)
}

// src/scrape/dashboard.rs

// Secondary path: pull the trainer name out of a dashboard page via its
// public-profile link. The per-profile fetch never needs this; the username
// there comes from config.

use crate::config::consts::TRAINERS_PREFIX;
use crate::core::html;

/// First `/trainers/<name>` anchor on the page, if any.
pub fn extract_username(doc: &str) -> Option<String> {
    html::attr_values(doc, "href")
        .into_iter()
        .find_map(|v| v.strip_prefix(TRAINERS_PREFIX))
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_profile_link() {
        let doc = r#"
            <a href="/settings">Settings</a>
            <a class="link" href="/trainers/PeaceMonk">Public Profile</a>
            <a href="/trainers/SomeoneElse">Friend</a>
        "#;
        assert_eq!(extract_username(doc).as_deref(), Some("PeaceMonk"));
    }

    #[test]
    fn absent_or_empty_link_is_unknown() {
        assert_eq!(extract_username(r#"<a href="/about">About</a>"#), None);
        assert_eq!(extract_username(r#"<a href="/trainers/">broken</a>"#), None);
        assert_eq!(extract_username(""), None);
    }
}

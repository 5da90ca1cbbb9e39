use std::sync::LazyLock;

use regex::Regex;

// Steam wraps the tag in doubled single quotes: Name Tag: ''my gun''
static NAME_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Name Tag:\s*''(.*)''\s*$").unwrap());

/// Pulls the custom name out of a fraud warning, `None` for any other warning.
pub fn parse_name_tag(fraud_warning: &str) -> Option<String> {
    NAME_TAG.captures(fraud_warning.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_tags() {
        assert_eq!(parse_name_tag("Name Tag: ''Big Iron''"), Some("Big Iron".to_string()));
        assert_eq!(parse_name_tag("Name Tag: ''it's fine''"), Some("it's fine".to_string()));
        assert_eq!(parse_name_tag("This item has been recently traded"), None);
    }
}

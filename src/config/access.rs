//! Flight creation permissions

use serde::Deserialize;

/// Who may open flights.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessConfig {
    /// Comma-separated actor ids. Empty means everyone.
    #[serde(default)]
    pub allowed_creators: Option<String>,
}

impl AccessConfig {
    /// Allowed creator ids, trimmed, blanks dropped.
    pub fn allowed_creators_list(&self) -> Vec<String> {
        self.allowed_creators
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_list() {
        let config = AccessConfig {
            allowed_creators: Some("alice, bob,,carol ".to_string()),
        };
        assert_eq!(config.allowed_creators_list(), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn unset_means_empty() {
        assert!(AccessConfig::default().allowed_creators_list().is_empty());
    }
}

//! Header keyword rules
//!
//! Notion writes page properties as `Keyword: value` lines under the title,
//! and the keywords follow the exporting account's locale. Each rule maps a
//! keyword to what the header stripper does with its line.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// What to do with a header line that starts with a known keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAction {
    /// Remove the whole line
    Drop,
    /// Replace the line with a front-matter tag block
    Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRule {
    pub keyword: String,
    pub action: HeaderAction,
}

impl HeaderRule {
    pub fn new(keyword: impl Into<String>, action: HeaderAction) -> Self {
        Self {
            keyword: keyword.into(),
            action,
        }
    }
}

/// Ordered set of header rules, applied top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRules {
    #[serde(rename = "rule", default)]
    pub rules: Vec<HeaderRule>,
}

impl Default for HeaderRules {
    /// Italian Notion export: "Verificato", "Proprietario", "Etichette"
    fn default() -> Self {
        Self {
            rules: vec![
                HeaderRule::new("Verificato", HeaderAction::Drop),
                HeaderRule::new("Proprietario", HeaderAction::Drop),
                HeaderRule::new("Etichette", HeaderAction::Tags),
            ],
        }
    }
}

impl HeaderRules {
    /// Parse rules from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load rules from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConvertError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_toml(&content)?;
        log::debug!("Loaded {} header rules from {:?}", rules.rules.len(), path);
        Ok(rules)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderRule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_italian() {
        let rules = HeaderRules::default();
        let keywords: Vec<&str> = rules.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["Verificato", "Proprietario", "Etichette"]);
        assert_eq!(rules.rules[2].action, HeaderAction::Tags);
    }

    #[test]
    fn test_from_toml() {
        let content = r#"
[[rule]]
keyword = "Verified"
action = "drop"

[[rule]]
keyword = "Tags"
action = "tags"
"#;
        let rules = HeaderRules::from_toml(content).unwrap();
        assert_eq!(
            rules.rules,
            vec![
                HeaderRule::new("Verified", HeaderAction::Drop),
                HeaderRule::new("Tags", HeaderAction::Tags),
            ]
        );
    }

    #[test]
    fn test_english_demo_preset_parses() {
        let rules = HeaderRules::from_toml(include_str!("../demos/english.toml")).unwrap();
        assert!(rules
            .iter()
            .any(|r| r.keyword == "Tags" && r.action == HeaderAction::Tags));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let content = "[[rule]]\nkeyword = \"Owner\"\naction = \"hide\"\n";
        assert!(matches!(
            HeaderRules::from_toml(content),
            Err(ConvertError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = HeaderRules::load(Path::new("/nonexistent/keywords.toml")).unwrap_err();
        match err {
            ConvertError::File { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/keywords.toml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

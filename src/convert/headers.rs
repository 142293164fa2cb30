use regex::{Captures, Regex};

use super::tags::format_tags;
use crate::error::{ConvertError, Result};
use crate::keywords::{HeaderAction, HeaderRules};

/// Removes the Notion page preamble and property lines
pub struct HeaderStripper {
    rules: Vec<(Regex, HeaderAction)>,
    leading_blank: Regex,
}

impl HeaderStripper {
    pub fn new(rules: &HeaderRules) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| -> Result<(Regex, HeaderAction)> {
                let keyword = regex::escape(&rule.keyword);
                let pattern = match rule.action {
                    HeaderAction::Drop => format!(r"(?m)^{}:.*\n?", keyword),
                    HeaderAction::Tags => format!(r"(?m)^{}: (.*)", keyword),
                };
                Ok((Regex::new(&pattern)?, rule.action))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            leading_blank: Regex::new(r"^\s*\n")?,
        })
    }

    /// Strip the title and separator lines, then apply the keyword rules
    pub fn apply(&self, text: &str) -> Result<String> {
        let mut parts = text.splitn(3, '\n');
        let (Some(_title), Some(_separator), Some(body)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ConvertError::DocumentTooShort {
                lines: text.split('\n').count(),
            });
        };

        let mut content = body.to_string();
        for (re, action) in &self.rules {
            content = match action {
                HeaderAction::Drop => re.replace_all(&content, "").into_owned(),
                HeaderAction::Tags => re
                    .replace_all(&content, |caps: &Captures| format_tags(&caps[1]))
                    .into_owned(),
            };
        }

        Ok(self.leading_blank.replace(&content, "").into_owned())
    }
}

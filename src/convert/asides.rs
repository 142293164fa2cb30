use regex::{Captures, Regex};

use crate::error::Result;

/// Turns Notion `<aside>` callouts into block quotes
pub struct AsideConverter {
    aside_re: Regex,
}

impl AsideConverter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            aside_re: Regex::new(r"(?s)<aside>(.*?)</aside>")?,
        })
    }

    pub fn apply(&self, text: &str) -> String {
        self.aside_re
            .replace_all(text, |caps: &Captures| quote_lines(&caps[1]))
            .into_owned()
    }
}

/// Prefix every line with "> "
/// "\nline one\nline two\n" -> "> line one\n> line two\n"
fn quote_lines(inner: &str) -> String {
    let inner = inner.strip_prefix('\n').unwrap_or(inner);
    inner
        .split_inclusive('\n')
        .map(|line| format!("> {}", line))
        .collect()
}

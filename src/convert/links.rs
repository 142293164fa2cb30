use regex::{Captures, Regex};

use crate::error::Result;

/// Converts Notion markdown links into external links or wiki-links.
///
/// Image embeds share the `[text](url)` shape, so this must run after
/// [`super::images::ImageRewriter`]. Embeds and wiki-links it produced are
/// matched first and passed through unchanged.
pub struct LinkRewriter {
    link_re: Regex,
    bold_re: Regex,
}

impl LinkRewriter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            link_re: Regex::new(r#"(!?\[\[[^\]\n]*\]\])|\[(.*?)\]\((.*?)\s?(?:"(.*?)")?\)"#)?,
            bold_re: Regex::new(r"\*\*(.*?)\*\*")?,
        })
    }

    pub fn apply(&self, text: &str) -> String {
        self.link_re
            .replace_all(text, |caps: &Captures| match caps.get(1) {
                Some(wikilink) => wikilink.as_str().to_string(),
                None => self.rewrite_link(&caps[2], &caps[3]),
            })
            .into_owned()
    }

    /// "[http://x.com](http://x.com/a "T")" -> "[http://x.com](http://x.com/a)"
    /// "[**My Page**](My%20Page%20abc.md)" -> "[[My Page]]"
    fn rewrite_link(&self, text: &str, url: &str) -> String {
        if text.starts_with("http") {
            return format!("[{}]({})", text, url);
        }
        // Notion exports link internal pages by their title
        let title = self.bold_re.replace_all(text, "$1");
        format!("[[{}]]", title)
    }
}

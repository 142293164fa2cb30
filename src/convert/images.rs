use regex::{Captures, Regex};

use crate::error::Result;

/// Folder inside the vault that receives every attachment
pub const IMAGE_DIR: &str = "img";

/// Rewrites `![alt](url "title")` into an Obsidian embed `![[img/url]]`
pub struct ImageRewriter {
    image_re: Regex,
}

impl ImageRewriter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            image_re: Regex::new(r#"!\[(.*?)\]\((.*?)\s?(?:"(.*?)")?\)"#)?,
        })
    }

    pub fn apply(&self, text: &str) -> String {
        self.image_re
            .replace_all(text, |caps: &Captures| {
                format!("![[{}/{}]]", IMAGE_DIR, decode_url(&caps[2]))
            })
            .into_owned()
    }
}

/// Percent-decode a link target, replacing invalid UTF-8 with U+FFFD
/// "My%20Image.png" -> "My Image.png"
fn decode_url(url: &str) -> String {
    let bytes = urlencoding::decode_binary(url.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(text: &str) -> String {
        ImageRewriter::new().unwrap().apply(text)
    }

    #[test]
    fn test_decodes_and_prefixes() {
        assert_eq!(rewrite("![alt](My%20Image.png)"), "![[img/My Image.png]]");
    }

    #[test]
    fn test_drops_title_and_alt() {
        assert_eq!(
            rewrite(r#"See ![A diagram](Page/diagram.png "Architecture") here"#),
            "See ![[img/Page/diagram.png]] here"
        );
    }

    #[test]
    fn test_remote_urls_are_rewritten_too() {
        assert_eq!(
            rewrite("![](https://example.com/a.png)"),
            "![[img/https://example.com/a.png]]"
        );
    }

    #[test]
    fn test_plain_links_are_untouched() {
        let text = "A [link](Other%20Page.md) and no images.";
        assert_eq!(rewrite(text), text);
    }

    #[test]
    fn test_rerun_on_embed_does_not_double_wrap() {
        let once = rewrite("![x](a%20b.png)\n");
        assert_eq!(once, "![[img/a b.png]]\n");
        assert_eq!(rewrite(&once), once);
    }

    #[test]
    fn test_invalid_utf8_escape_is_replaced() {
        assert_eq!(rewrite("![](bad%FF.png)"), "![[img/bad\u{FFFD}.png]]");
    }
}

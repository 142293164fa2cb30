use super::asides::AsideConverter;
use super::headers::HeaderStripper;
use super::images::ImageRewriter;
use super::links::LinkRewriter;
use crate::error::Result;
use crate::keywords::HeaderRules;

/// A single rewrite step of the document pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Drop the preamble and property lines, emit tag front matter
    Headers,
    /// `![alt](url)` -> `![[img/url]]`
    Images,
    /// `[text](url)` -> `[[text]]` or `[text](url)`
    Links,
    /// `<aside>...</aside>` -> `> ...`
    Asides,
}

/// Order in which stages run.
///
/// `Images` must precede `Links`: the link pattern also matches the
/// `[alt](url)` part of an image embed.
pub const PIPELINE: [Stage; 4] = [Stage::Headers, Stage::Images, Stage::Links, Stage::Asides];

/// Converts one Notion markdown document into Obsidian markdown
pub struct Transformer {
    headers: HeaderStripper,
    images: ImageRewriter,
    links: LinkRewriter,
    asides: AsideConverter,
}

impl Transformer {
    pub fn new(rules: &HeaderRules) -> Result<Self> {
        Ok(Self {
            headers: HeaderStripper::new(rules)?,
            images: ImageRewriter::new()?,
            links: LinkRewriter::new()?,
            asides: AsideConverter::new()?,
        })
    }

    /// Run a single stage
    pub fn apply(&self, stage: Stage, text: &str) -> Result<String> {
        Ok(match stage {
            Stage::Headers => self.headers.apply(text)?,
            Stage::Images => self.images.apply(text),
            Stage::Links => self.links.apply(text),
            Stage::Asides => self.asides.apply(text),
        })
    }

    /// Run every stage of [`PIPELINE`] in order
    pub fn transform(&self, text: &str) -> Result<String> {
        PIPELINE
            .iter()
            .try_fold(text.to_string(), |content, stage| self.apply(*stage, &content))
    }
}

/// Transform a document with the default (Italian) header rules
pub fn transform(text: &str) -> Result<String> {
    Transformer::new(&HeaderRules::default())?.transform(text)
}

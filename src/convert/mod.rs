//! Notion to Obsidian document conversion
//!
//! Each stage is a pure text rewrite; [`Transformer`] runs them in the
//! order given by [`PIPELINE`]:
//! - Header stripping (title, property lines, labels to tag front matter)
//! - Image embeds to `![[img/...]]`
//! - Links to wiki-links or plain external links
//! - `<aside>` callouts to block quotes

mod asides;
mod headers;
mod images;
mod links;
mod pipeline;
mod tags;

pub use asides::AsideConverter;
pub use headers::HeaderStripper;
pub use images::{ImageRewriter, IMAGE_DIR};
pub use links::LinkRewriter;
pub use pipeline::{transform, Stage, Transformer, PIPELINE};
pub use tags::format_tags;

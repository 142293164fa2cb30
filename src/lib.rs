//! Notion export to Obsidian vault conversion.
//!
//! The [`convert`] module rewrites a single document; [`export`] walks an
//! export directory, writes converted pages and forwards attachments.

pub mod convert;
pub mod error;
pub mod export;
pub mod keywords;

pub use convert::{transform, Transformer};
pub use error::{ConvertError, Result};
pub use export::{convert_export, remove_hex_from_filename, ExportSummary, ExportedFile, ExportedKind};
pub use keywords::{HeaderAction, HeaderRule, HeaderRules};

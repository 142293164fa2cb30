//! Vault export
//!
//! Walks a Notion export folder, writes converted pages under their cleaned
//! names and copies attachments into the vault image folder.

mod walk;

pub use walk::*;

//! Notion export directory walker
//!
//! Converts every markdown page into the vault root and forwards all other
//! files into the vault's image folder.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::convert::{Transformer, IMAGE_DIR};
use crate::error::{ConvertError, Result};

/// Kind of file handled by the walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportedKind {
    /// Markdown page, converted and written to the vault root
    Page,
    /// Attachment, copied verbatim into the image folder
    Asset,
}

/// Progress record for one processed file
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub kind: ExportedKind,
    /// File name as written in the vault
    pub name: String,
    pub target: PathBuf,
}

/// Counts for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages_written: usize,
    pub assets_copied: usize,
}

/// Remove the Notion ID (space + 32 hex chars) from a filename
/// "Note 0123456789abcdef0123456789abcdef.md" -> "Note.md"
pub fn remove_hex_from_filename(filename: &str) -> String {
    notion_id_regex().replace_all(filename, "").into_owned()
}

fn notion_id_regex() -> &'static Regex {
    static NOTION_ID: OnceLock<Regex> = OnceLock::new();
    NOTION_ID.get_or_init(|| Regex::new(r"\s[0-9a-f]{32}").unwrap())
}

fn is_page(filename: &str) -> bool {
    filename.ends_with(".md")
}

/// Convert a Notion export tree into an Obsidian vault.
///
/// `destination` must already exist; `destination/img` is created on the
/// first attachment. `progress` is called once per file, right after it has
/// been written. The first I/O or conversion failure aborts the run; files
/// written before it are kept.
pub fn convert_export<F>(
    source: &Path,
    destination: &Path,
    transformer: &Transformer,
    mut progress: F,
) -> Result<ExportSummary>
where
    F: FnMut(&ExportedFile),
{
    let mut summary = ExportSummary::default();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let filename = entry.file_name().to_string_lossy().to_string();

        let exported = if is_page(&filename) {
            let name = remove_hex_from_filename(&filename);
            let target = destination.join(&name);
            write_page(path, &target, transformer)?;
            summary.pages_written += 1;
            ExportedFile {
                kind: ExportedKind::Page,
                name,
                target,
            }
        } else {
            let target = copy_asset(path, &destination.join(IMAGE_DIR), &filename)?;
            summary.assets_copied += 1;
            ExportedFile {
                kind: ExportedKind::Asset,
                name: filename,
                target,
            }
        };

        progress(&exported);
    }

    log::info!(
        "Converted {:?}: {} pages written, {} assets copied",
        source,
        summary.pages_written,
        summary.assets_copied
    );

    Ok(summary)
}

fn write_page(source: &Path, target: &Path, transformer: &Transformer) -> Result<()> {
    log::debug!("Converting {:?} -> {:?}", source, target);

    let bytes = fs::read(source).map_err(|e| file_error(source, e))?;
    let content = String::from_utf8(bytes).unwrap_or_else(|e| {
        log::warn!("{:?} is not valid UTF-8, decoding lossily", source);
        String::from_utf8_lossy(e.as_bytes()).to_string()
    });
    let content = content.replace("\r\n", "\n");

    let converted = transformer
        .transform(&content)
        .map_err(|e| ConvertError::Page {
            path: source.to_path_buf(),
            source: Box::new(e),
        })?;

    fs::write(target, converted).map_err(|e| file_error(target, e))
}

fn copy_asset(source: &Path, image_dir: &Path, filename: &str) -> Result<PathBuf> {
    fs::create_dir_all(image_dir).map_err(|e| file_error(image_dir, e))?;
    let target = image_dir.join(filename);
    fs::copy(source, &target).map_err(|e| file_error(source, e))?;
    Ok(target)
}

fn file_error(path: &Path, source: std::io::Error) -> ConvertError {
    ConvertError::File {
        path: path.to_path_buf(),
        source,
    }
}

//! Discovery and publishing pipeline.
//!
//! Walks a directory tree for record files, renders every record of a directory
//! into one Markdown document and writes it next to the sources (by default
//! `README.md`). Records that fail to parse are logged and skipped; the rest of
//! the batch carries on.
//!
//! For single documents, use [`convert_file`] or
//! [`render_document`](crate::sections::render_document) directly.

use crate::error::ConvertError;
use crate::markup::load_markup;
use crate::sections::{render_document, RenderOptions};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Where records are found and where output goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishOptions {
    /// Extension of record files, without the leading dot
    pub extension: String,

    /// Name of the Markdown file written in each directory
    pub file_name: String,

    /// Line placed between consecutive records of a directory
    pub separator: String,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            extension: "xml".to_string(),
            file_name: "README.md".to_string(),
            separator: "---".to_string(),
        }
    }
}

/// Record files sharing a directory, sorted by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentGroup {
    pub directory: PathBuf,
    pub sources: Vec<PathBuf>,
}

/// Outcome of publishing one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub directory: PathBuf,
    /// Written file, or `None` when no record converted
    pub output: Option<PathBuf>,
    pub converted: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl PublishReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Load and render a single record file.
pub fn convert_file(path: &Path, options: &RenderOptions) -> Result<String, ConvertError> {
    let root = load_markup(path)?;
    render_document(&root, options)
}

/// Find every record file below `root`, grouped by directory.
///
/// Groups come back sorted by directory, sources sorted within each group, so
/// repeated runs produce identical output.
pub fn discover(root: &Path, options: &PublishOptions) -> Result<Vec<DocumentGroup>, ConvertError> {
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{escaped_root}/**/*.{}", options.extension);

    let entries = glob::glob(&pattern).map_err(|e| ConvertError::Pattern(e.to_string()))?;

    let mut groups: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => {
                let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
                groups.entry(directory).or_default().push(path);
            }
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable entry: {e}"),
        }
    }

    Ok(groups
        .into_iter()
        .map(|(directory, mut sources)| {
            sources.sort();
            DocumentGroup { directory, sources }
        })
        .collect())
}

/// Render every record of a group into one document.
///
/// Returns the document (empty if nothing converted) with the converted and
/// failed sources.
pub fn render_group(
    group: &DocumentGroup,
    render: &RenderOptions,
    options: &PublishOptions,
) -> (String, Vec<PathBuf>, Vec<PathBuf>) {
    let mut document = String::new();
    let mut converted = Vec::new();
    let mut failed = Vec::new();

    for source in &group.sources {
        info!("Processing file: {}", source.display());
        match convert_file(source, render) {
            Ok(markdown) => {
                document.push_str(markdown.trim_end());
                document.push_str(&format!("\n\n{}\n\n", options.separator));
                converted.push(source.clone());
            }
            Err(e) => {
                error!("{e}");
                failed.push(source.clone());
            }
        }
    }

    (document, converted, failed)
}

/// Render a group and write its document into the group's directory.
pub fn publish_group(
    group: &DocumentGroup,
    render: &RenderOptions,
    options: &PublishOptions,
) -> Result<PublishReport, ConvertError> {
    let (document, converted, failed) = render_group(group, render, options);

    let output = if document.is_empty() {
        None
    } else {
        let path = group.directory.join(&options.file_name);
        fs::write(&path, document).map_err(|e| ConvertError::io(&path, e))?;
        Some(path)
    };

    Ok(PublishReport {
        directory: group.directory.clone(),
        output,
        converted,
        failed,
    })
}

/// Discover and publish every directory below `root`.
///
/// A directory whose output cannot be written is logged and reported with all
/// of its sources failed; the other directories are still published.
pub fn publish_tree(
    root: &Path,
    render: &RenderOptions,
    options: &PublishOptions,
) -> Result<Vec<PublishReport>, ConvertError> {
    let groups = discover(root, options)?;
    if groups.is_empty() {
        warn!(
            "No .{} files found below {}",
            options.extension,
            root.display()
        );
    }

    let mut reports = Vec::with_capacity(groups.len());
    for group in &groups {
        match publish_group(group, render, options) {
            Ok(report) => {
                if let Some(output) = &report.output {
                    let shown = pathdiff::diff_paths(output, root).unwrap_or_else(|| output.clone());
                    info!(
                        "Generated {} from {} file(s)",
                        shown.display(),
                        report.converted.len()
                    );
                }
                reports.push(report);
            }
            Err(e) => {
                error!("{e}");
                reports.push(PublishReport {
                    directory: group.directory.clone(),
                    output: None,
                    converted: Vec::new(),
                    failed: group.sources.clone(),
                });
            }
        }
    }
    Ok(reports)
}

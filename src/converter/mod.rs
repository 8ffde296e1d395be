//! Boundary Converter Module
//!
//! The offline pipeline that turns the five OCHA boundary files into the
//! flattened documents served by the HTTP stage.
//!
//! ## Workflow
//! 1. **Fan-out**: One task per administrative level reads and parses its
//!    source file; the five parses run concurrently.
//! 2. **Join**: The orchestrator waits for all five parse results before any
//!    conversion starts. A failed parse is collected, not swallowed, and does
//!    not block the other files from finishing.
//! 3. **Convert**: Each parsed collection is flattened independently and
//!    written to its output path. Failure in one level leaves the others
//!    untouched.
//! 4. **Report**: The first collected failure is returned to the caller so
//!    the process can exit non-zero.
//!
//! ## Submodules
//! - **`convert`**: The generic feature-flattening and document-writing logic.
//! - **`types`**: GeoJSON input structures, the output record, and the
//!   administrative level table.

pub mod convert;
pub mod types;


use anyhow::Result;
use std::path::{Path, PathBuf};
use types::{AdminLevel, FeatureCollection};

/// Filesystem layout for a conversion run.
///
/// Both directories are supplied by the caller at construction time; no
/// paths are hard-wired beyond the per-level filenames.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory holding the five OCHA source files.
    pub data_dir: PathBuf,
    /// Directory the generated documents are written to.
    pub out_dir: PathBuf,
}

impl ConvertConfig {
    pub fn new(data_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            out_dir: out_dir.into(),
        }
    }

    /// Source file path for a level.
    pub fn input_path(&self, level: AdminLevel) -> PathBuf {
        self.data_dir.join(level.input_filename())
    }

    /// Generated document path for a level.
    pub fn output_path(&self, level: AdminLevel) -> PathBuf {
        self.out_dir.join(level.output_filename())
    }
}

/// Reads and parses one feature collection from disk.
///
/// An unreadable file or malformed JSON aborts this file's pipeline with an
/// error naming the path; no partial result is produced.
pub async fn parse_collection(path: &Path) -> Result<FeatureCollection> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;

    let collection: FeatureCollection = serde_json::from_slice(&data)
        .map_err(|e| anyhow::anyhow!("invalid feature collection {}: {}", path.display(), e))?;

    Ok(collection)
}

/// Converts one parsed collection and writes its output document.
///
/// Returns the number of records written.
pub async fn convert_level(
    config: &ConvertConfig,
    level: AdminLevel,
    collection: &FeatureCollection,
) -> Result<usize> {
    let bytes = convert::build_document(level, collection)?;
    convert::write_document(&config.output_path(level), &bytes).await?;

    let count = match level {
        AdminLevel::Country => 1,
        _ => collection.features.len(),
    };
    Ok(count)
}

/// Runs the full conversion pipeline.
///
/// Spawns one parse task per level, joins all five, then converts each
/// successfully parsed collection. Failures are logged as they are collected
/// and the first one is propagated after every level has had its chance to
/// finish.
pub async fn run(config: &ConvertConfig) -> Result<()> {
    tokio::fs::create_dir_all(&config.out_dir)
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "failed to create output directory {}: {}",
                config.out_dir.display(),
                e
            )
        })?;

    let mut handles = Vec::new();
    for level in AdminLevel::ALL {
        let path = config.input_path(level);
        handles.push((
            level,
            tokio::spawn(async move { parse_collection(&path).await }),
        ));
    }

    let mut parsed = Vec::new();
    let mut first_error: Option<anyhow::Error> = None;

    for (level, handle) in handles {
        match handle.await {
            Ok(Ok(collection)) => {
                tracing::info!(
                    "{} file parsed ({} features)",
                    config.input_path(level).display(),
                    collection.features.len()
                );
                parsed.push((level, collection));
            }
            Ok(Err(e)) => {
                tracing::error!("failed to parse {} input: {}", level.label(), e);
                first_error.get_or_insert(e);
            }
            Err(e) => {
                tracing::error!("parse task for {} aborted: {}", level.label(), e);
                first_error.get_or_insert(anyhow::anyhow!(
                    "parse task for {} aborted: {}",
                    level.label(),
                    e
                ));
            }
        }
    }

    // All five parses have completed; convert whatever succeeded.
    for (level, collection) in &parsed {
        match convert_level(config, *level, collection).await {
            Ok(count) => {
                tracing::info!(
                    "wrote {} {} record(s) to {}",
                    count,
                    level.label(),
                    config.output_path(*level).display()
                );
            }
            Err(e) => {
                tracing::error!("failed to convert {}: {}", level.label(), e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

//! High-level, ergonomic library API: transform a parsed NITF structure (or
//! its structural dump) into a [`Metacard`], plus a batch helper for
//! directories. Prefer these entrypoints over the low-level `core` modules.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::attributes::{FlatAttributeSet, project_attributes};
use crate::core::document::build_metadata_xml;
use crate::core::footprint::location_wkt;
use crate::core::params::TransformerConfig;
use crate::error::{Error, Result};
use crate::io::reader::{is_dump_path, read_dump, read_dump_bytes};
use crate::io::writers::metadata::write_output;
use crate::model::NitfFile;
use crate::types::OutputFormat;

/// Catalog record for one NITF product
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metacard {
    pub id: Option<String>,
    pub title: String,
    /// WKT footprint; absent when no image segment has usable corners
    pub location: Option<String>,
    /// The `<metadata>` XML document
    pub metadata: String,
    pub content_type: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub effective: DateTime<Utc>,
    pub attributes: FlatAttributeSet,
}

/// Converts parsed NITF structures into metacards.
#[derive(Debug, Clone, Default)]
pub struct NitfTransformer {
    config: TransformerConfig,
}

impl NitfTransformer {
    pub fn new(config: TransformerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformerConfig {
        &self.config
    }

    /// Transform a parsed file. Dates fall back to the current time when the
    /// file carries no date-time.
    pub fn transform(&self, file: &NitfFile, id: Option<&str>) -> Result<Metacard> {
        self.transform_at(file, id, Utc::now())
    }

    /// As [`transform`](Self::transform), with an explicit processing time.
    pub fn transform_at(
        &self,
        file: &NitfFile,
        id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Metacard> {
        info!("NITF transform (id: {:?})", id);

        let location = location_wkt(file, self.config.footprint_policy)?;
        let metadata = build_metadata_xml(file);
        let attributes = project_attributes(file, now);
        let date = file.file_date_time.unwrap_or(now);

        Ok(Metacard {
            id: id.map(str::to_string),
            title: file.file_title.clone(),
            location,
            metadata,
            content_type: self.config.content_type.clone(),
            created: date,
            modified: date,
            effective: date,
            attributes,
        })
    }

    /// Transform a structural dump held in memory.
    ///
    /// Empty (or whitespace-only) input is [`Error::EmptyInput`].
    pub fn transform_bytes(&self, bytes: &[u8], id: Option<&str>) -> Result<Metacard> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::EmptyInput);
        }
        let file = read_dump_bytes(bytes)?;
        self.transform(&file, id)
    }

    /// Transform a structural dump file.
    pub fn transform_path(&self, path: &Path, id: Option<&str>) -> Result<Metacard> {
        let file = read_dump(path)?;
        self.transform(&file, id)
    }
}

/// Summary report for batch processing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Transform every `*.json` dump under `input_dir`, writing one output per
/// dump into `output_dir`. Each metacard id is the dump's file stem.
/// Metacards are written as `<stem>.metacard.json`, so `output_dir` may be
/// `input_dir`.
pub fn process_directory_to_path(
    transformer: &NitfTransformer,
    input_dir: &Path,
    output_dir: &Path,
    format: OutputFormat,
    continue_on_error: bool,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;

    let dumps = iterate_dumps(input_dir)?;
    let mut report = BatchReport {
        skipped: count_non_dumps(input_dir)?,
        ..Default::default()
    };
    for path in dumps {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            report.skipped += 1;
            continue;
        };
        let output = output_dir.join(format!("{}.{}", stem, format.extension()));
        info!("Processing: {:?} -> {:?}", path, output);

        let result = transformer
            .transform_path(&path, Some(stem))
            .and_then(|metacard| write_output(&output, &metacard, format));
        match result {
            Ok(()) => report.processed += 1,
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", path, e);
            }
        }
    }

    Ok(report)
}

/// Dump files directly under `input_dir`, sorted by path.
pub fn iterate_dumps(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dumps = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if is_dump_path(&path) {
            dumps.push(path);
        }
    }
    dumps.sort();
    Ok(dumps)
}

fn count_non_dumps(input_dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(input_dir)? {
        if !is_dump_path(&entry?.path()) {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_a_caller_error() {
        let transformer = NitfTransformer::default();
        assert!(matches!(transformer.transform_bytes(b"", None), Err(Error::EmptyInput)));
        assert!(matches!(transformer.transform_bytes(b" \n", None), Err(Error::EmptyInput)));
    }

    #[test]
    fn bad_input_is_a_dump_error() {
        let transformer = NitfTransformer::default();
        assert!(matches!(
            transformer.transform_bytes(b"{key=", None),
            Err(Error::Dump(_))
        ));
    }

    #[test]
    fn id_and_content_type_are_stamped() {
        let transformer = NitfTransformer::default();
        let file = NitfFile {
            file_title: "T".to_string(),
            ..Default::default()
        };
        let card = transformer.transform(&file, Some("abc")).unwrap();
        assert_eq!(card.id.as_deref(), Some("abc"));
        assert_eq!(card.content_type, "image/nitf");
        assert_eq!(card.title, "T");
        assert!(card.location.is_none());
        assert_eq!(card.created, card.modified);
    }
}

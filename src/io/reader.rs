//! Reader for structural dumps: the JSON form of a parsed NITF file as
//! emitted by the upstream parser.
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::model::NitfFile;

/// Errors encountered when reading a structural dump
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Not a structural dump file: {0}")]
    NotADump(String),
}

/// Decode a dump held in memory.
pub fn read_dump_bytes(bytes: &[u8]) -> Result<NitfFile, DumpError> {
    let file: NitfFile = serde_json::from_slice(bytes)?;
    debug!(
        "Decoded dump: {} image, {} graphic, {} symbol, {} label, {} text segments",
        file.image_segments.len(),
        file.graphic_segments.len(),
        file.symbol_segments.len(),
        file.label_segments.len(),
        file.text_segments.len()
    );
    Ok(file)
}

/// Open and decode a dump file.
pub fn read_dump<P: AsRef<Path>>(path: P) -> Result<NitfFile, DumpError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DumpError::NotADump(path.display().to_string()));
    }
    info!("Reading structural dump {:?}", path);
    let bytes = fs::read(path)?;
    read_dump_bytes(&bytes)
}

/// Whether `path` looks like a dump: a `.json` file that is not a
/// `.metacard.json` output.
pub fn is_dump_path(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    path.is_file() && name.ends_with(".json") && !name.ends_with(".metacard.json")
}

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::api::Metacard;
use crate::error::Result;
use crate::types::OutputFormat;

/// Flatten a metacard into string key/value pairs, the shape catalog
/// sidecars and log lines use.
pub fn extract_metadata_fields(metacard: &Metacard) -> Result<BTreeMap<String, String>> {
    let mut fields = BTreeMap::new();
    if let Some(id) = &metacard.id {
        fields.insert("id".to_string(), id.clone());
    }
    if let Some(location) = &metacard.location {
        fields.insert("location".to_string(), location.clone());
    }
    fields.insert("metadata-content-type".to_string(), metacard.content_type.clone());

    let Value::Object(attributes) = serde_json::to_value(&metacard.attributes)? else {
        return Ok(fields);
    };
    for (key, value) in attributes {
        let text = match value {
            Value::String(s) => s,
            other => other.to_string(),
        };
        fields.insert(key, text);
    }
    Ok(fields)
}

/// Write the full metacard as pretty JSON to `output_path`.
pub fn write_metacard_json(output_path: &Path, metacard: &Metacard) -> Result<()> {
    let json_string = serde_json::to_string_pretty(metacard)?;
    fs::write(output_path, json_string)?;
    info!("Wrote metacard: {:?}", output_path);
    Ok(())
}

/// Write the full metacard as a `.json` sidecar next to `output_path`.
pub fn create_metacard_sidecar(output_path: &Path, metacard: &Metacard) -> Result<PathBuf> {
    let sidecar_path = output_path.with_extension("json");
    write_metacard_json(&sidecar_path, metacard)?;
    Ok(sidecar_path)
}

/// Write the `<metadata>` document as UTF-8.
pub fn write_metadata_xml(output_path: &Path, metacard: &Metacard) -> Result<()> {
    fs::write(output_path, metacard.metadata.as_bytes())?;
    info!("Wrote metadata XML: {:?}", output_path);
    Ok(())
}

/// Write the location WKT; nothing is written when there is no location.
pub fn write_location_wkt(output_path: &Path, metacard: &Metacard) -> Result<bool> {
    match &metacard.location {
        Some(wkt) => {
            fs::write(output_path, wkt.as_bytes())?;
            info!("Wrote location WKT: {:?}", output_path);
            Ok(true)
        }
        None => {
            info!("No location for {:?}, nothing written", output_path);
            Ok(false)
        }
    }
}

/// Generic writer dispatching on the requested format
pub fn write_output(output_path: &Path, metacard: &Metacard, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Metacard => write_metacard_json(output_path, metacard),
        OutputFormat::Xml => write_metadata_xml(output_path, metacard),
        OutputFormat::Wkt => write_location_wkt(output_path, metacard).map(|_| ()),
    }
}

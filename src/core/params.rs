use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::FootprintPolicy;

pub const NITF_MIME_TYPE: &str = "image/nitf";

/// Transformer settings suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformerConfig {
    pub footprint_policy: FootprintPolicy,
    /// Content type stamped on every metacard
    pub content_type: String,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            footprint_policy: FootprintPolicy::MultiPolygon,
            content_type: NITF_MIME_TYPE.to_string(),
        }
    }
}

impl TransformerConfig {
    /// Load from a JSON file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: TransformerConfig = serde_json::from_str(r#"{"footprintPolicy":"envelope"}"#).unwrap();
        assert_eq!(cfg.footprint_policy, FootprintPolicy::Envelope);
        assert_eq!(cfg.content_type, NITF_MIME_TYPE);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, r#"{"contentType":"image/ntf"}"#).unwrap();
        let cfg = TransformerConfig::load(&path).unwrap();
        assert_eq!(cfg.content_type, "image/ntf");
        assert_eq!(cfg.footprint_policy, FootprintPolicy::MultiPolygon);
    }
}

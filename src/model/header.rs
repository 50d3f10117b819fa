//! File header and the owning [`NitfFile`] structure.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::security::FileSecurityMetadata;
use super::segments::{GraphicSegment, ImageSegment, LabelSegment, SymbolSegment, TextSegment};
use super::tre::Tre;

/// Profile/version from `FHDR` + `FVER`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    Nitf20,
    #[default]
    Nitf21,
    Nsif10,
    Unknown,
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileType::Nitf20 => "NITF02.00",
            FileType::Nitf21 => "NITF02.10",
            FileType::Nsif10 => "NSIF01.00",
            FileType::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// 24-bit colour as used by `FBKGC` and label colours.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct RgbColour {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColour {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl std::fmt::Display for RgbColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[0x{:02x},0x{:02x},0x{:02x}]",
            self.red, self.green, self.blue
        )
    }
}

/// A parsed NITF file: header fields plus every segment in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NitfFile {
    pub file_type: FileType,
    /// `CLEVEL`, 1..99
    pub complexity_level: u8,
    /// `OSTAID`
    pub originating_station_id: String,
    pub file_date_time: Option<DateTime<Utc>>,
    pub file_title: String,
    pub security: FileSecurityMetadata,
    /// `FBKGC`, absent in NITF 2.0
    pub file_background_colour: Option<RgbColour>,
    pub originators_name: String,
    pub originators_phone_number: String,
    /// `FL`, total file length in bytes
    pub file_length: Option<u64>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub tres: Vec<Tre>,

    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub image_segments: Vec<ImageSegment>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub graphic_segments: Vec<GraphicSegment>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub symbol_segments: Vec<SymbolSegment>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub label_segments: Vec<LabelSegment>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub text_segments: Vec<TextSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_display() {
        assert_eq!(RgbColour::new(0, 0x7f, 0xff).to_string(), "[0x00,0x7f,0xff]");
    }

    #[test]
    fn missing_mandatory_field_is_named() {
        let json = r#"{
            "fileType": "NITF21",
            "complexityLevel": 3,
            "originatingStationId": "STN",
            "security": {"classification": "UNCLASSIFIED"},
            "originatorsName": "",
            "originatorsPhoneNumber": ""
        }"#;
        let err = serde_json::from_str::<NitfFile>(json).unwrap_err();
        assert!(err.to_string().contains("fileTitle"), "{err}");
    }

    #[test]
    fn segments_default_to_empty() {
        let json = r#"{
            "fileType": "NITF21",
            "complexityLevel": 3,
            "originatingStationId": "STN",
            "fileTitle": "TEST",
            "security": {"classification": "UNCLASSIFIED"},
            "originatorsName": "",
            "originatorsPhoneNumber": ""
        }"#;
        let file: NitfFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.file_title, "TEST");
        assert!(file.image_segments.is_empty());
        assert!(file.file_date_time.is_none());
    }

    #[test]
    fn null_collections_read_as_empty() {
        let json = r#"{
            "fileType": "NITF21",
            "complexityLevel": 3,
            "originatingStationId": "STN",
            "fileTitle": "TEST",
            "security": {"classification": "UNCLASSIFIED", "codewords": null},
            "originatorsName": "",
            "originatorsPhoneNumber": "",
            "tres": null,
            "imageSegments": null,
            "textSegments": null
        }"#;
        let file: NitfFile = serde_json::from_str(json).unwrap();
        assert!(file.tres.is_empty());
        assert!(file.image_segments.is_empty());
        assert!(file.text_segments.is_empty());
        assert_eq!(file.security.security.codewords, "");
    }
}

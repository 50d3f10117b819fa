//! Segment subheaders. Mandatory NITF fields are plain values; fields that may
//! be absent in a given file are `Option`.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coordinates::{ImageCoordinates, ImageCoordinatesRepresentation};
use super::header::RgbColour;
use super::security::SecurityMetadata;
use super::tre::Tre;

/// Image segment subheader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSegment {
    /// `IID1`
    pub identifier: String,
    pub image_date_time: Option<DateTime<Utc>>,
    /// `TGTID`
    pub target_id: Option<String>,
    /// `IID2`
    pub identifier2: Option<String>,
    pub security: SecurityMetadata,
    /// `ISORCE`
    pub image_source: String,
    pub number_of_rows: u32,
    pub number_of_columns: u32,
    pub pixel_value_type: String,
    pub image_representation: String,
    pub image_category: String,
    pub actual_bits_per_pixel_per_band: u8,
    pub pixel_justification: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub image_coordinates_representation: ImageCoordinatesRepresentation,
    pub image_coordinates: Option<ImageCoordinates>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub image_comments: Vec<String>,
    pub image_compression: String,
    /// `COMRAT`, only present for compressed images
    pub compression_rate: Option<String>,
    pub number_of_bands: u32,
    /// `XBANDS`, only present when `NBANDS` is zero
    pub number_of_multispectral_bands: Option<u32>,
    pub image_mode: String,
    pub number_of_blocks_per_row: u32,
    pub number_of_blocks_per_column: u32,
    pub number_of_pixels_per_block_horizontal: u32,
    pub number_of_pixels_per_block_vertical: u32,
    pub number_of_bits_per_pixel: u8,
    pub image_display_level: u32,
    pub image_attachment_level: u32,
    pub image_location_row: i32,
    pub image_location_column: i32,
    pub image_magnification: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub tres: Vec<Tre>,
}

/// Graphic segment subheader (CGM graphics)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicSegment {
    pub identifier: String,
    pub name: String,
    pub security: SecurityMetadata,
    pub display_level: u32,
    pub attachment_level: u32,
    pub location_row: i32,
    pub location_column: i32,
    pub bounding_rectangle1_row: i32,
    pub bounding_rectangle1_column: i32,
    /// `SCOLOR`: `C` (colour) or `M` (monochrome)
    pub colour: String,
    pub bounding_rectangle2_row: i32,
    pub bounding_rectangle2_column: i32,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub tres: Vec<Tre>,
}

/// Symbol segment subheader (NITF 2.0 only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSegment {
    pub identifier: String,
    pub name: String,
    pub security: SecurityMetadata,
    pub symbol_type: String,
    pub number_of_lines_per_symbol: u32,
    pub number_of_pixels_per_line: u32,
    pub line_width: u32,
    pub number_of_bits_per_pixel: u32,
    pub display_level: u32,
    pub attachment_level: u32,
    pub location_row: i32,
    pub location_column: i32,
    pub location2_row: Option<i32>,
    pub location2_column: Option<i32>,
    pub colour: Option<String>,
    pub symbol_number: Option<String>,
    pub symbol_rotation: Option<i32>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub tres: Vec<Tre>,
}

/// Label segment subheader (NITF 2.0 only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSegment {
    pub identifier: String,
    pub security: SecurityMetadata,
    pub location_row: i32,
    pub location_column: i32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub display_level: u32,
    pub attachment_level: u32,
    pub text_colour: RgbColour,
    pub background_colour: RgbColour,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub tres: Vec<Tre>,
}

/// Text segment subheader
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    pub identifier: String,
    pub attachment_level: u32,
    pub date_time: Option<DateTime<Utc>>,
    pub title: String,
    pub security: SecurityMetadata,
    /// `TXTFMT`: `STA`, `UT1`, `U8S` or `MTF`
    pub format: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub tres: Vec<Tre>,
}

//! Structural view of a parsed NITF file: file header, image/graphic/symbol/
//! label/text segments, security blocks, image corner coordinates and TRE trees.
//! Produced by an upstream NITF parser; this crate only reads it.
pub mod coordinates;
pub mod header;
pub mod security;
pub mod segments;
pub mod tre;

use serde::{Deserialize, Deserializer};

pub use coordinates::{ImageCoordinatePair, ImageCoordinates, ImageCoordinatesRepresentation};
pub use header::{FileType, NitfFile, RgbColour};
pub use security::{FileSecurityMetadata, SecurityClassification, SecurityMetadata};
pub use segments::{GraphicSegment, ImageSegment, LabelSegment, SymbolSegment, TextSegment};
pub use tre::{Tre, TreEntry, TreGroup};

/// Treat an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

//! Core derivations over a parsed NITF structure: footprint geometry, the
//! metadata XML document and the flat attribute projection. All of them are
//! pure functions of one [`crate::model::NitfFile`], consumed by the
//! high-level `api` module.
pub mod attributes;
pub mod document;
pub mod footprint;
pub mod params;
pub mod security;
pub mod tre;
pub mod wkt;
pub mod xml;

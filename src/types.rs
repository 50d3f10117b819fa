//! Shared enums used across the crate and its CLI.
//! Includes `FootprintPolicy` and the CLI `OutputFormat`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How footprints of files with two or more image segments are combined.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FootprintPolicy {
    /// One polygon member per eligible image segment.
    #[default]
    MultiPolygon,
    /// The bounding envelope of all eligible segments, as a single polygon.
    Envelope,
}

impl std::fmt::Display for FootprintPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FootprintPolicy::MultiPolygon => write!(f, "MultiPolygon"),
            FootprintPolicy::Envelope => write!(f, "Envelope"),
        }
    }
}

/// What the CLI writes for each transformed input.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Full metacard as JSON
    Metacard,
    /// Metadata XML document only
    Xml,
    /// Location WKT only
    Wkt,
}

impl OutputFormat {
    /// Batch output suffix. Metacards get a compound suffix so they are never
    /// mistaken for dumps.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Metacard => "metacard.json",
            OutputFormat::Xml => "xml",
            OutputFormat::Wkt => "wkt",
        }
    }
}

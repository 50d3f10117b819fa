//! Tagged Record Extension trees. Entries hold a scalar value, repeated
//! groups, or (tolerated) both; groups nest to any depth.
use serde::{Deserialize, Serialize};

/// A named TRE. Names are fixed-width in the file and may carry padding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tre {
    pub name: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub entries: Vec<TreEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreEntry {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub groups: Vec<TreGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreGroup {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub entries: Vec<TreEntry>,
}

impl Tre {
    pub fn new(name: impl Into<String>, entries: Vec<TreEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

impl TreEntry {
    /// Scalar entry.
    pub fn field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            groups: Vec::new(),
        }
    }

    /// Repeated-group entry.
    pub fn repeated(name: impl Into<String>, groups: Vec<TreGroup>) -> Self {
        Self {
            name: name.into(),
            value: None,
            groups,
        }
    }
}

impl TreGroup {
    pub fn new(entries: Vec<TreEntry>) -> Self {
        Self { entries }
    }
}

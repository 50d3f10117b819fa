//! Flat, typed catalog attributes projected from the header, the first image
//! segment and the file security block.
//!
//! Only the first image segment is projected; the XML document carries the
//! rest. The vocabulary and value types are fixed by [`NITF_ATTRIBUTES`].
use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::core::xml::format_date_time;
use crate::model::{ImageSegment, NitfFile, SecurityMetadata};

/// Attribute key names.
pub mod keys {
    pub const TITLE: &str = "title";
    pub const CREATED: &str = "created";
    pub const MODIFIED: &str = "modified";
    pub const EFFECTIVE: &str = "effective";

    pub const NITF_VERSION: &str = "version";
    pub const FILE_DATE_TIME: &str = "fileDateTime";
    pub const FILE_TITLE: &str = "fileTitle";
    /// File size in bytes
    pub const FILE_SIZE: &str = "fileSize";
    pub const COMPLEXITY_LEVEL: &str = "complexityLevel";
    pub const ORIGINATOR_NAME: &str = "originatorName";
    pub const ORIGINATING_STATION_ID: &str = "originatingStationId";

    pub const IMAGE_ID: &str = "imageId";
    pub const ISOURCE: &str = "isource";
    pub const NUMBER_OF_ROWS: &str = "numberOfRows";
    pub const NUMBER_OF_COLUMNS: &str = "numberOfColumns";
    pub const NUMBER_OF_BANDS: &str = "numberOfBands";
    pub const NUMBER_OF_MULTISPECTRAL_BANDS: &str = "numberOfMultispectralBands";
    pub const REPRESENTATION: &str = "representation";
    pub const SUBCATEGORY: &str = "subcategory";
    pub const BITS_PER_PIXEL_PER_BAND: &str = "bitsPerPixelPerBand";
    pub const IMAGE_MODE: &str = "imageMode";
    pub const COMPRESSION: &str = "compression";
    pub const RATE_CODE: &str = "rateCode";
    pub const TARGET_ID: &str = "targetId";
    pub const COMMENT: &str = "comment";

    pub const CLASSIFICATION: &str = "classification";
    pub const CODE_WORDS: &str = "codeWords";
    pub const CONTROL_CODE: &str = "controlCode";
    pub const RELEASE_INSTRUCTION: &str = "releaseInstruction";
    pub const CONTROL_NUMBER: &str = "controlNumber";
    pub const CLASSIFICATION_SYSTEM: &str = "system";
    pub const CLASSIFICATION_AUTHORITY: &str = "authority";
    pub const CLASSIFICATION_AUTHORITY_TYPE: &str = "authorityType";
    pub const CLASSIFICATION_TEXT: &str = "text";
    pub const CLASSIFICATION_REASON: &str = "reason";
    pub const CLASSIFICATION_DATE: &str = "classificationDate";
    pub const DECLASSIFICATION_TYPE: &str = "declassificationType";
    pub const DECLASSIFICATION_DATE: &str = "declassificationDate";
    pub const DECLASSIFICATION_EXEMPTION: &str = "declassificationExemption";
    pub const DOWNGRADE: &str = "downgrade";
    pub const DOWNGRADE_DATE: &str = "downgradeDate";
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Integer,
    Long,
    Date,
}

/// One entry of the metacard type: name, value type and index flags.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize)]
pub struct AttributeDescriptor {
    pub name: &'static str,
    pub attribute_type: AttributeType,
    pub indexed: bool,
    pub stored: bool,
    pub tokenized: bool,
    pub multivalued: bool,
}

const fn descriptor(name: &'static str, attribute_type: AttributeType) -> AttributeDescriptor {
    AttributeDescriptor {
        name,
        attribute_type,
        indexed: true,
        stored: true,
        tokenized: false,
        multivalued: true,
    }
}

const fn basic(name: &'static str, attribute_type: AttributeType) -> AttributeDescriptor {
    AttributeDescriptor {
        name,
        attribute_type,
        indexed: true,
        stored: true,
        tokenized: matches!(attribute_type, AttributeType::String),
        multivalued: false,
    }
}

/// The metacard type for NITF products.
pub const NITF_ATTRIBUTES: &[AttributeDescriptor] = &[
    basic(keys::TITLE, AttributeType::String),
    basic(keys::CREATED, AttributeType::Date),
    basic(keys::MODIFIED, AttributeType::Date),
    basic(keys::EFFECTIVE, AttributeType::Date),
    descriptor(keys::NITF_VERSION, AttributeType::String),
    descriptor(keys::FILE_DATE_TIME, AttributeType::Date),
    descriptor(keys::FILE_TITLE, AttributeType::String),
    descriptor(keys::FILE_SIZE, AttributeType::Long),
    descriptor(keys::COMPLEXITY_LEVEL, AttributeType::String),
    descriptor(keys::ORIGINATOR_NAME, AttributeType::String),
    descriptor(keys::ORIGINATING_STATION_ID, AttributeType::String),
    descriptor(keys::IMAGE_ID, AttributeType::String),
    descriptor(keys::ISOURCE, AttributeType::String),
    descriptor(keys::NUMBER_OF_ROWS, AttributeType::Long),
    descriptor(keys::NUMBER_OF_COLUMNS, AttributeType::Long),
    descriptor(keys::NUMBER_OF_BANDS, AttributeType::Integer),
    descriptor(keys::NUMBER_OF_MULTISPECTRAL_BANDS, AttributeType::String),
    descriptor(keys::REPRESENTATION, AttributeType::String),
    descriptor(keys::SUBCATEGORY, AttributeType::String),
    descriptor(keys::BITS_PER_PIXEL_PER_BAND, AttributeType::Integer),
    descriptor(keys::IMAGE_MODE, AttributeType::String),
    descriptor(keys::COMPRESSION, AttributeType::String),
    descriptor(keys::RATE_CODE, AttributeType::String),
    descriptor(keys::TARGET_ID, AttributeType::String),
    descriptor(keys::COMMENT, AttributeType::String),
    descriptor(keys::CLASSIFICATION, AttributeType::String),
    descriptor(keys::CODE_WORDS, AttributeType::String),
    descriptor(keys::CONTROL_CODE, AttributeType::String),
    descriptor(keys::RELEASE_INSTRUCTION, AttributeType::String),
    descriptor(keys::CONTROL_NUMBER, AttributeType::String),
    descriptor(keys::CLASSIFICATION_SYSTEM, AttributeType::String),
    descriptor(keys::CLASSIFICATION_AUTHORITY, AttributeType::String),
    descriptor(keys::CLASSIFICATION_AUTHORITY_TYPE, AttributeType::String),
    descriptor(keys::CLASSIFICATION_TEXT, AttributeType::String),
    descriptor(keys::CLASSIFICATION_REASON, AttributeType::String),
    descriptor(keys::CLASSIFICATION_DATE, AttributeType::Date),
    descriptor(keys::DECLASSIFICATION_TYPE, AttributeType::String),
    descriptor(keys::DECLASSIFICATION_DATE, AttributeType::String),
    descriptor(keys::DECLASSIFICATION_EXEMPTION, AttributeType::String),
    descriptor(keys::DOWNGRADE, AttributeType::String),
    descriptor(keys::DOWNGRADE_DATE, AttributeType::String),
];

/// Look up the descriptor for `name`.
pub fn attribute_descriptor(name: &str) -> Option<&'static AttributeDescriptor> {
    NITF_ATTRIBUTES.iter().find(|d| d.name == name)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Integer(i32),
    Long(i64),
    #[serde(serialize_with = "serialize_date")]
    Date(DateTime<Utc>),
}

fn serialize_date<S: serde::Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date_time(value))
}

impl AttributeValue {
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            AttributeValue::String(_) => AttributeType::String,
            AttributeValue::Integer(_) => AttributeType::Integer,
            AttributeValue::Long(_) => AttributeType::Long,
            AttributeValue::Date(_) => AttributeType::Date,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttributeValue::Date(value)
    }
}

/// Attributes keyed by the fixed vocabulary, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlatAttributeSet(BTreeMap<&'static str, AttributeValue>);

impl FlatAttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<AttributeValue>) {
        self.0.insert(key, value.into());
    }

    pub fn insert_opt<V: Into<AttributeValue>>(&mut self, key: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttributeValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Project the curated attribute subset of `file`.
///
/// `now` stands in for created/modified/effective when the file carries no
/// date-time.
pub fn project_attributes(file: &NitfFile, now: DateTime<Utc>) -> FlatAttributeSet {
    use keys::*;

    let mut attrs = FlatAttributeSet::new();

    let date = file.file_date_time.unwrap_or(now);
    attrs.insert(TITLE, file.file_title.as_str());
    attrs.insert(CREATED, date);
    attrs.insert(MODIFIED, date);
    attrs.insert(EFFECTIVE, date);

    attrs.insert(NITF_VERSION, file.file_type.to_string());
    attrs.insert_opt(FILE_DATE_TIME, file.file_date_time);
    attrs.insert(FILE_TITLE, file.file_title.as_str());
    if let Some(length) = file.file_length {
        match i64::try_from(length) {
            Ok(length) => attrs.insert(FILE_SIZE, AttributeValue::Long(length)),
            Err(_) => debug!("File length {} out of range, not projected", length),
        }
    }
    attrs.insert(COMPLEXITY_LEVEL, format!("{:02}", file.complexity_level));
    attrs.insert(ORIGINATOR_NAME, file.originators_name.as_str());
    attrs.insert(ORIGINATING_STATION_ID, file.originating_station_id.as_str());

    if let Some(image) = file.image_segments.first() {
        project_image(&mut attrs, image);
    }

    project_security(&mut attrs, &file.security.security);

    attrs
}

fn project_image(attrs: &mut FlatAttributeSet, image: &ImageSegment) {
    use keys::*;

    attrs.insert(IMAGE_ID, image.identifier.as_str());
    attrs.insert(ISOURCE, image.image_source.as_str());
    attrs.insert(NUMBER_OF_ROWS, AttributeValue::Long(i64::from(image.number_of_rows)));
    attrs.insert(
        NUMBER_OF_COLUMNS,
        AttributeValue::Long(i64::from(image.number_of_columns)),
    );
    match i32::try_from(image.number_of_bands) {
        Ok(bands) => attrs.insert(NUMBER_OF_BANDS, AttributeValue::Integer(bands)),
        Err(_) => debug!("Band count {} out of range, not projected", image.number_of_bands),
    }
    attrs.insert_opt(
        NUMBER_OF_MULTISPECTRAL_BANDS,
        image.number_of_multispectral_bands.map(|n| n.to_string()),
    );
    attrs.insert(REPRESENTATION, image.image_representation.as_str());
    attrs.insert(SUBCATEGORY, image.image_category.as_str());
    attrs.insert(
        BITS_PER_PIXEL_PER_BAND,
        AttributeValue::Integer(i32::from(image.actual_bits_per_pixel_per_band)),
    );
    attrs.insert(IMAGE_MODE, image.image_mode.as_str());
    attrs.insert(COMPRESSION, image.image_compression.as_str());
    attrs.insert_opt(RATE_CODE, image.compression_rate.as_deref());
    attrs.insert_opt(TARGET_ID, image.target_id.as_deref());
    if !image.image_comments.is_empty() {
        attrs.insert(COMMENT, image.image_comments.concat());
    }
}

fn project_security(attrs: &mut FlatAttributeSet, security: &SecurityMetadata) {
    use keys::*;

    attrs.insert(CLASSIFICATION, security.classification.to_string());
    attrs.insert(CODE_WORDS, security.codewords.as_str());
    attrs.insert_opt(CONTROL_CODE, security.control_and_handling.as_deref());
    attrs.insert_opt(RELEASE_INSTRUCTION, security.release_instructions.as_deref());
    attrs.insert_opt(CONTROL_NUMBER, security.control_number.as_deref());
    attrs.insert_opt(CLASSIFICATION_SYSTEM, security.classification_system.as_deref());
    attrs.insert_opt(
        CLASSIFICATION_AUTHORITY,
        security.classification_authority.as_deref(),
    );
    attrs.insert_opt(
        CLASSIFICATION_AUTHORITY_TYPE,
        security.classification_authority_type.as_deref(),
    );
    attrs.insert_opt(CLASSIFICATION_TEXT, security.classification_text.as_deref());
    attrs.insert_opt(CLASSIFICATION_REASON, security.classification_reason.as_deref());
    if let Some(source_date) = &security.source_date {
        match parse_ccyymmdd(source_date) {
            Some(date) => attrs.insert(CLASSIFICATION_DATE, date),
            None => debug!("Unparseable security source date {:?}", source_date),
        }
    }
    attrs.insert_opt(DECLASSIFICATION_TYPE, security.declassification_type.as_deref());
    attrs.insert_opt(DECLASSIFICATION_DATE, security.declassification_date.as_deref());
    attrs.insert_opt(
        DECLASSIFICATION_EXEMPTION,
        security.declassification_exemption.as_deref(),
    );
    attrs.insert_opt(DOWNGRADE, security.downgrade.as_deref());
    attrs.insert_opt(DOWNGRADE_DATE, security.downgrade_date.as_deref());
}

/// NITF security dates are `CCYYMMDD`; midnight UTC.
fn parse_ccyymmdd(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y%m%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

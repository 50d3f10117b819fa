//! Security blocks carried by the file header and by every segment.
use serde::{Deserialize, Serialize};

/// Classification level (`FSCLAS` / `ISCLAS` / ...).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityClassification {
    #[default]
    Unclassified,
    Restricted,
    Confidential,
    Secret,
    TopSecret,
}

impl SecurityClassification {
    /// Decode the single-character classification code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'U' => Some(Self::Unclassified),
            'R' => Some(Self::Restricted),
            'C' => Some(Self::Confidential),
            'S' => Some(Self::Secret),
            'T' => Some(Self::TopSecret),
            _ => None,
        }
    }
}

impl std::fmt::Display for SecurityClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityClassification::Unclassified => write!(f, "UNCLASSIFIED"),
            SecurityClassification::Restricted => write!(f, "RESTRICTED"),
            SecurityClassification::Confidential => write!(f, "CONFIDENTIAL"),
            SecurityClassification::Secret => write!(f, "SECRET"),
            SecurityClassification::TopSecret => write!(f, "TOP SECRET"),
        }
    }
}

/// Segment-level security metadata.
///
/// `classification` and `codewords` are always rendered; every other field is
/// emitted only when present. Absent codewords are the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityMetadata {
    pub classification: SecurityClassification,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub codewords: String,

    pub classification_system: Option<String>,
    pub control_and_handling: Option<String>,
    pub release_instructions: Option<String>,
    pub declassification_type: Option<String>,
    pub declassification_date: Option<String>,
    pub declassification_exemption: Option<String>,
    pub downgrade: Option<String>,
    pub downgrade_date: Option<String>,
    pub downgrade_event: Option<String>,

    // NITF 2.1 authority fields
    pub classification_text: Option<String>,
    pub classification_authority_type: Option<String>,
    pub classification_authority: Option<String>,
    pub classification_reason: Option<String>,
    /// Security source date, `CCYYMMDD`.
    pub source_date: Option<String>,
    pub control_number: Option<String>,
}

impl SecurityMetadata {
    pub fn new(classification: SecurityClassification) -> Self {
        Self {
            classification,
            ..Default::default()
        }
    }
}

/// File header security: the segment block plus copy accounting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSecurityMetadata {
    #[serde(flatten)]
    pub security: SecurityMetadata,
    pub copy_number: Option<String>,
    pub number_of_copies: Option<String>,
}

impl From<SecurityMetadata> for FileSecurityMetadata {
    fn from(security: SecurityMetadata) -> Self {
        Self {
            security,
            copy_number: None,
            number_of_copies: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_codes() {
        assert_eq!(
            SecurityClassification::from_code('T'),
            Some(SecurityClassification::TopSecret)
        );
        assert_eq!(SecurityClassification::from_code('x'), None);
        assert_eq!(SecurityClassification::TopSecret.to_string(), "TOP SECRET");
    }

    #[test]
    fn codewords_default_to_empty() {
        let sec: SecurityMetadata =
            serde_json::from_str(r#"{"classification":"UNCLASSIFIED"}"#).unwrap();
        assert_eq!(sec.codewords, "");
        assert!(sec.release_instructions.is_none());
    }

    #[test]
    fn null_codewords_read_as_empty() {
        let sec: SecurityMetadata =
            serde_json::from_str(r#"{"classification":"SECRET","codewords":null}"#).unwrap();
        assert_eq!(sec.codewords, "");
        assert_eq!(sec.classification, SecurityClassification::Secret);
    }

    #[test]
    fn file_security_flattens_segment_fields() {
        let sec: FileSecurityMetadata = serde_json::from_str(
            r#"{"classification":"SECRET","codewords":"ABC","copyNumber":"00001"}"#,
        )
        .unwrap();
        assert_eq!(sec.security.classification, SecurityClassification::Secret);
        assert_eq!(sec.security.codewords, "ABC");
        assert_eq!(sec.copy_number.as_deref(), Some("00001"));
    }

    #[test]
    fn classification_is_required() {
        let res: Result<SecurityMetadata, _> = serde_json::from_str(r#"{"codewords":"X"}"#);
        let err = res.unwrap_err().to_string();
        assert!(err.contains("classification"), "{err}");
    }
}

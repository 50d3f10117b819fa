//! Security block rendering, shared by the file header and every segment.
use crate::core::xml::XmlWriter;
use crate::model::{FileSecurityMetadata, SecurityMetadata};

/// Classification and codewords always; the remaining fields only when present.
pub fn write_security(xml: &mut XmlWriter, level: usize, security: &SecurityMetadata) {
    xml.labeled_display(level, "securityClassification", security.classification);
    xml.labeled_opt(
        level,
        "securityClassificationSystem",
        security.classification_system.as_deref(),
    );
    xml.labeled(level, "securityCodewords", &security.codewords);
    xml.labeled_opt(
        level,
        "securityControlAndHandling",
        security.control_and_handling.as_deref(),
    );
    xml.labeled_opt(
        level,
        "securityReleaseInstructions",
        security.release_instructions.as_deref(),
    );
    xml.labeled_opt(
        level,
        "securityDeclassificationType",
        security.declassification_type.as_deref(),
    );
    xml.labeled_opt(
        level,
        "securityDeclassificationDate",
        security.declassification_date.as_deref(),
    );
    xml.labeled_opt(
        level,
        "securityDeclassificationExemption",
        security.declassification_exemption.as_deref(),
    );
    xml.labeled_opt(level, "securityDowngrade", security.downgrade.as_deref());
    xml.labeled_opt(level, "securityDowngradeDate", security.downgrade_date.as_deref());
    xml.labeled_opt(
        level,
        "securityDowngradeDateOrSpecificEvent",
        security.downgrade_event.as_deref(),
    );
    xml.labeled_opt(
        level,
        "securityClassificationText",
        security.classification_text.as_deref(),
    );
    xml.labeled_opt(
        level,
        "securityClassificationAuthorityType",
        security.classification_authority_type.as_deref(),
    );
    xml.labeled_opt(
        level,
        "securityClassificationAuthority",
        security.classification_authority.as_deref(),
    );
    xml.labeled_opt(
        level,
        "securityClassificationReason",
        security.classification_reason.as_deref(),
    );
    xml.labeled_opt(level, "securitySourceDate", security.source_date.as_deref());
    xml.labeled_opt(
        level,
        "securityControlNumber",
        security.control_number.as_deref(),
    );
}

/// File header variant: the segment fields plus copy accounting.
pub fn write_file_security(xml: &mut XmlWriter, level: usize, security: &FileSecurityMetadata) {
    write_security(xml, level, &security.security);
    xml.labeled_opt(level, "fileCopyNumber", security.copy_number.as_deref());
    xml.labeled_opt(
        level,
        "fileNumberOfCopies",
        security.number_of_copies.as_deref(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SecurityClassification;

    fn render(security: &SecurityMetadata) -> String {
        let mut xml = XmlWriter::new();
        write_security(&mut xml, 0, security);
        xml.into_string()
    }

    #[test]
    fn minimal_block_has_only_mandatory_fields() {
        let out = render(&SecurityMetadata::new(SecurityClassification::Unclassified));
        assert_eq!(
            out,
            "<securityClassification>UNCLASSIFIED</securityClassification>\n\
             <securityCodewords></securityCodewords>\n"
        );
    }

    #[test]
    fn present_fields_are_rendered_and_escaped() {
        let security = SecurityMetadata {
            classification: SecurityClassification::Secret,
            codewords: "A&B".to_string(),
            release_instructions: Some("USA".to_string()),
            downgrade_event: Some("on <event>".to_string()),
            ..Default::default()
        };
        let out = render(&security);
        assert_eq!(out.matches("<securityClassification>").count(), 1);
        assert_eq!(out.matches("<securityCodewords>").count(), 1);
        assert!(out.contains("<securityCodewords>A&amp;B</securityCodewords>"));
        assert!(out.contains("<securityReleaseInstructions>USA</securityReleaseInstructions>"));
        assert!(out.contains(
            "<securityDowngradeDateOrSpecificEvent>on &lt;event&gt;</securityDowngradeDateOrSpecificEvent>"
        ));
        assert!(!out.contains("securityDeclassificationType"));
        assert!(!out.contains("securityControlAndHandling"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn file_security_adds_copy_fields() {
        let mut security: FileSecurityMetadata =
            SecurityMetadata::new(SecurityClassification::Confidential).into();
        security.number_of_copies = Some("00002".to_string());
        let mut xml = XmlWriter::new();
        write_file_security(&mut xml, 1, &security);
        let out = xml.into_string();
        assert!(out.contains("  <securityClassification>CONFIDENTIAL</securityClassification>\n"));
        assert!(out.contains("<fileNumberOfCopies>00002</fileNumberOfCopies>"));
        assert!(!out.contains("fileCopyNumber"));
    }
}

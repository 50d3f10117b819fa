//! Assembles the metadata XML document: the file header block followed by
//! every image, graphic, symbol, label and text segment in parser order.
use crate::core::security::{write_file_security, write_security};
use crate::core::tre::write_tres;
use crate::core::xml::XmlWriter;
use crate::model::{
    GraphicSegment, ImageSegment, LabelSegment, NitfFile, SymbolSegment, TextSegment,
};

const BLOCK: usize = 1;
const FIELD: usize = 2;

/// Build the `<metadata>` document for one file.
pub fn build_metadata_xml(file: &NitfFile) -> String {
    let mut xml = XmlWriter::new();
    xml.open(0, "metadata");
    write_file_header(&mut xml, file);
    for segment in &file.image_segments {
        write_image(&mut xml, segment);
    }
    for segment in &file.graphic_segments {
        write_graphic(&mut xml, segment);
    }
    for segment in &file.symbol_segments {
        write_symbol(&mut xml, segment);
    }
    for segment in &file.label_segments {
        write_label(&mut xml, segment);
    }
    for segment in &file.text_segments {
        write_text(&mut xml, segment);
    }
    xml.close(0, "metadata");
    xml.into_string()
}

fn write_file_header(xml: &mut XmlWriter, file: &NitfFile) {
    xml.open(BLOCK, "file");
    xml.labeled_display(FIELD, "fileType", file.file_type);
    xml.labeled(FIELD, "complexityLevel", &format!("{:02}", file.complexity_level));
    xml.labeled(FIELD, "originatingStationId", &file.originating_station_id);
    xml.labeled_date_opt(FIELD, "fileDateTime", file.file_date_time.as_ref());
    xml.labeled(FIELD, "fileTitle", &file.file_title);
    write_file_security(xml, FIELD, &file.security);
    xml.labeled_opt(FIELD, "fileBackgroundColour", file.file_background_colour);
    xml.labeled(FIELD, "originatorsName", &file.originators_name);
    xml.labeled(FIELD, "originatorsPhoneNumber", &file.originators_phone_number);
    xml.labeled_opt(FIELD, "fileLength", file.file_length);
    write_tres(xml, &file.tres);
    xml.close(BLOCK, "file");
}

fn write_image(xml: &mut XmlWriter, image: &ImageSegment) {
    xml.open(BLOCK, "image");
    xml.labeled(FIELD, "imageIdentifier1", &image.identifier);
    xml.labeled_date_opt(FIELD, "imageDateTime", image.image_date_time.as_ref());
    xml.labeled_opt(FIELD, "imageTargetId", image.target_id.as_deref());
    xml.labeled_opt(FIELD, "imageIdentifier2", image.identifier2.as_deref());
    write_security(xml, FIELD, &image.security);
    xml.labeled(FIELD, "imageSource", &image.image_source);
    xml.labeled_display(FIELD, "numberOfRows", image.number_of_rows);
    xml.labeled_display(FIELD, "numberOfColumns", image.number_of_columns);
    xml.labeled(FIELD, "pixelValueType", &image.pixel_value_type);
    xml.labeled(FIELD, "imageRepresentation", &image.image_representation);
    xml.labeled(FIELD, "imageCategory", &image.image_category);
    xml.labeled_display(
        FIELD,
        "actualBitsPerPixelPerBand",
        image.actual_bits_per_pixel_per_band,
    );
    xml.labeled(FIELD, "pixelJustification", &image.pixel_justification);
    xml.labeled_display(
        FIELD,
        "imageCoordinatesRepresentation",
        image.image_coordinates_representation,
    );
    for comment in &image.image_comments {
        xml.labeled(FIELD, "imageComment", comment);
    }
    xml.labeled(FIELD, "imageCompression", &image.image_compression);
    xml.labeled_opt(FIELD, "compressionRate", image.compression_rate.as_deref());
    xml.labeled_display(FIELD, "numberOfBands", image.number_of_bands);
    xml.labeled_opt(
        FIELD,
        "numberOfMultispectralBands",
        image.number_of_multispectral_bands,
    );
    xml.labeled(FIELD, "imageMode", &image.image_mode);
    xml.labeled_display(FIELD, "numberOfBlocksPerRow", image.number_of_blocks_per_row);
    xml.labeled_display(
        FIELD,
        "numberOfBlocksPerColumn",
        image.number_of_blocks_per_column,
    );
    xml.labeled_display(
        FIELD,
        "numberOfPixelsPerBlockHorizontal",
        image.number_of_pixels_per_block_horizontal,
    );
    xml.labeled_display(
        FIELD,
        "numberOfPixelsPerBlockVertical",
        image.number_of_pixels_per_block_vertical,
    );
    xml.labeled_display(FIELD, "numberOfBitsPerPixel", image.number_of_bits_per_pixel);
    xml.labeled_display(FIELD, "imageDisplayLevel", image.image_display_level);
    xml.labeled_display(FIELD, "imageAttachmentLevel", image.image_attachment_level);
    xml.labeled_display(FIELD, "imageLocationRow", image.image_location_row);
    xml.labeled_display(FIELD, "imageLocationColumn", image.image_location_column);
    xml.labeled(FIELD, "imageMagnification", &image.image_magnification);
    write_tres(xml, &image.tres);
    xml.close(BLOCK, "image");
}

fn write_graphic(xml: &mut XmlWriter, graphic: &GraphicSegment) {
    xml.open(BLOCK, "graphic");
    xml.labeled(FIELD, "graphicIdentifier", &graphic.identifier);
    xml.labeled(FIELD, "graphicName", &graphic.name);
    write_security(xml, FIELD, &graphic.security);
    xml.labeled_display(FIELD, "graphicDisplayLevel", graphic.display_level);
    xml.labeled_display(FIELD, "graphicAttachmentLevel", graphic.attachment_level);
    xml.labeled_display(FIELD, "graphicLocationRow", graphic.location_row);
    xml.labeled_display(FIELD, "graphicLocationColumn", graphic.location_column);
    xml.labeled_display(
        FIELD,
        "graphicBoundingRectangle1Row",
        graphic.bounding_rectangle1_row,
    );
    xml.labeled_display(
        FIELD,
        "graphicBoundingRectangle1Column",
        graphic.bounding_rectangle1_column,
    );
    xml.labeled(FIELD, "graphicColour", &graphic.colour);
    xml.labeled_display(
        FIELD,
        "graphicBoundingRectangle2Row",
        graphic.bounding_rectangle2_row,
    );
    xml.labeled_display(
        FIELD,
        "graphicBoundingRectangle2Column",
        graphic.bounding_rectangle2_column,
    );
    write_tres(xml, &graphic.tres);
    xml.close(BLOCK, "graphic");
}

fn write_symbol(xml: &mut XmlWriter, symbol: &SymbolSegment) {
    xml.open(BLOCK, "symbol");
    xml.labeled(FIELD, "symbolIdentifier", &symbol.identifier);
    xml.labeled(FIELD, "symbolName", &symbol.name);
    write_security(xml, FIELD, &symbol.security);
    xml.labeled(FIELD, "symbolType", &symbol.symbol_type);
    xml.labeled_display(
        FIELD,
        "numberOfLinesPerSymbol",
        symbol.number_of_lines_per_symbol,
    );
    xml.labeled_display(FIELD, "numberOfPixelsPerLine", symbol.number_of_pixels_per_line);
    xml.labeled_display(FIELD, "lineWidth", symbol.line_width);
    xml.labeled_display(FIELD, "numberOfBitsPerPixel", symbol.number_of_bits_per_pixel);
    xml.labeled_display(FIELD, "symbolDisplayLevel", symbol.display_level);
    xml.labeled_display(FIELD, "symbolAttachmentLevel", symbol.attachment_level);
    xml.labeled_display(FIELD, "symbolLocationRow", symbol.location_row);
    xml.labeled_display(FIELD, "symbolLocationColumn", symbol.location_column);
    xml.labeled_opt(FIELD, "symbolLocation2Row", symbol.location2_row);
    xml.labeled_opt(FIELD, "symbolLocation2Column", symbol.location2_column);
    xml.labeled_opt(FIELD, "symbolColour", symbol.colour.as_deref());
    xml.labeled_opt(FIELD, "symbolNumber", symbol.symbol_number.as_deref());
    xml.labeled_opt(FIELD, "symbolRotation", symbol.symbol_rotation);
    write_tres(xml, &symbol.tres);
    xml.close(BLOCK, "symbol");
}

fn write_label(xml: &mut XmlWriter, label: &LabelSegment) {
    xml.open(BLOCK, "label");
    xml.labeled(FIELD, "labelIdentifier", &label.identifier);
    write_security(xml, FIELD, &label.security);
    xml.labeled_display(FIELD, "labelLocationRow", label.location_row);
    xml.labeled_display(FIELD, "labelLocationColumn", label.location_column);
    xml.labeled_display(FIELD, "labelCellWidth", label.cell_width);
    xml.labeled_display(FIELD, "labelCellHeight", label.cell_height);
    xml.labeled_display(FIELD, "labelDisplayLevel", label.display_level);
    xml.labeled_display(FIELD, "labelAttachmentLevel", label.attachment_level);
    xml.labeled_display(FIELD, "labelTextColour", label.text_colour);
    xml.labeled_display(FIELD, "labelBackgroundColour", label.background_colour);
    write_tres(xml, &label.tres);
    xml.close(BLOCK, "label");
}

fn write_text(xml: &mut XmlWriter, text: &TextSegment) {
    xml.open(BLOCK, "text");
    xml.labeled(FIELD, "textIdentifier", &text.identifier);
    xml.labeled_display(FIELD, "textAttachmentLevel", text.attachment_level);
    xml.labeled_date_opt(FIELD, "textDateTime", text.date_time.as_ref());
    xml.labeled(FIELD, "textTitle", &text.title);
    write_security(xml, FIELD, &text.security);
    xml.labeled(FIELD, "textFormat", &text.format);
    write_tres(xml, &text.tres);
    xml.close(BLOCK, "text");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RgbColour, SecurityClassification, SecurityMetadata, Tre, TreEntry};

    fn header() -> NitfFile {
        NitfFile {
            complexity_level: 3,
            originating_station_id: "STN".to_string(),
            file_title: "TEST".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn header_only_document() {
        let out = build_metadata_xml(&header());
        assert!(out.starts_with("<metadata>\n  <file>\n"));
        assert!(out.ends_with("  </file>\n</metadata>\n"));
        assert!(out.contains("    <fileType>NITF02.10</fileType>\n"));
        assert!(out.contains("<complexityLevel>03</complexityLevel>"));
        assert!(out.contains("<fileTitle>TEST</fileTitle>"));
        assert!(out.contains("<securityClassification>UNCLASSIFIED</securityClassification>"));
        assert!(!out.contains("<fileDateTime>"));
        assert!(!out.contains("<fileBackgroundColour>"));
        assert!(!out.contains("<image>"));
        assert!(!out.contains("null"));
    }

    #[test]
    fn header_fields_in_order() {
        let mut file = header();
        file.file_background_colour = Some(RgbColour::new(1, 2, 3));
        file.originators_name = "Jane".to_string();
        file.tres = vec![Tre::new("FTRE", vec![TreEntry::field("a", "b")])];
        let out = build_metadata_xml(&file);
        let pos = |s: &str| out.find(s).unwrap_or_else(|| panic!("missing {s}"));
        assert!(pos("<fileType>") < pos("<complexityLevel>"));
        assert!(pos("<complexityLevel>") < pos("<originatingStationId>"));
        assert!(pos("<originatingStationId>") < pos("<fileTitle>"));
        assert!(pos("<fileTitle>") < pos("<securityClassification>"));
        assert!(pos("<securityCodewords>") < pos("<fileBackgroundColour>[0x01,0x02,0x03]"));
        assert!(pos("<fileBackgroundColour>") < pos("<originatorsName>Jane"));
        assert!(pos("<originatorsPhoneNumber>") < pos("<tre name=\"FTRE\">"));
        assert!(pos("<tre name=\"FTRE\">") < pos("</file>"));
    }

    #[test]
    fn segments_follow_fixed_section_order() {
        let mut file = header();
        file.text_segments = vec![TextSegment {
            title: "notes".to_string(),
            ..Default::default()
        }];
        file.label_segments = vec![LabelSegment::default()];
        file.symbol_segments = vec![SymbolSegment::default()];
        file.graphic_segments = vec![GraphicSegment::default(), GraphicSegment::default()];
        file.image_segments = vec![ImageSegment {
            identifier: "IMG<1>".to_string(),
            security: SecurityMetadata::new(SecurityClassification::Restricted),
            ..Default::default()
        }];
        let out = build_metadata_xml(&file);
        let pos = |s: &str| out.find(s).unwrap_or_else(|| panic!("missing {s}"));
        assert!(pos("</file>") < pos("<image>"));
        assert!(pos("</image>") < pos("<graphic>"));
        assert!(pos("</graphic>") < pos("<symbol>"));
        assert!(pos("</symbol>") < pos("<label>"));
        assert!(pos("</label>") < pos("<text>"));
        assert_eq!(out.matches("<graphic>").count(), 2);
        assert_eq!(out.matches("<securityClassification>").count(), 7);
        assert!(out.contains("<imageIdentifier1>IMG&lt;1&gt;</imageIdentifier1>"));
        assert!(out.contains("<securityClassification>RESTRICTED</securityClassification>"));
        assert!(out.contains("<textTitle>notes</textTitle>"));
    }

    #[test]
    fn image_comments_and_optional_fields() {
        let mut file = header();
        file.image_segments = vec![ImageSegment {
            image_comments: vec!["first".to_string(), "second".to_string()],
            compression_rate: Some("N045".to_string()),
            ..Default::default()
        }];
        let out = build_metadata_xml(&file);
        assert_eq!(out.matches("<imageComment>").count(), 2);
        assert!(out.contains("<compressionRate>N045</compressionRate>"));
        assert!(out.contains("<imageCoordinatesRepresentation>NONE</imageCoordinatesRepresentation>"));
        assert!(!out.contains("<imageTargetId>"));
        assert!(!out.contains("<numberOfMultispectralBands>"));
    }
}

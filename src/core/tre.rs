//! TRE tree serialization.
//!
//! Trees nest repeated groups to arbitrary depth, so the walk keeps its own
//! explicit stack instead of recursing on the call stack.
use crate::core::xml::{XmlWriter, escape};
use crate::model::{Tre, TreEntry, TreGroup};

/// Level of `<tre>` elements and of their top-level entries.
pub const TRE_LEVEL: usize = 2;

enum Step<'a> {
    Entry(&'a TreEntry, usize),
    Group(&'a TreGroup, usize, usize),
    CloseGroup(usize),
    CloseRepeated(usize),
}

/// Write every TRE in order.
pub fn write_tres(xml: &mut XmlWriter, tres: &[Tre]) {
    for tre in tres {
        write_tre(xml, tre);
    }
}

/// `<tre name="...">` with the name trimmed, then its entries.
pub fn write_tre(xml: &mut XmlWriter, tre: &Tre) {
    xml.line(
        TRE_LEVEL,
        &format!("<tre name=\"{}\">", escape(tre.name.trim())),
    );
    write_entries(xml, &tre.entries, TRE_LEVEL);
    xml.close(TRE_LEVEL, "tre");
}

/// Serialize `entries` at `level`. A group sits one level below its
/// `<repeated>` element and the group's entries one level below that.
pub fn write_entries(xml: &mut XmlWriter, entries: &[TreEntry], level: usize) {
    let mut stack: Vec<Step<'_>> = entries.iter().rev().map(|e| Step::Entry(e, level)).collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Entry(entry, level) => {
                if let Some(value) = &entry.value {
                    xml.line(
                        level,
                        &format!(
                            "<field name=\"{}\" value=\"{}\" />",
                            escape(&entry.name),
                            escape(value)
                        ),
                    );
                }
                // An entry may carry both a value and groups; emit both.
                if !entry.groups.is_empty() {
                    xml.line(
                        level,
                        &format!(
                            "<repeated name=\"{}\" number=\"{}\">",
                            escape(&entry.name),
                            entry.groups.len()
                        ),
                    );
                    stack.push(Step::CloseRepeated(level));
                    for (index, group) in entry.groups.iter().enumerate().rev() {
                        stack.push(Step::Group(group, index, level + 1));
                    }
                }
            }
            Step::Group(group, index, level) => {
                xml.line(level, &format!("<group index=\"{}\">", index));
                stack.push(Step::CloseGroup(level));
                for entry in group.entries.iter().rev() {
                    stack.push(Step::Entry(entry, level + 1));
                }
            }
            Step::CloseGroup(level) => xml.close(level, "group"),
            Step::CloseRepeated(level) => xml.close(level, "repeated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tre: &Tre) -> String {
        let mut xml = XmlWriter::new();
        write_tre(&mut xml, tre);
        xml.into_string()
    }

    #[test]
    fn name_is_trimmed_field_is_not() {
        let tre = Tre::new("ACFTB ", vec![TreEntry::field("alt", "1000")]);
        assert_eq!(
            render(&tre),
            "    <tre name=\"ACFTB\">\n\
             \x20   <field name=\"alt\" value=\"1000\" />\n\
             \x20   </tre>\n"
        );
    }

    #[test]
    fn field_values_are_attribute_escaped() {
        let tre = Tre::new("X", vec![TreEntry::field("n", "a\"b<c>&'")]);
        assert!(render(&tre).contains("value=\"a&quot;b&lt;c&gt;&amp;&apos;\""));
    }

    #[test]
    fn repeated_groups_keep_order_and_indent() {
        let tre = Tre::new(
            "BANDSB",
            vec![
                TreEntry::field("COUNT", "2"),
                TreEntry::repeated(
                    "BAND",
                    vec![
                        TreGroup::new(vec![TreEntry::field("ID", "r")]),
                        TreGroup::new(vec![TreEntry::field("ID", "g")]),
                    ],
                ),
            ],
        );
        let expected = [
            "    <tre name=\"BANDSB\">",
            "    <field name=\"COUNT\" value=\"2\" />",
            "    <repeated name=\"BAND\" number=\"2\">",
            "      <group index=\"0\">",
            "        <field name=\"ID\" value=\"r\" />",
            "      </group>",
            "      <group index=\"1\">",
            "        <field name=\"ID\" value=\"g\" />",
            "      </group>",
            "    </repeated>",
            "    </tre>",
        ]
        .join("\n")
            + "\n";
        assert_eq!(render(&tre), expected);
    }

    #[test]
    fn entry_with_value_and_groups_emits_both() {
        let mut entry = TreEntry::repeated("X", vec![TreGroup::new(vec![])]);
        entry.value = Some("v".to_string());
        let out = render(&Tre::new("T", vec![entry]));
        let field = out.find("<field name=\"X\" value=\"v\" />").unwrap();
        let repeated = out.find("<repeated name=\"X\" number=\"1\">").unwrap();
        assert!(field < repeated);
        assert!(out.contains("<group index=\"0\">\n"));
    }

    #[test]
    fn entry_without_value_or_groups_emits_nothing() {
        let entry = TreEntry {
            name: "EMPTY".to_string(),
            ..Default::default()
        };
        let out = render(&Tre::new("T", vec![entry]));
        assert!(!out.contains("EMPTY"));
    }

    fn nested(depth: usize) -> TreEntry {
        let mut entry = TreEntry::field("leaf", "deep");
        for level in 0..depth {
            entry = TreEntry::repeated(format!("L{}", level), vec![TreGroup::new(vec![entry])]);
        }
        entry
    }

    #[test]
    fn deep_nesting_is_not_truncated() {
        let depth = 500;
        let out = render(&Tre::new("DEEP", vec![nested(depth)]));
        assert_eq!(out.matches("<group index=\"0\">").count(), depth);
        assert_eq!(out.matches("</group>").count(), depth);
        assert_eq!(out.matches("</repeated>").count(), depth);
        assert!(out.contains("<field name=\"leaf\" value=\"deep\" />"));
        assert!(out.ends_with("</tre>\n"));
    }
}

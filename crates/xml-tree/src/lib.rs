//! Owned XML element trees for the wddx codec.
//!
//! This crate wraps the event-based `quick-xml` reader and writer into a
//! small parse-to-tree / build-from-tree layer: element names, ordered
//! attributes, ordered child elements, and text content. The codec crate
//! only talks to [`XmlElement`], so the underlying XML library stays
//! swappable.
//!
//! # Example
//!
//! ```
//! use wddx_xml_tree::XmlElement;
//!
//! let mut root = XmlElement::new("data");
//! root.push(XmlElement::with_text("string", "hello"));
//! assert_eq!(root.to_xml().unwrap(), "<data><string>hello</string></data>");
//!
//! let parsed = XmlElement::parse("<data><string>hello</string></data>").unwrap();
//! assert_eq!(parsed, root);
//! ```

mod element;
mod error;
mod parse;
mod write;

pub use element::XmlElement;
pub use error::XmlError;

#[cfg(test)]
mod tests {
    use super::XmlElement;

    #[test]
    fn builds_and_serializes_compact() {
        let mut packet = XmlElement::new("wddxPacket");
        packet.set_attr("version", "1.0");
        packet.push(XmlElement::new("header"));
        let mut data = XmlElement::new("data");
        data.push(XmlElement::with_text("string", "test"));
        packet.push(data);

        assert_eq!(
            packet.to_xml().unwrap(),
            "<wddxPacket version=\"1.0\"><header/><data><string>test</string></data></wddxPacket>"
        );
    }

    #[test]
    fn childless_elements_self_close() {
        let mut el = XmlElement::new("boolean");
        el.set_attr("value", "true");
        assert_eq!(el.to_xml().unwrap(), "<boolean value=\"true\"/>");
    }

    #[test]
    fn escapes_text_and_attributes() {
        let mut el = XmlElement::with_text("string", "a < b & c");
        el.set_attr("name", "\"x\"");
        let xml = el.to_xml().unwrap();
        assert!(xml.contains("a &lt; b &amp; c"));

        let back = XmlElement::parse(&xml).unwrap();
        assert_eq!(back.text, "a < b & c");
        assert_eq!(back.attr("name"), Some("\"x\""));
    }

    #[test]
    fn parse_resolves_character_references() {
        let el = XmlElement::parse("<s>&#65;&#x42;&amp;</s>").unwrap();
        assert_eq!(el.text, "AB&");
    }

    #[test]
    fn parse_rejects_unknown_entities() {
        assert!(XmlElement::parse("<s>&nope;</s>").is_err());
    }

    #[test]
    fn parse_skips_prologue_and_comments() {
        let el = XmlElement::parse(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- c --><root><a/></root>",
        )
        .unwrap();
        assert_eq!(el.name, "root");
        assert_eq!(el.children.len(), 1);
    }

    #[test]
    fn formatting_whitespace_is_dropped_but_leaf_text_is_kept() {
        let el = XmlElement::parse("<data>\n  <string>  x  </string>\n</data>").unwrap();
        assert_eq!(el.text, "");
        assert_eq!(el.children[0].text, "  x  ");
    }

    #[test]
    fn set_attr_replaces_existing_value() {
        let mut el = XmlElement::new("e");
        el.set_attr("k", "1");
        el.set_attr("k", "2");
        assert_eq!(el.attributes.len(), 1);
        assert_eq!(el.attr("k"), Some("2"));
    }

    #[test]
    fn parse_requires_a_root_element() {
        assert!(XmlElement::parse("").is_err());
        assert!(XmlElement::parse("   ").is_err());
    }

    #[test]
    fn roundtrips_nested_structures() {
        let xml = "<struct><var name=\"foo\"><string>bar</string></var><var name=\"baz\"><struct><var name=\"a\"><string>b</string></var></struct></var></struct>";
        let el = XmlElement::parse(xml).unwrap();
        assert_eq!(el.to_xml().unwrap(), xml);
    }

    #[test]
    fn cdata_text_is_taken_verbatim() {
        let el = XmlElement::parse("<s><![CDATA[a < b]]></s>").unwrap();
        assert_eq!(el.text, "a < b");
    }
}

//! The element tree type.

use crate::error::XmlError;
use crate::{parse, write};

/// A single XML element: name, ordered attributes, ordered child
/// elements, and the text contained directly inside it.
///
/// Attribute and child order is significant and preserved on both parse
/// and serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Creates an element holding only text.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.text = text.into();
        element
    }

    /// Returns the value of the named attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing any existing value for the name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Appends a child element.
    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Returns the first child with the given element name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Mutable variant of [`XmlElement::child`].
    pub fn child_mut(&mut self, name: &str) -> Option<&mut XmlElement> {
        self.children.iter_mut().find(|child| child.name == name)
    }

    /// Parses a document into its root element.
    ///
    /// The XML declaration, comments, processing instructions and any
    /// DOCTYPE are skipped. Entity and character references are resolved
    /// into text. Whitespace-only text inside elements that have element
    /// children is treated as formatting and dropped; text content of
    /// leaf elements is preserved verbatim.
    pub fn parse(input: &str) -> Result<XmlElement, XmlError> {
        parse::parse(input)
    }

    /// Serializes this element compactly.
    ///
    /// No XML declaration, no inserted whitespace; childless and
    /// textless elements self-close. The output is byte-for-byte stable
    /// for a given tree.
    pub fn to_xml(&self) -> Result<String, XmlError> {
        write::to_xml(self)
    }
}

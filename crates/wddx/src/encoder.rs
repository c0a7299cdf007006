//! Packet encoder.

use std::collections::HashSet;

use wddx_xml_tree::XmlElement;

use crate::constants::{
    ATTR_LENGTH, ATTR_NAME, ATTR_VALUE, ATTR_VERSION, CLASS_TAG, ELEM_ARRAY, ELEM_BOOLEAN,
    ELEM_COMMENT, ELEM_DATA, ELEM_HEADER, ELEM_NULL, ELEM_NUMBER, ELEM_PACKET, ELEM_STRING,
    ELEM_STRUCT, ELEM_VAR, PACKET_VERSION,
};
use crate::{WddxError, WddxObject, WddxValue};

/// Builds a WDDX packet from values.
///
/// An encoder is one serialization session: it owns the packet under
/// construction (`wddxPacket` root with `header` and `data` children),
/// the single header comment slot, and the set of object identities
/// already written. Repeated [`encode`](WddxEncoder::encode) or
/// [`add_named_value`](WddxEncoder::add_named_value) calls keep
/// appending to the same packet, and a given object instance can be
/// written at most once per session, even as a sibling of itself.
///
/// Sessions hold mutable state and are not safe for concurrent use;
/// create one encoder per packet.
#[derive(Debug)]
pub struct WddxEncoder {
    packet: XmlElement,
    seen: HashSet<usize>,
}

impl Default for WddxEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl WddxEncoder {
    pub fn new() -> Self {
        let mut packet = XmlElement::new(ELEM_PACKET);
        packet.set_attr(ATTR_VERSION, PACKET_VERSION);
        packet.push(XmlElement::new(ELEM_HEADER));
        packet.push(XmlElement::new(ELEM_DATA));
        Self {
            packet,
            seen: HashSet::new(),
        }
    }

    pub fn with_comment(comment: &str) -> Self {
        let mut encoder = Self::new();
        encoder.set_comment(comment);
        encoder
    }

    /// Sets the header comment, replacing the text of an existing one.
    /// The header never carries more than one comment element.
    pub fn set_comment(&mut self, text: &str) {
        let header = self.header_mut();
        match header.child_mut(ELEM_COMMENT) {
            Some(comment) => comment.text = text.to_string(),
            None => header.push(XmlElement::with_text(ELEM_COMMENT, text)),
        }
    }

    /// Encodes a value into the packet and returns the serialized text.
    pub fn encode(&mut self, value: &WddxValue) -> Result<String, WddxError> {
        let element = self.write_value(value)?;
        self.data_mut().push(element);
        self.to_xml()
    }

    /// Incremental session mode: appends a named `var` wrapping the
    /// value under the packet's data element.
    pub fn add_named_value(&mut self, name: &str, value: &WddxValue) -> Result<(), WddxError> {
        let var = self.write_var(name, value)?;
        self.data_mut().push(var);
        Ok(())
    }

    /// Serializes the packet built so far: compact output, no XML
    /// declaration, no surrounding whitespace.
    pub fn to_xml(&self) -> Result<String, WddxError> {
        Ok(self.packet.to_xml()?.trim().to_string())
    }

    // The header and data elements are created in new() at fixed
    // positions.
    fn header_mut(&mut self) -> &mut XmlElement {
        &mut self.packet.children[0]
    }

    fn data_mut(&mut self) -> &mut XmlElement {
        &mut self.packet.children[1]
    }

    fn write_value(&mut self, value: &WddxValue) -> Result<XmlElement, WddxError> {
        match value {
            WddxValue::Null => Ok(XmlElement::new(ELEM_NULL)),
            WddxValue::Str(text) => Ok(XmlElement::with_text(ELEM_STRING, text.as_str())),
            WddxValue::Integer(n) => Ok(XmlElement::with_text(ELEM_NUMBER, n.to_string())),
            WddxValue::Float(f) => {
                if !f.is_finite() {
                    return Err(WddxError::UnsupportedType("non-finite number"));
                }
                Ok(XmlElement::with_text(ELEM_NUMBER, f.to_string()))
            }
            WddxValue::Bool(flag) => {
                let mut element = XmlElement::new(ELEM_BOOLEAN);
                element.set_attr(ATTR_VALUE, if *flag { "true" } else { "false" });
                Ok(element)
            }
            WddxValue::Array(items) => self.write_array(items),
            WddxValue::Struct(members) => self.write_struct(members),
            WddxValue::Object(object) => self.write_object(object),
        }
    }

    fn write_array(&mut self, items: &[WddxValue]) -> Result<XmlElement, WddxError> {
        let mut element = XmlElement::new(ELEM_ARRAY);
        element.set_attr(ATTR_LENGTH, items.len().to_string());
        for item in items {
            let child = self.write_value(item)?;
            element.push(child);
        }
        Ok(element)
    }

    fn write_struct(&mut self, members: &[(String, WddxValue)]) -> Result<XmlElement, WddxError> {
        let mut element = XmlElement::new(ELEM_STRUCT);
        for (name, value) in members {
            let var = self.write_var(name, value)?;
            element.push(var);
        }
        Ok(element)
    }

    fn write_var(&mut self, name: &str, value: &WddxValue) -> Result<XmlElement, WddxError> {
        let mut var = XmlElement::new(ELEM_VAR);
        var.set_attr(ATTR_NAME, name);
        var.push(self.write_value(value)?);
        Ok(var)
    }

    fn write_object(&mut self, object: &WddxObject) -> Result<XmlElement, WddxError> {
        let class_name = object.class_name();
        // Identities are inserted before descending and never removed:
        // a second occurrence of the same instance anywhere in the
        // session fails, ancestor or not.
        if !self.seen.insert(object.identity()) {
            return Err(WddxError::CyclicReference(class_name));
        }

        let mut element = XmlElement::new(ELEM_STRUCT);
        let tag = self.write_var(CLASS_TAG, &WddxValue::Str(class_name))?;
        element.push(tag);
        for (name, value) in object.fields() {
            let var = self.write_var(&name, &value)?;
            element.push(var);
        }
        Ok(element)
    }
}

//! Packet decoder.

use wddx_xml_tree::XmlElement;

use crate::constants::{
    ATTR_LENGTH, ATTR_NAME, ATTR_VALUE, CLASS_TAG, ELEM_ARRAY, ELEM_BOOLEAN, ELEM_DATA, ELEM_NULL,
    ELEM_NUMBER, ELEM_PACKET, ELEM_STRING, ELEM_STRUCT, ELEM_VAR, MAX_DEPTH,
};
use crate::registry::{ClassRegistry, ObjectFactory};
use crate::{WddxError, WddxValue};

/// What to do with a decoded object field the target class does not
/// declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
    /// Attach the field to the instance's overflow map.
    #[default]
    Attach,
    /// Drop the field silently.
    Skip,
    /// Fail with [`WddxError::UnknownField`].
    Error,
}

/// Decodes WDDX packets into values.
pub struct WddxDecoder {
    factory: Box<dyn ObjectFactory>,
    unknown_fields: UnknownFieldPolicy,
}

impl Default for WddxDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl WddxDecoder {
    /// Creates a decoder with an empty class registry: packets carrying
    /// serialized objects fail with [`WddxError::UnknownClass`].
    pub fn new() -> Self {
        Self::with_factory(ClassRegistry::new())
    }

    /// Creates a decoder that reconstructs objects through the given
    /// factory.
    pub fn with_factory(factory: impl ObjectFactory + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            unknown_fields: UnknownFieldPolicy::default(),
        }
    }

    /// Sets the policy for fields outside a reconstructed class's
    /// declared shape. The default, [`UnknownFieldPolicy::Attach`],
    /// mirrors the lenient dynamic-property behavior of the classic
    /// implementations.
    pub fn unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    /// Decodes a packet.
    ///
    /// A document that is not a `wddxPacket`, has no `data` element, or
    /// whose data element is empty decodes to `Null`. A data element
    /// with more than one child is malformed.
    pub fn decode(&self, packet: &str) -> Result<WddxValue, WddxError> {
        let root = XmlElement::parse(packet)?;
        if root.name != ELEM_PACKET {
            return Ok(WddxValue::Null);
        }
        let Some(data) = root.child(ELEM_DATA) else {
            return Ok(WddxValue::Null);
        };
        match data.children.len() {
            0 => Ok(WddxValue::Null),
            1 => self.decode_element(&data.children[0], 0),
            found => Err(WddxError::MalformedPacket(format!(
                "invalid number of child nodes in data element: found {found}, expected 1"
            ))),
        }
    }

    fn decode_element(&self, element: &XmlElement, depth: usize) -> Result<WddxValue, WddxError> {
        if depth > MAX_DEPTH {
            return Err(WddxError::MalformedPacket(format!(
                "nesting exceeds {MAX_DEPTH} levels"
            )));
        }
        match element.name.as_str() {
            ELEM_NULL => Ok(WddxValue::Null),
            ELEM_STRING => Ok(WddxValue::Str(element.text.clone())),
            // A boolean without its value attribute is tolerated as
            // null, not an error.
            ELEM_BOOLEAN => Ok(match element.attr(ATTR_VALUE) {
                Some(value) => WddxValue::Bool(value == "true"),
                None => WddxValue::Null,
            }),
            ELEM_NUMBER => Ok(decode_number(&element.text)),
            ELEM_ARRAY => self.decode_array(element, depth),
            ELEM_STRUCT => self.decode_struct(element, depth),
            // Unknown element names are tolerated as null.
            _ => Ok(WddxValue::Null),
        }
    }

    fn decode_array(&self, element: &XmlElement, depth: usize) -> Result<WddxValue, WddxError> {
        let mut items = Vec::with_capacity(element.children.len());
        for child in &element.children {
            items.push(self.decode_element(child, depth + 1)?);
        }
        // The length attribute is advisory; a mismatch is never
        // surfaced outside debug builds.
        if let Some(length) = element.attr(ATTR_LENGTH) {
            debug_assert_eq!(
                length.parse::<usize>().unwrap_or(items.len()),
                items.len(),
                "array length attribute does not match child count"
            );
        }
        Ok(WddxValue::Array(items))
    }

    fn decode_struct(&self, element: &XmlElement, depth: usize) -> Result<WddxValue, WddxError> {
        // The first member decides, positionally, whether this struct
        // is a serialized class instance.
        let Some(head) = element.children.first() else {
            return Ok(WddxValue::Null);
        };
        if head.name != ELEM_VAR {
            return Ok(WddxValue::Null);
        }
        let Some(head_name) = head.attr(ATTR_NAME) else {
            return Ok(WddxValue::Null);
        };
        if head_name == CLASS_TAG {
            return self.decode_object(element, head, depth);
        }

        let mut members = Vec::new();
        for child in &element.children {
            let Some((name, value_element)) = extract_var(child) else {
                continue;
            };
            members.push((name.to_string(), self.decode_element(value_element, depth + 1)?));
        }
        Ok(WddxValue::Struct(members))
    }

    fn decode_object(
        &self,
        element: &XmlElement,
        head: &XmlElement,
        depth: usize,
    ) -> Result<WddxValue, WddxError> {
        let class_name = match head.children.first() {
            Some(value_element) => match self.decode_element(value_element, depth + 1)? {
                WddxValue::Str(name) => name,
                _ => {
                    return Err(WddxError::MalformedPacket(
                        "class name var does not contain a string".to_string(),
                    ))
                }
            },
            None => {
                return Err(WddxError::MalformedPacket(
                    "class name var is empty".to_string(),
                ))
            }
        };

        let object = self.factory.construct(&class_name)?;
        // The first child is the class tag; it is consumed here, never
        // assigned as a field.
        for child in element.children.iter().skip(1) {
            let Some((name, value_element)) = extract_var(child) else {
                continue;
            };
            let value = self.decode_element(value_element, depth + 1)?;
            match object.set_field(name, value.clone()) {
                Err(WddxError::UnknownField(class, field)) => match self.unknown_fields {
                    UnknownFieldPolicy::Attach => object.attach(&field, value),
                    UnknownFieldPolicy::Skip => {}
                    UnknownFieldPolicy::Error => {
                        return Err(WddxError::UnknownField(class, field))
                    }
                },
                other => other?,
            }
        }
        Ok(WddxValue::Object(object))
    }
}

// Integer versus float is decided solely by a literal decimal point in
// the text; the native parser then applies. Text it rejects falls back
// to zero rather than erroring.
fn decode_number(text: &str) -> WddxValue {
    if text.contains('.') {
        WddxValue::Float(text.parse().unwrap_or(0.0))
    } else {
        WddxValue::Integer(text.parse().unwrap_or(0))
    }
}

// A usable var has the element name `var`, a `name` attribute, and
// exactly one nested value element. Anything else is skipped by the
// callers, not reported.
fn extract_var(element: &XmlElement) -> Option<(&str, &XmlElement)> {
    if element.name != ELEM_VAR {
        return None;
    }
    let name = element.attr(ATTR_NAME)?;
    if element.children.len() != 1 {
        return None;
    }
    Some((name, &element.children[0]))
}

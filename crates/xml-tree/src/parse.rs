//! Event-stream to tree parsing.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{XmlElement, XmlError};

pub(crate) fn parse(input: &str) -> Result<XmlElement, XmlError> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<XmlElement> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    // A self-closing root is a complete document.
                    None => return Ok(element),
                }
            }
            Event::End(_) => {
                let mut element = stack.pop().ok_or(XmlError::UnexpectedEof)?;
                drop_formatting_whitespace(&mut element);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(text.as_ref()).into_owned();
                    top.text.push_str(&unescape(&raw)?);
                }
            }
            Event::CData(cdata) => {
                if let Some(top) = stack.last_mut() {
                    top.text
                        .push_str(&String::from_utf8_lossy(cdata.as_ref()));
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(top) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(reference.as_ref()).into_owned();
                    top.text.push(resolve_reference(&raw)?);
                }
            }
            Event::Eof => {
                return Err(if stack.is_empty() {
                    XmlError::NoRoot
                } else {
                    XmlError::UnexpectedEof
                });
            }
            // Declaration, comments, PIs, DOCTYPE: structure we do not
            // keep.
            _ => {}
        }
    }
}

fn element_from_start(start: &BytesStart) -> Result<XmlElement, XmlError> {
    let mut element = XmlElement::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attribute.value).into_owned();
        element.attributes.push((key, unescape(&raw)?.into_owned()));
    }
    Ok(element)
}

// Whitespace-only text around element children is indentation, not
// content. Leaf-element text is kept as-is.
fn drop_formatting_whitespace(element: &mut XmlElement) {
    if !element.children.is_empty() && element.text.trim().is_empty() {
        element.text.clear();
    }
}

// Resolves the content of an `&...;` reference: the predefined XML
// entities plus decimal and hex character references.
fn resolve_reference(name: &str) -> Result<char, XmlError> {
    let name = name.trim_start_matches('&').trim_end_matches(';');
    match name {
        "amp" => Ok('&'),
        "lt" => Ok('<'),
        "gt" => Ok('>'),
        "quot" => Ok('"'),
        "apos" => Ok('\''),
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok()
            } else {
                None
            };
            code.and_then(char::from_u32)
                .ok_or_else(|| XmlError::UnknownEntity(name.to_string()))
        }
    }
}

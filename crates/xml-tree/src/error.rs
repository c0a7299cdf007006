//! XML tree error type.

use thiserror::Error;

/// Error type for parsing and serializing element trees.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
    #[error("invalid escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    #[error("unknown entity reference: &{0};")]
    UnknownEntity(String),
    #[error("document has no root element")]
    NoRoot,
    #[error("unexpected end of document")]
    UnexpectedEof,
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialized document is not valid UTF-8")]
    InvalidUtf8,
}

//! Codec error type.

use thiserror::Error;
use wddx_xml_tree::XmlError;

/// Error type for WDDX encoding and decoding operations.
///
/// Everything here is raised synchronously to the caller; nothing is
/// retried or recovered internally. Tolerated input shapes (a `boolean`
/// without its `value` attribute, an unnamed or incomplete `var`, an
/// unassignable field under the default policy) decode to `Null` or are
/// skipped instead of erroring.
#[derive(Debug, Error)]
pub enum WddxError {
    /// Structural violation in a packet: wrong number of data children,
    /// an invalid class-name source, or nesting beyond the depth limit.
    #[error("malformed packet: {0}")]
    MalformedPacket(String),
    #[error("unsupported value type for WDDX encoding: {0}")]
    UnsupportedType(&'static str),
    #[error("object of class {0} already seen, this probably means a cyclic reference somewhere")]
    CyclicReference(String),
    #[error("class {0} is not registered")]
    UnknownClass(String),
    #[error("class {0} has no field named {1}")]
    UnknownField(String, String),
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
    #[error(transparent)]
    Xml(#[from] XmlError),
}

//! Free-function entry points mirroring the classic WDDX API surface.
//!
//! Thin wrappers that construct a codec instance and delegate. The
//! variable-scope based functions have no sensible meaning outside a
//! dynamic host runtime and are deliberate stubs.

use crate::{WddxDecoder, WddxEncoder, WddxError, WddxValue};

/// Serializes a single value into a WDDX packet, with an optional
/// header comment.
pub fn serialize_value(value: &WddxValue, comment: Option<&str>) -> Result<String, WddxError> {
    let mut encoder = WddxEncoder::new();
    if let Some(comment) = comment {
        encoder.set_comment(comment);
    }
    encoder.encode(value)
}

/// Serializing host variables by name needs a variable scope to pull
/// them from; always fails with [`WddxError::NotImplemented`].
pub fn serialize_vars(_names: &[&str]) -> Result<String, WddxError> {
    Err(WddxError::NotImplemented("serialize_vars"))
}

/// Starts an incremental packet session.
pub fn packet_start(comment: Option<&str>) -> WddxEncoder {
    match comment {
        Some(comment) => WddxEncoder::with_comment(comment),
        None => WddxEncoder::new(),
    }
}

/// Serializes the packet built by a session from [`packet_start`].
pub fn packet_end(session: &WddxEncoder) -> Result<String, WddxError> {
    session.to_xml()
}

/// See [`serialize_vars`]; always fails with
/// [`WddxError::NotImplemented`].
pub fn add_vars(_session: &mut WddxEncoder, _names: &[&str]) -> Result<(), WddxError> {
    Err(WddxError::NotImplemented("add_vars"))
}

/// Deserializes a WDDX packet; an absent packet yields `Null` without
/// invoking the decoder.
///
/// Decoding runs against an empty class registry, so packets carrying
/// serialized objects fail with [`WddxError::UnknownClass`]. Hosts that
/// need object reconstruction should use [`WddxDecoder`] with a
/// populated [`ClassRegistry`](crate::ClassRegistry) directly.
pub fn deserialize(packet: Option<&str>) -> Result<WddxValue, WddxError> {
    match packet {
        None => Ok(WddxValue::Null),
        Some(packet) => WddxDecoder::new().decode(packet),
    }
}

//! Wire-format element and attribute names.

pub(crate) const ELEM_PACKET: &str = "wddxPacket";
pub(crate) const ELEM_HEADER: &str = "header";
pub(crate) const ELEM_COMMENT: &str = "comment";
pub(crate) const ELEM_DATA: &str = "data";
pub(crate) const ELEM_VAR: &str = "var";
pub(crate) const ELEM_NULL: &str = "null";
pub(crate) const ELEM_STRING: &str = "string";
pub(crate) const ELEM_NUMBER: &str = "number";
pub(crate) const ELEM_BOOLEAN: &str = "boolean";
pub(crate) const ELEM_ARRAY: &str = "array";
pub(crate) const ELEM_STRUCT: &str = "struct";

pub(crate) const ATTR_VERSION: &str = "version";
pub(crate) const ATTR_NAME: &str = "name";
pub(crate) const ATTR_VALUE: &str = "value";
pub(crate) const ATTR_LENGTH: &str = "length";

pub(crate) const PACKET_VERSION: &str = "1.0";

/// Reserved member name: a struct whose first var carries this name
/// decodes as a class instance instead of a generic struct.
pub const CLASS_TAG: &str = "php_class_name";

/// Maximum element nesting depth the decoder will follow before
/// reporting the packet as malformed.
pub(crate) const MAX_DEPTH: usize = 256;

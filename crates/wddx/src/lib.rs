//! WDDX packet encoding and decoding over a dynamic value model.
//!
//! A packet is a small XML document (`wddxPacket` with a header and a
//! single data payload) carrying scalars, positional arrays, ordered
//! structs, and class instances tagged by a reserved `php_class_name`
//! member. [`WddxEncoder`] walks a [`WddxValue`] into the element tree
//! and serializes it; [`WddxDecoder`] walks a parsed tree back into a
//! value, reconstructing instances through a [`ClassRegistry`].
//!
//! Everything is synchronous, single-threaded tree traversal. Encoder
//! sessions and [`WddxObject`] instances hold non-`Send` mutable state;
//! use one codec instance per thread and per packet.
//!
//! # Example
//!
//! ```
//! use wddx::{WddxDecoder, WddxEncoder, WddxValue};
//!
//! let mut encoder = WddxEncoder::new();
//! let packet = encoder.encode(&WddxValue::Str("test".into()))?;
//! assert_eq!(
//!     packet,
//!     "<wddxPacket version=\"1.0\"><header/><data><string>test</string></data></wddxPacket>"
//! );
//!
//! let value = WddxDecoder::new().decode(&packet)?;
//! assert_eq!(value, WddxValue::Str("test".into()));
//! # Ok::<(), wddx::WddxError>(())
//! ```

mod constants;
mod convert;
mod decoder;
mod encoder;
mod error;
mod functions;
mod object;
mod registry;
mod value;

pub use constants::CLASS_TAG;
pub use convert::{from_json, to_json};
pub use decoder::{UnknownFieldPolicy, WddxDecoder};
pub use encoder::WddxEncoder;
pub use error::WddxError;
pub use functions::{
    add_vars, deserialize, packet_end, packet_start, serialize_value, serialize_vars,
};
pub use object::WddxObject;
pub use registry::{ClassRegistry, ClassSpec, ObjectFactory};
pub use value::{ArrayKey, WddxValue};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        deserialize, from_json, serialize_value, to_json, ArrayKey, ClassRegistry, ClassSpec,
        WddxDecoder, WddxEncoder, WddxError, WddxObject, WddxValue,
    };

    fn roundtrip(value: &WddxValue) -> WddxValue {
        let packet = WddxEncoder::new().encode(value).expect("encode");
        WddxDecoder::new().decode(&packet).expect("decode")
    }

    #[test]
    fn scalar_roundtrip_matrix() {
        let cases = vec![
            WddxValue::Null,
            WddxValue::Str("test".to_owned()),
            WddxValue::Str(String::new()),
            WddxValue::Integer(1),
            WddxValue::Integer(-42),
            WddxValue::Float(10.11),
            WddxValue::Bool(true),
            WddxValue::Bool(false),
        ];
        for case in cases {
            assert_eq!(roundtrip(&case), case);
        }
    }

    #[test]
    fn container_roundtrip_matrix() {
        let cases = vec![
            WddxValue::Array(vec!["foo".into(), "bar".into()]),
            WddxValue::Array(Vec::new()),
            WddxValue::Struct(vec![
                ("foo".to_owned(), "bar".into()),
                ("baz".to_owned(), "quux".into()),
            ]),
            WddxValue::Struct(vec![
                ("foo".to_owned(), "bar".into()),
                (
                    "baz".to_owned(),
                    WddxValue::Struct(vec![("a".to_owned(), "b".into())]),
                ),
            ]),
            WddxValue::Array(vec![
                WddxValue::Integer(1),
                WddxValue::Float(2.5),
                WddxValue::Bool(false),
                WddxValue::Null,
            ]),
        ];
        for case in cases {
            assert_eq!(roundtrip(&case), case);
        }
    }

    #[test]
    fn object_roundtrip_through_registry() {
        let object = WddxObject::new("stdClass");
        object.set_field("foo", "bar".into()).unwrap();
        object.set_field("baz", "quux".into()).unwrap();

        let packet = WddxEncoder::new()
            .encode(&WddxValue::Object(object.clone()))
            .unwrap();

        let mut registry = ClassRegistry::new();
        registry.register(ClassSpec::open("stdClass"));
        let decoded = WddxDecoder::with_factory(registry).decode(&packet).unwrap();
        assert_eq!(decoded, WddxValue::Object(object));
    }

    #[test]
    fn from_pairs_classifies_lists_and_structs() {
        let list = WddxValue::from_pairs(vec![
            (ArrayKey::Int(0), "a".into()),
            (ArrayKey::Int(1), "b".into()),
        ]);
        assert_eq!(list, WddxValue::Array(vec!["a".into(), "b".into()]));

        let gap = WddxValue::from_pairs(vec![
            (ArrayKey::Int(0), "a".into()),
            (ArrayKey::Int(2), "b".into()),
        ]);
        assert_eq!(
            gap,
            WddxValue::Struct(vec![
                ("0".to_owned(), "a".into()),
                ("2".to_owned(), "b".into()),
            ])
        );

        let named = WddxValue::from_pairs(vec![
            (ArrayKey::Str("foo".to_owned()), "bar".into()),
            (ArrayKey::Int(0), "baz".into()),
        ]);
        assert_eq!(
            named,
            WddxValue::Struct(vec![
                ("foo".to_owned(), "bar".into()),
                ("0".to_owned(), "baz".into()),
            ])
        );
    }

    #[test]
    fn json_conversion_roundtrip() {
        let value = json!({
            "a": 1,
            "b": [true, null, "x"],
            "c": {"nested": 2.5}
        });
        let converted = from_json(&value);
        assert_eq!(to_json(&converted), value);
    }

    #[test]
    fn json_objects_preserve_member_order() {
        let value = json!({"z": 1, "a": 2, "m": 3});
        let WddxValue::Struct(members) = from_json(&value) else {
            panic!("expected struct");
        };
        let names: Vec<&str> = members.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn functions_layer_delegates() {
        let packet = serialize_value(&WddxValue::Null, Some("test")).unwrap();
        assert_eq!(
            packet,
            "<wddxPacket version=\"1.0\"><header><comment>test</comment></header><data><null/></data></wddxPacket>"
        );
        assert_eq!(deserialize(Some(&packet)).unwrap(), WddxValue::Null);
        assert_eq!(deserialize(None).unwrap(), WddxValue::Null);
    }

    #[test]
    fn variable_scope_functions_are_stubs() {
        assert!(matches!(
            super::serialize_vars(&["a"]),
            Err(WddxError::NotImplemented("serialize_vars"))
        ));
        let mut session = super::packet_start(None);
        assert!(matches!(
            super::add_vars(&mut session, &["a"]),
            Err(WddxError::NotImplemented("add_vars"))
        ));
    }
}

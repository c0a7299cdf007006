//! Dynamic value model carried by WDDX packets.

use crate::WddxObject;

/// Any value a WDDX packet can carry.
///
/// Integral and floating numbers are distinct variants at encode time;
/// both decode from the `number` element. `Struct` members are ordered
/// pairs: insertion order is preserved and member names are not required
/// to be unique.
#[derive(Debug, Clone, PartialEq)]
pub enum WddxValue {
    Null,
    Str(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<WddxValue>),
    Struct(Vec<(String, WddxValue)>),
    Object(WddxObject),
}

/// Key of a host associative container handed to [`WddxValue::from_pairs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayKey {
    Int(i64),
    Str(String),
}

impl WddxValue {
    /// Converts a host associative container into a value.
    ///
    /// The container becomes an `Array` iff its keys are exactly the
    /// integers `0..n-1` in that order; otherwise it becomes a `Struct`
    /// preserving iteration order, with integer keys stringified.
    pub fn from_pairs(pairs: Vec<(ArrayKey, WddxValue)>) -> WddxValue {
        let is_list = pairs
            .iter()
            .enumerate()
            .all(|(index, (key, _))| matches!(key, ArrayKey::Int(n) if *n == index as i64));

        if is_list {
            WddxValue::Array(pairs.into_iter().map(|(_, value)| value).collect())
        } else {
            WddxValue::Struct(
                pairs
                    .into_iter()
                    .map(|(key, value)| {
                        let name = match key {
                            ArrayKey::Int(n) => n.to_string(),
                            ArrayKey::Str(s) => s,
                        };
                        (name, value)
                    })
                    .collect(),
            )
        }
    }
}

impl From<&str> for WddxValue {
    fn from(value: &str) -> Self {
        WddxValue::Str(value.to_string())
    }
}

impl From<String> for WddxValue {
    fn from(value: String) -> Self {
        WddxValue::Str(value)
    }
}

impl From<i64> for WddxValue {
    fn from(value: i64) -> Self {
        WddxValue::Integer(value)
    }
}

impl From<f64> for WddxValue {
    fn from(value: f64) -> Self {
        WddxValue::Float(value)
    }
}

impl From<bool> for WddxValue {
    fn from(value: bool) -> Self {
        WddxValue::Bool(value)
    }
}

impl From<WddxObject> for WddxValue {
    fn from(value: WddxObject) -> Self {
        WddxValue::Object(value)
    }
}

//! Integer fields the API emits as either a JSON number or a numeric string

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ResourceError;

/// What a flexible integer accepts; every decode failure names it.
pub(crate) const EXPECTING: &str = "an integer or a string of digits";

/// A 64-bit integer that decodes from `7` or `"7"` and always encodes as `7`.
///
/// Empty strings, `null`, floats and non-digit strings are rejected rather
/// than defaulted to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlexInt(i64);

impl FlexInt {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Decode the raw JSON bytes of a single field.
    pub fn from_json(field: &str, raw: &[u8]) -> Result<Self, ResourceError> {
        serde_json::from_slice(raw).map_err(|_| ResourceError::MalformedNumericField {
            field: field.to_string(),
            raw: String::from_utf8_lossy(raw).into_owned(),
        })
    }
}

impl From<FlexInt> for i64 {
    fn from(value: FlexInt) -> Self {
        value.0
    }
}

impl fmt::Display for FlexInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for FlexInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

struct FlexIntVisitor;

impl<'de> Visitor<'de> for FlexIntVisitor {
    type Value = FlexInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(EXPECTING)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FlexInt, E> {
        Ok(FlexInt(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FlexInt, E> {
        i64::try_from(v)
            .map(FlexInt)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FlexInt, E> {
        v.parse::<i64>()
            .map(FlexInt)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for FlexInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlexIntVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, Serialize)]
    struct PhpVersion {
        php_version: FlexInt,
    }

    #[test]
    fn test_decodes_number() {
        let v: PhpVersion = serde_json::from_str(r#"{"php_version": 7}"#).unwrap();
        assert_eq!(v.php_version.value(), 7);
    }

    #[test]
    fn test_decodes_numeric_string() {
        let v: PhpVersion = serde_json::from_str(r#"{"php_version": "7"}"#).unwrap();
        assert_eq!(v.php_version.value(), 7);
    }

    #[test]
    fn test_decodes_signed_string() {
        assert_eq!(FlexInt::from_json("n", br#""-42""#).unwrap().value(), -42);
        assert_eq!(FlexInt::from_json("n", br#""+42""#).unwrap().value(), 42);
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(serde_json::from_str::<PhpVersion>(r#"{"php_version": ""}"#).is_err());

        match FlexInt::from_json("php_version", br#""""#) {
            Err(ResourceError::MalformedNumericField { field, raw }) => {
                assert_eq!(field, "php_version");
                assert_eq!(raw, "\"\"");
            }
            other => panic!("Expected MalformedNumericField, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_null() {
        assert!(serde_json::from_str::<PhpVersion>(r#"{"php_version": null}"#).is_err());
        assert!(matches!(
            FlexInt::from_json("created", b"null"),
            Err(ResourceError::MalformedNumericField { .. })
        ));
    }

    #[test]
    fn test_rejects_non_numeric_values() {
        let cases: [&[u8]; 6] = [br#""7.4""#, br#""abc""#, br#"" 7""#, b"7.5", b"true", b"[]"];
        for raw in cases {
            assert!(
                FlexInt::from_json("php_version", raw).is_err(),
                "accepted {}",
                String::from_utf8_lossy(raw)
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range_unsigned() {
        assert!(FlexInt::from_json("created", b"18446744073709551615").is_err());
    }

    #[test]
    fn test_encodes_as_bare_number() {
        let cases: [&[u8]; 2] = [b"1546300800", br#""1546300800""#];
        for raw in cases {
            let value = FlexInt::from_json("created", raw).unwrap();
            assert_eq!(serde_json::to_value(value).unwrap(), json!(1546300800));
        }

        let v: PhpVersion = serde_json::from_str(r#"{"php_version": "56"}"#).unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"php_version":56}"#);
    }

    #[test]
    fn test_converts_into_i64() {
        let created = FlexInt::from_json("created", br#""1546300800""#).unwrap();
        assert_eq!(i64::from(created), 1546300800);
    }

    #[test]
    fn test_error_names_accepted_forms() {
        let err = serde_json::from_str::<FlexInt>("true").unwrap_err();
        assert!(err.to_string().contains(EXPECTING));
    }
}

//! Conversion between typed scalar values and their textual form.
//!
//! ## Menu
//!
//! - [`ScalarType`]: the closed set of supported types, keyed by type name.
//! - [`ScalarValue`]: a decoded value of one of those types.
//! - [`Scalar`]: maps a Rust type onto a [`ScalarType`].
//! - [`IntoProperty`] and [`PropertyValue`]: what a getter produces on save.
//!
//! Dispatch always goes through the type *name* written next to the value,
//! never through the runtime type of a value being decoded.
//!
//! | Rust type                 | Type name           |
//! |---------------------------|---------------------|
//! | `bool`                    | `boolean`           |
//! | `Option<bool>`            | `java.lang.Boolean` |
//! | `i8`                      | `byte`              |
//! | `Option<i8>`              | `java.lang.Byte`    |
//! | `DateTime<Utc>` (+Option) | `java.util.Date`    |
//! | `f64`                     | `double`            |
//! | `Option<f64>`             | `java.lang.Double`  |
//! | `f32`                     | `float`             |
//! | `Option<f32>`             | `java.lang.Float`   |
//! | `i32`                     | `int`               |
//! | `Option<i32>`             | `java.lang.Integer` |
//! | `i64`                     | `long`              |
//! | `Option<i64>`             | `java.lang.Long`    |
//! | `i16`                     | `short`             |
//! | `Option<i16>`             | `java.lang.Short`   |
//! | `String` (+Option)        | `java.lang.String`  |

// -----------------------------------------------------------------------------
// Modules

mod date;
mod number;
mod property;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use date::DATE_FORMAT;
pub use property::{IntoProperty, PropertyValue};
pub use scalar::Scalar;

use alloc::string::{String, ToString};
use core::fmt;

use chrono::{DateTime, Utc};

// -----------------------------------------------------------------------------
// ScalarType

/// One of the supported scalar types.
///
/// Primitive and boxed forms are distinct variants because they are distinct
/// type names on disk, and a setter only matches the exact form it declares.
/// Both forms share a single [`ScalarValue`] representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Boolean,
    BoxedBoolean,
    Byte,
    BoxedByte,
    Date,
    Double,
    BoxedDouble,
    Float,
    BoxedFloat,
    Int,
    BoxedInt,
    Long,
    BoxedLong,
    Short,
    BoxedShort,
    String,
}

impl ScalarType {
    /// Every supported type, in dispatch priority order.
    pub const ALL: [ScalarType; 16] = [
        Self::Boolean,
        Self::BoxedBoolean,
        Self::Byte,
        Self::BoxedByte,
        Self::Date,
        Self::Double,
        Self::BoxedDouble,
        Self::Float,
        Self::BoxedFloat,
        Self::Int,
        Self::BoxedInt,
        Self::Long,
        Self::BoxedLong,
        Self::Short,
        Self::BoxedShort,
        Self::String,
    ];

    /// The name written to the `type` attribute.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::BoxedBoolean => "java.lang.Boolean",
            Self::Byte => "byte",
            Self::BoxedByte => "java.lang.Byte",
            Self::Date => "java.util.Date",
            Self::Double => "double",
            Self::BoxedDouble => "java.lang.Double",
            Self::Float => "float",
            Self::BoxedFloat => "java.lang.Float",
            Self::Int => "int",
            Self::BoxedInt => "java.lang.Integer",
            Self::Long => "long",
            Self::BoxedLong => "java.lang.Long",
            Self::Short => "short",
            Self::BoxedShort => "java.lang.Short",
            Self::String => "java.lang.String",
        }
    }

    /// Looks a type up by its exact name. Unknown names yield `None`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.type_name() == name)
    }

    /// Whether this is the nullable form of a primitive.
    pub const fn is_boxed(self) -> bool {
        matches!(
            self,
            Self::BoxedBoolean
                | Self::BoxedByte
                | Self::BoxedDouble
                | Self::BoxedFloat
                | Self::BoxedInt
                | Self::BoxedLong
                | Self::BoxedShort
        )
    }

    /// Whether values of this type are stored as character data
    /// rather than in the `value` attribute.
    #[inline]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::String)
    }

    /// Parses `text` as a value of this type.
    ///
    /// Numeric and date parse failures yield `None`. Booleans never fail:
    /// anything other than a case-insensitive `true` is `false`.
    pub fn decode(self, text: &str) -> Option<ScalarValue> {
        match self {
            Self::Boolean | Self::BoxedBoolean => {
                Some(ScalarValue::Boolean(text.eq_ignore_ascii_case("true")))
            }
            Self::Byte | Self::BoxedByte => number::parse_integral(text).map(ScalarValue::Byte),
            Self::Date => date::parse_date(text).map(ScalarValue::Date),
            Self::Double | Self::BoxedDouble => {
                number::parse_floating(text).map(ScalarValue::Double)
            }
            Self::Float | Self::BoxedFloat => number::parse_floating(text).map(ScalarValue::Float),
            Self::Int | Self::BoxedInt => number::parse_integral(text).map(ScalarValue::Int),
            Self::Long | Self::BoxedLong => number::parse_integral(text).map(ScalarValue::Long),
            Self::Short | Self::BoxedShort => number::parse_integral(text).map(ScalarValue::Short),
            Self::String => Some(ScalarValue::String(text.to_string())),
        }
    }
}

impl fmt::Display for ScalarType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Parses `text` according to the type named `type_name`.
///
/// Returns `None` for unknown type names as well as for unparsable text.
#[inline]
pub fn decode(type_name: &str, text: &str) -> Option<ScalarValue> {
    ScalarType::from_type_name(type_name)?.decode(text)
}

// -----------------------------------------------------------------------------
// ScalarValue

/// A value of one of the supported scalar types.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Boolean(bool),
    Byte(i8),
    Date(DateTime<Utc>),
    Double(f64),
    Float(f32),
    Int(i32),
    Long(i64),
    Short(i16),
    String(String),
}

impl ScalarValue {
    /// Renders the canonical textual form.
    pub fn encode(&self) -> String {
        match self {
            Self::Boolean(value) => value.to_string(),
            Self::Byte(value) => value.to_string(),
            Self::Date(value) => date::format_date(value),
            Self::Double(value) => number::format_double(*value),
            Self::Float(value) => number::format_float(*value),
            Self::Int(value) => value.to_string(),
            Self::Long(value) => value.to_string(),
            Self::Short(value) => value.to_string(),
            Self::String(value) => value.clone(),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ScalarType, ScalarValue, decode};
    use chrono::{TimeZone, Utc};

    #[test]
    fn type_names() {
        for ty in ScalarType::ALL {
            assert_eq!(ScalarType::from_type_name(ty.type_name()), Some(ty));
        }
        assert_eq!(ScalarType::from_type_name("java.util.List"), None);
        assert_eq!(ScalarType::from_type_name(""), None);
        assert_eq!(ScalarType::from_type_name("Int"), None);

        assert!(ScalarType::BoxedInt.is_boxed());
        assert!(!ScalarType::Int.is_boxed());
        assert!(!ScalarType::String.is_boxed());
        assert!(ScalarType::String.is_text());
        assert!(!ScalarType::Date.is_text());
    }

    #[test]
    fn decode_failures_are_absent() {
        assert_eq!(decode("int", "12a"), None);
        assert_eq!(decode("int", ""), None);
        assert_eq!(decode("byte", "128"), None);
        assert_eq!(decode("short", " 1"), None);
        assert_eq!(decode("java.util.Date", "yesterday"), None);
        assert_eq!(decode("double", "one"), None);
        assert_eq!(decode("java.util.List", "[]"), None);
    }

    #[test]
    fn decode_boolean_is_lenient() {
        assert_eq!(decode("boolean", "TRUE"), Some(ScalarValue::Boolean(true)));
        assert_eq!(decode("java.lang.Boolean", "true"), Some(ScalarValue::Boolean(true)));
        assert_eq!(decode("boolean", "yes"), Some(ScalarValue::Boolean(false)));
        assert_eq!(decode("boolean", ""), Some(ScalarValue::Boolean(false)));
    }

    #[test]
    fn decode_numbers() {
        assert_eq!(decode("int", "-42"), Some(ScalarValue::Int(-42)));
        assert_eq!(decode("java.lang.Integer", "+7"), Some(ScalarValue::Int(7)));
        assert_eq!(decode("long", "9007199254740993"), Some(ScalarValue::Long(9007199254740993)));
        assert_eq!(decode("short", "-32768"), Some(ScalarValue::Short(i16::MIN)));
        assert_eq!(decode("byte", "127"), Some(ScalarValue::Byte(127)));
        assert_eq!(decode("double", "1.0E10"), Some(ScalarValue::Double(1e10)));
        assert_eq!(decode("double", " 2.5d "), Some(ScalarValue::Double(2.5)));
        assert_eq!(decode("float", "0.1f"), Some(ScalarValue::Float(0.1)));
        assert_eq!(
            decode("java.lang.Double", "-Infinity"),
            Some(ScalarValue::Double(f64::NEG_INFINITY))
        );
        assert!(matches!(decode("float", "NaN"), Some(ScalarValue::Float(v)) if v.is_nan()));
    }

    #[test]
    fn decode_string_keeps_text() {
        assert_eq!(
            decode("java.lang.String", " <a & \"b\"> "),
            Some(ScalarValue::String(" <a & \"b\"> ".into()))
        );
    }

    #[test]
    fn round_trip() {
        let date = Utc.with_ymd_and_hms(2014, 3, 5, 10, 22, 1).unwrap()
            + chrono::TimeDelta::milliseconds(123);

        let cases = [
            (ScalarType::Boolean, ScalarValue::Boolean(true)),
            (ScalarType::BoxedByte, ScalarValue::Byte(-128)),
            (ScalarType::Date, ScalarValue::Date(date)),
            (ScalarType::Double, ScalarValue::Double(0.1 + 0.2)),
            (ScalarType::BoxedFloat, ScalarValue::Float(3.4028235e38)),
            (ScalarType::Int, ScalarValue::Int(i32::MAX)),
            (ScalarType::BoxedLong, ScalarValue::Long(i64::MIN)),
            (ScalarType::Short, ScalarValue::Short(-1)),
            (ScalarType::String, ScalarValue::String("]]> ok".into())),
        ];

        for (ty, value) in cases {
            assert_eq!(ty.decode(&value.encode()), Some(value));
        }
    }
}

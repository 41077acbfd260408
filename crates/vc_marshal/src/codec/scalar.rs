use alloc::string::String;

use chrono::{DateTime, Utc};

use super::{ScalarType, ScalarValue};

// -----------------------------------------------------------------------------
// Scalar

/// A Rust type that maps onto one supported [`ScalarType`].
///
/// Plain types map to the primitive form and `Option<_>` maps to the boxed
/// form, so a setter's parameter type alone decides which type name it
/// accepts. `String` and `DateTime<Utc>` have no primitive form; both the
/// plain and the optional type map to the same name.
///
/// The set of implementations is closed. Other types can still be written
/// through an opaque getter, but can never be read back.
pub trait Scalar: Sized {
    /// The type name this Rust type is written and matched under.
    const TYPE: ScalarType;

    /// `None` for an empty optional.
    fn into_scalar(self) -> Option<ScalarValue>;

    /// `None` if `value` is a different kind of scalar.
    fn from_scalar(value: ScalarValue) -> Option<Self>;
}

macro_rules! impl_scalar {
    ($ty:ty, $plain:ident, $optional:ident, $variant:ident) => {
        impl Scalar for $ty {
            const TYPE: ScalarType = ScalarType::$plain;

            #[inline]
            fn into_scalar(self) -> Option<ScalarValue> {
                Some(ScalarValue::$variant(self))
            }

            #[inline]
            fn from_scalar(value: ScalarValue) -> Option<Self> {
                match value {
                    ScalarValue::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }

        impl Scalar for Option<$ty> {
            const TYPE: ScalarType = ScalarType::$optional;

            #[inline]
            fn into_scalar(self) -> Option<ScalarValue> {
                self.map(ScalarValue::$variant)
            }

            #[inline]
            fn from_scalar(value: ScalarValue) -> Option<Self> {
                <$ty as Scalar>::from_scalar(value).map(Some)
            }
        }
    };
}

impl_scalar!(bool, Boolean, BoxedBoolean, Boolean);
impl_scalar!(i8, Byte, BoxedByte, Byte);
impl_scalar!(DateTime<Utc>, Date, Date, Date);
impl_scalar!(f64, Double, BoxedDouble, Double);
impl_scalar!(f32, Float, BoxedFloat, Float);
impl_scalar!(i32, Int, BoxedInt, Int);
impl_scalar!(i64, Long, BoxedLong, Long);
impl_scalar!(i16, Short, BoxedShort, Short);
impl_scalar!(String, String, String, String);

// -----------------------------------------------------------------------------
// Tests

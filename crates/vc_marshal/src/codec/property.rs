use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt::Display;

use chrono::{DateTime, Utc};

use super::{Scalar, ScalarType, ScalarValue};

// -----------------------------------------------------------------------------
// PropertyValue

/// The result of reading one getter, ready to be written as an element.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A supported type. `value` is `None` for an empty optional,
    /// which is written as empty text.
    Scalar {
        ty: ScalarType,
        value: Option<ScalarValue>,
    },
    /// Any other type. Written under its Rust type name and never read back.
    Opaque {
        type_name: Cow<'static, str>,
        text: String,
    },
}

impl PropertyValue {
    /// Wraps a value of an unsupported type using its `Display` form.
    pub fn opaque<R: Display>(value: R) -> Self {
        let type_name = core::any::type_name::<R>().trim_start_matches('&');
        Self::Opaque {
            type_name: Cow::Borrowed(type_name),
            text: value.to_string(),
        }
    }

    /// The name written to the `type` attribute.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Scalar { ty, .. } => ty.type_name(),
            Self::Opaque { type_name, .. } => type_name.as_ref(),
        }
    }

    /// Whether the value is written as character data.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Scalar { ty, .. } if ty.is_text())
    }

    /// The textual form, empty for an absent value.
    pub fn encode(&self) -> String {
        match self {
            Self::Scalar { value, .. } => value.as_ref().map(ScalarValue::encode).unwrap_or_default(),
            Self::Opaque { text, .. } => text.clone(),
        }
    }
}

// -----------------------------------------------------------------------------
// IntoProperty

/// Conversion of a getter's return value into a [`PropertyValue`].
///
/// Implemented for every [`Scalar`] type and for borrowed forms
/// a getter commonly returns (`&str`, `&String`, `&DateTime<Utc>`, ...).
pub trait IntoProperty {
    fn into_property(self) -> PropertyValue;
}

#[inline]
fn scalar_property<T: Scalar>(value: T) -> PropertyValue {
    PropertyValue::Scalar {
        ty: T::TYPE,
        value: value.into_scalar(),
    }
}

macro_rules! impl_into_property {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoProperty for $ty {
                #[inline]
                fn into_property(self) -> PropertyValue {
                    scalar_property(self)
                }
            }

            impl IntoProperty for Option<$ty> {
                #[inline]
                fn into_property(self) -> PropertyValue {
                    scalar_property(self)
                }
            }

            impl IntoProperty for &$ty {
                #[inline]
                fn into_property(self) -> PropertyValue {
                    scalar_property(self.clone())
                }
            }

            impl IntoProperty for &Option<$ty> {
                #[inline]
                fn into_property(self) -> PropertyValue {
                    scalar_property(self.clone())
                }
            }
        )*
    };
}

impl_into_property!(bool, i8, i16, i32, i64, f32, f64, String, DateTime<Utc>);

impl IntoProperty for &str {
    #[inline]
    fn into_property(self) -> PropertyValue {
        scalar_property(self.to_string())
    }
}

impl IntoProperty for Option<&str> {
    #[inline]
    fn into_property(self) -> PropertyValue {
        scalar_property(self.map(ToString::to_string))
    }
}

impl IntoProperty for PropertyValue {
    #[inline]
    fn into_property(self) -> PropertyValue {
        self
    }
}

// -----------------------------------------------------------------------------
// Tests

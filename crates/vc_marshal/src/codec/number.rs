use alloc::string::{String, ToString};
use core::str::FromStr;

// -----------------------------------------------------------------------------
// Parsing

/// Optional sign followed by decimal digits, range checked. No whitespace.
#[inline]
pub(super) fn parse_integral<T: FromStr>(text: &str) -> Option<T> {
    text.parse().ok()
}

/// Surrounding whitespace and a trailing `f`/`d` type suffix are accepted,
/// as are `NaN` and `Infinity`.
pub(super) fn parse_floating<T: FromStr>(text: &str) -> Option<T> {
    let text = text.trim();
    let text = text
        .strip_suffix(|c: char| matches!(c, 'f' | 'F' | 'd' | 'D'))
        .unwrap_or(text);
    text.parse().ok()
}

// -----------------------------------------------------------------------------
// Formatting

macro_rules! impl_format_floating {
    ($name:ident, $ty:ty) => {
        /// Plain decimal with at least one fractional digit for magnitudes in
        /// `[1e-3, 1e7)`, otherwise `d.dddE±n`.
        pub(super) fn $name(value: $ty) -> String {
            if value.is_nan() {
                return "NaN".to_string();
            }
            if value.is_infinite() {
                let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
                return text.to_string();
            }

            let magnitude = value.abs();
            if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
                let mut text = value.to_string();
                if !text.contains('.') {
                    text.push_str(".0");
                }
                text
            } else {
                let text = format!("{value:E}");
                match text.split_once('E') {
                    Some((mantissa, exponent)) if !mantissa.contains('.') => {
                        format!("{mantissa}.0E{exponent}")
                    }
                    _ => text,
                }
            }
        }
    };
}

impl_format_floating!(format_double, f64);
impl_format_floating!(format_float, f32);

// -----------------------------------------------------------------------------
// Tests

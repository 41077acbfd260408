use alloc::string::String;

/// Prefix of a read accessor.
pub const GETTER_PREFIX: &str = "get";
/// Alternative prefix of a read accessor.
pub const BOOLEAN_GETTER_PREFIX: &str = "is";
/// Prefix of a write accessor.
pub const SETTER_PREFIX: &str = "set";

/// Uppercases the first character only.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character only, so `URL` becomes `uRL`.
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The write accessor for a property: `id` gives `setId`.
///
/// An empty property name gives the bare prefix `set`.
#[inline]
pub fn setter_name(property_name: &str) -> String {
    let mut name = String::from(SETTER_PREFIX);
    name.push_str(&capitalize(property_name));
    name
}

/// The property behind a read accessor: `getAppName` gives `appName`,
/// `isActive` gives `active` and `getURL` gives `uRL`.
///
/// Only meaningful for identifiers accepted by [`is_getter`].
pub fn property_name(getter_name: &str) -> String {
    let stripped = getter_name
        .strip_prefix(BOOLEAN_GETTER_PREFIX)
        .or_else(|| getter_name.strip_prefix(GETTER_PREFIX))
        .unwrap_or(getter_name);
    decapitalize(stripped)
}

/// A read accessor takes no argument, returns a value, and is named
/// `get…` or `is…` with something after the prefix.
pub fn is_getter(ident: &str, arity: usize, returns_value: bool) -> bool {
    let named = (ident.starts_with(GETTER_PREFIX) && ident.len() > GETTER_PREFIX.len())
        || (ident.starts_with(BOOLEAN_GETTER_PREFIX) && ident.len() > BOOLEAN_GETTER_PREFIX.len());
    named && arity == 0 && returns_value
}

// -----------------------------------------------------------------------------
// Tests

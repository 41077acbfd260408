//! Accessor identifiers of Rust methods.
//!
//! The lowerCamel rule lives here only: accessor identifiers are fixed at
//! expansion time. The prefixes match `vc_marshal::access::GETTER_PREFIX`,
//! `BOOLEAN_GETTER_PREFIX` and `SETTER_PREFIX`.

pub(crate) const GETTER_PREFIX: &str = "get";
pub(crate) const BOOLEAN_GETTER_PREFIX: &str = "is";
pub(crate) const SETTER_PREFIX: &str = "set";

/// The lowerCamel form of a method name: `get_app_name` gives `getAppName`.
///
/// A raw identifier prefix (`r#`) is ignored, as are empty segments.
pub(crate) fn accessor_ident(method_name: &str) -> String {
    let method_name = method_name.strip_prefix("r#").unwrap_or(method_name);
    let mut segments = method_name.split('_').filter(|segment| !segment.is_empty());

    let mut ident = String::with_capacity(method_name.len());
    ident.extend(segments.next());
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            ident.extend(first.to_uppercase());
            ident.push_str(chars.as_str());
        }
    }
    ident
}

pub(crate) fn is_getter_ident(ident: &str) -> bool {
    [GETTER_PREFIX, BOOLEAN_GETTER_PREFIX]
        .into_iter()
        .any(|prefix| ident.len() > prefix.len() && ident.starts_with(prefix))
}

pub(crate) fn is_setter_ident(ident: &str) -> bool {
    ident.starts_with(SETTER_PREFIX)
}

// -----------------------------------------------------------------------------
// Tests

//! Naming convention utilities for generated identifiers.
//!
//! Service descriptions use whatever spelling the remote side picked; the
//! generated classes use PHP conventions.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `get-user` | [`to_camel_case`] | `getUser` |
//! | `user.profile` | [`to_pascal_case`] | `UserProfile` |
//! | `word` | [`capitalize`] | `Word` |
//! | `Word` | [`lcfirst`] | `word` |

/// Split an identifier on the separators service descriptions commonly use.
fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(['-', '.', ' ']).filter(|w| !w.is_empty())
}

/// Convert a dashed, dotted or spaced name to camelCase.
///
/// Underscores are kept as-is.
///
/// # Examples
///
/// ```
/// use soapgen_codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("get-user"), "getUser");
/// assert_eq!(to_camel_case("GetUser"), "getUser");
/// assert_eq!(to_camel_case("get_user"), "get_user");
/// ```
pub fn to_camel_case(s: &str) -> String {
    lcfirst(&to_pascal_case(s))
}

/// Convert a dashed, dotted or spaced name to PascalCase.
///
/// # Examples
///
/// ```
/// use soapgen_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("user.profile"), "UserProfile");
/// assert_eq!(to_pascal_case("address"), "Address");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    words(s).map(capitalize).collect()
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use soapgen_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first letter of a string.
pub fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

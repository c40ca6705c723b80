//! Type name normalization and import management.
//!
//! Signatures and docblocks refer to other classes by their short name; the
//! class being built must then import the qualifying name. Imports are
//! deduplicated by exact string only: two different qualified names that end
//! in the same short name are not aliased automatically.

use crate::naming::{to_camel_case, to_pascal_case};
use soapgen_core::{
    ClassModel, ModelError, ModelResult, NAMESPACE_SEPARATOR, Property, is_builtin_type,
    is_valid_identifier,
};
use tracing::trace;

const RESERVED_WORDS: &[&str] = &[
    "abstract", "and", "array", "as", "bool", "break", "callable", "case", "catch", "class",
    "clone", "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval", "exit",
    "extends", "false", "final", "finally", "float", "fn", "for", "foreach", "function", "global",
    "goto", "if", "implements", "include", "instanceof", "insteadof", "int", "interface", "isset",
    "iterable", "list", "match", "mixed", "namespace", "never", "new", "null", "object", "or",
    "parent", "print", "private", "protected", "public", "readonly", "require", "return", "self",
    "static", "string", "switch", "throw", "trait", "true", "try", "unset", "use", "var", "void",
    "while", "xor", "yield",
];

/// How a qualified name is turned into a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStyle {
    /// Import the full name, display the short name.
    Plain,
    /// Import the parent namespace, display `Parent\Short`.
    ///
    /// Keeps item types from different schema namespaces apart when their
    /// short names collide.
    Prefixed,
}

/// Check whether a name needs no import at all.
pub fn is_known_type(name: &str) -> bool {
    is_builtin_type(name)
}

/// Return the last segment of a qualified name.
pub fn class_name_from_fqn(fqcn: &str) -> &str {
    fqcn.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(fqcn)
}

/// Check whether a name collides with a reserved word.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name.to_ascii_lowercase().as_str())
}

/// Turn an operation name into a method name.
pub fn normalize_method_name(name: &str) -> ModelResult<String> {
    let normalized = to_camel_case(name);
    if is_valid_identifier(&normalized) {
        Ok(normalized)
    } else {
        Err(ModelError::invalid_identifier("method", name))
    }
}

/// Turn a schema type name into a class name.
///
/// Names clashing with reserved words get a `Type` suffix.
pub fn normalize_class_name(name: &str) -> String {
    let normalized = to_pascal_case(name);
    if is_reserved_word(&normalized) {
        format!("{normalized}Type")
    } else {
        normalized
    }
}

/// The declared type of a property, fully qualified unless builtin.
pub fn property_type(property: &Property) -> String {
    let type_name = property.type_name();
    if is_known_type(type_name) {
        return type_name.to_string();
    }

    let namespace = property.namespace().trim_matches(NAMESPACE_SEPARATOR);
    let class_name = normalize_class_name(type_name);
    if namespace.is_empty() {
        format!("{NAMESPACE_SEPARATOR}{class_name}")
    } else {
        format!("{NAMESPACE_SEPARATOR}{namespace}{NAMESPACE_SEPARATOR}{class_name}")
    }
}

/// Split a qualified name into validated segments.
pub(crate) fn split_fqcn(fqcn: &str) -> ModelResult<Vec<&str>> {
    let trimmed = fqcn.trim_start_matches(NAMESPACE_SEPARATOR);
    if trimmed.is_empty() {
        return Err(ModelError::EmptyTypeName);
    }

    let segments: Vec<&str> = trimmed.split(NAMESPACE_SEPARATOR).collect();
    if let Some(bad) = segments.iter().find(|s| !is_valid_identifier(s)) {
        return Err(ModelError::invalid_identifier("type", *bad));
    }
    Ok(segments)
}

/// Resolve a qualified name to its display name, importing it into `class`.
///
/// Builtins are returned unchanged and never imported. Names in the global
/// namespace and the class itself are never imported either.
pub fn resolve_type_name(
    class: &mut ClassModel,
    fqcn: &str,
    style: ImportStyle,
) -> ModelResult<String> {
    if is_known_type(fqcn) {
        return Ok(fqcn.to_string());
    }

    let mut segments = split_fqcn(fqcn)?;
    let short_name = segments.pop().ok_or(ModelError::EmptyTypeName)?;

    let prefix = match style {
        ImportStyle::Prefixed => segments.pop(),
        ImportStyle::Plain => None,
    };
    let namespace = segments.join("\\");

    let (display, import) = match prefix {
        Some(prefix) => (
            format!("{prefix}{NAMESPACE_SEPARATOR}{short_name}"),
            join_name(&namespace, prefix),
        ),
        None => (short_name.to_string(), join_name(&namespace, short_name)),
    };

    if !import.contains(NAMESPACE_SEPARATOR) || import == class.fqcn() {
        return Ok(display);
    }

    if namespace != class.namespace() || !class.has_use(&import) {
        trace!(class = %class.fqcn(), import = %import, "registering import");
        class.add_use(&import);
    }

    Ok(display)
}

fn join_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}{NAMESPACE_SEPARATOR}{name}")
    }
}

#[cfg(test)]
#[path = "normalizer/normalizer_tests.rs"]
mod normalizer_tests;

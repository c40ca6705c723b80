#![allow(non_snake_case)]

use super::*;
use std::error::Error as _;

#[test]
fn AssemblerError___mismatch___names_expected_and_actual() {
    let error = AssemblerError::mismatch(
        "ClientMethodAssembler",
        "ClientMethodContext",
        ContextKind::Type,
    );

    let display = error.to_string();

    assert_eq!(
        display,
        "ClientMethodAssembler expects a ClientMethodContext as input, TypeContext given"
    );
    assert_eq!(error.error_code(), 1);
}

#[test]
fn AssemblerError___generation___names_class_and_member() {
    let error = AssemblerError::generation(
        "PropertyAssembler",
        "App\\Type\\Address",
        "my-prop",
        ModelError::invalid_identifier("property", "my-prop"),
    );

    let display = error.to_string();

    assert!(display.contains("PropertyAssembler"));
    assert!(display.contains("App\\Type\\Address"));
    assert!(display.contains("'my-prop'"));
    assert_eq!(error.error_code(), 2);
}

#[test]
fn AssemblerError___generation___keeps_original_cause() {
    let error = AssemblerError::generation(
        "ClientMethodAssembler",
        "App\\Client",
        "getUser",
        ModelError::EmptyTypeName,
    );

    let source = error.source().map(ToString::to_string);

    assert_eq!(source.as_deref(), Some("type name cannot be empty"));
}

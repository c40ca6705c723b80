#![allow(non_snake_case)]

use super::*;
use soapgen_core::TypeMeta;
use test_case::test_case;

fn class() -> ClassModel {
    ClassModel::new("MyClient", "App\\Client")
}

// resolve_type_name

#[test]
fn resolve_type_name___builtin___returned_without_import() {
    let mut class = class();

    let name = resolve_type_name(&mut class, "string", ImportStyle::Plain).unwrap();

    assert_eq!(name, "string");
    assert_eq!(class.uses().count(), 0);
}

#[test]
fn resolve_type_name___plain___imports_full_name() {
    let mut class = class();

    let name =
        resolve_type_name(&mut class, "\\App\\Type\\GetUser", ImportStyle::Plain).unwrap();

    assert_eq!(name, "GetUser");
    assert_eq!(class.uses().collect::<Vec<_>>(), vec!["App\\Type\\GetUser"]);
}

#[test]
fn resolve_type_name___prefixed___imports_parent_namespace() {
    let mut class = class();

    let name =
        resolve_type_name(&mut class, "\\App\\Type\\GetUser", ImportStyle::Prefixed).unwrap();

    assert_eq!(name, "Type\\GetUser");
    assert_eq!(class.uses().collect::<Vec<_>>(), vec!["App\\Type"]);
}

#[test]
fn resolve_type_name___prefixed___keeps_colliding_short_names_apart() {
    let mut class = class();

    let first =
        resolve_type_name(&mut class, "App\\Billing\\Address", ImportStyle::Prefixed).unwrap();
    let second =
        resolve_type_name(&mut class, "App\\Shipping\\Address", ImportStyle::Prefixed).unwrap();

    assert_eq!(first, "Billing\\Address");
    assert_eq!(second, "Shipping\\Address");
    assert_eq!(
        class.uses().collect::<Vec<_>>(),
        vec!["App\\Billing", "App\\Shipping"]
    );
}

#[test]
fn resolve_type_name___plain___does_not_alias_colliding_short_names() {
    let mut class = class();

    let first = resolve_type_name(&mut class, "App\\Billing\\Address", ImportStyle::Plain).unwrap();
    let second =
        resolve_type_name(&mut class, "App\\Shipping\\Address", ImportStyle::Plain).unwrap();

    assert_eq!(first, "Address");
    assert_eq!(second, "Address");
    assert_eq!(class.uses().count(), 2);
}

#[test]
fn resolve_type_name___repeated___imports_once() {
    let mut class = class();

    resolve_type_name(&mut class, "App\\Type\\GetUser", ImportStyle::Plain).unwrap();
    resolve_type_name(&mut class, "\\App\\Type\\GetUser", ImportStyle::Plain).unwrap();

    assert_eq!(class.uses().count(), 1);
}

#[test]
fn resolve_type_name___global_name___not_imported() {
    let mut class = class();

    let name = resolve_type_name(&mut class, "\\ArrayIterator", ImportStyle::Plain).unwrap();

    assert_eq!(name, "ArrayIterator");
    assert_eq!(class.uses().count(), 0);
}

#[test]
fn resolve_type_name___own_class___not_imported() {
    let mut class = class();

    let name = resolve_type_name(&mut class, "App\\Client\\MyClient", ImportStyle::Plain).unwrap();

    assert_eq!(name, "MyClient");
    assert_eq!(class.uses().count(), 0);
}

#[test]
fn resolve_type_name___same_namespace___imported_once() {
    let mut class = class();

    resolve_type_name(&mut class, "App\\Client\\Helper", ImportStyle::Plain).unwrap();
    resolve_type_name(&mut class, "App\\Client\\Helper", ImportStyle::Plain).unwrap();

    assert_eq!(class.uses().collect::<Vec<_>>(), vec!["App\\Client\\Helper"]);
}

#[test_case("\\"; "only separator")]
#[test_case(""; "empty")]
fn resolve_type_name___empty___fails(fqcn: &str) {
    let mut class = class();

    let result = resolve_type_name(&mut class, fqcn, ImportStyle::Plain);

    assert_eq!(result, Err(ModelError::EmptyTypeName));
}

#[test]
fn resolve_type_name___invalid_segment___fails_without_import() {
    let mut class = class();

    let result = resolve_type_name(&mut class, "App\\9Type\\Foo", ImportStyle::Plain);

    assert_eq!(result, Err(ModelError::invalid_identifier("type", "9Type")));
    assert_eq!(class.uses().count(), 0);
}

// Name helpers

#[test_case("App\\Type\\GetUser", "GetUser")]
#[test_case("GetUser", "GetUser")]
#[test_case("\\Vendor\\Wrapper", "Wrapper")]
fn class_name_from_fqn___returns_last_segment(fqcn: &str, expected: &str) {
    assert_eq!(class_name_from_fqn(fqcn), expected);
}

#[test_case("GetUser", "getUser")]
#[test_case("get-user", "getUser")]
#[test_case("search", "search")]
fn normalize_method_name___camel_cases(name: &str, expected: &str) {
    assert_eq!(normalize_method_name(name).unwrap(), expected);
}

#[test]
fn normalize_method_name___rejects_leading_digit() {
    let result = normalize_method_name("1stCall");

    assert!(matches!(result, Err(ModelError::InvalidIdentifier { kind: "method", .. })));
}

#[test_case("address", "Address")]
#[test_case("user.profile", "UserProfile")]
#[test_case("list", "ListType")]
#[test_case("Class", "ClassType")]
fn normalize_class_name___pascal_cases_and_escapes(name: &str, expected: &str) {
    assert_eq!(normalize_class_name(name), expected);
}

// property_type

#[test]
fn property_type___builtin___unchanged() {
    let property = Property::new("prop1", "string", "ns1");

    assert_eq!(property_type(&property), "string");
}

#[test]
fn property_type___class___fully_qualified_with_origin_namespace() {
    let property = Property::new(
        "prop1",
        "Wrap",
        "This\\Is\\My\\Very\\Very\\Long\\Namespace\\And\\Class\\Name\\That\\Should\\Not\\Never\\Ever",
    )
    .with_meta(TypeMeta::default());

    assert_eq!(
        property_type(&property),
        "\\This\\Is\\My\\Very\\Very\\Long\\Namespace\\And\\Class\\Name\\That\\Should\\Not\\Never\\Ever\\Wrap"
    );
}

#[test]
fn property_type___empty_namespace___global_class() {
    let property = Property::new("prop1", "address", "");

    assert_eq!(property_type(&property), "\\Address");
}

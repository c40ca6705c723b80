#![allow(non_snake_case)]

use super::*;
use soapgen_core::Property;

fn address() -> Type {
    Type::new(
        "App\\Type",
        "Address",
        vec![
            Property::new("street", "string", "App\\Type"),
            Property::new("number", "int", "App\\Type"),
        ],
        "Address",
    )
    .unwrap()
}

#[test]
fn JsonSerializableAssembler___address___maps_properties_in_order() {
    let ty = address();
    let mut class = ClassModel::new("Address", "App\\Type");
    let mut context = Context::for_type(&mut class, &ty);

    JsonSerializableAssembler::new()
        .assemble(&mut context)
        .unwrap();

    let expected = "namespace App\\Type;

class Address implements \\JsonSerializable
{
    public function jsonSerialize(): array
    {
        return [
            'street' => $this->street,
            'number' => $this->number,
        ];
    }
}
";
    assert_eq!(class.render(), expected);
}

#[test]
fn JsonSerializableAssembler___no_properties___empty_mapping() {
    let ty = Type::new("App\\Type", "Empty", vec![], "Empty").unwrap();
    let mut class = ClassModel::new("Empty", "App\\Type");
    let mut context = Context::for_type(&mut class, &ty);

    JsonSerializableAssembler::new()
        .assemble(&mut context)
        .unwrap();

    assert_eq!(class.method("jsonSerialize").unwrap().body, "return [\n];");
}

#[test]
fn JsonSerializableAssembler___repeated___same_class() {
    let ty = address();
    let mut class = ClassModel::new("Address", "App\\Type");
    let assembler = JsonSerializableAssembler::new();

    let mut context = Context::for_type(&mut class, &ty);
    assembler.assemble(&mut context).unwrap();
    let once = class.clone();
    let mut context = Context::for_type(&mut class, &ty);
    assembler.assemble(&mut context).unwrap();

    assert_eq!(class, once);
}

#[test]
fn JsonSerializableAssembler___property_context___rejected_without_mutation() {
    let ty = address();
    let mut class = ClassModel::new("Address", "App\\Type");
    let before = class.clone();
    let mut context = Context::property(&mut class, &ty, &ty.properties()[0]);
    let assembler = JsonSerializableAssembler::new();

    assert!(!assembler.can_assemble(&context));
    let err = assembler.assemble(&mut context).unwrap_err();

    assert_eq!(
        err.to_string(),
        "JsonSerializableAssembler expects a TypeContext as input, PropertyContext given"
    );
    assert_eq!(class, before);
}

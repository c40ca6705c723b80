#![allow(non_snake_case)]

use super::*;
use soapgen_core::{MaxOccurs, Type, TypeMeta};

fn list_type() -> Type {
    Type::new(
        "MyNamespace",
        "MyType",
        vec![
            Property::new("items", "Item", "MyNamespace").with_meta(
                TypeMeta::default()
                    .with_is_list(true)
                    .with_occurs(Some(0), Some(MaxOccurs::Unbounded)),
            ),
            Property::new("total", "int", "MyNamespace"),
        ],
        "MyType",
    )
    .unwrap()
}

#[test]
fn IteratorAssembler___first_property___generates_get_iterator() {
    let ty = list_type();
    let mut class = ClassModel::new("MyType", "MyNamespace");
    let mut context = Context::for_type(&mut class, &ty);

    IteratorAssembler::new().assemble(&mut context).unwrap();

    let expected = "namespace MyNamespace;

/**
 * @phpstan-implements \\IteratorAggregate<int<0,max>, \\MyNamespace\\Item>
 * @psalm-implements \\IteratorAggregate<int<0,max>, \\MyNamespace\\Item>
 */
class MyType implements \\IteratorAggregate
{
    /**
     * @return \\ArrayIterator|\\MyNamespace\\Item[]
     * @phpstan-return \\ArrayIterator<int<0,max>, \\MyNamespace\\Item>
     * @psalm-return \\ArrayIterator<int<0,max>, \\MyNamespace\\Item>
     */
    public function getIterator(): \\ArrayIterator
    {
        return new \\ArrayIterator($this->items);
    }
}
";
    assert_eq!(class.render(), expected);
}

#[test]
fn IteratorAssembler___no_properties___interface_only() {
    let ty = Type::new("MyNamespace", "Empty", vec![], "Empty").unwrap();
    let mut class = ClassModel::new("Empty", "MyNamespace");
    let mut context = Context::for_type(&mut class, &ty);

    IteratorAssembler::new().assemble(&mut context).unwrap();

    assert_eq!(class.methods().len(), 0);
    assert!(class.doc_block().is_none());
    assert_eq!(class.interfaces(), ["IteratorAggregate".to_string()]);
}

#[test]
fn IteratorAssembler___repeated___single_method() {
    let ty = list_type();
    let mut class = ClassModel::new("MyType", "MyNamespace");
    let mut context = Context::for_type(&mut class, &ty);
    let assembler = IteratorAssembler::new();

    assembler.assemble(&mut context).unwrap();
    assembler.assemble(&mut context).unwrap();

    assert_eq!(class.methods().len(), 1);
    assert_eq!(class.interfaces().len(), 1);
}

#[test]
fn IteratorAssembler___client_context___rejected_without_mutation() {
    let mut class = ClassModel::new("MyClient", "MyNamespace");
    let before = class.clone();
    let mut context = Context::client(&mut class);

    let err = IteratorAssembler::new().assemble(&mut context).unwrap_err();

    assert_eq!(err.error_code(), 1);
    assert_eq!(class, before);
}

#![allow(non_snake_case)]

use super::*;

#[test]
fn prelude___exposes_model_types() {
    use crate::prelude::*;

    let class = ClassModel::new("MyType", "MyNamespace");
    let options = PropertyAssemblerOptions::default();

    assert_eq!(class.name(), "MyType");
    assert_eq!(options.visibility, Visibility::Private);
}

#[test]
fn NAMESPACE_SEPARATOR___is_backslash() {
    assert_eq!(NAMESPACE_SEPARATOR, '\\');
    assert_eq!(LINE_FEED, "\n");
}

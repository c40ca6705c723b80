#![allow(non_snake_case)]

use super::*;
use soapgen_core::ReturnType;

#[test]
fn Context___kind___matches_variant() {
    let mut class = ClassModel::new("MyType", "App\\Type");
    let ty = Type::new("App\\Type", "MyType", vec![], "MyType").unwrap();
    let property = Property::new("prop1", "string", "App\\Type");
    let method = ClientMethod::new("ping", vec![], ReturnType::new("string"));

    assert_eq!(Context::client(&mut class).kind(), ContextKind::Client);
    assert_eq!(
        Context::client_method(&mut class, &method).kind(),
        ContextKind::ClientMethod
    );
    assert_eq!(Context::for_type(&mut class, &ty).kind(), ContextKind::Type);
    assert_eq!(
        Context::property(&mut class, &ty, &property).kind(),
        ContextKind::Property
    );
    assert_eq!(
        Context::client_factory(ClientFactoryContext::new("C", "App", "M", "App")).kind(),
        ContextKind::ClientFactory
    );
}

#[test]
fn Context___class_mut___writes_through_to_borrowed_class() {
    let mut class = ClassModel::new("MyClient", "App");
    let mut context = Context::client(&mut class);

    if let Some(class) = context.class_mut() {
        class.add_use("Vendor\\Caller");
    }

    assert!(class.has_use("Vendor\\Caller"));
}

#[test]
fn Context___class___absent_for_factory_context() {
    let context = Context::client_factory(ClientFactoryContext::new("C", "App", "M", "App"));

    assert!(context.class().is_none());
}

#[test]
fn ContextKind___display___uses_context_names() {
    assert_eq!(ContextKind::Client.to_string(), "ClientContext");
    assert_eq!(ContextKind::Property.to_string(), "PropertyContext");
}

#[test]
fn ClientFactoryContext___fqcn___joins_namespace() {
    let context = ClientFactoryContext::new(
        "CalculatorClient",
        "\\App\\Client\\",
        "CalculatorClassmap",
        "App\\Classmap",
    );

    assert_eq!(context.client_fqcn(), "App\\Client\\CalculatorClient");
    assert_eq!(context.classmap_fqcn(), "App\\Classmap\\CalculatorClassmap");
    assert_eq!(context.factory_name(), "CalculatorClientFactory");
}

#[test]
fn ClientFactoryContext___empty_namespace___unqualified() {
    let context = ClientFactoryContext::new("Client", "", "Classmap", "");

    assert_eq!(context.client_fqcn(), "Client");
}

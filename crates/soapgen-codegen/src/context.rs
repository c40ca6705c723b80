//! Generation contexts.
//!
//! A context pairs the class being built with the metadata relevant to one
//! generation step. The class is borrowed exclusively for the lifetime of the
//! context; metadata is borrowed read-only.

use soapgen_core::{ClassModel, ClientMethod, NAMESPACE_SEPARATOR, Property, Type};
use std::fmt;

/// Discriminant of a [`Context`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    Client,
    ClientMethod,
    Type,
    Property,
    ClientFactory,
}

impl ContextKind {
    /// Name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::Client => "ClientContext",
            ContextKind::ClientMethod => "ClientMethodContext",
            ContextKind::Type => "TypeContext",
            ContextKind::Property => "PropertyContext",
            ContextKind::ClientFactory => "ClientFactoryContext",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The client class itself.
#[derive(Debug)]
pub struct ClientContext<'a> {
    pub class: &'a mut ClassModel,
}

/// The client class plus one operation.
#[derive(Debug)]
pub struct ClientMethodContext<'a> {
    pub class: &'a mut ClassModel,
    pub method: &'a ClientMethod,
}

/// A type class plus its type description.
#[derive(Debug)]
pub struct TypeContext<'a> {
    pub class: &'a mut ClassModel,
    pub ty: &'a Type,
}

/// A type class plus one of its properties.
#[derive(Debug)]
pub struct PropertyContext<'a> {
    pub class: &'a mut ClassModel,
    pub ty: &'a Type,
    pub property: &'a Property,
}

/// Naming input for the generated client factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFactoryContext {
    pub client_name: String,
    pub client_namespace: String,
    pub classmap_name: String,
    pub classmap_namespace: String,
}

impl ClientFactoryContext {
    pub fn new(
        client_name: impl Into<String>,
        client_namespace: impl Into<String>,
        classmap_name: impl Into<String>,
        classmap_namespace: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            client_namespace: trim_namespace(client_namespace.into()),
            classmap_name: classmap_name.into(),
            classmap_namespace: trim_namespace(classmap_namespace.into()),
        }
    }

    pub fn client_fqcn(&self) -> String {
        qualify(&self.client_namespace, &self.client_name)
    }

    pub fn classmap_fqcn(&self) -> String {
        qualify(&self.classmap_namespace, &self.classmap_name)
    }

    pub fn factory_name(&self) -> String {
        format!("{}Factory", self.client_name)
    }
}

fn trim_namespace(namespace: String) -> String {
    namespace.trim_matches(NAMESPACE_SEPARATOR).to_string()
}

fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}{NAMESPACE_SEPARATOR}{name}")
    }
}

/// Input to a single assembler invocation.
#[derive(Debug)]
pub enum Context<'a> {
    Client(ClientContext<'a>),
    ClientMethod(ClientMethodContext<'a>),
    Type(TypeContext<'a>),
    Property(PropertyContext<'a>),
    ClientFactory(ClientFactoryContext),
}

impl<'a> Context<'a> {
    pub fn client(class: &'a mut ClassModel) -> Self {
        Context::Client(ClientContext { class })
    }

    pub fn client_method(class: &'a mut ClassModel, method: &'a ClientMethod) -> Self {
        Context::ClientMethod(ClientMethodContext { class, method })
    }

    pub fn for_type(class: &'a mut ClassModel, ty: &'a Type) -> Self {
        Context::Type(TypeContext { class, ty })
    }

    pub fn property(class: &'a mut ClassModel, ty: &'a Type, property: &'a Property) -> Self {
        Context::Property(PropertyContext {
            class,
            ty,
            property,
        })
    }

    pub fn client_factory(context: ClientFactoryContext) -> Self {
        Context::ClientFactory(context)
    }

    pub fn kind(&self) -> ContextKind {
        match self {
            Context::Client(_) => ContextKind::Client,
            Context::ClientMethod(_) => ContextKind::ClientMethod,
            Context::Type(_) => ContextKind::Type,
            Context::Property(_) => ContextKind::Property,
            Context::ClientFactory(_) => ContextKind::ClientFactory,
        }
    }

    /// The class under construction, if this variant carries one.
    pub fn class(&self) -> Option<&ClassModel> {
        match self {
            Context::Client(ctx) => Some(&*ctx.class),
            Context::ClientMethod(ctx) => Some(&*ctx.class),
            Context::Type(ctx) => Some(&*ctx.class),
            Context::Property(ctx) => Some(&*ctx.class),
            Context::ClientFactory(_) => None,
        }
    }

    pub fn class_mut(&mut self) -> Option<&mut ClassModel> {
        match self {
            Context::Client(ctx) => Some(&mut *ctx.class),
            Context::ClientMethod(ctx) => Some(&mut *ctx.class),
            Context::Type(ctx) => Some(&mut *ctx.class),
            Context::Property(ctx) => Some(&mut *ctx.class),
            Context::ClientFactory(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "context/context_tests.rs"]
mod context_tests;

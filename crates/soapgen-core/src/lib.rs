//! soapgen-core - Metadata, class model and configuration types
//!
//! This crate provides the foundational types for the soapgen generators:
//! - [`Type`], [`Property`], [`ClientMethod`] and friends describing a service contract
//! - [`ClassModel`] the mutable, in-progress class that assemblers write into
//! - [`ModelError`] for error handling
//! - [`GeneratorConfig`] and [`PropertyAssemblerOptions`] for generator configuration

mod class_model;
mod config;
mod error;
mod metadata;

pub use class_model::{
    ClassModel, DocBlock, DocTag, MethodModel, ParameterModel, PropertyModel, Visibility,
    is_builtin_type, is_valid_identifier,
};
pub use config::{GeneratorConfig, PropertyAssemblerOptions, TypeAssemblerOptions};
pub use error::{ModelError, ModelResult};
pub use metadata::{
    Client, ClientMethod, MaxOccurs, MetadataDocument, Parameter, Property, ReturnType, Type,
    TypeMeta,
};

/// Namespace separator used by the generated language
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Line feed used when joining generated lines
pub const LINE_FEED: &str = "\n";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassModel, Client, ClientMethod, DocBlock, GeneratorConfig, MethodModel, ModelError,
        ModelResult, Parameter, Property, PropertyAssemblerOptions, PropertyModel, ReturnType,
        Type, TypeMeta, Visibility,
    };
}

#[cfg(test)]
mod lib_tests;

//! Class assembly from service metadata.
//!
//! This crate turns the read-only metadata of [`soapgen_core`] into populated
//! [`ClassModel`](soapgen_core::ClassModel) values by running small, composable
//! generation steps called assemblers.
//!
//! # Architecture
//!
//! ```text
//! Metadata (Type / Property / ClientMethod)
//!     ↓
//!  [Context]  one per generation unit, borrowing the class being built
//!     ↓
//!  [Assembler] can_assemble? → assemble (replace-by-name, idempotent)
//!     ↓
//!  ClassModel → render() → PHP source
//! ```
//!
//! Every assembler follows the same contract:
//! - [`Assembler::can_assemble`] is a pure check on the context variant
//! - [`Assembler::assemble`] fails with [`AssemblerError::ContextMismatch`]
//!   before touching the class when given the wrong variant
//! - any failure while building a member surfaces as
//!   [`AssemblerError::Generation`] naming the class and member
//! - running an assembler twice yields the same class as running it once
//!
//! # Usage
//!
//! ```rust
//! use soapgen_codegen::{Assembler, Context, JsonSerializableAssembler};
//! use soapgen_core::{ClassModel, Property, Type};
//!
//! let ty = Type::new(
//!     "App\\Type",
//!     "Address",
//!     vec![
//!         Property::new("street", "string", "App\\Type"),
//!         Property::new("number", "int", "App\\Type"),
//!     ],
//!     "Address",
//! )
//! .unwrap();
//! let mut class = ClassModel::new("Address", "App\\Type");
//! let mut context = Context::for_type(&mut class, &ty);
//!
//! let assembler = JsonSerializableAssembler::new();
//! if assembler.can_assemble(&context) {
//!     assembler.assemble(&mut context).unwrap();
//! }
//!
//! assert!(class.render().contains("'street' => $this->street,"));
//! ```

pub mod assembler;
pub mod bounds;
pub mod context;
pub mod error;
pub mod factory;
pub mod naming;
pub mod normalizer;
pub mod pipeline;
pub mod runtime;

pub use assembler::{
    Assembler, ClientConstructorAssembler, ClientMethodAssembler, InterfaceAssembler,
    IteratorAssembler, JsonSerializableAssembler, PropertyAssembler, ResultProviderAssembler,
    UseAssembler,
};
pub use bounds::{ArrayBounds, ArrayBoundsCalculator};
pub use context::{
    ClientContext, ClientFactoryContext, ClientMethodContext, Context, ContextKind,
    PropertyContext, TypeContext,
};
pub use error::{AssemblerError, AssemblerResult};
pub use factory::ClientFactoryGenerator;
pub use pipeline::{ClientGenerator, Pipeline, TypeGenerator};

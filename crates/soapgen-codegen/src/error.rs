//! Error types for class assembly.

use crate::context::ContextKind;
use soapgen_core::ModelError;
use thiserror::Error;

/// Result type alias for assembler operations.
pub type AssemblerResult<T> = Result<T, AssemblerError>;

/// Error type for assembler operations.
///
/// Callers can treat every assembler failure uniformly: either the assembler
/// was handed a context it does not understand, or building a member failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblerError {
    /// The assembler was invoked on an incompatible context variant.
    #[error("{assembler} expects a {expected} as input, {actual} given")]
    ContextMismatch {
        /// Assembler that rejected the context.
        assembler: &'static str,
        /// Accepted context kind(s).
        expected: &'static str,
        /// Kind of the context actually passed.
        actual: ContextKind,
    },

    /// Building a member failed.
    #[error("{assembler} failed to generate '{member}' on class '{class}': {source}")]
    Generation {
        /// Assembler that was running.
        assembler: &'static str,
        /// Fully qualified name of the class being built.
        class: String,
        /// Member being generated.
        member: String,
        /// Underlying cause.
        #[source]
        source: ModelError,
    },
}

impl AssemblerError {
    /// Creates a context mismatch error.
    pub fn mismatch(assembler: &'static str, expected: &'static str, actual: ContextKind) -> Self {
        Self::ContextMismatch {
            assembler,
            expected,
            actual,
        }
    }

    /// Wraps a model error raised while generating `member` on `class`.
    pub fn generation(
        assembler: &'static str,
        class: impl Into<String>,
        member: impl Into<String>,
        source: ModelError,
    ) -> Self {
        Self::Generation {
            assembler,
            class: class.into(),
            member: member.into(),
            source,
        }
    }

    /// Returns a stable numeric code for the error kind.
    pub fn error_code(&self) -> u32 {
        match self {
            Self::ContextMismatch { .. } => 1,
            Self::Generation { .. } => 2,
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;

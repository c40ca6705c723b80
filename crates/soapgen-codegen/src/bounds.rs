//! Occurrence ranges for repeated properties.
//!
//! Collection annotations carry the index range derived from the schema's
//! `minOccurs`/`maxOccurs`, rendered as `int<min,max>` where an unbounded
//! maximum becomes the `max` sentinel.

use soapgen_core::{MaxOccurs, TypeMeta};
use std::fmt;

/// Sentinel rendered for an open-ended upper bound.
pub const MAX_SENTINEL: &str = "max";

/// A `[min, max]` occurrence range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayBounds {
    /// Lower bound.
    pub min: u32,
    /// Upper bound, `None` when open-ended.
    pub max: Option<u32>,
}

impl ArrayBounds {
    /// Returns true when there is no upper bound.
    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.max.is_none()
    }

    /// Generic argument list for a collection of `item_type`, e.g. `<int<0,max>, string>`.
    #[must_use]
    pub fn generic_arguments(&self, item_type: &str) -> String {
        format!("<{self}, {item_type}>")
    }
}

impl fmt::Display for ArrayBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "int<{},{}>", self.min, max),
            None => write!(f, "int<{},{}>", self.min, MAX_SENTINEL),
        }
    }
}

/// Derives [`ArrayBounds`] from property metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayBoundsCalculator;

impl ArrayBoundsCalculator {
    /// Creates a new calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the range; a missing minimum is 0, a missing maximum is open-ended.
    #[must_use]
    pub fn calculate(&self, meta: &TypeMeta) -> ArrayBounds {
        let max = match meta.max_occurs {
            Some(MaxOccurs::Bounded(max)) => Some(max),
            Some(MaxOccurs::Unbounded) | None => None,
        };

        ArrayBounds {
            min: meta.min_occurs.unwrap_or(0),
            max,
        }
    }
}

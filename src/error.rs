// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unified error types for the all-units library.
//!
//! This module provides the error hierarchy shared by the conversion core
//! and the HTTP layer, covering unit resolution, dimension checking, and
//! request validation.
//!
//! # Example
//!
//! ```rust
//! use all_units::units::UnitRegistry;
//! use all_units::Result;
//!
//! fn main() -> Result<()> {
//!     let registry = UnitRegistry::new();
//!     let grams = registry.convert(2.5, "kg", "g")?;
//!     println!("{grams} g");
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::units::Dimension;

/// The main error type for all-units operations.
///
/// Every variant except [`Error::Io`] and [`Error::Json`] is a recoverable,
/// request-scoped validation failure carrying a human-readable message that
/// is surfaced to the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// The source unit symbol is not present in the registry.
    #[error("invalid source unit: {0}")]
    InvalidSourceUnit(String),

    /// The target unit symbol is not present in the registry.
    #[error("invalid target unit: {0}")]
    InvalidTargetUnit(String),

    /// Source and target units belong to different dimensions.
    ///
    /// Cross-dimension conversion (e.g. mass to length) is rejected, never
    /// approximated.
    #[error("cannot convert between different dimensions: {from} ({from_dimension}) and {to} ({to_dimension})")]
    DimensionMismatch {
        from: String,
        from_dimension: Dimension,
        to: String,
        to_dimension: Dimension,
    },

    /// The `value` form field could not be parsed as a number.
    #[error("Invalid value: must be a number")]
    InvalidNumericInput(String),

    /// A required form field or query parameter was absent.
    ///
    /// The payload is the full message naming what is missing, matching the
    /// wording the endpoints have always used.
    #[error("{0}")]
    MissingField(&'static str),

    /// A unit symbol looked up through the query API is unknown.
    #[error("Invalid unit symbol: {0}")]
    UnknownUnit(String),

    /// A dimension tag looked up through the query API is unknown.
    #[error("Invalid dimension: {0}")]
    UnknownDimension(String),

    /// The conversion endpoint was called with a method other than POST.
    #[error("Method not allowed. Please use POST.")]
    MethodNotAllowed,

    /// An I/O error occurred while loading the page template.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serializing the registry payload for the page template failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for all-units operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSourceUnit("xyz".to_string());
        assert_eq!(err.to_string(), "invalid source unit: xyz");

        let err = Error::InvalidTargetUnit("zz".to_string());
        assert_eq!(err.to_string(), "invalid target unit: zz");

        let err = Error::DimensionMismatch {
            from: "kg".to_string(),
            from_dimension: Dimension::Mass,
            to: "m".to_string(),
            to_dimension: Dimension::Length,
        };
        assert_eq!(
            err.to_string(),
            "cannot convert between different dimensions: kg (mass) and m (length)"
        );

        let err = Error::InvalidNumericInput("ten".to_string());
        assert_eq!(err.to_string(), "Invalid value: must be a number");

        let err = Error::MissingField("All fields (value, from, to) are required");
        assert_eq!(err.to_string(), "All fields (value, from, to) are required");

        let err = Error::MethodNotAllowed;
        assert_eq!(err.to_string(), "Method not allowed. Please use POST.");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}

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

//! Conversion between units of the same dimension, via the dimension's base
//! unit.

use crate::error::{Error, Result};
use crate::units::format::format_result;
use crate::units::registry::UnitRegistry;

/// Number of decimal digits kept when suppressing floating-point noise from
/// the two-step multiply/divide. Display-stability heuristic, not a precision
/// contract.
const NOISE_PRECISION_DIGITS: i32 = 12;

/// A successful conversion: the numeric result plus its display rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub value: f64,
    pub formatted: String,
}

impl UnitRegistry {
    /// Convert `value` from one unit to another.
    ///
    /// Both symbols must be registered and share a dimension. The result is
    /// rounded to 12 decimal digits to suppress floating-point noise.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64> {
        let from_unit = self
            .lookup(from)
            .ok_or_else(|| Error::InvalidSourceUnit(from.to_string()))?;
        let to_unit = self
            .lookup(to)
            .ok_or_else(|| Error::InvalidTargetUnit(to.to_string()))?;
        if from_unit.dimension != to_unit.dimension {
            return Err(Error::DimensionMismatch {
                from: from.to_string(),
                from_dimension: from_unit.dimension,
                to: to.to_string(),
                to_dimension: to_unit.dimension,
            });
        }

        let base = from_unit.scale.to_base(value);
        let result = to_unit.scale.from_base(base);
        Ok(round_fp_noise(result))
    }

    /// Convert and render the result for display in one step.
    pub fn convert_formatted(&self, value: f64, from: &str, to: &str) -> Result<ConversionOutcome> {
        let result = self.convert(value, from, to)?;
        Ok(ConversionOutcome {
            value: result,
            formatted: format_result(result, to),
        })
    }
}

/// Round to `NOISE_PRECISION_DIGITS` decimal digits, half away from zero.
fn round_fp_noise(value: f64) -> f64 {
    let factor = 10f64.powi(NOISE_PRECISION_DIGITS);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_conversion_through_base() {
        let registry = UnitRegistry::new();
        assert_eq!(registry.convert(1.0, "km", "m").unwrap(), 1000.0);
        assert_eq!(registry.convert(1000.0, "g", "kg").unwrap(), 1.0);
        assert_eq!(registry.convert(2.0, "h", "min").unwrap(), 120.0);
    }

    #[test]
    fn test_temperature_uses_offsets() {
        let registry = UnitRegistry::new();
        assert_eq!(registry.convert(0.0, "C", "K").unwrap(), 273.15);
        assert_eq!(registry.convert(273.15, "K", "C").unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_source_unit() {
        let registry = UnitRegistry::new();
        let err = registry.convert(1.0, "cubit", "m").unwrap_err();
        assert!(matches!(err, Error::InvalidSourceUnit(_)));
    }

    #[test]
    fn test_unknown_target_unit() {
        let registry = UnitRegistry::new();
        let err = registry.convert(1.0, "m", "cubit").unwrap_err();
        assert!(matches!(err, Error::InvalidTargetUnit(_)));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let registry = UnitRegistry::new();
        let err = registry.convert(1.0, "kg", "m").unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
        assert_eq!(
            err.to_string(),
            "cannot convert between different dimensions: kg (mass) and m (length)"
        );
    }

    #[test]
    fn test_noise_rounding_stabilizes_result() {
        let registry = UnitRegistry::new();
        // 0.9144 / 0.3048 is not exact in binary; the rounding step hides it
        assert_eq!(registry.convert(1.0, "yd", "ft").unwrap(), 3.0);
        let meters = registry.convert(1.0, "ft", "m").unwrap();
        assert_eq!(registry.convert(meters, "m", "ft").unwrap(), 1.0);
    }

    #[test]
    fn test_convert_formatted_outcome() {
        let registry = UnitRegistry::new();
        let outcome = registry.convert_formatted(42.5, "kg", "kg").unwrap();
        assert_eq!(outcome.value, 42.5);
        assert_eq!(outcome.formatted, "42.50 kg");
    }
}

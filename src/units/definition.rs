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

//! Value types for the unit registry: dimensions, scales, and unit
//! definitions.

use std::fmt;

use serde::Serialize;

/// A category of physical quantity within which units are mutually
/// convertible.
///
/// The set of dimensions is closed; new dimensions are added here and in the
/// registry table, never at runtime. Variants serialize to their snake_case
/// wire tag (e.g. `data_storage`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Mass,
    Length,
    Temperature,
    Time,
    Frequency,
    Speed,
    Volume,
    Area,
    Energy,
    Power,
    Force,
    Pressure,
    DataStorage,
    Angle,
}

impl Dimension {
    /// Every dimension, in canonical presentation order.
    pub const ALL: [Dimension; 14] = [
        Dimension::Mass,
        Dimension::Length,
        Dimension::Temperature,
        Dimension::Time,
        Dimension::Frequency,
        Dimension::Speed,
        Dimension::Volume,
        Dimension::Area,
        Dimension::Energy,
        Dimension::Power,
        Dimension::Force,
        Dimension::Pressure,
        Dimension::DataStorage,
        Dimension::Angle,
    ];

    /// The snake_case tag used in URLs and JSON payloads.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Dimension::Mass => "mass",
            Dimension::Length => "length",
            Dimension::Temperature => "temperature",
            Dimension::Time => "time",
            Dimension::Frequency => "frequency",
            Dimension::Speed => "speed",
            Dimension::Volume => "volume",
            Dimension::Area => "area",
            Dimension::Energy => "energy",
            Dimension::Power => "power",
            Dimension::Force => "force",
            Dimension::Pressure => "pressure",
            Dimension::DataStorage => "data_storage",
            Dimension::Angle => "angle",
        }
    }

    /// Resolve a wire tag back to a dimension.
    pub fn from_tag(tag: &str) -> Option<Dimension> {
        Dimension::ALL.into_iter().find(|d| d.as_tag() == tag)
    }

    /// Human-friendly name shown in the dimension selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Mass => "Mass",
            Dimension::Length => "Length",
            Dimension::Temperature => "Temperature",
            Dimension::Time => "Time",
            Dimension::Frequency => "Frequency",
            Dimension::Speed => "Speed",
            Dimension::Volume => "Volume",
            Dimension::Area => "Area",
            Dimension::Energy => "Energy",
            Dimension::Power => "Power",
            Dimension::Force => "Force",
            Dimension::Pressure => "Pressure",
            Dimension::DataStorage => "Data Storage",
            Dimension::Angle => "Angle",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// How a unit maps onto its dimension's base unit.
///
/// Making the ratio/affine split a closed variant keeps the "does this unit
/// need an offset" decision exhaustive: the affine arm exists only for
/// temperature scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Pure multiplicative scale. `factor` is the amount of the base unit
    /// equal to one of this unit and must be positive.
    Ratio { factor: f64 },
    /// Multiplicative factor plus additive offset, for non-ratio scales
    /// (Celsius, Fahrenheit).
    Affine { factor: f64, offset: f64 },
}

impl Scale {
    /// Convert a value in this unit to the dimension's base unit.
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Scale::Ratio { factor } => value * factor,
            Scale::Affine { factor, offset } => value * factor + offset,
        }
    }

    /// Convert a value in the dimension's base unit to this unit.
    pub fn from_base(&self, base: f64) -> f64 {
        match *self {
            Scale::Ratio { factor } => base / factor,
            Scale::Affine { factor, offset } => (base - offset) / factor,
        }
    }

    /// The multiplicative factor relative to the base unit.
    pub fn factor(&self) -> f64 {
        match *self {
            Scale::Ratio { factor } | Scale::Affine { factor, .. } => factor,
        }
    }

    /// The additive offset relative to the base unit (zero for ratio scales).
    pub fn offset(&self) -> f64 {
        match *self {
            Scale::Ratio { .. } => 0.0,
            Scale::Affine { offset, .. } => offset,
        }
    }
}

/// An immutable unit definition: symbol, display name, dimension, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDefinition {
    pub symbol: &'static str,
    pub name: &'static str,
    pub dimension: Dimension,
    pub scale: Scale,
}

impl UnitDefinition {
    /// A ratio-scale unit. `factor` must be positive.
    pub fn ratio(
        symbol: &'static str,
        name: &'static str,
        dimension: Dimension,
        factor: f64,
    ) -> Self {
        debug_assert!(factor > 0.0, "unit factor must be positive: {symbol}");
        UnitDefinition {
            symbol,
            name,
            dimension,
            scale: Scale::Ratio { factor },
        }
    }

    /// An affine-scale unit. `factor` must be positive.
    pub fn affine(
        symbol: &'static str,
        name: &'static str,
        dimension: Dimension,
        factor: f64,
        offset: f64,
    ) -> Self {
        debug_assert!(factor > 0.0, "unit factor must be positive: {symbol}");
        UnitDefinition {
            symbol,
            name,
            dimension,
            scale: Scale::Affine { factor, offset },
        }
    }
}

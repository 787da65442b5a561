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

//! The unit registry: a fixed table of unit definitions keyed by symbol.
//!
//! The registry is constructed once, never mutated, and shared read-only by
//! every request handler. Factors are expressed relative to each dimension's
//! base unit: gram, meter, Kelvin, second, hertz, meters per second, cubic
//! meter, square meter, joule, watt, newton, pascal, byte, and radian.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::units::definition::{Dimension, UnitDefinition};

/// Registry of all known units, keyed by symbol.
pub struct UnitRegistry {
    units: HashMap<&'static str, UnitDefinition>,
}

impl UnitRegistry {
    /// Build the registry with the full unit table.
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
        };
        registry.register_mass_units();
        registry.register_length_units();
        registry.register_temperature_units();
        registry.register_time_units();
        registry.register_frequency_units();
        registry.register_speed_units();
        registry.register_volume_units();
        registry.register_area_units();
        registry.register_energy_units();
        registry.register_power_units();
        registry.register_force_units();
        registry.register_pressure_units();
        registry.register_data_storage_units();
        registry.register_angle_units();
        registry
    }

    /// Look up a unit definition by symbol.
    pub fn lookup(&self, symbol: &str) -> Option<&UnitDefinition> {
        self.units.get(symbol)
    }

    /// All units belonging to a dimension, sorted by ascending factor and
    /// then symbol so listings are stable across requests.
    pub fn units_in_dimension(&self, dimension: Dimension) -> Vec<&UnitDefinition> {
        let mut units: Vec<&UnitDefinition> = self
            .units
            .values()
            .filter(|unit| unit.dimension == dimension)
            .collect();
        units.sort_by(|a, b| {
            a.scale
                .factor()
                .partial_cmp(&b.scale.factor())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.symbol.cmp(b.symbol))
        });
        units
    }

    /// All dimensions with at least one registered unit, deduplicated, in
    /// canonical order.
    pub fn all_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|dim| self.units.values().any(|unit| unit.dimension == *dim))
            .collect()
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register(&mut self, unit: UnitDefinition) {
        self.units.insert(unit.symbol, unit);
    }

    fn register_mass_units(&mut self) {
        // Base unit: gram
        self.register(UnitDefinition::ratio("mg", "Milligram", Dimension::Mass, 0.001));
        self.register(UnitDefinition::ratio("g", "Gram", Dimension::Mass, 1.0));
        self.register(UnitDefinition::ratio("kg", "Kilogram", Dimension::Mass, 1000.0));
        self.register(UnitDefinition::ratio("t", "Tonne", Dimension::Mass, 1_000_000.0));
        self.register(UnitDefinition::ratio("oz", "Ounce", Dimension::Mass, 28.3495));
        self.register(UnitDefinition::ratio("lb", "Pound", Dimension::Mass, 453.59237));
    }

    fn register_length_units(&mut self) {
        // Base unit: meter
        self.register(UnitDefinition::ratio("nm", "Nanometer", Dimension::Length, 1e-9));
        self.register(UnitDefinition::ratio("µm", "Micrometer", Dimension::Length, 1e-6));
        self.register(UnitDefinition::ratio("mm", "Millimeter", Dimension::Length, 0.001));
        self.register(UnitDefinition::ratio("cm", "Centimeter", Dimension::Length, 0.01));
        self.register(UnitDefinition::ratio("m", "Meter", Dimension::Length, 1.0));
        self.register(UnitDefinition::ratio("km", "Kilometer", Dimension::Length, 1000.0));
        self.register(UnitDefinition::ratio("in", "Inch", Dimension::Length, 0.0254));
        self.register(UnitDefinition::ratio("ft", "Foot", Dimension::Length, 0.3048));
        self.register(UnitDefinition::ratio("yd", "Yard", Dimension::Length, 0.9144));
        self.register(UnitDefinition::ratio("mi", "Mile", Dimension::Length, 1609.344));
    }

    fn register_temperature_units(&mut self) {
        // Base unit: Kelvin. Kelvin and Rankine are pure ratio scales;
        // Celsius and Fahrenheit additionally carry an offset.
        self.register(UnitDefinition::affine(
            "C",
            "Celsius",
            Dimension::Temperature,
            1.0,
            273.15,
        ));
        self.register(UnitDefinition::affine(
            "F",
            "Fahrenheit",
            Dimension::Temperature,
            5.0 / 9.0,
            255.372,
        ));
        self.register(UnitDefinition::ratio("K", "Kelvin", Dimension::Temperature, 1.0));
        self.register(UnitDefinition::ratio(
            "Ra",
            "Rankine",
            Dimension::Temperature,
            5.0 / 9.0,
        ));
    }

    fn register_time_units(&mut self) {
        // Base unit: second
        self.register(UnitDefinition::ratio("ns", "Nanosecond", Dimension::Time, 1e-9));
        self.register(UnitDefinition::ratio("µs", "Microsecond", Dimension::Time, 1e-6));
        self.register(UnitDefinition::ratio("ms", "Millisecond", Dimension::Time, 1e-3));
        self.register(UnitDefinition::ratio("s", "Second", Dimension::Time, 1.0));
        self.register(UnitDefinition::ratio("min", "Minute", Dimension::Time, 60.0));
        self.register(UnitDefinition::ratio("h", "Hour", Dimension::Time, 3600.0));
        self.register(UnitDefinition::ratio("day", "Day", Dimension::Time, 86400.0));
        self.register(UnitDefinition::ratio("week", "Week", Dimension::Time, 604800.0));
        self.register(UnitDefinition::ratio(
            "year",
            "Year (365 days)",
            Dimension::Time,
            31_536_000.0,
        ));
    }

    fn register_frequency_units(&mut self) {
        // Base unit: hertz
        self.register(UnitDefinition::ratio("Hz", "Hertz", Dimension::Frequency, 1.0));
        self.register(UnitDefinition::ratio("kHz", "Kilohertz", Dimension::Frequency, 1000.0));
        self.register(UnitDefinition::ratio("MHz", "Megahertz", Dimension::Frequency, 1e6));
        self.register(UnitDefinition::ratio("GHz", "Gigahertz", Dimension::Frequency, 1e9));
        self.register(UnitDefinition::ratio("THz", "Terahertz", Dimension::Frequency, 1e12));
    }

    fn register_speed_units(&mut self) {
        // Base unit: meters per second
        self.register(UnitDefinition::ratio("m/s", "Meters per second", Dimension::Speed, 1.0));
        self.register(UnitDefinition::ratio(
            "km/h",
            "Kilometers per hour",
            Dimension::Speed,
            0.277778,
        ));
        self.register(UnitDefinition::ratio("ft/s", "Feet per second", Dimension::Speed, 0.3048));
        self.register(UnitDefinition::ratio("mph", "Miles per hour", Dimension::Speed, 0.44704));
        self.register(UnitDefinition::ratio("knot", "Knot", Dimension::Speed, 0.514444));
        self.register(UnitDefinition::ratio(
            "mach",
            "Mach (at sea level)",
            Dimension::Speed,
            340.29,
        ));
    }

    fn register_volume_units(&mut self) {
        // Base unit: cubic meter
        self.register(UnitDefinition::ratio("m³", "Cubic Meter", Dimension::Volume, 1.0));
        self.register(UnitDefinition::ratio("L", "Liter", Dimension::Volume, 0.001));
        self.register(UnitDefinition::ratio(
            "gal",
            "Gallon (US)",
            Dimension::Volume,
            0.003785411784,
        ));
        self.register(UnitDefinition::ratio(
            "fl_oz",
            "Fluid Ounce (US)",
            Dimension::Volume,
            0.0000295735295625,
        ));
    }

    fn register_area_units(&mut self) {
        // Base unit: square meter
        self.register(UnitDefinition::ratio("m²", "Square Meter", Dimension::Area, 1.0));
        self.register(UnitDefinition::ratio("acre", "Acre", Dimension::Area, 4046.8564224));
        self.register(UnitDefinition::ratio("ha", "Hectare", Dimension::Area, 10000.0));
    }

    fn register_energy_units(&mut self) {
        // Base unit: joule
        self.register(UnitDefinition::ratio("J", "Joule", Dimension::Energy, 1.0));
        self.register(UnitDefinition::ratio("cal", "Calorie", Dimension::Energy, 4.184));
        self.register(UnitDefinition::ratio("kcal", "Kilocalorie", Dimension::Energy, 4184.0));
    }

    fn register_power_units(&mut self) {
        // Base unit: watt
        self.register(UnitDefinition::ratio("W", "Watt", Dimension::Power, 1.0));
        self.register(UnitDefinition::ratio("HP", "Horsepower", Dimension::Power, 735.49875));
    }

    fn register_force_units(&mut self) {
        // Base unit: newton
        self.register(UnitDefinition::ratio("N", "Newton", Dimension::Force, 1.0));
        self.register(UnitDefinition::ratio("lbf", "Pound-force", Dimension::Force, 4.4482216153));
    }

    fn register_pressure_units(&mut self) {
        // Base unit: pascal
        self.register(UnitDefinition::ratio("Pa", "Pascal", Dimension::Pressure, 1.0));
        self.register(UnitDefinition::ratio("atm", "Atmosphere", Dimension::Pressure, 101325.0));
        self.register(UnitDefinition::ratio("bar", "Bar", Dimension::Pressure, 100000.0));
    }

    fn register_data_storage_units(&mut self) {
        // Base unit: byte
        self.register(UnitDefinition::ratio("B", "Byte", Dimension::DataStorage, 1.0));
        self.register(UnitDefinition::ratio("bit", "Bit", Dimension::DataStorage, 0.125));
        self.register(UnitDefinition::ratio("KB", "Kilobyte", Dimension::DataStorage, 1024.0));
        self.register(UnitDefinition::ratio("MB", "Megabyte", Dimension::DataStorage, 1_048_576.0));
        self.register(UnitDefinition::ratio(
            "GB",
            "Gigabyte",
            Dimension::DataStorage,
            1_073_741_824.0,
        ));
    }

    fn register_angle_units(&mut self) {
        // Base unit: radian
        self.register(UnitDefinition::ratio("rad", "Radian", Dimension::Angle, 1.0));
        self.register(UnitDefinition::ratio("deg", "Degree", Dimension::Angle, PI / 180.0));
        self.register(UnitDefinition::ratio("arcmin", "Minute", Dimension::Angle, PI / 10800.0));
        self.register(UnitDefinition::ratio("arcsec", "Second", Dimension::Angle, PI / 648000.0));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-friendly name for a dimension tag, falling back to the tag itself
/// for unrecognized values.
pub fn dimension_display_name(tag: &str) -> &str {
    match Dimension::from_tag(tag) {
        Some(dimension) => dimension.display_name(),
        None => tag,
    }
}

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

//! Presentation formatting for conversion results.
//!
//! Purely display logic: magnitude-scaled fixed decimals for ordinary
//! values, scientific notation outside the readable range. Independent of
//! the noise rounding applied by the conversion itself.

/// Below this magnitude, results are rendered in scientific notation.
const SCIENTIFIC_LOWER_BOUND: f64 = 0.001;
/// Above this magnitude, results are rendered in scientific notation.
const SCIENTIFIC_UPPER_BOUND: f64 = 1_000_000.0;

/// Render a conversion result with its unit symbol.
pub fn format_result(result: f64, unit: &str) -> String {
    let magnitude = result.abs();
    if magnitude < SCIENTIFIC_LOWER_BOUND || magnitude > SCIENTIFIC_UPPER_BOUND {
        return format!("{} {unit}", format_scientific(result, 6));
    }

    let decimal_places = if magnitude >= 1000.0 {
        0
    } else if magnitude >= 100.0 {
        1
    } else if magnitude >= 10.0 {
        2
    } else if magnitude >= 1.0 {
        3
    } else {
        4
    };
    format!("{result:.decimal_places$} {unit}")
}

/// Scientific notation with a signed, zero-padded two-digit exponent
/// (`1.500000e+06`). Rust's `{:e}` renders the exponent bare (`1.5e6`), so
/// the exponent field is normalized here.
fn format_scientific(value: f64, precision: usize) -> String {
    let rendered = format!("{value:.precision$e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => rendered,
    }
}

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

//! Index page rendering.
//!
//! The page template is static markup with placeholder slots; the registry
//! listing is injected as a JSON payload and the page's script populates the
//! selection form client-side.

use chrono::Datelike;
use serde::Serialize;

use crate::error::Result;
use crate::units::{Dimension, UnitRegistry};

pub const PLACEHOLDER_UNITS_DATA: &str = "{{UNITS_DATA}}";
pub const PLACEHOLDER_CURRENT_YEAR: &str = "{{CURRENT_YEAR}}";

/// One unit row in a listing: symbol plus display name.
#[derive(Debug, Serialize)]
pub struct UnitEntry {
    pub symbol: &'static str,
    pub name: &'static str,
}

/// One dimension with its display name and member units, in listing order.
#[derive(Debug, Serialize)]
pub struct DimensionGroup {
    pub tag: Dimension,
    pub name: &'static str,
    pub units: Vec<UnitEntry>,
}

/// The payload injected into the index page.
#[derive(Debug, Serialize)]
pub struct TemplateData {
    pub dimensions: Vec<DimensionGroup>,
}

/// Assemble the registry-derived listing for the page.
pub fn template_data(registry: &UnitRegistry) -> TemplateData {
    let dimensions = registry
        .all_dimensions()
        .into_iter()
        .map(|dimension| DimensionGroup {
            tag: dimension,
            name: dimension.display_name(),
            units: registry
                .units_in_dimension(dimension)
                .into_iter()
                .map(|unit| UnitEntry {
                    symbol: unit.symbol,
                    name: unit.name,
                })
                .collect(),
        })
        .collect();
    TemplateData { dimensions }
}

/// Substitute the registry payload and footer year into the page markup.
pub fn render_index(markup: &str, registry: &UnitRegistry) -> Result<String> {
    let payload = serde_json::to_string(&template_data(registry))?;
    let year = chrono::Local::now().year();
    Ok(markup
        .replace(PLACEHOLDER_UNITS_DATA, &payload)
        .replace(PLACEHOLDER_CURRENT_YEAR, &year.to_string()))
}

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

//! Request handlers for the converter service.
//!
//! Every handler is a short synchronous computation over the shared
//! read-only registry; request-scoped data never outlives the response.

use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::template::{render_index, UnitEntry};
use crate::common::config::AppConfig;
use crate::error::{Error, Result};
use crate::units::{Dimension, UnitRegistry};

/// The registry as shared by all handlers. Read-only after startup, so no
/// locking is required.
pub type SharedRegistry = Arc<UnitRegistry>;

const MSG_FIELDS_REQUIRED: &str = "All fields (value, from, to) are required";
const MSG_UNIT_REQUIRED: &str = "Unit symbol is required";
const MSG_DIMENSION_REQUIRED: &str = "Dimension is required";

/// JSON error body: `{"success": false, "error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            Error::Io(err) => {
                tracing::error!("Error loading template: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error loading template".to_string(),
                )
            }
            Error::Json(err) => {
                tracing::error!("Error rendering template: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error rendering template".to_string(),
                )
            }
            _ => (StatusCode::BAD_REQUEST, self.to_string()),
        };
        let body = ErrorBody {
            success: false,
            error: message,
        };
        (status, Json(body)).into_response()
    }
}

/// `GET /` — the conversion form, populated from the registry listing.
pub async fn index_handler(State(registry): State<SharedRegistry>) -> Result<Html<String>> {
    let markup = tokio::fs::read_to_string(AppConfig::TEMPLATE_PATH).await?;
    let page = render_index(&markup, &registry)?;
    Ok(Html(page))
}

#[derive(Debug, Deserialize)]
pub struct ConvertForm {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

/// `POST /convert` — form fields `value`, `from`, `to`; responds with the
/// converted value rendered to three decimals, e.g. `10000.000 g`.
pub async fn convert_handler(
    State(registry): State<SharedRegistry>,
    Form(form): Form<ConvertForm>,
) -> Result<String> {
    let (raw_value, from, to) = match (&form.value, &form.from, &form.to) {
        (Some(value), Some(from), Some(to))
            if !value.is_empty() && !from.is_empty() && !to.is_empty() =>
        {
            (value, from, to)
        }
        _ => return Err(Error::MissingField(MSG_FIELDS_REQUIRED)),
    };

    let value: f64 = raw_value
        .parse()
        .map_err(|_| Error::InvalidNumericInput(raw_value.clone()))?;

    let result = registry.convert(value, from, to)?;
    Ok(format!("{result:.3} {to}"))
}

/// Fallback for `/convert` hit with anything but POST.
pub async fn convert_method_not_allowed() -> Error {
    Error::MethodNotAllowed
}

#[derive(Debug, Deserialize)]
pub struct UnitInfoQuery {
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UnitInfoResponse {
    pub symbol: &'static str,
    pub name: &'static str,
    pub dimension: Dimension,
    pub factor: f64,
}

/// `GET /unit-info?unit=<symbol>` — definition details for one unit.
pub async fn unit_info_handler(
    State(registry): State<SharedRegistry>,
    Query(query): Query<UnitInfoQuery>,
) -> Result<Json<UnitInfoResponse>> {
    let symbol = query
        .unit
        .filter(|symbol| !symbol.is_empty())
        .ok_or(Error::MissingField(MSG_UNIT_REQUIRED))?;
    let unit = registry
        .lookup(&symbol)
        .ok_or_else(|| Error::UnknownUnit(symbol.clone()))?;
    Ok(Json(UnitInfoResponse {
        symbol: unit.symbol,
        name: unit.name,
        dimension: unit.dimension,
        factor: unit.scale.factor(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct UnitsByDimensionQuery {
    #[serde(default)]
    pub dimension: Option<String>,
}

/// `GET /units-by-dimension?dimension=<tag>` — the units of one dimension.
pub async fn units_by_dimension_handler(
    State(registry): State<SharedRegistry>,
    Query(query): Query<UnitsByDimensionQuery>,
) -> Result<Json<Vec<UnitEntry>>> {
    let tag = query
        .dimension
        .filter(|tag| !tag.is_empty())
        .ok_or(Error::MissingField(MSG_DIMENSION_REQUIRED))?;
    let dimension =
        Dimension::from_tag(&tag).ok_or_else(|| Error::UnknownDimension(tag.clone()))?;
    let units = registry
        .units_in_dimension(dimension)
        .into_iter()
        .map(|unit| UnitEntry {
            symbol: unit.symbol,
            name: unit.name,
        })
        .collect();
    Ok(Json(units))
}

pub fn shared_registry() -> SharedRegistry {
    Arc::new(UnitRegistry::new())
}

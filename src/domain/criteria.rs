// src/domain/criteria.rs

use std::collections::HashMap;

use crate::domain::listing::split_amenities;
use crate::errors::ServerError;

/// Search constraints for one request. Every field is optional;
/// an absent field is simply not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub city: Option<String>,
    pub nearby_college: Option<String>,
    pub max_rent: Option<i64>,
    pub room_type: Option<String>,
    /// All of these must match. Empty means no amenity constraint.
    pub amenities: Vec<String>,
    pub max_distance: Option<f64>,
    pub min_rating: Option<f64>,
}

impl Criteria {
    /// Build criteria from raw request fields (form body or query string).
    ///
    /// Text is trimmed and empty strings count as absent. Numeric fields
    /// that are present but do not parse reject the whole request.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let text = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Ok(Self {
            city: text("city"),
            nearby_college: text("nearby_college"),
            max_rent: parse_number(params, "max_rent")?,
            room_type: text("room_type"),
            amenities: params
                .get("amenities")
                .map(|raw| split_amenities(raw))
                .unwrap_or_default(),
            max_distance: parse_decimal(params, "max_distance")?,
            min_rating: parse_decimal(params, "min_rating")?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Criteria::default()
    }

    /// The subset used by the fallback pass: city, college and rent ceiling.
    pub fn relaxed(&self) -> Self {
        Self {
            city: self.city.clone(),
            nearby_college: self.nearby_college.clone(),
            max_rent: self.max_rent,
            ..Self::default()
        }
    }
}

fn raw_number<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_number(
    params: &HashMap<String, String>,
    field: &'static str,
) -> Result<Option<i64>, ServerError> {
    raw_number(params, field)
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| ServerError::InvalidNumericInput {
                    field,
                    value: raw.to_string(),
                })
        })
        .transpose()
}

fn parse_decimal(
    params: &HashMap<String, String>,
    field: &'static str,
) -> Result<Option<f64>, ServerError> {
    raw_number(params, field)
        .map(|raw| match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(ServerError::InvalidNumericInput {
                field,
                value: raw.to_string(),
            }),
        })
        .transpose()
}

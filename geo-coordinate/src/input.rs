//! Input shapes accepted by the [`GeoCoordinate`](crate::GeoCoordinate) constructors and the normalization
//! routine they all go through.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GeoCoordinateError;

/// Coordinate values given by field name.
///
/// `latitude` and `longitude` are required, a missing `altitude` means `0`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateFields {
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    pub longitude: Option<f64>,
    /// Altitude in meters.
    pub altitude: Option<f64>,
}

/// Any of the supported ways to describe a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateInput {
    /// Positional `(latitude, longitude[, altitude])` arguments. `None` stands for a missing or null value.
    Args(Vec<Option<f64>>),
    /// Ordered `[latitude, longitude[, altitude]]` sequence of dynamic values.
    Sequence(Vec<Value>),
    /// Statically typed field-named structure.
    Fields(CoordinateFields),
    /// Field-named structure of dynamic values with `latitude`, `longitude` and `altitude` keys.
    Object(Map<String, Value>),
}

impl From<(f64, f64)> for CoordinateInput {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::Args(vec![Some(lat), Some(lon)])
    }
}

impl From<(f64, f64, f64)> for CoordinateInput {
    fn from((lat, lon, alt): (f64, f64, f64)) -> Self {
        Self::Args(vec![Some(lat), Some(lon), Some(alt)])
    }
}

impl From<&[Option<f64>]> for CoordinateInput {
    fn from(value: &[Option<f64>]) -> Self {
        Self::Args(value.to_vec())
    }
}

impl From<&[f64]> for CoordinateInput {
    fn from(value: &[f64]) -> Self {
        Self::Args(value.iter().copied().map(Some).collect())
    }
}

impl<const N: usize> From<[f64; N]> for CoordinateInput {
    fn from(value: [f64; N]) -> Self {
        Self::from(&value[..])
    }
}

impl From<Vec<Value>> for CoordinateInput {
    fn from(value: Vec<Value>) -> Self {
        Self::Sequence(value)
    }
}

impl From<CoordinateFields> for CoordinateInput {
    fn from(value: CoordinateFields) -> Self {
        Self::Fields(value)
    }
}

impl From<Map<String, Value>> for CoordinateInput {
    fn from(value: Map<String, Value>) -> Self {
        Self::Object(value)
    }
}

impl TryFrom<Value> for CoordinateInput {
    type Error = GeoCoordinateError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => {
                log::trace!("Reading coordinate from a sequence of {} values", values.len());
                Ok(Self::Sequence(values))
            }
            Value::Object(fields) => {
                log::trace!("Reading coordinate from an object with {} keys", fields.len());
                Ok(Self::Object(fields))
            }
            other => Err(GeoCoordinateError::invalid(format!(
                "expected a sequence or an object, got {}",
                value_kind(&other)
            ))),
        }
    }
}

/// A single coordinate component as it was supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Missing,
    Null,
    Number(f64),
    NotANumber(&'static str),
}

impl From<Option<f64>> for Component {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Null, Self::Number)
    }
}

impl From<Option<&Value>> for Component {
    fn from(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(Value::Number(number)) => number
                .as_f64()
                .map_or(Self::NotANumber("number"), Self::Number),
            Some(other) => Self::NotANumber(value_kind(other)),
        }
    }
}

/// Canonical `(latitude, longitude, altitude)` triple.
pub(crate) type Triple = (f64, f64, f64);

impl CoordinateInput {
    pub(crate) fn normalize(&self) -> Result<Triple, GeoCoordinateError> {
        match self {
            Self::Args(args) => {
                check_len(args.len())?;
                let altitude = match args.get(2).copied().flatten() {
                    Some(alt) => Component::Number(alt),
                    None => Component::Missing,
                };
                normalize(args[0].into(), args[1].into(), altitude)
            }
            Self::Sequence(values) => {
                check_len(values.len())?;
                normalize(
                    values.first().into(),
                    values.get(1).into(),
                    values.get(2).into(),
                )
            }
            Self::Fields(fields) => normalize(
                missing_if_none(fields.latitude),
                missing_if_none(fields.longitude),
                missing_if_none(fields.altitude),
            ),
            Self::Object(fields) => normalize(
                fields.get("latitude").into(),
                fields.get("longitude").into(),
                fields.get("altitude").into(),
            ),
        }
    }
}

fn missing_if_none(value: Option<f64>) -> Component {
    value.map_or(Component::Missing, Component::Number)
}

fn check_len(len: usize) -> Result<(), GeoCoordinateError> {
    if len < 2 {
        Err(GeoCoordinateError::invalid(format!(
            "expected at least 2 values (latitude and longitude), got {len}"
        )))
    } else {
        Ok(())
    }
}

/// Validates the components and fills in the default altitude.
fn normalize(
    latitude: Component,
    longitude: Component,
    altitude: Component,
) -> Result<Triple, GeoCoordinateError> {
    let latitude = required("latitude", latitude)?;
    let longitude = required("longitude", longitude)?;
    let altitude = match altitude {
        Component::Missing => 0.0,
        Component::Number(alt) => alt,
        Component::Null => return Err(GeoCoordinateError::invalid("altitude is null")),
        Component::NotANumber(kind) => {
            return Err(GeoCoordinateError::invalid(format!(
                "altitude must be a number, got {kind}"
            )))
        }
    };

    Ok((latitude, longitude, altitude))
}

fn required(name: &str, component: Component) -> Result<f64, GeoCoordinateError> {
    match component {
        Component::Number(value) if value.is_finite() => Ok(value),
        Component::Number(value) => Err(GeoCoordinateError::invalid(format!(
            "{name} must be finite, got {value}"
        ))),
        Component::Missing => Err(GeoCoordinateError::invalid(format!("{name} is missing"))),
        Component::Null => Err(GeoCoordinateError::invalid(format!("{name} is null"))),
        Component::NotANumber(kind) => Err(GeoCoordinateError::invalid(format!(
            "{name} must be a number, got {kind}"
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

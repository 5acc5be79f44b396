use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GeoCoordinateError;
use crate::input::{CoordinateFields, CoordinateInput};
use crate::point::GeoPoint;
use crate::sphere::Sphere;

/// Immutable point on the Earth surface: latitude and longitude in degrees, altitude in meters.
///
/// A coordinate can be created from positional values, an ordered sequence or a field-named structure. All of
/// them are validated the same way: latitude and longitude must be present and finite, altitude is `0` when
/// omitted.
///
/// ```
/// use geo_coordinate::GeoCoordinate;
///
/// let berlin = GeoCoordinate::new(52.5, 13.4)?;
/// let potsdam = GeoCoordinate::try_from([52.4, 13.06, 35.0])?;
///
/// assert!((berlin.distance_to(&potsdam) - 25_570.0).abs() < 100.0);
/// assert_eq!(potsdam.altitude(), 35.0);
/// # Ok::<(), geo_coordinate::GeoCoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate at zero altitude.
    ///
    /// Returns an error if `latitude` or `longitude` is not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoCoordinateError> {
        Self::try_from((latitude, longitude))
    }

    /// Creates a coordinate with the given altitude (in meters).
    pub fn with_altitude(
        latitude: f64,
        longitude: f64,
        altitude: f64,
    ) -> Result<Self, GeoCoordinateError> {
        Self::try_from((latitude, longitude, altitude))
    }

    /// Creates a coordinate from positional `latitude, longitude[, altitude]` values, where `None` is a
    /// missing or null value.
    pub fn from_args(args: &[Option<f64>]) -> Result<Self, GeoCoordinateError> {
        Self::try_from(CoordinateInput::from(args))
    }

    /// Creates a coordinate from a `[latitude, longitude[, altitude]]` sequence of dynamic values.
    pub fn from_sequence(values: &[Value]) -> Result<Self, GeoCoordinateError> {
        Self::try_from(CoordinateInput::Sequence(values.to_vec()))
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Altitude in meters, `0` if it was not given at construction.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Great-circle distance in meters to `other` on the mean Earth sphere. Altitude is ignored.
    pub fn distance_to(&self, other: &GeoCoordinate) -> f64 {
        self.distance_on(other, &Sphere::MEAN_EARTH)
    }

    /// Approximate distance in meters to `other`.
    ///
    /// Faster than [`GeoCoordinate::distance_to`] and accurate for distances up to about 20 km.
    pub fn quick_distance_to(&self, other: &GeoCoordinate) -> f64 {
        self.quick_distance_on(other, &Sphere::MEAN_EARTH)
    }

    /// Initial bearing to `other` in degrees, `[0; 360)`, clockwise from north.
    pub fn bearing_to(&self, other: &GeoCoordinate) -> f64 {
        self.bearing(other)
    }

    /// Initial bearing to `other` in radians, `[0; 2π)`, clockwise from north.
    pub fn bearing_rad_to(&self, other: &GeoCoordinate) -> f64 {
        self.bearing_rad(other)
    }
}

impl GeoPoint for GeoCoordinate {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.latitude
    }

    fn lon(&self) -> f64 {
        self.longitude
    }
}

impl TryFrom<CoordinateInput> for GeoCoordinate {
    type Error = GeoCoordinateError;

    fn try_from(input: CoordinateInput) -> Result<Self, Self::Error> {
        let (latitude, longitude, altitude) = input.normalize()?;
        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }
}

impl TryFrom<Value> for GeoCoordinate {
    type Error = GeoCoordinateError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        CoordinateInput::try_from(value)?.try_into()
    }
}

impl TryFrom<(f64, f64)> for GeoCoordinate {
    type Error = GeoCoordinateError;

    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        CoordinateInput::from(value).try_into()
    }
}

impl TryFrom<(f64, f64, f64)> for GeoCoordinate {
    type Error = GeoCoordinateError;

    fn try_from(value: (f64, f64, f64)) -> Result<Self, Self::Error> {
        CoordinateInput::from(value).try_into()
    }
}

impl TryFrom<&[f64]> for GeoCoordinate {
    type Error = GeoCoordinateError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        CoordinateInput::from(value).try_into()
    }
}

impl<const N: usize> TryFrom<[f64; N]> for GeoCoordinate {
    type Error = GeoCoordinateError;

    fn try_from(value: [f64; N]) -> Result<Self, Self::Error> {
        CoordinateInput::from(value).try_into()
    }
}

impl TryFrom<CoordinateFields> for GeoCoordinate {
    type Error = GeoCoordinateError;

    fn try_from(value: CoordinateFields) -> Result<Self, Self::Error> {
        CoordinateInput::from(value).try_into()
    }
}

impl AbsDiffEq for GeoCoordinate {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.latitude.abs_diff_eq(&other.latitude, epsilon)
            && self.longitude.abs_diff_eq(&other.longitude, epsilon)
            && self.altitude.abs_diff_eq(&other.altitude, epsilon)
    }
}

/// Creates a [`GeoCoordinate`] from any supported input shape.
///
/// This is the same as calling `GeoCoordinate::try_from(input)`.
///
/// ```
/// use geo_coordinate::{geo_coordinate, GeoCoordinate};
///
/// assert_eq!(geo_coordinate((1.0, 1.0)), GeoCoordinate::new(1.0, 1.0));
/// assert!(geo_coordinate(&[Some(1.0)][..]).is_err());
/// ```
pub fn geo_coordinate(
    input: impl Into<CoordinateInput>,
) -> Result<GeoCoordinate, GeoCoordinateError> {
    GeoCoordinate::try_from(input.into())
}

/// Creates a [`GeoCoordinate`] from latitude, longitude and optional altitude.
///
/// Evaluates to `Result<GeoCoordinate, GeoCoordinateError>`.
///
/// ```
/// use geo_coordinate::geo;
///
/// let point = geo!(35.0, 45.0, 120.0)?;
/// assert_eq!(point.altitude(), 120.0);
/// assert_eq!(geo!(35.0, 45.0)?.altitude(), 0.0);
/// # Ok::<(), geo_coordinate::GeoCoordinateError>(())
/// ```
#[macro_export]
macro_rules! geo {
    ($lat:expr, $lon:expr) => {
        $crate::GeoCoordinate::new($lat, $lon)
    };
    ($lat:expr, $lon:expr, $alt:expr) => {
        $crate::GeoCoordinate::with_altitude($lat, $lon, $alt)
    };
}

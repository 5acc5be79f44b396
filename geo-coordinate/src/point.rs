use num_traits::{Float, FloatConst, One};

use crate::sphere::Sphere;

/// A point on the surface of a sphere given by latitude and longitude in degrees.
///
/// Implementors only provide [`GeoPoint::lat`] and [`GeoPoint::lon`]; distance and bearing algorithms come
/// as provided methods.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float + FloatConst;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;

    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Great-circle distance to `other` along the surface of `sphere`, calculated with the haversine formula.
    ///
    /// The result is in the units of the sphere radius.
    fn distance_on(
        &self,
        other: &impl GeoPoint<Num = Self::Num>,
        sphere: &Sphere<Self::Num>,
    ) -> Self::Num {
        let two = Self::Num::one() + Self::Num::one();
        let lat1 = self.lat_rad();
        let lat2 = other.lat_rad();
        let d_lat = lat2 - lat1;
        let d_lon = other.lon_rad() - self.lon_rad();

        let sin_lat = (d_lat / two).sin();
        let sin_lon = (d_lon / two).sin();
        let a = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lon * sin_lon;
        let c = two * a.sqrt().atan2((Self::Num::one() - a).sqrt());

        sphere.radius() * c
    }

    /// Distance to `other` using the equirectangular approximation.
    ///
    /// Only one cosine is evaluated, so this is cheaper than [`GeoPoint::distance_on`]. The error stays well
    /// below 1% for distances of a few kilometers but grows quickly at continental scale.
    fn quick_distance_on(
        &self,
        other: &impl GeoPoint<Num = Self::Num>,
        sphere: &Sphere<Self::Num>,
    ) -> Self::Num {
        let two = Self::Num::one() + Self::Num::one();
        let lat1 = self.lat_rad();
        let lat2 = other.lat_rad();

        let x = (other.lon_rad() - self.lon_rad()) * ((lat1 + lat2) / two).cos();
        let y = lat2 - lat1;

        sphere.radius() * x.hypot(y)
    }

    /// Initial bearing (forward azimuth) to `other` in radians, in range `[0; 2π)`.
    ///
    /// Bearing to a coincident point is `0`.
    fn bearing_rad(&self, other: &impl GeoPoint<Num = Self::Num>) -> Self::Num {
        let lat1 = self.lat_rad();
        let lat2 = other.lat_rad();
        let d_lon = other.lon_rad() - self.lon_rad();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        let theta = y.atan2(x);

        (theta + Self::Num::TAU()) % Self::Num::TAU()
    }

    /// Initial bearing (forward azimuth) to `other` in degrees, in range `[0; 360)`.
    fn bearing(&self, other: &impl GeoPoint<Num = Self::Num>) -> Self::Num {
        self.bearing_rad(other).to_degrees()
    }
}

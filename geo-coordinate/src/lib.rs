//! Geographic coordinates (latitude, longitude and altitude) with great-circle distance and initial bearing
//! calculations on a spherical Earth model.
//!
//! ```
//! use geo_coordinate::GeoCoordinate;
//!
//! let start = GeoCoordinate::new(52.500235, 13.274623)?;
//! let end = GeoCoordinate::new(52.499516, 13.273739)?;
//!
//! let distance = start.distance_to(&end);
//! assert!((distance - 100.0).abs() < 1.5);
//! assert!((start.quick_distance_to(&end) - distance).abs() < 0.001);
//!
//! let bearing = start.bearing_to(&end);
//! assert!(bearing > 180.0 && bearing < 270.0);
//! # Ok::<(), geo_coordinate::GeoCoordinateError>(())
//! ```

mod coordinate;
pub mod error;
pub mod input;
mod point;
mod sphere;

pub use coordinate::{geo_coordinate, GeoCoordinate};
pub use error::GeoCoordinateError;
pub use input::{CoordinateFields, CoordinateInput};
pub use point::GeoPoint;
pub use sphere::Sphere;

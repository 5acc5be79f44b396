use num_traits::Float;

/// Spherical model of a celestial body used by the distance algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere<Num = f64> {
    radius: Num,
}

impl Sphere<f64> {
    /// Earth with the mean radius of 6 371 000 meters.
    pub const MEAN_EARTH: Self = Sphere {
        radius: 6_371_000.0,
    };
}

impl<Num: Float> Sphere<Num> {
    /// Creates a sphere with the given radius (in meters).
    pub const fn new(radius: Num) -> Self {
        Self { radius }
    }

    /// Radius in meters.
    pub fn radius(&self) -> Num {
        self.radius
    }
}

impl Default for Sphere<f64> {
    fn default() -> Self {
        Self::MEAN_EARTH
    }
}

use approx::assert_abs_diff_eq;
use geo_coordinate::{geo, GeoCoordinate};

/// `lat1, lon1, lat2, lon2, distance in meters`, reference values calculated on a geodesic.
const REFERENCE_DISTANCES: [[f64; 5]; 12] = [
    [52.500235, 13.274623, 52.500199, 13.27458, 5.0],
    [52.500235, 13.274623, 52.50009, 13.274449, 20.0],
    [52.500235, 13.274623, 52.499882, 13.274166, 50.0],
    [52.500235, 13.274623, 52.499516, 13.273739, 100.0],
    [52.38632, 13.357304, 52.385123, 13.357218, 133.77],
    [52.38632, 13.357304, 52.384076, 13.358157, 258.22],
    [52.502095, 13.276632, 52.498444, 13.272332, 500.1],
    [52.388053, 13.347313, 52.38632, 13.357304, 700.68],
    [52.388053, 13.347313, 52.384076, 13.358157, 856.66],
    [52.494973, 13.267656, 52.502095, 13.276632, 1000.0],
    [52.388053, 13.347313, 52.365767, 13.327428, 2822.54],
    [52.388053, 13.347313, 52.308504, 13.600255, 19332.97],
];

const BEARING_TOLERANCE: f64 = 0.0005;

fn deg_min_sec(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

fn origin() -> GeoCoordinate {
    GeoCoordinate::try_from([0.0, 0.0, 0.0]).expect("valid coordinate")
}

fn point(lat: f64, lon: f64) -> GeoCoordinate {
    geo!(lat, lon, 0.0).expect("valid coordinate")
}

#[test]
fn distances_within_tolerance() {
    for [lat1, lon1, lat2, lon2, expected] in REFERENCE_DISTANCES {
        let from = point(lat1, lon1);
        let to = point(lat2, lon2);
        let tolerance = expected * 0.015;

        assert_abs_diff_eq!(from.distance_to(&to), expected, epsilon = tolerance);
        assert_abs_diff_eq!(from.quick_distance_to(&to), expected, epsilon = tolerance);
        assert_abs_diff_eq!(to.distance_to(&from), expected, epsilon = tolerance);
    }
}

#[test]
fn bearing_north() {
    assert_eq!(origin().bearing_to(&point(3.0, 0.0)), 0.0);
}

#[test]
fn bearing_northeast() {
    assert_abs_diff_eq!(
        origin().bearing_to(&point(3.0, 3.0)),
        deg_min_sec(44.0, 57.0, 39.0),
        epsilon = BEARING_TOLERANCE
    );
}

#[test]
fn bearing_east() {
    assert_eq!(origin().bearing_to(&point(0.0, 120.0)), 90.0);
}

#[test]
fn bearing_southeast() {
    assert_abs_diff_eq!(
        origin().bearing_to(&point(-10.0, 10.0)),
        deg_min_sec(135.0, 26.0, 19.0),
        epsilon = BEARING_TOLERANCE
    );
}

#[test]
fn bearing_southwest() {
    let southwest = point(-45.0, -13.0);
    assert_abs_diff_eq!(
        origin().bearing_to(&southwest),
        deg_min_sec(192.0, 40.0, 40.0),
        epsilon = BEARING_TOLERANCE
    );
    assert_eq!(origin().bearing_rad_to(&southwest), 3.3628605082691405);
}

#[test]
fn bearing_almost_north() {
    let north = point(80.0, -0.2);
    assert_abs_diff_eq!(
        origin().bearing_to(&north),
        deg_min_sec(359.0, 57.0, 53.0),
        epsilon = BEARING_TOLERANCE
    );
    assert_eq!(origin().bearing_rad_to(&north), 6.282569811232558);
}

#[test]
fn bearing_same_meridian() {
    let from = point(52.0, 13.0);
    let north = point(52.5, 13.0);
    assert_eq!(from.bearing_to(&north), 0.0);
    assert_eq!(from.bearing_rad_to(&north), 0.0);
}

#[test]
fn bearing_northern_hemisphere() {
    let bagdad = GeoCoordinate::try_from([35.0, 45.0, 120.0]).expect("valid coordinate");
    let osaka = GeoCoordinate::try_from([35.0, 135.0, 200.0]).expect("valid coordinate");
    assert_abs_diff_eq!(
        bagdad.bearing_to(&osaka),
        deg_min_sec(60.0, 9.0, 45.0),
        epsilon = BEARING_TOLERANCE
    );
}

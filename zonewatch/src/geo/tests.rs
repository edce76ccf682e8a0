//! Tests for great-circle distance

use super::*;

const BLUE_CENTER: Coordinate = Coordinate::new(36.0730846, -95.9233244);

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

#[test]
fn test_degrees_to_radians() {
    assert_eq!(degrees_to_radians(0.0), 0.0);
    assert_close(degrees_to_radians(180.0), PI, 1e-12);
    assert_close(degrees_to_radians(-90.0), -PI / 2.0, 1e-12);
}

#[test]
fn test_distance_to_self_is_zero() {
    assert_eq!(distance_meters(BLUE_CENTER, BLUE_CENTER), 0.0);

    let origin = Coordinate::new(0.0, 0.0);
    assert_eq!(distance_meters(origin, origin), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [
        (BLUE_CENTER, Coordinate::new(36.07300167, -95.92327945)),
        (
            Coordinate::new(35.983520, -96.084035),
            Coordinate::new(36.032826, -95.802200),
        ),
        (Coordinate::new(-33.9, 151.2), Coordinate::new(51.5, -0.1)),
    ];

    for (a, b) in pairs {
        let forward = distance_meters(a, b);
        let backward = distance_meters(b, a);
        assert_close(forward, backward, forward.abs() * 1e-9);
    }
}

#[test]
fn test_one_degree_of_latitude() {
    // One degree along a meridian is R * pi / 180
    let d = distance_meters(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
    assert_close(d, EARTH_RADIUS_METERS * PI / 180.0, 1e-6);
}

#[test]
fn test_small_latitude_step() {
    // 0.0002 degrees north of the blue zone center is roughly 22 m
    let position = Coordinate::new(BLUE_CENTER.latitude + 0.0002, BLUE_CENTER.longitude);
    assert_close(distance_meters(BLUE_CENTER, position), 22.24, 0.05);
}

#[test]
fn test_longitude_shrinks_with_latitude() {
    let at_equator = distance_meters(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001));
    let at_blue = distance_meters(BLUE_CENTER, BLUE_CENTER.with_longitude_offset(0.001));

    assert!(at_blue < at_equator);
    assert_close(
        at_blue / at_equator,
        degrees_to_radians(BLUE_CENTER.latitude).cos(),
        1e-6,
    );
}

#[test]
fn test_antipodal_points() {
    let d = distance_meters(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
    assert_close(d, EARTH_RADIUS_METERS * PI, 1e-3);
}

#[test]
fn test_out_of_range_inputs_still_produce_a_number() {
    let d = distance_meters(Coordinate::new(120.0, 400.0), Coordinate::new(-95.0, -720.0));
    assert!(d.is_finite());
    assert!(d >= 0.0);
}

#[test]
fn test_with_longitude_offset_keeps_latitude() {
    let shifted = BLUE_CENTER.with_longitude_offset(-0.0005);
    assert_eq!(shifted.latitude, BLUE_CENTER.latitude);
    assert_close(shifted.longitude, BLUE_CENTER.longitude - 0.0005, 1e-12);
}

#[test]
fn test_coordinate_display() {
    let c = Coordinate::new(36.0730846, -95.9233244);
    assert_eq!(c.to_string(), "36.0730846, -95.9233244");
}

#[test]
fn test_coordinate_from_tuple() {
    let c: Coordinate = (1.5, -2.5).into();
    assert_eq!(c, Coordinate::new(1.5, -2.5));
}

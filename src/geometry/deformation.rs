//! Spherical emergence mapping
//!
//! A sphere crossing the drawing plane lifts a circular cap out of it. Points
//! inside that circle are pulled towards the sphere's axis and raised onto the
//! cap surface; everything else stays where it is.

use crate::geometry::point::{Point, Sphere};

/// Map a planar point onto the cap of `sphere` emerging through the plane
///
/// The planar distance to the sphere's axis is read as an arc length on the
/// cap, scaled so that the cap's rim maps onto the emerged circle. Points
/// outside that circle, and every point when the sphere misses the plane,
/// come back unchanged.
pub fn deform(point: Point, sphere: &Sphere) -> Point {
    let center = sphere.center();
    let radius = sphere.radius();

    let Some(emerged_radius) = sphere.emerged_radius() else {
        return point;
    };
    let r = point.horizontal_distance(&center);
    if r > emerged_radius {
        return point;
    }

    // The cap is always modelled as rising from a center at or below the plane
    let zc = -center.z.abs();
    let cap_angle = clamped_acos(-zc / radius);
    let r_prime = radius * (cap_angle * r / emerged_radius).sin();

    let (x, y) = if r > 0.0 {
        let scale = r_prime / r;
        (
            (point.x - center.x).mul_add(scale, center.x),
            (point.y - center.y).mul_add(scale, center.y),
        )
    } else {
        (point.x, point.y)
    };

    let beta = clamped_asin(r_prime / radius);
    let mut z = radius.mul_add(beta.cos(), zc);
    if center.z > 0.0 {
        z = -z;
    }

    Point::new(x, y, z)
}

/// `acos` with its argument clamped to [-1, 1]
///
/// Rounding can nudge a ratio that is mathematically within the domain just
/// past it, which would otherwise turn into NaN.
pub fn clamped_acos(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).acos()
}

/// `asin` with its argument clamped to [-1, 1]
pub fn clamped_asin(value: f64) -> f64 {
    value.clamp(-1.0, 1.0).asin()
}

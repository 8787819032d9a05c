//! Collision detection between the satellite and the central body

use crate::simulation::states::{CentralBody, Satellite};

/// True when the satellite is within collision range of the central body.
///
/// The test is axis-aligned: each coordinate separation is compared
/// independently against the sum of the two radii, so the collision zone
/// is a square, not a circle. This matches the reference behavior and is
/// kept as-is rather than replaced with a distance test. The boundary is
/// inclusive: exact separation of `r_c + r_s` on an axis counts as a hit.
pub fn collided(center: &CentralBody, sat: &Satellite) -> bool {
    let range = center.radius + sat.radius;
    (center.x.x - sat.x.x).abs() <= range && (center.x.y - sat.x.y).abs() <= range
}

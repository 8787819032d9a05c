//! Core state types for the satellite simulation.
//!
//! Defines the two simulated bodies:
//! - `CentralBody` — the fixed gravity source ("sun")
//! - `Satellite`   — the user-placed orbiting body
//!
//! Positions are f64 pixel coordinates in viewport space
//! (origin at the top-left, y growing downward).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// The fixed central mass. Immutable after construction; exactly one
/// instance exists per scenario.
#[derive(Debug, Clone)]
pub struct CentralBody {
    pub x: NVec2, // position (fixed)
    pub m: f64, // mass
    pub radius: f64, // radius, for collision and rendering
}

/// The orbiting body. At most one exists at a time; it is created by a
/// placement click and discarded on collision or re-placement.
#[derive(Debug, Clone)]
pub struct Satellite {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration from the most recent step
    pub m: f64, // mass
    pub radius: f64, // radius, for collision and rendering
    pub trail: Vec<NVec2>, // past positions, chronological, unbounded
}

impl Satellite {
    /// A freshly placed satellite: zero velocity, zero acceleration,
    /// empty trail.
    pub fn placed_at(x: NVec2, m: f64, radius: f64) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            a: NVec2::zeros(),
            m,
            radius,
            trail: Vec::new(),
        }
    }
}

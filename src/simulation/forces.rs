//! Force / acceleration contributors for the satellite engine
//!
//! Defines the acceleration trait seam, the summing `AccelSet`, and the
//! single active term: point-mass Newtonian gravity from the central body.

use crate::simulation::states::{CentralBody, Satellite, NVec2};

/// Collection of acceleration terms acting on the satellite.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total acceleration on `sat` from all registered terms
    pub fn accumulate_accel(&self, sat: &Satellite, center: &CentralBody) -> NVec2 {
        let mut out = NVec2::zeros();
        // Iterate over all acceleration contributors
        for term in &self.terms {
            out += term.acceleration(sat, center);
        }
        out
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources acting on a [`Satellite`]
/// Implementations return their contribution as a vector
pub trait Acceleration {
    fn acceleration(&self, sat: &Satellite, center: &CentralBody) -> NVec2;
}

/// Point-mass Newtonian gravity from the central body, unsoftened.
///
/// The force magnitude is `-G * M * m / r^2` (negative: attractive when
/// projected along the outward angle). The angle is taken relative to
/// `angular_origin`, the geometric center of the viewport, NOT the central
/// body's stored position. This reproduces the reference behavior and is
/// only correct while the central body sits at the viewport center; moving
/// it elsewhere would bend the force off-axis.
///
/// There is no guard against `r^2 == 0`: collision removal discards the
/// satellite well before zero separation, so the division is never reached
/// in normal play.
#[allow(non_snake_case)]
pub struct CentralGravity {
    pub G: f64, // gravitational constant
    pub angular_origin: NVec2, // viewport center, see type docs
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, sat: &Satellite, center: &CentralBody) -> NVec2 {
        // Squared separation from the central body
        let d = sat.x - center.x;
        let r2 = d.dot(&d);

        // Scalar force magnitude, attractive sign convention
        let force = -self.G * (center.m * sat.m) / r2;

        // Outward angle, measured from the viewport center
        let rel = sat.x - self.angular_origin;
        let theta = rel.y.atan2(rel.x);

        // Decompose into Cartesian components, then divide out the mass
        let f = NVec2::new(force * theta.cos(), force * theta.sin());
        f / sat.m
    }
}

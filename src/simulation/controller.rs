//! Placement state machine for the two-click launch gesture
//!
//! Pointer presses drive three named states:
//!
//! ```text
//! Empty --press at P--> Positioned --press at Q--> Launched
//!   ^                                                 |
//!   |                press at R: restart at R         |
//!   +---- collision (any state with a satellite) <----+
//! ```
//!
//! The controller owns the satellite for the duration of one placement;
//! discarding it (collision or re-placement) drops the trail with it.

use crate::simulation::collision::collided;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{CentralBody, NVec2, Satellite};

/// The three phases of a placement gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    Empty, // no satellite
    Positioned, // satellite placed, velocity not yet set
    Launched, // velocity set, physics active
}

/// Tracks the gesture phase and owns the current satellite, if any.
/// A satellite exists exactly when the state is not [`PlacementState::Empty`].
pub struct Placement {
    pub state: PlacementState,
    pub satellite: Option<Satellite>,
    sat_mass: f64, // mass given to each newly placed satellite
    sat_radius: f64, // radius given to each newly placed satellite
}

impl Placement {
    /// An empty controller that will create satellites with the given
    /// mass and radius.
    pub fn new(sat_mass: f64, sat_radius: f64) -> Self {
        Self {
            state: PlacementState::Empty,
            satellite: None,
            sat_mass,
            sat_radius,
        }
    }

    /// Apply one pointer press at viewport position `p`.
    ///
    /// First press places a satellite at rest, second press launches it
    /// with `v = (p - x) / (dt * launch_scale)`, and a press while an
    /// orbit is running discards the orbit and starts a new placement
    /// at `p`.
    pub fn pointer_pressed(&mut self, p: NVec2, params: &Parameters) {
        match self.state {
            PlacementState::Empty | PlacementState::Launched => {
                self.satellite = Some(Satellite::placed_at(p, self.sat_mass, self.sat_radius));
                self.state = PlacementState::Positioned;
            }
            PlacementState::Positioned => {
                // Satellite is present in this state by construction
                if let Some(sat) = self.satellite.as_mut() {
                    sat.v = (p - sat.x) / params.launch_divisor();
                    self.state = PlacementState::Launched;
                }
            }
        }
    }

    /// Advance the simulation by one frame: check for collision first,
    /// then run at most one physics step if a launch is active.
    ///
    /// A collision discards the satellite and resets to `Empty` regardless
    /// of phase, so a satellite placed inside the collision zone is removed
    /// before it ever integrates.
    pub fn tick(&mut self, center: &CentralBody, forces: &AccelSet, params: &Parameters) {
        if let Some(sat) = &self.satellite {
            if collided(center, sat) {
                self.discard();
                return;
            }
        }
        if self.state == PlacementState::Launched {
            if let Some(sat) = self.satellite.as_mut() {
                euler_integrator(sat, center, forces, params);
            }
        }
    }

    /// Drop the current satellite (and its trail) and return to `Empty`.
    pub fn discard(&mut self) {
        self.satellite = None;
        self.state = PlacementState::Empty;
    }
}

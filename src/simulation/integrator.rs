//! Fixed-step time integrator for the satellite
//!
//! Provides a semi-implicit (symplectic) Euler step driven by
//! `AccelSet` and `Parameters`

use super::states::{CentralBody, Satellite};
use super::forces::AccelSet;
use super::params::Parameters;

/// Advance the satellite by one fixed step using semi-implicit Euler.
///
/// The velocity is updated from the acceleration at the current position,
/// and the position then advances with the just-updated velocity. The
/// scheme is symplectic, which keeps closed orbits from spiraling the way
/// plain explicit Euler does.
///
/// Ordering is observable and must hold:
/// 1. evaluate acceleration at the current position, store it on `sat`
/// 2. `v += a * dt`
/// 3. append the pre-update position to the trail
/// 4. `x += v * dt`
///
/// so the trail never contains the satellite's newest position until the
/// next step runs.
pub fn euler_integrator(
    sat: &mut Satellite,
    center: &CentralBody,
    forces: &AccelSet,
    params: &Parameters,
) {
    let dt = params.dt; // fixed time step

    // a_n from x_n; kept on the satellite for the overlay
    let a = forces.accumulate_accel(sat, center);
    sat.a = a;

    // Kick: v_n+1 = v_n + dt * a_n
    sat.v += dt * a;

    // Record x_n before it moves
    sat.trail.push(sat.x);

    // Drift: x_n+1 = x_n + dt * v_n+1
    sat.x += dt * sat.v;
}

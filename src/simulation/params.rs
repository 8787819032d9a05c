//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G`,
//! - fixed integration step `dt` (simulated seconds per frame),
//! - launch gesture scale `launch_scale`
//!
//! The units are deliberately mixed: `G` is the SI constant while
//! positions are pixel-valued, matching the reference scenario.

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // fixed step size, seconds of simulated time per frame
    pub launch_scale: f64, // divisor scale for the click-drag velocity gesture
}

impl Parameters {
    /// Divisor applied to the placement-to-release displacement when the
    /// second click sets the initial velocity: `v = (q - p) / (dt * k)`.
    pub fn launch_divisor(&self) -> f64 {
        self.dt * self.launch_scale
    }
}

//! High-level runtime engine settings
//!
//! Holds the viewport dimensions (which fix the angular origin used by
//! the force law) and the overlay scaling applied when drawing the
//! acceleration vector.

use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct Engine {
    pub viewport_w: f64, // viewport width in device pixels
    pub viewport_h: f64, // viewport height in device pixels
    pub accel_overlay_scale: f64, // magnifies the acceleration vector for display
}

impl Engine {
    /// Geometric center of the viewport. The default scenario places the
    /// central body here, and the force law uses it as angular origin.
    pub fn viewport_center(&self) -> NVec2 {
        NVec2::new(self.viewport_w / 2.0, self.viewport_h / 2.0)
    }
}

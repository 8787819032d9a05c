//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the central body and the placement controller
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, integration, and visualization systems. Rendering reads the
//! [`RenderFrame`] snapshot instead of poking at physics state, which also
//! keeps the core testable without a window.

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::controller::{Placement, PlacementState};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, CentralGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{CentralBody, NVec2};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, the central body, the
/// placement controller (owning at most one satellite), and the set of
/// active force laws.
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub central: CentralBody,
    pub placement: Placement,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            viewport_w: e_cfg.width,
            viewport_h: e_cfg.height,
            accel_overlay_scale: e_cfg.accel_overlay_scale,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            dt: p_cfg.dt,
            launch_scale: p_cfg.launch_scale,
        };

        // The central body sits at the viewport center, which is also the
        // angular origin the force law assumes
        let central = CentralBody {
            x: engine.viewport_center(),
            m: cfg.central_body.m,
            radius: cfg.central_body.radius,
        };

        // Placement controller stamps each new satellite from config
        let placement = Placement::new(cfg.satellite.m, cfg.satellite.radius);

        // Forces: construct an AccelSet and register central gravity
        let mut forces = AccelSet::new();
        forces = forces.with(CentralGravity {
            G: parameters.G,
            angular_origin: engine.viewport_center(),
        });

        Self {
            engine,
            parameters,
            central,
            placement,
            forces,
        }
    }

    /// Apply one pointer press at viewport position `p`.
    pub fn pointer_pressed(&mut self, p: NVec2) {
        self.placement.pointer_pressed(p, &self.parameters);
    }

    /// Advance one frame: collision check, then at most one physics step.
    pub fn tick(&mut self) {
        // Split &mut Scenario into &mut fields in one destructuring step
        let Scenario {
            parameters,
            central,
            placement,
            forces,
            ..
        } = self;
        placement.tick(central, forces, parameters);
    }

    /// Pure per-frame snapshot for the rendering layer.
    pub fn render_frame(&self) -> RenderFrame<'_> {
        let satellite = self.placement.satellite.as_ref().map(|sat| SatelliteFrame {
            x: sat.x,
            radius: sat.radius,
            trail: &sat.trail,
            // Vector tip magnified so the (tiny) acceleration is visible
            accel_tip: sat.x + sat.a * self.engine.accel_overlay_scale,
            aiming: self.placement.state == PlacementState::Positioned,
        });
        RenderFrame {
            central_x: self.central.x,
            central_radius: self.central.radius,
            satellite,
        }
    }
}

/// Everything the renderer needs for one frame, read-only.
pub struct RenderFrame<'a> {
    pub central_x: NVec2,
    pub central_radius: f64,
    pub satellite: Option<SatelliteFrame<'a>>,
}

/// Satellite portion of a [`RenderFrame`].
pub struct SatelliteFrame<'a> {
    pub x: NVec2,
    pub radius: f64,
    pub trail: &'a [NVec2], // chronological past positions
    pub accel_tip: NVec2, // endpoint of the magnified acceleration vector
    pub aiming: bool, // true while the launch velocity is still unset
}

use satsim::simulation::states::{CentralBody, NVec2, Satellite};
use satsim::simulation::params::Parameters;
use satsim::simulation::forces::{AccelSet, CentralGravity};
use satsim::simulation::integrator::euler_integrator;
use satsim::simulation::collision::collided;
use satsim::simulation::controller::PlacementState;
use satsim::simulation::scenario::Scenario;
use satsim::configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};

/// Reference constants: 1000x1000 viewport, sun mass 5e4 radius 50 at the
/// center, satellite mass 10 radius 10
pub fn test_params() -> Parameters {
    Parameters {
        G: 6.6743e-11,
        dt: 86400.0,
        launch_scale: 50.0,
    }
}

pub fn test_center() -> CentralBody {
    CentralBody {
        x: NVec2::new(500.0, 500.0),
        m: 5e4,
        radius: 50.0,
    }
}

pub fn test_satellite(x: f64, y: f64) -> Satellite {
    Satellite::placed_at(NVec2::new(x, y), 10.0, 10.0)
}

/// Build a gravity term + AccelSet with the angular origin at the
/// viewport center (500, 500)
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(CentralGravity {
        G: p.G,
        angular_origin: NVec2::new(500.0, 500.0),
    })
}

/// Full reference scenario through the config pipeline
pub fn test_scenario() -> Scenario {
    Scenario::build_scenario(ScenarioConfig {
        engine: EngineConfig {
            width: 1000.0,
            height: 1000.0,
            accel_overlay_scale: 5e12,
        },
        parameters: ParametersConfig {
            G: 6.6743e-11,
            dt: 86400.0,
            launch_scale: 50.0,
        },
        central_body: BodyConfig { m: 5e4, radius: 50.0 },
        satellite: BodyConfig { m: 10.0, radius: 10.0 },
    })
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_matches_analytic_value() {
    // Satellite 100 px right of the sun: r^2 = 1e4, theta = 0, so
    // a = (-G * M / r^2, 0) = (-3.33715e-10, 0)
    let p = test_params();
    let center = test_center();
    let sat = test_satellite(600.0, 500.0);
    let forces = gravity_set(&p);

    let a = forces.accumulate_accel(&sat, &center);

    assert!((a.x - (-3.33715e-10)).abs() < 1e-16, "ax = {}", a.x);
    assert!(a.y.abs() < 1e-16, "ay = {}", a.y);
}

#[test]
fn gravity_points_toward_center() {
    let p = test_params();
    let center = test_center();
    let forces = gravity_set(&p);

    // From several directions the acceleration must oppose the offset
    for (x, y) in [(700.0, 500.0), (500.0, 200.0), (650.0, 650.0)] {
        let sat = test_satellite(x, y);
        let a = forces.accumulate_accel(&sat, &center);
        let offset = sat.x - center.x;
        assert!(a.dot(&offset) < 0.0, "not attractive at ({}, {})", x, y);
    }
}

#[test]
fn gravity_inverse_square_law() {
    let p = test_params();
    let center = test_center();
    let forces = gravity_set(&p);

    let near = forces.accumulate_accel(&test_satellite(600.0, 500.0), &center);
    let far = forces.accumulate_accel(&test_satellite(700.0, 500.0), &center);

    let ratio = near.norm() / far.norm();
    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_angle_uses_viewport_origin() {
    // The angle is measured from the configured angular origin, not the
    // central body. With the origin moved to (0, 0) a satellite due east
    // of the sun no longer accelerates straight west.
    let p = test_params();
    let center = test_center();
    let skewed = AccelSet::new().with(CentralGravity {
        G: p.G,
        angular_origin: NVec2::new(0.0, 0.0),
    });

    let a = skewed.accumulate_accel(&test_satellite(600.0, 500.0), &center);
    assert!(a.y.abs() > 0.0, "expected an off-axis component, got {:?}", a);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn step_from_rest_matches_formulas() {
    let p = test_params();
    let center = test_center();
    let forces = gravity_set(&p);
    let mut sat = test_satellite(600.0, 500.0);

    euler_integrator(&mut sat, &center, &forces, &p);

    // v_1 = a * dt, and the position moves with the updated velocity
    // (semi-implicit Euler): x_1 = x_0 + v_1 * dt
    let ax = -3.33715e-10;
    assert!((sat.a.x - ax).abs() < 1e-16);
    assert!((sat.v.x - ax * 86400.0).abs() < 1e-12, "vx = {}", sat.v.x);
    assert!(sat.v.y.abs() < 1e-12);
    assert!((sat.x.x - (600.0 + ax * 86400.0 * 86400.0)).abs() < 1e-9);
    assert!((sat.x.y - 500.0).abs() < 1e-9);
}

#[test]
fn trail_records_pre_step_positions() {
    let p = test_params();
    let center = test_center();
    let forces = gravity_set(&p);
    let mut sat = test_satellite(600.0, 500.0);
    sat.v = NVec2::new(0.0, 4e-6); // roughly tangential launch

    let n = 8;
    let mut expected = Vec::new();
    for _ in 0..n {
        expected.push(sat.x);
        euler_integrator(&mut sat, &center, &forces, &p);
    }

    assert_eq!(sat.trail.len(), n);
    for (i, (got, want)) in sat.trail.iter().zip(expected.iter()).enumerate() {
        assert_eq!(got, want, "trail entry {} diverged", i);
    }
    // The newest position is never in the trail
    assert_ne!(*sat.trail.last().unwrap(), sat.x);
}

// ==================================================================================
// Collision tests
// ==================================================================================

#[test]
fn collision_boundary_is_inclusive() {
    let center = test_center();

    // Combined radius is 60: exact separation collides, one more pixel clears
    assert!(collided(&center, &test_satellite(560.0, 500.0)));
    assert!(!collided(&center, &test_satellite(561.0, 500.0)));
}

#[test]
fn collision_zone_is_square() {
    let center = test_center();

    // (60, 60) is ~84.85 px away, outside a circular zone of radius 60,
    // but each axis separation is within range so the box test fires
    assert!(collided(&center, &test_satellite(560.0, 560.0)));
    assert!(!collided(&center, &test_satellite(560.0, 561.0)));
}

// ==================================================================================
// Placement state machine tests
// ==================================================================================

#[test]
fn first_click_places_at_rest() {
    let mut sim = test_scenario();
    sim.pointer_pressed(NVec2::new(100.0, 100.0));

    assert_eq!(sim.placement.state, PlacementState::Positioned);
    let sat = sim.placement.satellite.as_ref().unwrap();
    assert_eq!(sat.x, NVec2::new(100.0, 100.0));
    assert_eq!(sat.v, NVec2::zeros());
    assert!(sat.trail.is_empty());
}

#[test]
fn second_click_sets_gesture_velocity() {
    let mut sim = test_scenario();
    sim.pointer_pressed(NVec2::new(100.0, 100.0));
    sim.pointer_pressed(NVec2::new(200.0, 150.0));

    assert_eq!(sim.placement.state, PlacementState::Launched);
    let sat = sim.placement.satellite.as_ref().unwrap();

    // v = (Q - P) / (dt * launch_scale)
    let divisor = 86400.0 * 50.0;
    assert_eq!(sat.v, NVec2::new(100.0 / divisor, 50.0 / divisor));
    // Placement position is untouched by the launch click
    assert_eq!(sat.x, NVec2::new(100.0, 100.0));
}

#[test]
fn third_click_restarts_placement() {
    let mut sim = test_scenario();
    sim.pointer_pressed(NVec2::new(100.0, 100.0));
    sim.pointer_pressed(NVec2::new(200.0, 150.0));
    sim.pointer_pressed(NVec2::new(300.0, 300.0));

    // Clicking during an active orbit discards it and starts a fresh
    // placement at the click point, so the machine ends in Positioned
    assert_eq!(sim.placement.state, PlacementState::Positioned);
    let sat = sim.placement.satellite.as_ref().unwrap();
    assert_eq!(sat.x, NVec2::new(300.0, 300.0));
    assert_eq!(sat.v, NVec2::zeros());
}

#[test]
fn placement_without_ticks_is_inert() {
    let mut sim = test_scenario();
    sim.pointer_pressed(NVec2::new(600.0, 500.0));
    sim.pointer_pressed(NVec2::new(600.0, 520.0));

    // No tick has run: state is exactly what the clicks set up
    let sat = sim.placement.satellite.as_ref().unwrap();
    assert_eq!(sat.x, NVec2::new(600.0, 500.0));
    assert_eq!(sat.v, NVec2::new(0.0, 20.0 / (86400.0 * 50.0)));
    assert!(sat.trail.is_empty());
}

#[test]
fn launched_orbit_steps_once_per_tick() {
    let mut sim = test_scenario();
    sim.pointer_pressed(NVec2::new(600.0, 500.0));
    sim.pointer_pressed(NVec2::new(600.0, 520.0));

    for _ in 0..5 {
        sim.tick();
    }

    assert_eq!(sim.placement.state, PlacementState::Launched);
    let sat = sim.placement.satellite.as_ref().unwrap();
    assert_eq!(sat.trail.len(), 5);
}

#[test]
fn collision_resets_to_empty() {
    let mut sim = test_scenario();

    // Place directly inside the collision zone around (500, 500)
    sim.pointer_pressed(NVec2::new(520.0, 500.0));
    sim.tick();

    assert_eq!(sim.placement.state, PlacementState::Empty);
    assert!(sim.placement.satellite.is_none());

    // The next placement is brand new: rest state, empty trail
    sim.pointer_pressed(NVec2::new(800.0, 500.0));
    assert_eq!(sim.placement.state, PlacementState::Positioned);
    let sat = sim.placement.satellite.as_ref().unwrap();
    assert!(sat.trail.is_empty());
    assert_eq!(sat.v, NVec2::zeros());
}

// ==================================================================================
// Snapshot tests
// ==================================================================================

#[test]
fn render_frame_reflects_placement() {
    let mut sim = test_scenario();

    let frame = sim.render_frame();
    assert_eq!(frame.central_x, NVec2::new(500.0, 500.0));
    assert_eq!(frame.central_radius, 50.0);
    assert!(frame.satellite.is_none());

    sim.pointer_pressed(NVec2::new(600.0, 500.0));
    {
        let frame = sim.render_frame();
        let sat = frame.satellite.as_ref().unwrap();
        assert!(sat.aiming);
        // At rest the acceleration overlay collapses onto the satellite
        assert_eq!(sat.accel_tip, sat.x);
    }

    sim.pointer_pressed(NVec2::new(600.0, 520.0));
    sim.tick();
    let frame = sim.render_frame();
    let sat = frame.satellite.as_ref().unwrap();
    assert!(!sat.aiming);
    assert_eq!(sat.trail.len(), 1);
    // Overlay tip is the magnified acceleration, pointed back at the sun
    assert!(sat.accel_tip.x < sat.x.x);
}

use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::PrimaryWindow;

use crate::simulation::engine::Engine;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Marker for the satellite's circle entity (spawned and despawned as
/// placements come and go)
#[derive(Component)]
struct SatelliteSprite;

/// Simulation space is the window's pixel space: origin top-left, y down.
/// Bevy's 2D world has the origin at the window center with y up, so
/// rendering shifts and flips.
fn sim_to_world(engine: &Engine, p: NVec2) -> Vec2 {
    Vec2::new(
        (p.x - engine.viewport_w / 2.0) as f32,
        (engine.viewport_h / 2.0 - p.y) as f32,
    )
}

/// Cursor position (already top-left, y down) into simulation space
fn cursor_to_sim(window: &Window) -> Option<NVec2> {
    window
        .cursor_position()
        .map(|p| NVec2::new(p.x as f64, p.y as f64))
}

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer, central mass {}", scenario.central.m);

    let (width, height) = (scenario.engine.viewport_w as f32, scenario.engine.viewport_h as f32);

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Satellite Simulation".to_string(),
                resolution: (width, height).into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(
            Update,
            (
                pointer_input_system,
                physics_step_system,
                sync_satellite_system,
                overlay_system,
            )
                .chain(),
        )
        .run();
}

fn setup_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // The central body never moves, so its circle is spawned once
    let frame = scenario.render_frame();
    commands.spawn(MaterialMesh2dBundle {
        mesh: Mesh2dHandle(meshes.add(Circle::new(frame.central_radius as f32))),
        material: materials.add(ColorMaterial::from(Color::srgb(1.0, 1.0, 0.0))),
        transform: Transform::from_translation(
            sim_to_world(&scenario.engine, frame.central_x).extend(0.0),
        ),
        ..Default::default()
    });
}

/// Feed pointer presses to the placement state machine, in arrival order
fn pointer_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scenario: ResMut<Scenario>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    if let Some(p) = cursor_to_sim(window) {
        scenario.pointer_pressed(p);
    }
}

/// One frame advance: collision check, then at most one integration step
fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.tick();
}

/// Keep the satellite's circle entity in sync with the placement state:
/// spawn on placement, move while it exists, despawn on discard
fn sync_satellite_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &mut Transform), With<SatelliteSprite>>,
) {
    let frame = scenario.render_frame();
    match (frame.satellite, query.get_single_mut()) {
        (Some(sat), Ok((_entity, mut transform))) => {
            transform.translation = sim_to_world(&scenario.engine, sat.x).extend(1.0);
        }
        (Some(sat), Err(_)) => {
            commands.spawn((
                MaterialMesh2dBundle {
                    mesh: Mesh2dHandle(meshes.add(Circle::new(sat.radius as f32))),
                    material: materials.add(ColorMaterial::from(Color::srgb(0.0, 1.0, 0.0))),
                    transform: Transform::from_translation(
                        sim_to_world(&scenario.engine, sat.x).extend(1.0),
                    ),
                    ..Default::default()
                },
                SatelliteSprite,
            ));
        }
        (None, Ok((entity, _transform))) => {
            commands.entity(entity).despawn();
        }
        (None, Err(_)) => {}
    }
}

/// Immediate-mode overlay: trail polyline, acceleration vectors, and the
/// aim line from a placed satellite to the cursor
fn overlay_system(
    scenario: Res<Scenario>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let engine = &scenario.engine;
    let frame = scenario.render_frame();
    let Some(sat) = frame.satellite else {
        return;
    };

    let pos = sim_to_world(engine, sat.x);

    // Trail needs at least a segment to be drawable
    if sat.trail.len() >= 2 {
        gizmos.linestrip_2d(
            sat.trail.iter().map(|p| sim_to_world(engine, *p)),
            Color::srgb(0.0, 1.0, 0.0),
        );
    }

    // Acceleration vector, pre-magnified by the overlay scale:
    // x component in red, y component in blue, full vector in white
    let tip = sim_to_world(engine, sat.accel_tip);
    gizmos.line_2d(pos, Vec2::new(tip.x, pos.y), Color::srgb(1.0, 0.0, 0.0));
    gizmos.line_2d(pos, Vec2::new(pos.x, tip.y), Color::srgb(0.0, 0.0, 1.0));
    gizmos.line_2d(pos, tip, Color::WHITE);

    // While aiming, show the gesture: placed satellite to live cursor
    if sat.aiming {
        if let Ok(window) = windows.get_single() {
            if let Some(cursor) = cursor_to_sim(window) {
                gizmos.line_2d(pos, sim_to_world(engine, cursor), Color::WHITE);
            }
        }
    }
}

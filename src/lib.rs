pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{CentralBody, Satellite, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, CentralGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::collision::collided;
pub use simulation::controller::{Placement, PlacementState};
pub use simulation::scenario::{Scenario, RenderFrame, SatelliteFrame};

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::satsim_vis2d::run_2d;

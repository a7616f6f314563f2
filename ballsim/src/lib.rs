pub mod simulation;
pub mod configuration;
pub mod output;
pub mod benchmark;

pub use simulation::states::{Body, BoundingRegion, NVec2, normalize_or_zero};
pub use simulation::errors::{SimError, StepError};
pub use simulation::params::{PhysicsParams, BorderContact};
pub use simulation::forces::{Acceleration, AccelSet, ContactFriction, ScaledGravity};
pub use simulation::collision::{detect, resolve, resolve_impulse, resolve_overlap};
pub use simulation::recorder::{Sample, SampleSink, BodySeries, TimeSeries, NullSink};
pub use simulation::engine::Simulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, RunConfig, RegionConfig, EnsembleConfig, BodyConfig, ScenarioConfig};

pub use output::series_csv::{export_scenario, write_series};

pub use benchmark::benchmark::{bench_advance, bench_collisions};

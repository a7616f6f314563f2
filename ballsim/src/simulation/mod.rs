pub mod states;
pub mod errors;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod recorder;
pub mod engine;
pub mod scenario;

//! Deterministic simulation module
//!
//! This module must be pure and deterministic:
//! - Fixed timestep only
//! - No rendering or platform dependencies

pub mod integrator;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use integrator::{derivatives, step};
pub use state::{Parameters, SimState, Simulation};
pub use tick::tick;
pub use trajectory::TrajectoryBuffer;

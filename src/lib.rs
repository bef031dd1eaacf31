//! Nagumo Tube - FitzHugh-Nagumo phase-space trajectory as a 3D tube
//!
//! Core modules:
//! - `sim`: Deterministic simulation (RK4 integrator, trajectory buffer, tick)
//! - `renderer`: Procedural mesh generation handed to an external renderer
//! - `camera`: Orbit camera driven by pointer drag and wheel input
//! - `session`: Owns all per-session state and exposes the host interface
//! - `platform`: Browser bindings
//! - `settings`: Data-driven configuration

pub mod camera;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use camera::{OrbitCamera, OrbitController};
pub use session::{FrameStats, Session};
pub use settings::{Settings, TubeQuality};

use glam::DVec3;
use std::ops::RangeInclusive;

/// Model and pipeline configuration constants
pub mod consts {
    use std::ops::RangeInclusive;

    /// Fixed integration timestep
    pub const DT: f64 = 0.02;
    /// Integration steps performed per tick
    pub const STEPS_PER_FRAME: usize = 3;
    /// Upper bound on configured steps per tick
    pub const MAX_STEPS_PER_FRAME: usize = 100;
    /// Nominal external tick period
    pub const TICK_INTERVAL_MS: u32 = 16;

    /// FitzHugh-Nagumo defaults
    pub const EPSILON: f64 = 0.08;
    pub const A: f64 = 0.7;
    pub const B: f64 = 0.8;
    pub const CURRENT: f64 = 0.5;

    /// Tunable parameter ranges
    pub const EPSILON_RANGE: RangeInclusive<f64> = 0.01..=0.3;
    pub const A_RANGE: RangeInclusive<f64> = 0.1..=1.5;
    pub const CURRENT_RANGE: RangeInclusive<f64> = 0.0..=2.0;

    /// Initial state (v, w, t)
    pub const INITIAL_V: f64 = 0.1;
    pub const INITIAL_W: f64 = 0.0;

    /// Time is compressed by this factor on the z axis
    pub const TIME_SCALE: f64 = 8.0;

    /// Trajectory capacity
    pub const MAX_POINTS: usize = 8000;
    /// Bounds on configured trajectory capacity
    pub const MIN_POINTS: usize = 2;
    pub const MAX_POINTS_LIMIT: usize = 200_000;

    /// Grid lines per direction never exceed this
    pub const MAX_GRID_LINES: usize = 200;

    /// Tube defaults
    pub const TUBE_RADIUS: f64 = 0.025;
    pub const TUBE_SEGMENTS: u32 = 8;

    /// Camera defaults (degrees, world units)
    pub const CAMERA_THETA: f64 = 45.0;
    pub const CAMERA_PHI: f64 = 30.0;
    pub const CAMERA_DISTANCE: f64 = 8.0;
    pub const PHI_MIN: f64 = 5.0;
    pub const PHI_MAX: f64 = 175.0;
    pub const DISTANCE_MIN: f64 = 2.0;
    pub const DISTANCE_MAX: f64 = 20.0;
    /// Degrees of rotation per pixel of drag
    pub const DRAG_SENSITIVITY: f64 = 0.5;
    pub const ZOOM_IN_FACTOR: f64 = 0.9;
    pub const ZOOM_OUT_FACTOR: f64 = 1.1;
}

/// Clamp a value into an inclusive range
#[inline]
pub fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}

/// Convert spherical (r, theta, phi) in degrees to cartesian, y up
///
/// `phi` is measured from the +y axis, `theta` around it starting at +x.
#[inline]
pub fn spherical_to_cartesian(r: f64, theta_deg: f64, phi_deg: f64) -> DVec3 {
    let (theta, phi) = (theta_deg.to_radians(), phi_deg.to_radians());
    DVec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    )
}

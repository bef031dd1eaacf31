//! Simulation state and model parameters
//!
//! Everything the integrator reads or writes lives here, owned by a single
//! `Simulation` value.

use glam::{DVec2, DVec3};

use super::trajectory::TrajectoryBuffer;
use crate::consts::*;

/// Instantaneous ODE state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimState {
    /// Membrane potential
    pub v: f64,
    /// Recovery variable
    pub w: f64,
    /// Simulated time
    pub t: f64,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            v: INITIAL_V,
            w: INITIAL_W,
            t: 0.0,
        }
    }
}

impl SimState {
    /// The (v, w) pair as a vector
    #[inline]
    pub fn phase(&self) -> DVec2 {
        DVec2::new(self.v, self.w)
    }

    /// Render-space position: (v, w, t / time_scale)
    #[inline]
    pub fn to_point(&self, time_scale: f64) -> DVec3 {
        DVec3::new(self.v, self.w, self.t / time_scale)
    }
}

/// Model and integration constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Time-scale separation of the recovery variable
    pub epsilon: f64,
    pub a: f64,
    pub b: f64,
    /// Injected current (I)
    pub current: f64,
    /// Fixed integration step
    pub dt: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            a: A,
            b: B,
            current: CURRENT,
            dt: DT,
        }
    }
}

/// Complete simulation: ODE state, parameters and the trajectory it produces
#[derive(Debug, Clone)]
pub struct Simulation {
    pub state: SimState,
    pub params: Parameters,
    pub trajectory: TrajectoryBuffer,
    /// Integration steps per tick
    pub steps_per_frame: usize,
    /// Divisor applied to t when mapping to render space
    pub time_scale: f64,
    /// Ticks performed since start or last reset
    pub frame: u64,
}

impl Simulation {
    pub fn new(
        params: Parameters,
        max_points: usize,
        steps_per_frame: usize,
        time_scale: f64,
    ) -> Self {
        Self {
            state: SimState::default(),
            params,
            trajectory: TrajectoryBuffer::new(max_points),
            steps_per_frame,
            time_scale,
            frame: 0,
        }
    }

    /// Restore the initial state and drop the trajectory. Parameters are kept.
    pub fn reset(&mut self) {
        self.state = SimState::default();
        self.trajectory.clear();
        self.frame = 0;
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Parameters::default(), MAX_POINTS, STEPS_PER_FRAME, TIME_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_point_compresses_time() {
        let state = SimState {
            v: 1.5,
            w: -0.25,
            t: 16.0,
        };
        assert_eq!(state.to_point(8.0), DVec3::new(1.5, -0.25, 2.0));
    }

    #[test]
    fn test_reset_keeps_parameters() {
        let mut sim = Simulation::default();
        sim.params.epsilon = 0.2;
        sim.state = SimState {
            v: -1.0,
            w: 0.4,
            t: 3.0,
        };
        sim.trajectory.append(DVec3::ONE);
        sim.frame = 10;

        sim.reset();

        assert_eq!(sim.state, SimState::default());
        assert!(sim.trajectory.is_empty());
        assert_eq!(sim.frame, 0);
        assert_eq!(sim.params.epsilon, 0.2);
    }
}

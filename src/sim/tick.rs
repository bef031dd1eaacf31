//! Fixed timestep simulation tick
//!
//! Advances the model `steps_per_frame` times and feeds the trajectory.

use super::integrator::step;
use super::state::Simulation;

/// Advance the simulation by one frame.
///
/// Runs the integrator `steps_per_frame` times, appends one point per step,
/// then evicts a batch of the same size if the trajectory overflowed.
/// Returns the number of points evicted.
pub fn tick(sim: &mut Simulation) -> usize {
    let steps = sim.steps_per_frame;
    for _ in 0..steps {
        sim.state = step(sim.state, &sim.params);
        sim.trajectory.append(sim.state.to_point(sim.time_scale));
    }
    sim.frame += 1;

    let evicted = sim.trajectory.trim_if_overflow(steps);
    if evicted > 0 {
        log::trace!("Frame {}: evicted {} points", sim.frame, evicted);
    }
    evicted
}

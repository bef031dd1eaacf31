//! Fixed-step RK4 integration of the FitzHugh-Nagumo model

use glam::DVec2;

use super::state::{Parameters, SimState};

/// Time derivative (dv/dt, dw/dt) at a phase point
#[inline]
pub fn derivatives(y: DVec2, params: &Parameters) -> DVec2 {
    let (v, w) = (y.x, y.y);
    DVec2::new(
        v - v * v * v / 3.0 - w + params.current,
        params.epsilon * (v + params.a - params.b * w),
    )
}

/// Advance the state by one `params.dt` using classical 4th-order Runge-Kutta
pub fn step(state: SimState, params: &Parameters) -> SimState {
    let h = params.dt;
    let y = state.phase();

    let k1 = derivatives(y, params);
    let k2 = derivatives(y + k1 * (h * 0.5), params);
    let k3 = derivatives(y + k2 * (h * 0.5), params);
    let k4 = derivatives(y + k3 * h, params);

    let next = y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0);

    SimState {
        v: next.x,
        w: next.y,
        t: state.t + h,
    }
}

//! Orbit camera around the origin
//!
//! The camera is stored only as spherical parameters; position, look
//! direction and matrices are derived on every call.

use glam::{DMat4, DVec2, DVec3};

use crate::consts::*;
use crate::spherical_to_cartesian;

/// Spherical camera parameters (angles in degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Azimuth around +y, unbounded
    pub theta: f64,
    /// Polar angle from +y, in [PHI_MIN, PHI_MAX]
    pub phi: f64,
    /// Distance from the origin, in [DISTANCE_MIN, DISTANCE_MAX]
    pub distance: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            theta: CAMERA_THETA,
            phi: CAMERA_PHI,
            distance: CAMERA_DISTANCE,
        }
    }
}

impl OrbitCamera {
    /// Rotate by a pointer delta in pixels
    pub fn update_from_drag(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.theta += dx * DRAG_SENSITIVITY;
        self.phi = (self.phi - dy * DRAG_SENSITIVITY).clamp(PHI_MIN, PHI_MAX);
    }

    /// Zoom one wheel notch; positive (forward) moves closer, negative away
    pub fn update_from_wheel(&mut self, delta: f64) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        let factor = if delta > 0.0 {
            ZOOM_IN_FACTOR
        } else {
            ZOOM_OUT_FACTOR
        };
        self.distance = (self.distance * factor).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    #[inline]
    pub fn position(&self) -> DVec3 {
        spherical_to_cartesian(self.distance, self.theta, self.phi)
    }

    /// Always toward the origin
    #[inline]
    pub fn look_direction(&self) -> DVec3 {
        -self.position()
    }

    #[inline]
    pub fn up(&self) -> DVec3 {
        DVec3::Y
    }

    #[inline]
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position(), DVec3::ZERO, self.up())
    }

    /// Perspective projection with a 60 degree vertical field of view
    #[inline]
    pub fn projection_matrix(&self, aspect: f64) -> DMat4 {
        DMat4::perspective_rh(60f64.to_radians(), aspect.max(1e-6), 0.01, 1000.0)
    }

    #[inline]
    pub fn view_projection(&self, aspect: f64) -> DMat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// Pointer gesture state feeding an `OrbitCamera`
#[derive(Debug, Clone, Default)]
pub struct OrbitController {
    pub camera: OrbitCamera,
    /// True between drag start and drag end
    rotating: bool,
    last_pos: DVec2,
}

impl OrbitController {
    pub fn new(camera: OrbitCamera) -> Self {
        Self {
            camera,
            rotating: false,
            last_pos: DVec2::ZERO,
        }
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn on_drag_start(&mut self, pos: DVec2) {
        self.rotating = true;
        self.last_pos = pos;
    }

    /// Apply the movement since the last pointer position; ignored unless dragging
    pub fn on_drag_move(&mut self, pos: DVec2) {
        if !self.rotating {
            return;
        }
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        self.camera.update_from_drag(delta.x, delta.y);
    }

    pub fn on_drag_end(&mut self) {
        self.rotating = false;
    }

    pub fn on_wheel(&mut self, delta: f64) {
        self.camera.update_from_wheel(delta);
    }

    /// Restore the default camera and cancel any gesture
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

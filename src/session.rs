//! Session state and host-facing interface
//!
//! A `Session` owns the simulation, the camera controller and the current
//! frame's mesh. The host calls `on_tick` at a fixed cadence and forwards
//! pointer events; all calls are expected on one thread, one at a time.

use glam::{DMat4, DVec2, DVec3};

use crate::camera::{OrbitCamera, OrbitController};
use crate::consts::*;
use crate::renderer::{Mesh, Scene, Vertex, build_tube, gradient_vertices};
use crate::settings::Settings;
use crate::sim::{Simulation, tick};

/// Per-tick summary for HUDs and logs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame: u64,
    pub points: usize,
    pub vertices: usize,
    pub triangles: usize,
    pub t: f64,
    pub v: f64,
    pub w: f64,
}

/// All mutable state for one running visualization
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    sim: Simulation,
    controller: OrbitController,
    /// Tube mesh from the latest tick
    mesh: Mesh,
    /// Axes and grid, rebuilt only when settings change
    scene: Scene,
    paused: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let sim = Self::simulation_for(&settings);
        let scene = Scene::build(&settings.scene_style());
        log::info!(
            "Session created: capacity={}, steps/frame={}, segments={}",
            sim.trajectory.capacity(),
            sim.steps_per_frame,
            settings.segments()
        );
        Self {
            settings,
            sim,
            controller: OrbitController::new(OrbitCamera::default()),
            mesh: Mesh::new(),
            scene,
            paused: false,
        }
    }

    fn simulation_for(settings: &Settings) -> Simulation {
        Simulation::new(
            settings.parameters(),
            settings.effective_max_points(),
            settings.effective_steps_per_frame(),
            settings.effective_time_scale(),
        )
    }

    /// Advance one frame: integrate, append/trim, rebuild the tube
    pub fn on_tick(&mut self) -> FrameStats {
        if !self.paused {
            tick(&mut self.sim);
            self.mesh = build_tube(
                self.sim.trajectory.points(),
                self.settings.effective_tube_radius(),
                self.settings.segments(),
            );
        }
        self.stats()
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            frame: self.sim.frame,
            points: self.sim.trajectory.len(),
            vertices: self.mesh.vertex_count(),
            triangles: self.mesh.triangle_count(),
            t: self.sim.state.t,
            v: self.sim.state.v,
            w: self.sim.state.w,
        }
    }

    // === Parameters ===

    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.sim.params.epsilon = crate::clamp_to(epsilon, &EPSILON_RANGE);
        log::debug!("epsilon = {}", self.sim.params.epsilon);
    }

    pub fn set_a(&mut self, a: f64) {
        self.sim.params.a = crate::clamp_to(a, &A_RANGE);
        log::debug!("a = {}", self.sim.params.a);
    }

    pub fn set_current(&mut self, current: f64) {
        self.sim.params.current = crate::clamp_to(current, &CURRENT_RANGE);
        log::debug!("I = {}", self.sim.params.current);
    }

    /// Restore the initial state and camera and clear the trajectory
    pub fn reset(&mut self) {
        self.sim.reset();
        self.controller.reset();
        self.mesh.clear();
        log::info!("Session reset");
    }

    /// Replace settings; restarts the simulation if its shape changed
    pub fn apply_settings(&mut self, settings: Settings) {
        let restart = settings.effective_max_points() != self.settings.effective_max_points()
            || settings.effective_steps_per_frame() != self.settings.effective_steps_per_frame()
            || settings.effective_time_scale() != self.settings.effective_time_scale()
            || settings.effective_dt() != self.settings.effective_dt()
            || settings.b != self.settings.b;
        if settings.scene_style() != self.settings.scene_style() {
            self.scene = Scene::build(&settings.scene_style());
        }
        if restart {
            let params = self.sim.params;
            self.sim = Self::simulation_for(&settings);
            // Keep live slider values across the restart
            self.sim.params.epsilon = params.epsilon;
            self.sim.params.a = params.a;
            self.sim.params.current = params.current;
            self.mesh.clear();
            log::info!("Simulation restarted for new settings");
        }
        self.settings = settings;
    }

    // === Pause ===

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // === Pointer input ===

    pub fn on_drag_start(&mut self, pos: DVec2) {
        self.controller.on_drag_start(pos);
    }

    pub fn on_drag_move(&mut self, pos: DVec2) {
        self.controller.on_drag_move(pos);
    }

    pub fn on_drag_end(&mut self) {
        self.controller.on_drag_end();
    }

    pub fn on_wheel(&mut self, delta: f64) {
        self.controller.on_wheel(delta);
    }

    // === Render output ===

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.controller.camera
    }

    pub fn camera_position(&self) -> DVec3 {
        self.controller.camera.position()
    }

    pub fn view_projection(&self, aspect: f64) -> DMat4 {
        self.controller.camera.view_projection(aspect)
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Tube vertices colored oldest to newest
    pub fn tube_vertices(&self) -> Vec<Vertex> {
        gradient_vertices(&self.mesh)
    }

    pub fn tube_indices(&self) -> Vec<u32> {
        self.mesh.indices()
    }
}

//! JavaScript bindings for the browser build

use glam::DVec2;
use wasm_bindgen::prelude::*;

use crate::renderer::Vertex;
use crate::session::Session;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Nagumo Tube starting...");
}

/// Session handle owned by the host page
#[wasm_bindgen]
pub struct WebSession {
    inner: Session,
}

#[wasm_bindgen]
impl WebSession {
    /// Create a session from settings stored in LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSession {
        WebSession {
            inner: Session::new(Settings::load()),
        }
    }

    /// Nominal tick period the host timer should use
    #[wasm_bindgen(js_name = tickIntervalMs)]
    pub fn tick_interval_ms(&self) -> u32 {
        self.inner.settings().tick_interval_ms
    }

    /// Advance one frame; returns the number of tube triangles
    #[wasm_bindgen(js_name = onTick)]
    pub fn on_tick(&mut self) -> u32 {
        self.inner.on_tick().triangles as u32
    }

    #[wasm_bindgen(js_name = setEpsilon)]
    pub fn set_epsilon(&mut self, x: f64) {
        self.inner.set_epsilon(x);
    }

    #[wasm_bindgen(js_name = setA)]
    pub fn set_a(&mut self, x: f64) {
        self.inner.set_a(x);
    }

    #[wasm_bindgen(js_name = setCurrent)]
    pub fn set_current(&mut self, x: f64) {
        self.inner.set_current(x);
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) {
        self.inner.toggle_pause();
    }

    #[wasm_bindgen(js_name = onDragStart)]
    pub fn on_drag_start(&mut self, x: f64, y: f64) {
        self.inner.on_drag_start(DVec2::new(x, y));
    }

    #[wasm_bindgen(js_name = onDragMove)]
    pub fn on_drag_move(&mut self, x: f64, y: f64) {
        self.inner.on_drag_move(DVec2::new(x, y));
    }

    #[wasm_bindgen(js_name = onDragEnd)]
    pub fn on_drag_end(&mut self) {
        self.inner.on_drag_end();
    }

    /// Takes the browser's `deltaY`, which is negative for wheel forward
    #[wasm_bindgen(js_name = onWheel)]
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.inner.on_wheel(-delta_y);
    }

    /// Interleaved [x, y, z, r, g, b, a] tube vertices
    #[wasm_bindgen(js_name = tubeVertices)]
    pub fn tube_vertices(&self) -> js_sys::Float32Array {
        let vertices = self.inner.tube_vertices();
        js_sys::Float32Array::from(bytemuck::cast_slice::<Vertex, f32>(&vertices))
    }

    #[wasm_bindgen(js_name = tubeIndices)]
    pub fn tube_indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(self.inner.tube_indices().as_slice())
    }

    /// Interleaved axis and grid vertices
    #[wasm_bindgen(js_name = sceneVertices)]
    pub fn scene_vertices(&self) -> js_sys::Float32Array {
        let (vertices, _) = self.inner.scene().buffers();
        js_sys::Float32Array::from(bytemuck::cast_slice::<Vertex, f32>(&vertices))
    }

    #[wasm_bindgen(js_name = sceneIndices)]
    pub fn scene_indices(&self) -> js_sys::Uint32Array {
        let (_, indices) = self.inner.scene().buffers();
        js_sys::Uint32Array::from(indices.as_slice())
    }

    /// Column-major view-projection matrix
    #[wasm_bindgen(js_name = viewProjection)]
    pub fn view_projection(&self, aspect: f64) -> js_sys::Float32Array {
        let m = self.inner.view_projection(aspect).as_mat4();
        js_sys::Float32Array::from(&m.to_cols_array()[..])
    }

    #[wasm_bindgen(js_name = cameraPosition)]
    pub fn camera_position(&self) -> Vec<f64> {
        self.inner.camera_position().to_array().to_vec()
    }

    #[wasm_bindgen(js_name = saveSettings)]
    pub fn save_settings(&self) {
        self.inner.settings().save();
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}

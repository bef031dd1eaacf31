//! Platform abstraction layer
//!
//! The browser build exposes a `Session` to JavaScript; the host page owns
//! the canvas, the renderer and the tick timer.

#[cfg(target_arch = "wasm32")]
pub mod web;

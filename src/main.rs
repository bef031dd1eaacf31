//! Nagumo Tube entry point
//!
//! The browser build is driven by the host page through `platform::web`.
//! Natively this runs the pipeline headless and logs frame statistics.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use nagumo_tube::Session;

    env_logger::init();
    log::info!("Nagumo Tube (native) starting...");

    // Usage: nagumo-tube [settings.json] [ticks]
    let mut args = std::env::args().skip(1);
    let settings = args.next().map(load_settings).unwrap_or_default();
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);

    let mut session = Session::new(settings);
    // Roughly once per second of wall time at the nominal tick rate
    let report_every = u64::from(1000 / session.settings().tick_interval_ms.max(1)).max(1);

    for _ in 0..ticks {
        let stats = session.on_tick();
        if stats.frame % report_every == 0 {
            log::info!(
                "frame {:>5}  t={:>7.2}  v={:>6.3}  w={:>6.3}  points={:>5}  tris={:>6}",
                stats.frame,
                stats.t,
                stats.v,
                stats.w,
                stats.points,
                stats.triangles
            );
        }
    }

    let stats = session.stats();
    let (scene_vertices, scene_indices) = session.scene().buffers();
    println!(
        "{} frames: {} points, {} tube vertices, {} tube triangles, {} scene vertices, {} scene triangles",
        stats.frame,
        stats.points,
        stats.vertices,
        stats.triangles,
        scene_vertices.len(),
        scene_indices.len() / 3
    );
    println!("camera at {:?}", session.camera_position());
}

/// Read settings from a JSON file, falling back to defaults on any error
#[cfg(not(target_arch = "wasm32"))]
fn load_settings(path: String) -> nagumo_tube::Settings {
    use nagumo_tube::Settings;

    match std::fs::read_to_string(&path) {
        Ok(json) => match Settings::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {} - using defaults", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read {}: {} - using defaults", path, e);
            Settings::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

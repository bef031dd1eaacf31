//! Session configuration
//!
//! Persisted as JSON in LocalStorage on the web, loaded from a file by the
//! native driver.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::SceneStyle;
use crate::sim::Parameters;

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Tube cross-section quality levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TubeQuality {
    Low,
    #[default]
    Medium,
    High,
}

impl TubeQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            TubeQuality::Low => "Low",
            TubeQuality::Medium => "Medium",
            TubeQuality::High => "High",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(TubeQuality::Low),
            "medium" | "med" => Some(TubeQuality::Medium),
            "high" => Some(TubeQuality::High),
            _ => None,
        }
    }

    /// Vertices per tube ring
    pub fn segments(&self) -> u32 {
        match self {
            TubeQuality::Low => 6,
            TubeQuality::Medium => TUBE_SEGMENTS,
            TubeQuality::High => 12,
        }
    }
}

/// Simulation, geometry and scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Integration ===
    /// Fixed integration step
    pub dt: f64,
    /// Integration steps per tick
    pub steps_per_frame: usize,
    /// Nominal tick period for the host scheduler
    pub tick_interval_ms: u32,
    /// Divisor applied to t on the z axis
    pub time_scale: f64,

    // === Model ===
    pub epsilon: f64,
    pub a: f64,
    pub b: f64,
    pub current: f64,

    // === Trajectory ===
    /// Trajectory capacity in points
    pub max_points: usize,
    pub tube_radius: f64,
    pub quality: TubeQuality,

    // === Scene ===
    pub show_axes: bool,
    pub show_grid: bool,
    pub axis_extent: f64,
    pub grid_extent: f64,
    pub grid_spacing: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dt: DT,
            steps_per_frame: STEPS_PER_FRAME,
            tick_interval_ms: TICK_INTERVAL_MS,
            time_scale: TIME_SCALE,

            epsilon: EPSILON,
            a: A,
            b: B,
            current: CURRENT,

            max_points: MAX_POINTS,
            tube_radius: TUBE_RADIUS,
            quality: TubeQuality::Medium,

            show_axes: true,
            show_grid: true,
            axis_extent: 2.5,
            grid_extent: 2.5,
            grid_spacing: 0.5,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(quality: TubeQuality) -> Self {
        Self {
            quality,
            ..Self::default()
        }
    }

    /// Tube ring segments for the current quality
    pub fn segments(&self) -> u32 {
        self.quality.segments()
    }

    /// Initial model parameters, with the tunable ones clamped to range
    pub fn parameters(&self) -> Parameters {
        Parameters {
            epsilon: crate::clamp_to(self.epsilon, &EPSILON_RANGE),
            a: crate::clamp_to(self.a, &A_RANGE),
            b: self.b,
            current: crate::clamp_to(self.current, &CURRENT_RANGE),
            dt: self.effective_dt(),
        }
    }

    /// Scene geometry derived from these settings
    pub fn scene_style(&self) -> SceneStyle {
        SceneStyle {
            axis_extent: self.axis_extent,
            grid_extent: self.grid_extent,
            grid_spacing: self.effective_grid_spacing(),
            grid_height: -self.axis_extent,
            show_axes: self.show_axes,
            show_grid: self.show_grid,
            segments: self.segments(),
            ..SceneStyle::default()
        }
    }

    /// Steps per frame in [1, MAX_STEPS_PER_FRAME]
    pub fn effective_steps_per_frame(&self) -> usize {
        self.steps_per_frame.clamp(1, MAX_STEPS_PER_FRAME)
    }

    /// Trajectory capacity in [MIN_POINTS, MAX_POINTS_LIMIT]
    pub fn effective_max_points(&self) -> usize {
        self.max_points.clamp(MIN_POINTS, MAX_POINTS_LIMIT)
    }

    /// Time divisor; falls back to the default unless finite and positive
    pub fn effective_time_scale(&self) -> f64 {
        positive_or(self.time_scale, TIME_SCALE)
    }

    /// Integration step; falls back to the default unless finite and positive
    pub fn effective_dt(&self) -> f64 {
        positive_or(self.dt, DT)
    }

    /// Tube radius; falls back to the default unless finite and positive
    pub fn effective_tube_radius(&self) -> f64 {
        positive_or(self.tube_radius, TUBE_RADIUS)
    }

    /// Grid spacing, widened so at most MAX_GRID_LINES lines fit per direction
    pub fn effective_grid_spacing(&self) -> f64 {
        let extent = positive_or(self.grid_extent, 2.5);
        let min_spacing = 2.0 * extent / MAX_GRID_LINES as f64;
        positive_or(self.grid_spacing, 0.5).max(min_spacing)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "nagumo_tube_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_model_constants() {
        let settings = Settings::default();
        assert_eq!(settings.dt, 0.02);
        assert_eq!(settings.steps_per_frame, 3);
        assert_eq!(settings.max_points, 8000);
        assert_eq!(settings.tube_radius, 0.025);
        assert_eq!(settings.segments(), 8);
        assert_eq!(settings.parameters(), Parameters::default());
    }

    #[test]
    fn test_quality_from_str() {
        assert_eq!(TubeQuality::from_str("HIGH"), Some(TubeQuality::High));
        assert_eq!(TubeQuality::from_str("med"), Some(TubeQuality::Medium));
        assert_eq!(TubeQuality::from_str("ultra"), None);
        assert_eq!(TubeQuality::Low.as_str(), "Low");
        assert_eq!(Settings::from_preset(TubeQuality::High).segments(), 12);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "max_points": 500, "quality": "Low" }"#)
            .expect("valid settings");
        assert_eq!(settings.max_points, 500);
        assert_eq!(settings.quality, TubeQuality::Low);
        assert_eq!(settings.dt, DT);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            epsilon: 0.15,
            show_grid: false,
            ..Default::default()
        };
        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("parses"), settings);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "dt": "fast" }"#).is_err());
    }

    #[test]
    fn test_structural_fields_sanitized() {
        let settings = Settings {
            time_scale: 0.0,
            dt: f64::NAN,
            tube_radius: -1.0,
            max_points: usize::MAX,
            steps_per_frame: 0,
            ..Default::default()
        };
        assert_eq!(settings.effective_time_scale(), TIME_SCALE);
        assert_eq!(settings.effective_dt(), DT);
        assert_eq!(settings.parameters().dt, DT);
        assert_eq!(settings.effective_tube_radius(), TUBE_RADIUS);
        assert_eq!(settings.effective_max_points(), MAX_POINTS_LIMIT);
        assert_eq!(settings.effective_steps_per_frame(), 1);

        let settings = Settings {
            max_points: 0,
            steps_per_frame: 1_000_000,
            ..Default::default()
        };
        assert_eq!(settings.effective_max_points(), MIN_POINTS);
        assert_eq!(settings.effective_steps_per_frame(), MAX_STEPS_PER_FRAME);
    }

    #[test]
    fn test_grid_spacing_bounded() {
        let settings = Settings {
            grid_spacing: 1e-300,
            ..Default::default()
        };
        let spacing = settings.effective_grid_spacing();
        assert!((2.0 * settings.grid_extent / spacing).floor() as usize <= MAX_GRID_LINES);
        assert_eq!(settings.scene_style().grid_spacing, spacing);

        // Sane values pass through
        assert_eq!(Settings::default().effective_grid_spacing(), 0.5);
    }

    #[test]
    fn test_huge_max_points_from_json() {
        let settings = Settings::from_json(r#"{ "max_points": 18446744073709551615 }"#)
            .expect("valid settings");
        assert_eq!(settings.effective_max_points(), MAX_POINTS_LIMIT);
    }

    #[test]
    fn test_parameters_clamped() {
        let settings = Settings {
            epsilon: 5.0,
            a: 0.0,
            current: -1.0,
            ..Default::default()
        };
        let params = settings.parameters();
        assert_eq!(params.epsilon, 0.3);
        assert_eq!(params.a, 0.1);
        assert_eq!(params.current, 0.0);
    }
}

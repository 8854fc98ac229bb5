//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

use crate::arena::geometry::{Bounds, Point, Region};
use crate::arena::nav::Area;

use super::ConfigError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub arena: ArenaConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reject configurations the interaction model cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = &self.arena;
        if !arena.bounds.is_valid() {
            return Err(ConfigError::InvalidBounds {
                width: arena.bounds.width,
                height: arena.bounds.height,
            });
        }
        if !arena.bounds.contains(arena.origin) {
            return Err(ConfigError::OutOfBounds {
                what: "origin",
                x: arena.origin.x,
                y: arena.origin.y,
            });
        }
        if !arena.bounds.contains(arena.connection) {
            return Err(ConfigError::OutOfBounds {
                what: "connection",
                x: arena.connection.x,
                y: arena.connection.y,
            });
        }
        if !(arena.pipe_radius.is_finite() && arena.pipe_radius > 0.0) {
            return Err(ConfigError::InvalidPipeRadius(arena.pipe_radius));
        }
        if !(arena.keyboard_step.is_finite() && arena.keyboard_step > 0.0) {
            return Err(ConfigError::InvalidKeyboardStep(arena.keyboard_step));
        }
        if arena.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        let mut seen = Vec::new();
        for t in &arena.targets {
            if !t.region.is_finite() {
                return Err(ConfigError::NonFiniteTargetRegion(t.area));
            }
            if t.region.is_empty() {
                return Err(ConfigError::EmptyTargetRegion(t.area));
            }
            if seen.contains(&t.area) {
                return Err(ConfigError::DuplicateTarget(t.area));
            }
            seen.push(t.area);
        }
        if self.timing.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

/// Arena geometry, in logical units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default)]
    pub bounds: Bounds,
    /// Resting position of the pipe end.
    #[serde(default = "default_origin")]
    pub origin: Point,
    /// Where the rope leaves the astronaut.
    #[serde(default = "default_connection")]
    pub connection: Point,
    #[serde(default = "default_pipe_radius")]
    pub pipe_radius: f64,
    /// Distance moved per arrow key while dragging with the keyboard.
    #[serde(default = "default_keyboard_step")]
    pub keyboard_step: f64,
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetConfig>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            origin: default_origin(),
            connection: default_connection(),
            pipe_radius: default_pipe_radius(),
            keyboard_step: default_keyboard_step(),
            targets: default_targets(),
        }
    }
}

/// A spaceship drop target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub area: Area,
    #[serde(default)]
    pub label: String,
    pub region: Region,
}

/// Dock sequence delays and the animation tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_connect_delay")]
    pub connect_delay_ms: u64,
    #[serde(default = "default_depart_delay")]
    pub depart_delay_ms: u64,
    #[serde(default = "default_tick")]
    pub tick_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            connect_delay_ms: default_connect_delay(),
            depart_delay_ms: default_depart_delay(),
            tick_ms: default_tick(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    #[serde(default = "default_true")]
    pub show_rope_readout: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            star_count: default_star_count(),
            show_rope_readout: true,
        }
    }
}

/// External pages opened from the area views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    #[serde(default = "default_lunar_explore")]
    pub lunar_explore: String,
    #[serde(default = "default_mars_explore")]
    pub mars_explore: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            lunar_explore: default_lunar_explore(),
            mars_explore: default_mars_explore(),
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_origin() -> Point {
    Point::new(96.0, 48.0)
}
fn default_connection() -> Point {
    Point::new(64.0, 64.0)
}
fn default_pipe_radius() -> f64 {
    16.0
}
fn default_keyboard_step() -> f64 {
    10.0
}
fn default_targets() -> Vec<TargetConfig> {
    vec![
        TargetConfig {
            area: Area::Lunar,
            label: Area::Lunar.default_label().into(),
            region: Region::new(260.0, 190.0, 120.0, 100.0),
        },
        TargetConfig {
            area: Area::Mars,
            label: Area::Mars.default_label().into(),
            region: Region::new(20.0, 190.0, 120.0, 100.0),
        },
    ]
}
fn default_connect_delay() -> u64 {
    500
}
fn default_depart_delay() -> u64 {
    2000
}
fn default_tick() -> u64 {
    50
}
fn default_star_count() -> usize {
    100
}
fn default_lunar_explore() -> String {
    "http://localhost:8000/nasa_lunar.html".to_string()
}
fn default_mars_explore() -> String {
    "https://mars-viewer-nasa-1.onrender.com/".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/arena/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.timing.connect_delay_ms, 500);
        assert_eq!(cfg.timing.depart_delay_ms, 2000);
        assert_eq!(cfg.arena.origin, Point::new(96.0, 48.0));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.arena.targets.len(), 2);
        assert_eq!(cfg.ui.star_count, 100);
    }

    #[test]
    fn test_partial_file() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [timing]
            depart_delay_ms = 1000

            [[arena.targets]]
            area = "mars"
            label = "Red Planet"
            region = { x = 0.0, y = 0.0, width = 50.0, height = 50.0 }
            "#,
        )
        .unwrap();
        assert_eq!(cfg.timing.connect_delay_ms, 500);
        assert_eq!(cfg.timing.depart_delay_ms, 1000);
        assert_eq!(cfg.arena.targets.len(), 1);
        assert_eq!(cfg.arena.targets[0].area, Area::Mars);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let mut cfg = AppConfig::default();
        cfg.arena.origin = Point::new(500.0, 10.0);
        assert!(matches!(cfg.validate(), Err(ConfigError::OutOfBounds { what: "origin", .. })));

        let mut cfg = AppConfig::default();
        cfg.arena.bounds = Bounds::new(0.0, 300.0);
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidBounds { .. })));

        let mut cfg = AppConfig::default();
        cfg.arena.targets.push(cfg.arena.targets[0].clone());
        assert!(matches!(cfg.validate(), Err(ConfigError::DuplicateTarget(Area::Lunar))));

        let mut cfg = AppConfig::default();
        cfg.arena.targets[1].region.width = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyTargetRegion(Area::Mars))));

        let mut cfg = AppConfig::default();
        cfg.arena.targets.clear();
        assert!(matches!(cfg.validate(), Err(ConfigError::NoTargets)));
    }

    #[test]
    fn test_defaults_put_lunar_under_the_right_ship() {
        let cfg = AppConfig::default();
        let lunar = cfg.arena.targets.iter().find(|t| t.area == Area::Lunar).unwrap();
        let mars = cfg.arena.targets.iter().find(|t| t.area == Area::Mars).unwrap();
        assert!(lunar.region.contains(Point::new(300.0, 250.0)));
        assert!(!mars.region.contains(Point::new(300.0, 250.0)));
        assert!(!lunar.region.contains(Point::new(10.0, 10.0)));
        assert!(!mars.region.contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_validate_rejects_bad_keyboard_step() {
        let cfg: AppConfig = toml::from_str("[arena]\nkeyboard_step = nan\n").unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidKeyboardStep(_))));

        for step in [0.0, -10.0, f64::INFINITY] {
            let mut cfg = AppConfig::default();
            cfg.arena.keyboard_step = step;
            assert!(matches!(cfg.validate(), Err(ConfigError::InvalidKeyboardStep(_))));
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_numbers() {
        let mut cfg = AppConfig::default();
        cfg.arena.pipe_radius = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidPipeRadius(_))));

        let mut cfg = AppConfig::default();
        cfg.arena.targets[0].region.x = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::NonFiniteTargetRegion(Area::Lunar))));

        let mut cfg = AppConfig::default();
        cfg.arena.targets[1].region.y = f64::NEG_INFINITY;
        assert!(matches!(cfg.validate(), Err(ConfigError::NonFiniteTargetRegion(Area::Mars))));

        let cfg: AppConfig =
            toml::from_str("[arena]\norigin = { x = nan, y = 48.0 }\n").unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::OutOfBounds { what: "origin", .. })));
    }

    #[test]
    fn test_serializes_back_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("connect_delay_ms = 500"));
        assert!(text.contains("area = \"lunar\""));
    }
}

//! Application configuration
//!
//! Configuration is layered with figment (lowest to highest priority):
//! 1. Built-in defaults ([`AppConfig::default`])
//! 2. Command-line overrides ([`CliOverrides`])
//!
//! There is no file or environment layer; everything a run needs comes from
//! the command line.

use std::time::Duration;

use bitflags::bitflags;
use figment::{providers::Serialized, Figment};
use kepler_math::OrbitParams;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Orbit configuration
    #[serde(default)]
    pub orbit: OrbitConfig,
    /// Frame pacing configuration
    #[serde(default)]
    pub frame: FrameConfig,
}

impl AppConfig {
    /// Layer `overrides` on top of the defaults
    pub fn load(overrides: &CliOverrides) -> Result<Self, ConfigError> {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the configuration for a parsed command line
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load(&cli.overrides())
    }

    /// Window centre in integer pixels, where the focus sits
    pub fn focus_pixel(&self) -> (i32, i32) {
        (
            (self.window.width >> 1) as i32,
            (self.window.height >> 1) as i32,
        )
    }
}

bitflags! {
    /// Window creation flags
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct WindowFlags: u32 {
        /// Borderless fullscreen on the current monitor
        const FULLSCREEN = 1 << 0;
        /// User may resize the window
        const RESIZABLE = 1 << 1;
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Allow resizing
    pub resizable: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Kepler".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            resizable: false,
            vsync: false,
        }
    }
}

impl WindowConfig {
    /// Flags the window is created with
    pub fn flags(&self) -> WindowFlags {
        let mut flags = WindowFlags::empty();
        flags.set(WindowFlags::FULLSCREEN, self.fullscreen);
        flags.set(WindowFlags::RESIZABLE, self.resizable);
        flags
    }
}

/// Orbit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Eccentricity `e`
    pub eccentricity: f32,
    /// Semi-major axis `alpha` in pixels
    pub semi_major_axis: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        let params = OrbitParams::default();
        Self {
            eccentricity: params.eccentricity,
            semi_major_axis: params.semi_major_axis,
        }
    }
}

impl OrbitConfig {
    pub fn to_orbit_params(&self) -> OrbitParams {
        OrbitParams::new(self.eccentricity, self.semi_major_axis)
    }
}

/// Frame pacing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Target frame rate
    pub frames_per_second: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 60,
        }
    }
}

impl FrameConfig {
    /// Whole milliseconds available per frame (`1000 / fps`, truncated)
    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.frames_per_second.max(1)))
    }
}

/// Values given on the command line
///
/// Only fields that were actually given are serialized, so figment leaves
/// every other default in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit: Option<OrbitOverrides>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindowOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrbitOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eccentricity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi_major_axis: Option<f32>,
}

impl CliOverrides {
    pub fn from_cli(cli: &Cli) -> Self {
        let window = cli.fullscreen.then_some(WindowOverrides {
            fullscreen: Some(true),
        });

        let orbit = if cli.eccentricity.is_some() || cli.semi_major_axis.is_some() {
            Some(OrbitOverrides {
                eccentricity: cli.eccentricity,
                semi_major_axis: cli.semi_major_axis,
            })
        } else {
            None
        };

        Self { window, orbit }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<clap::Error> for ConfigError {
    fn from(e: clap::Error) -> Self {
        // clap renders "error: <what>" followed by usage lines
        let rendered = e.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        ConfigError {
            message: first.strip_prefix("error: ").unwrap_or(first).to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.flags(), WindowFlags::empty());
        assert_eq!(config.orbit.eccentricity, 0.0);
        assert_eq!(config.orbit.semi_major_axis, 100.0);
        assert_eq!(config.frame.frames_per_second, 60);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("eccentricity"));
        assert!(toml.contains("frames_per_second"));
    }

    #[test]
    fn test_load_without_overrides_is_default() {
        let config = AppConfig::load(&CliOverrides::default()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_only_touch_given_fields() {
        let overrides = CliOverrides {
            window: Some(WindowOverrides {
                fullscreen: Some(true),
            }),
            orbit: Some(OrbitOverrides {
                eccentricity: Some(0.5),
                semi_major_axis: None,
            }),
        };
        let config = AppConfig::load(&overrides).unwrap();

        assert!(config.window.fullscreen);
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.title, "Kepler");
        assert_eq!(config.orbit.eccentricity, 0.5);
        assert_eq!(config.orbit.semi_major_axis, 100.0);
    }

    #[test]
    fn test_from_cli() {
        let cli = Cli::parse_args(["kepler", "-f", "-e", "0.5", "-a", "200"]).unwrap();
        let config = AppConfig::from_cli(&cli).unwrap();

        assert_eq!(config.window.flags(), WindowFlags::FULLSCREEN);
        let params = config.orbit.to_orbit_params();
        assert_eq!(params, OrbitParams::new(0.5, 200.0));
        assert_eq!(params.semi_latus_rectum(), 150.0);
    }

    #[test]
    fn test_window_flags() {
        let window = WindowConfig {
            fullscreen: true,
            resizable: true,
            ..Default::default()
        };
        assert_eq!(
            window.flags(),
            WindowFlags::FULLSCREEN | WindowFlags::RESIZABLE
        );
    }

    #[test]
    fn test_frame_budget_truncates() {
        assert_eq!(FrameConfig::default().frame_budget(), Duration::from_millis(16));
        let thirty = FrameConfig {
            frames_per_second: 30,
        };
        assert_eq!(thirty.frame_budget(), Duration::from_millis(33));
        let zero = FrameConfig {
            frames_per_second: 0,
        };
        assert_eq!(zero.frame_budget(), Duration::from_millis(1000));
    }

    #[test]
    fn test_focus_is_window_centre() {
        assert_eq!(AppConfig::default().focus_pixel(), (400, 300));

        let mut config = AppConfig::default();
        config.window.width = 801;
        config.window.height = 601;
        assert_eq!(config.focus_pixel(), (400, 300));
    }

    #[test]
    fn test_clap_error_message_is_first_line() {
        let err = Cli::parse_args(["kepler", "-e", "abc"]).unwrap_err();
        assert!(!err.message().starts_with("error:"));
        assert!(!err.message().contains('\n'));
        assert!(err.message().contains("abc"));
    }
}

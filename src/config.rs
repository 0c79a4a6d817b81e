//! Configuration management for the gesture recognizer

use crate::{
    constants::{DEFAULT_HISTORY_CAPACITY, DEFAULT_REPLAY_FPS},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recognition behaviour
    pub recognition: RecognitionConfig,

    /// Recording replay
    pub replay: ReplayConfig,
}

/// Recognition behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Clear the symbol history on ticks without a tracked user
    pub reset_on_tracking_loss: bool,

    /// Maximum number of symbol pairs kept in history
    pub history_capacity: usize,

    /// Add the hand-on-shoulder tests to the pose battery
    pub shoulder_touch_tests: bool,
}

/// Recording replay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Frame rate the recording was captured at
    pub target_fps: u32,

    /// Sleep between frames to replay at capture speed
    pub realtime: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            reset_on_tracking_loss: false,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            shoulder_touch_tests: false,
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_REPLAY_FPS,
            realtime: false,
        }
    }
}

impl ReplayConfig {
    /// Time between two frames
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        if self.recognition.history_capacity == 0 {
            return Err(Error::ConfigError(
                "History capacity must be greater than 0".to_string(),
            ));
        }

        if self.replay.target_fps == 0 {
            return Err(Error::ConfigError("Target FPS must be greater than 0".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Gesture Recognition Configuration

# Recognition behaviour
recognition:
  reset_on_tracking_loss: false
  history_capacity: 64
  shoulder_touch_tests: false

# Recording replay
replay:
  target_fps: 30
  realtime: false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let config = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
        let defaults = Config::default();
        assert_eq!(config.recognition.history_capacity, defaults.recognition.history_capacity);
        assert_eq!(config.recognition.reset_on_tracking_loss, defaults.recognition.reset_on_tracking_loss);
        assert_eq!(config.replay.target_fps, defaults.replay.target_fps);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::from_yaml("recognition:\n  reset_on_tracking_loss: true\n").unwrap();
        assert!(config.recognition.reset_on_tracking_loss);
        assert_eq!(config.recognition.history_capacity, DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.replay.target_fps, DEFAULT_REPLAY_FPS);
    }

    #[test]
    fn test_invalid_values() {
        let mut config = Config::default();
        config.recognition.history_capacity = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.replay.target_fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            Config::from_yaml("recognition: [1, 2"),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_frame_interval() {
        let replay = ReplayConfig { target_fps: 50, realtime: true };
        let interval = replay.frame_interval().as_secs_f64();
        assert!((interval - 0.02).abs() < 1e-9);
    }
}

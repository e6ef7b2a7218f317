use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use super::rendering::{ContextConfig, ShaderConfig, WindowConfig};
use crate::utils::error::DemoError;

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "triangle.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub log_level: LevelFilter,
    pub window: WindowConfig,
    pub context: ContextConfig,
    pub shaders: ShaderConfig,
    pub clear_color: [f32; 4],
    pub present_delay_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            window: WindowConfig::default(),
            context: ContextConfig::default(),
            shaders: ShaderConfig::default(),
            clear_color: [1.0, 0.0, 0.0, 1.0],
            present_delay_ms: 5000,
        }
    }
}

impl DemoConfig {
    /// Reads `path` if it exists, otherwise returns the defaults.
    /// Nothing is ever written back.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> std::result::Result<(), DemoError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(DemoError::Config(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !self.context.supports_profile() {
            return Err(DemoError::Config(format!(
                "OpenGL {}.{} has no {:?} profile",
                self.context.major, self.context.minor, self.context.profile
            )));
        }
        Ok(())
    }

    pub fn present_delay(&self) -> Duration {
        Duration::from_millis(self.present_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileKind;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_match_fixed_program() {
        let config = DemoConfig::default();
        assert_eq!(config.window.title, "SDL2 Window");
        assert_eq!((config.window.width, config.window.height), (1280, 720));
        assert_eq!((config.context.major, config.context.minor), (4, 0));
        assert_eq!(config.context.profile, ProfileKind::Core);
        assert_eq!(config.shaders.fragment, PathBuf::from("shaders/triangle.frag"));
        assert_eq!(config.shaders.vertex, PathBuf::from("shaders/triangle.vert"));
        assert!(!config.shaders.strict);
        assert_eq!(config.clear_color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(config.present_delay(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = DemoConfig::from_toml(
            r#"
            log_level = "debug"
            present_delay_ms = 250

            [window]
            title = "Triangle"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.present_delay_ms, 250);
        assert_eq!(config.window.title, "Triangle");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.context, ContextConfig::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "[context]\nmajor = 3\nminor = 3\nprofile = \"compatibility\"\n",
        )
        .unwrap();

        let config = DemoConfig::load_or_default(&path).unwrap();
        assert_eq!(config.context.major, 3);
        assert_eq!(config.context.profile, ProfileKind::Compatibility);
    }

    #[test]
    fn test_rejects_core_profile_before_3_2() {
        let mut config = DemoConfig::default();
        config.context.major = 3;
        config.context.minor = 1;
        assert!(matches!(config.validate(), Err(DemoError::Config(_))));

        config.context.profile = ProfileKind::Compatibility;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_sized_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[window]\nwidth = 0\n").unwrap();
        assert!(DemoConfig::load_or_default(&path).is_err());
    }

    #[test]
    fn test_shipped_example_matches_defaults() {
        let config = DemoConfig::from_toml(include_str!("../../triangle.toml.example")).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(DemoConfig::from_toml("clear_color = \"red\"").is_err());
    }
}

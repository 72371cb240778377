//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.
//! Window geometry and the GPU shader-format preference are immutable once
//! handed to the application.

use bitflags::bitflags;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: f64,
    /// Window height in logical pixels
    pub height: f64,
    /// Whether the window should be fullscreen
    pub fullscreen: bool,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Whether the window should be decorated (title bar, borders, etc.)
    pub decorated: bool,
    /// Whether to enable vsync
    pub vsync: bool,
}

bitflags! {
    /// Shader binary formats the GPU backend is allowed to load
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ShaderFormats: u32 {
        /// SPIR-V modules, loaded through passthrough when the adapter
        /// supports it
        const SPIRV = 1 << 0;
        /// WGSL source, always loadable
        const WGSL = 1 << 1;
    }
}

/// Shader format name as it appears in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderFormat {
    Spirv,
    Wgsl,
}

impl From<ShaderFormat> for ShaderFormats {
    fn from(format: ShaderFormat) -> Self {
        match format {
            ShaderFormat::Spirv => ShaderFormats::SPIRV,
            ShaderFormat::Wgsl => ShaderFormats::WGSL,
        }
    }
}

/// Adapter selection preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerPreference {
    None,
    LowPower,
    HighPerformance,
}

impl From<PowerPreference> for wgpu::PowerPreference {
    fn from(pref: PowerPreference) -> Self {
        match pref {
            PowerPreference::None => wgpu::PowerPreference::None,
            PowerPreference::LowPower => wgpu::PowerPreference::LowPower,
            PowerPreference::HighPerformance => wgpu::PowerPreference::HighPerformance,
        }
    }
}

/// GPU backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuConfig {
    /// Shader binary formats the backend may load, in config-file order
    pub shader_formats: Vec<ShaderFormat>,
    /// Adapter power preference
    pub power_preference: PowerPreference,
}

impl GpuConfig {
    /// Returns the shader-format preference as a flag set
    pub fn formats(&self) -> ShaderFormats {
        self.shader_formats
            .iter()
            .fold(ShaderFormats::empty(), |acc, f| acc | (*f).into())
    }
}

/// Validation errors for loaded configuration values
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("window dimensions must be positive, got {width}x{height}")]
    NonPositiveWindow { width: f64, height: f64 },
    #[error("shader format preference must name at least one format")]
    EmptyShaderFormats,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Window configuration
    pub window: WindowConfig,
    /// GPU backend configuration
    pub gpu: GpuConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix APP_ (e.g., APP_WINDOW__WIDTH=1920)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let config_dir = Self::find_config_dir();
        Self::load_from(config_dir.as_deref(), profile)
    }

    /// Loads configuration from an explicit config directory
    ///
    /// `config_dir = None` falls back to `config/` relative to the current
    /// directory.
    pub fn load_from(
        config_dir: Option<&std::path::Path>,
        profile: &str,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(dir) = config_dir {
            let profile_path = dir.join(profile);
            builder = builder.add_source(File::from(profile_path.as_path()).required(false));
        } else {
            builder =
                builder.add_source(File::with_name(&format!("config/{}", profile)).required(false));
        }

        // Environment variables with APP_ prefix; __ separates nested
        // fields (e.g., APP_WINDOW__WIDTH)
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.set_override("profile", profile)?.build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(loaded)
    }

    /// Checks the invariants a loaded configuration must uphold
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigValidationError::NonPositiveWindow {
                width: self.window.width,
                height: self.window.height,
            });
        }
        if self.gpu.shader_formats.is_empty() {
            return Err(ConfigValidationError::EmptyShaderFormats);
        }
        Ok(())
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<std::path::PathBuf> {
        // Try to find config dir relative to executable
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        // Fall back to current directory
        let cwd_config = std::path::PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Compiled-in configuration, used when no config file or environment
    /// source can be loaded
    ///
    /// These literals are the bootstrap contract: an 800x600 window titled
    /// "SDL3 C++ 23 Text" and a SPIR-V-only shader-format preference.
    pub fn compiled_defaults() -> Self {
        Self {
            profile: "release".to_string(),
            window: WindowConfig {
                title: "SDL3 C++ 23 Text".to_string(),
                width: 800.0,
                height: 600.0,
                fullscreen: false,
                resizable: true,
                decorated: true,
                vsync: true,
            },
            gpu: GpuConfig {
                shader_formats: vec![ShaderFormat::Spirv],
                power_preference: PowerPreference::None,
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load("release").unwrap_or_else(|_| Self::compiled_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> AppConfig {
        let mut config = AppConfig::compiled_defaults();
        config.profile = "test".to_string();
        config
    }

    fn assert_bootstrap_contract(config: &AppConfig) {
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.window.title, "SDL3 C++ 23 Text");
        assert_eq!(config.gpu.formats(), ShaderFormats::SPIRV);
    }

    #[test]
    fn test_compiled_defaults_match_bootstrap_contract() {
        assert_bootstrap_contract(&AppConfig::compiled_defaults());
    }

    #[test]
    fn test_shipped_release_profile_matches_bootstrap_contract() {
        // The release.toml shipped in-repo must agree with the compiled-in
        // literals, or the effective defaults drift by config dir presence
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
        let config = AppConfig::load_from(Some(&dir), "release").expect("load release profile");

        assert_bootstrap_contract(&config);
    }

    #[test]
    fn test_shipped_debug_profile_matches_bootstrap_contract() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
        let config = AppConfig::load_from(Some(&dir), "debug").expect("load debug profile");

        assert_bootstrap_contract(&config);
    }

    #[test]
    fn test_validate_accepts_baseline() {
        assert!(baseline().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let mut config = baseline();
        config.window.width = 0.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::NonPositiveWindow { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_height() {
        let mut config = baseline();
        config.window.height = -600.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_shader_formats() {
        let mut config = baseline();
        config.gpu.shader_formats.clear();

        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyShaderFormats)
        ));
    }

    #[test]
    fn test_shader_format_flags_combine() {
        let gpu = GpuConfig {
            shader_formats: vec![ShaderFormat::Spirv, ShaderFormat::Wgsl],
            power_preference: PowerPreference::None,
        };

        assert_eq!(gpu.formats(), ShaderFormats::SPIRV | ShaderFormats::WGSL);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("test.toml"),
            r#"
            [window]
            title = "From File"
            width = 1024.0
            height = 768.0
            fullscreen = false
            resizable = true
            decorated = true
            vsync = false

            [gpu]
            shader_formats = ["spirv", "wgsl"]
            power_preference = "low_power"
            "#,
        )
        .expect("write config");

        let config = AppConfig::load_from(Some(dir.path()), "test").expect("load config");

        assert_eq!(config.profile, "test");
        assert_eq!(config.window.title, "From File");
        assert_eq!(config.window.width, 1024.0);
        assert!(!config.window.vsync);
        assert_eq!(config.gpu.formats(), ShaderFormats::SPIRV | ShaderFormats::WGSL);
        assert_eq!(config.gpu.power_preference, PowerPreference::LowPower);
    }

    #[test]
    fn test_load_from_rejects_invalid_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("broken.toml"),
            r#"
            [window]
            title = "Broken"
            width = 0.0
            height = 600.0
            fullscreen = false
            resizable = true
            decorated = true
            vsync = true

            [gpu]
            shader_formats = ["spirv"]
            power_preference = "none"
            "#,
        )
        .expect("write config");

        assert!(AppConfig::load_from(Some(dir.path()), "broken").is_err());
    }
}

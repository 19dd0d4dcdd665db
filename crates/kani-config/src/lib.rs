//! Kani launcher configuration
//!
//! Optional settings loaded from `kani.toml`, with environment variables
//! layered on top. Command-line flags take precedence over both; that merge
//! happens in the launcher. The forwarded `-type` and `-mode` values are not
//! configurable here; they only ever come from the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default file name looked up in the working directory.
pub const CONFIG_FILE: &str = "kani.toml";

/// Main configuration structure for the launcher
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LauncherConfig {
    /// Renderer library location
    pub renderer: RendererConfig,
    /// Launch behavior
    pub launch: LaunchConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RendererConfig {
    /// Renderer shared library, either the file itself or its directory
    pub library: Option<PathBuf>,
}

/// Launch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Which thread runs the renderer's event loop
    pub thread: ThreadMode,
    /// Print the key bindings before starting the renderer
    pub banner: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// env_logger filter used when RUST_LOG is not set
    pub filter: String,
}

/// Where the renderer's event loop is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadMode {
    /// Pin the process's initial thread and call the renderer on it.
    #[default]
    Main,
    /// Spawn one thread, pin it and call the renderer there; the initial
    /// thread only waits.
    Dedicated,
}

impl FromStr for ThreadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("main") {
            Ok(Self::Main)
        } else if s.eq_ignore_ascii_case("dedicated") {
            Ok(Self::Dedicated)
        } else {
            Err(format!("unknown thread mode '{}' (expected main or dedicated)", s))
        }
    }
}

impl fmt::Display for ThreadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => f.write_str("main"),
            Self::Dedicated => f.write_str("dedicated"),
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            thread: ThreadMode::Main,
            banner: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl LauncherConfig {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(LauncherConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::parse(path.as_ref(), &content)
    }

    /// Load `path`, or defaults if it does not exist
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => Self::parse(path.as_ref(), &content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            )),
        }
    }

    /// Load `kani.toml` from the current directory, or defaults if there is
    /// none
    pub fn load_or_default() -> Result<Self, String> {
        Self::load_from_file_or_default(CONFIG_FILE)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, String> {
        toml::from_str(content)
            .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) -> Result<(), String> {
        if let Ok(lib) = std::env::var("KANI_RENDERER_LIB") {
            if !lib.is_empty() {
                self.renderer.library = Some(PathBuf::from(lib));
            }
        }

        if let Ok(val) = std::env::var("KANI_THREAD") {
            self.launch.thread = val
                .parse::<ThreadMode>()
                .map_err(|e| format!("KANI_THREAD: {}", e))?;
        }
        if let Ok(val) = std::env::var("KANI_BANNER") {
            self.launch.banner = parse_flag(&val);
        }

        if let Ok(filter) = std::env::var("KANI_LOG") {
            self.logging.filter = filter;
        }

        Ok(())
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from kani.toml (or use defaults if there is none)
    /// 2. Override with environment variables if present
    pub fn load() -> Result<Self, String> {
        let mut config = Self::load_or_default()?;
        config.merge_with_env()?;
        Ok(config)
    }
}

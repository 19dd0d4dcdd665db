//! Resolution of the final launch request.

use std::path::PathBuf;

use kani_config::{LauncherConfig, ThreadMode};

use crate::cli::Cli;
use crate::error::ConfigurationError;

/// Forwarded when `-type` is not given.
pub const DEFAULT_FILE_TYPE: &str = "opengl";

/// Forwarded when `-mode` is not given.
pub const DEFAULT_MODE: &str = "fullscreen";

/// Everything the launcher needs, with flags, config and defaults merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub path: String,
    pub file_type: String,
    pub mode: String,
    pub library: Option<PathBuf>,
    pub thread: ThreadMode,
    pub banner: bool,
}

impl LaunchSettings {
    /// Flags win over `config`, which already carries environment overrides.
    /// `type` and `mode` come from flags only and otherwise fall back to
    /// [`DEFAULT_FILE_TYPE`] and [`DEFAULT_MODE`].
    pub fn resolve(cli: Cli, config: &LauncherConfig) -> Result<Self, ConfigurationError> {
        let path = match cli.path {
            Some(path) if !path.is_empty() => path,
            _ => return Err(ConfigurationError::MissingPath),
        };

        Ok(Self {
            path,
            file_type: cli
                .file_type
                .unwrap_or_else(|| DEFAULT_FILE_TYPE.to_string()),
            mode: cli.mode.unwrap_or_else(|| DEFAULT_MODE.to_string()),
            library: cli.library.or_else(|| config.renderer.library.clone()),
            thread: cli.thread.unwrap_or(config.launch.thread),
            banner: !cli.quiet && config.launch.banner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(path: Option<&str>) -> Cli {
        Cli {
            path: path.map(str::to_string),
            ..Cli::default()
        }
    }

    #[test]
    fn test_defaults_are_forwarded() {
        let settings =
            LaunchSettings::resolve(cli(Some("/models/cube.obj")), &LauncherConfig::default())
                .unwrap();
        assert_eq!(settings.path, "/models/cube.obj");
        assert_eq!(settings.file_type, "opengl");
        assert_eq!(settings.mode, "fullscreen");
        assert_eq!(settings.library, None);
        assert_eq!(settings.thread, ThreadMode::Main);
        assert!(settings.banner);
    }

    #[test]
    fn test_missing_or_empty_path() {
        let config = LauncherConfig::default();
        assert_eq!(
            LaunchSettings::resolve(cli(None), &config),
            Err(ConfigurationError::MissingPath)
        );
        assert_eq!(
            LaunchSettings::resolve(cli(Some("")), &config),
            Err(ConfigurationError::MissingPath)
        );
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = LauncherConfig::default();
        config.renderer.library = Some(PathBuf::from("/from/config"));
        config.launch.thread = ThreadMode::Dedicated;

        let from_config = LaunchSettings::resolve(cli(Some("a.obj")), &config).unwrap();
        assert_eq!(from_config.file_type, DEFAULT_FILE_TYPE);
        assert_eq!(from_config.mode, DEFAULT_MODE);
        assert_eq!(from_config.library, Some(PathBuf::from("/from/config")));
        assert_eq!(from_config.thread, ThreadMode::Dedicated);

        let flags = Cli {
            path: Some("a.obj".to_string()),
            file_type: Some("default".to_string()),
            mode: Some("windowed".to_string()),
            library: Some(PathBuf::from("/from/flag")),
            thread: Some(ThreadMode::Main),
            quiet: true,
            rest: Vec::new(),
        };
        let from_flags = LaunchSettings::resolve(flags, &config).unwrap();
        assert_eq!(from_flags.file_type, "default");
        assert_eq!(from_flags.mode, "windowed");
        assert_eq!(from_flags.library, Some(PathBuf::from("/from/flag")));
        assert_eq!(from_flags.thread, ThreadMode::Main);
        assert!(!from_flags.banner);
    }

    #[test]
    fn test_opaque_values_pass_through() {
        let flags = Cli {
            path: Some("  spaced path.obj ".to_string()),
            file_type: Some("".to_string()),
            mode: Some("borderless-ish".to_string()),
            ..Cli::default()
        };
        let settings = LaunchSettings::resolve(flags, &LauncherConfig::default()).unwrap();
        assert_eq!(settings.path, "  spaced path.obj ");
        assert_eq!(settings.file_type, "");
        assert_eq!(settings.mode, "borderless-ish");
    }

    #[test]
    fn test_environment_cannot_change_forwarded_defaults() {
        unsafe {
            std::env::set_var("KANI_TYPE", "default");
            std::env::set_var("KANI_MODE", "windowed");
        }

        let config = LauncherConfig::load();

        unsafe {
            std::env::remove_var("KANI_TYPE");
            std::env::remove_var("KANI_MODE");
        }

        let settings = LaunchSettings::resolve(cli(Some("/models/cube.obj")), &config.unwrap())
            .unwrap();
        assert_eq!(settings.file_type, "opengl");
        assert_eq!(settings.mode, "fullscreen");
    }
}

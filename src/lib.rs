//! Launcher for the kanirenderer native viewer.
//!
//! Parses `-path`, `-type` and `-mode`, opens the renderer library, pins the
//! thread its event loop must own and calls `run_kanirenderer` there. The
//! process then stays up for as long as the renderer does.

pub mod banner;
pub mod cli;
mod error;
pub mod launcher;
pub mod logging;
pub mod pin;
pub mod settings;

use std::convert::Infallible;

use kani_config::LauncherConfig;
use kani_ffi::{FfiError, RendererEntry};

pub use cli::{Cli, Command};
pub use error::{ConfigurationError, LaunchError};
pub use launcher::{launch, park_forever};
pub use pin::{PROCESS_PIN, ThreadPin};
pub use settings::LaunchSettings;

/// Resolve `cli` against `config`, open the renderer with `load` and launch.
///
/// A missing path is reported before `load` runs, so nothing native is
/// touched for a bad request.
pub fn start<E, F>(
    cli: Cli,
    config: &LauncherConfig,
    pin: &'static ThreadPin,
    load: F,
) -> Result<Infallible, LaunchError>
where
    E: RendererEntry + 'static,
    F: FnOnce(&LaunchSettings) -> Result<E, FfiError>,
{
    if !cli.rest.is_empty() {
        log::warn!("Ignoring extra arguments: {:?}", cli.rest);
    }

    let settings = LaunchSettings::resolve(cli, config)?;
    log::debug!("Resolved launch settings: {:?}", settings);

    if settings.banner {
        banner::print_controls();
    }

    let entry = load(&settings)?;
    launch(&settings, pin, entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kani_ffi::MarshaledArgs;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(Arc<AtomicUsize>);

    impl RendererEntry for Counter {
        fn run(&self, _args: &MarshaledArgs) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_missing_path_never_loads_or_calls() {
        let pin: &'static ThreadPin = Box::leak(Box::new(ThreadPin::new()));
        let calls = Arc::new(AtomicUsize::new(0));
        let loaded = Arc::new(AtomicUsize::new(0));

        for args in [vec!["-type=opengl"], vec!["-path=", "-mode=windowed"]] {
            let cli = match cli::parse(args).unwrap() {
                Command::Launch(cli) => cli,
                Command::Help => unreachable!(),
            };
            let counter = Counter(calls.clone());
            let loaded = loaded.clone();
            let err = start(cli, &LauncherConfig::default(), pin, move |_| {
                loaded.fetch_add(1, Ordering::SeqCst);
                Ok(counter)
            })
            .unwrap_err();

            assert!(matches!(
                err,
                LaunchError::Configuration(ConfigurationError::MissingPath)
            ));
        }

        assert_eq!(loaded.load(Ordering::SeqCst), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(pin.pinned().is_none());
    }

    #[test]
    fn test_load_failure_stops_before_pinning() {
        let pin: &'static ThreadPin = Box::leak(Box::new(ThreadPin::new()));
        let cli = Cli {
            path: Some("/models/cube.obj".to_string()),
            quiet: true,
            ..Cli::default()
        };

        let err = start(cli, &LauncherConfig::default(), pin, |_| -> Result<Counter, _> {
            Err(FfiError::SymbolNotFound("run_kanirenderer".to_string()))
        })
        .unwrap_err();

        assert!(matches!(err, LaunchError::Ffi(FfiError::SymbolNotFound(_))));
        assert!(pin.pinned().is_none());
    }

    #[test]
    fn test_loader_sees_resolved_library() {
        let pin: &'static ThreadPin = Box::leak(Box::new(ThreadPin::new()));
        let mut config = LauncherConfig::default();
        config.renderer.library = Some(std::path::PathBuf::from("/opt/kani/lib"));
        let cli = Cli {
            path: Some("a.obj".to_string()),
            quiet: true,
            ..Cli::default()
        };

        let err = start(cli, &config, pin, |settings| -> Result<Counter, _> {
            assert_eq!(
                settings.library.as_deref(),
                Some(std::path::Path::new("/opt/kani/lib"))
            );
            Err(FfiError::LibraryLoad { attempts: Vec::new() })
        })
        .unwrap_err();

        assert!(matches!(err, LaunchError::Ffi(FfiError::LibraryLoad { .. })));
    }
}

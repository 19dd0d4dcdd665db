use kani_config::LoggingConfig;

/// Install env_logger and route panics through the `log` facade.
///
/// `RUST_LOG` wins over the configured filter. The panic hook is installed
/// even if another logger was already set, so renderer-thread panics are
/// never left without a route.
pub fn init(config: &LoggingConfig) {
    let env = env_logger::Env::default().default_filter_or(config.filter.as_str());
    if let Err(err) = env_logger::Builder::from_env(env).try_init() {
        eprintln!("failed to initialize logger: {err}");
    }
    log_panics::init();
}

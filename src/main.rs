use anyhow::{Context, Result};
use kani::{Command, PROCESS_PIN, cli, logging};
use kani_config::LauncherConfig;
use kani_ffi::RendererLibrary;

fn main() -> Result<()> {
    let command = match cli::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprint!("{}", cli::usage());
            std::process::exit(2);
        }
    };

    let flags = match command {
        Command::Help => {
            print!("{}", cli::usage());
            return Ok(());
        }
        Command::Launch(flags) => flags,
    };

    // Loaded before the logger exists, so failures surface through anyhow.
    let config = LauncherConfig::load()
        .map_err(anyhow::Error::msg)
        .context("invalid launcher configuration")?;
    logging::init(&config.logging);
    log::info!("kanirenderer launcher {}", env!("CARGO_PKG_VERSION"));

    let never = kani::start(flags, &config, &PROCESS_PIN, |settings| {
        let lib = RendererLibrary::load(settings.library.as_deref())?;
        log::debug!("Resolved {} in {}", kani_ffi::ENTRY_POINT, lib.path().display());
        Ok(lib)
    })
    .context("failed to launch kanirenderer")?;

    match never {}
}

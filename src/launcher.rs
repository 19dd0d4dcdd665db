//! The launch sequence.
//!
//! A launch goes `Initializing` (arguments marshaled, thread pinned) to
//! `Running` (inside or after the renderer call) and never comes back. The
//! only way out is the process ending: a signal, the user closing the
//! renderer window, or the renderer exiting the process itself.

use std::convert::Infallible;
use std::sync::mpsc;
use std::thread;

use kani_config::ThreadMode;
use kani_ffi::{MarshaledArgs, RendererEntry};

use crate::error::LaunchError;
use crate::pin::ThreadPin;
use crate::settings::LaunchSettings;

/// Name given to the renderer thread in dedicated mode.
pub const RENDERER_THREAD: &str = "kanirenderer";

/// Hand the request to `entry` on the pinned thread and block for good.
///
/// Returns only when something went wrong before the renderer was called.
pub fn launch<E>(
    settings: &LaunchSettings,
    pin: &'static ThreadPin,
    entry: E,
) -> Result<Infallible, LaunchError>
where
    E: RendererEntry + 'static,
{
    let args = MarshaledArgs::new(&settings.path, &settings.file_type, &settings.mode)?;

    log::info!(
        "Launching renderer: path={:?} type={:?} mode={:?} thread={}",
        settings.path,
        settings.file_type,
        settings.mode,
        settings.thread
    );

    match settings.thread {
        ThreadMode::Main => run_here(pin, entry, args),
        ThreadMode::Dedicated => run_dedicated(pin, entry, args),
    }
}

fn run_here<E: RendererEntry>(
    pin: &ThreadPin,
    entry: E,
    args: MarshaledArgs,
) -> Result<Infallible, LaunchError> {
    pin.pin_current()?;
    enter_renderer(&entry, &args);
    // `entry` and `args` stay alive: this frame never unwinds.
    park_forever()
}

fn run_dedicated<E>(
    pin: &'static ThreadPin,
    entry: E,
    args: MarshaledArgs,
) -> Result<Infallible, LaunchError>
where
    E: RendererEntry + 'static,
{
    let (pinned_tx, pinned_rx) = mpsc::channel();

    thread::Builder::new()
        .name(RENDERER_THREAD.to_string())
        .spawn(move || {
            let pinned = pin.pin_current();
            let ok = pinned.is_ok();
            let _ = pinned_tx.send(pinned);
            if ok {
                enter_renderer(&entry, &args);
                park_forever();
            }
        })
        .map_err(LaunchError::Spawn)?;

    match pinned_rx.recv() {
        Ok(Ok(id)) => {
            log::debug!("Launcher thread idling while renderer runs on {:?}", id);
            park_forever()
        }
        Ok(Err(e)) => Err(e),
        Err(_) => Err(LaunchError::DedicatedThreadLost),
    }
}

fn enter_renderer<E: RendererEntry>(entry: &E, args: &MarshaledArgs) {
    log::info!("Launcher running; control passes to the renderer event loop");
    entry.run(args);
    log::info!("Renderer entry point returned; keeping the process alive");
}

/// Block the calling thread for the rest of the process.
///
/// No timeout and no wake-up condition: the renderer is the only work left.
/// Spurious unparks just park again.
pub fn park_forever() -> ! {
    loop {
        thread::park();
    }
}

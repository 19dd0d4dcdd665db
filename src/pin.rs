//! Thread pinning for the renderer's event loop.
//!
//! The renderer's windowing layer refuses to build an event loop anywhere
//! but the thread it considers the main one, and that thread must stay
//! dedicated to it afterwards. Rust threads never migrate between OS threads,
//! so pinning here means choosing that thread once and refusing any second
//! choice for the rest of the process.

use std::thread::{self, ThreadId};

use once_cell::sync::OnceCell;

use crate::error::LaunchError;

/// The pin used by the `kani` binary.
pub static PROCESS_PIN: ThreadPin = ThreadPin::new();

/// A set-once record of the thread that owns the renderer.
#[derive(Debug)]
pub struct ThreadPin {
    thread: OnceCell<ThreadId>,
}

impl ThreadPin {
    pub const fn new() -> Self {
        Self {
            thread: OnceCell::new(),
        }
    }

    /// Pin the calling thread. Succeeds exactly once per `ThreadPin`.
    pub fn pin_current(&self) -> Result<ThreadId, LaunchError> {
        let current = thread::current().id();
        let mut fresh = false;
        let pinned = *self.thread.get_or_init(|| {
            fresh = true;
            current
        });

        if fresh {
            log::debug!(
                "Pinned renderer to thread {:?} ({})",
                current,
                thread::current().name().unwrap_or("unnamed")
            );
            Ok(current)
        } else {
            Err(LaunchError::AlreadyPinned(pinned))
        }
    }

    pub fn pinned(&self) -> Option<ThreadId> {
        self.thread.get().copied()
    }

    /// Whether the calling thread is the pinned one.
    pub fn is_current(&self) -> bool {
        self.pinned() == Some(thread::current().id())
    }
}

impl Default for ThreadPin {
    fn default() -> Self {
        Self::new()
    }
}

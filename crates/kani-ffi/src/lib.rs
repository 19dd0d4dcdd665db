//! Boundary to the kanirenderer native viewer.
//!
//! The renderer is a prebuilt shared library exposing a single C entry point,
//! `run_kanirenderer(path, file_type, mode)`. This crate opens the library at
//! runtime, resolves that symbol and marshals the launcher's arguments into
//! the null-terminated strings it expects.

mod error;
mod library;
mod marshal;

pub use error::{FfiError, Result};
pub use library::{ENTRY_POINT, RendererLibrary, RunKanirendererFn};
pub use marshal::MarshaledArgs;

/// Something that can run the renderer's event loop.
///
/// Implemented by [`RendererLibrary`] for the real native call. The call may
/// block for the rest of the process and reports nothing back; failures are
/// the renderer's own business.
pub trait RendererEntry: Send {
    fn run(&self, args: &MarshaledArgs);
}

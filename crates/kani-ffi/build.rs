//! Build script for kani-ffi.
//!
//! Picks up the renderer distribution directory so the launcher can find the
//! shared library at runtime. Nothing is linked here; the library is opened
//! dynamically via libloading.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=KANI_RENDERER_PATH");

    let renderer_path = env::var("KANI_RENDERER_PATH").ok().map(PathBuf::from);

    if let Some(ref path) = renderer_path {
        println!("cargo:rustc-link-search=native={}", path.display());

        // Read back by `RendererLibrary::load` as a search candidate.
        println!("cargo:rustc-env=KANI_RENDERER_LIBRARY_PATH={}", path.display());
    }
}

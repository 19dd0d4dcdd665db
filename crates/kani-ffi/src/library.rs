//! Renderer library wrapper for dynamic loading.

use std::env;
use std::ffi::c_char;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};

use crate::RendererEntry;
use crate::error::{FfiError, Result};
use crate::marshal::MarshaledArgs;

/// Exported symbol name of the renderer's entry point.
///
/// The launcher requires the three-argument header:
///
/// ```c
/// void run_kanirenderer(const char *path, const char *file_type, const char *mode);
/// ```
///
/// Renderer builds whose header adds a fourth `hdr` string are not
/// compatible: the symbol name is the same, but the callee would read its
/// fourth pointer from whatever the register happens to hold.
pub const ENTRY_POINT: &str = "run_kanirenderer";

/// C signature of [`ENTRY_POINT`], three-argument header only.
pub type RunKanirendererFn = unsafe extern "C" fn(*const c_char, *const c_char, *const c_char);

/// An opened renderer library together with its resolved entry point.
///
/// The `Library` handle is held for as long as this value lives; dropping it
/// would unload the code the event loop is running.
pub struct RendererLibrary {
    #[allow(dead_code)]
    lib: Library,
    run_kanirenderer: RunKanirendererFn,
    path: PathBuf,
}

impl RendererLibrary {
    /// Open the renderer library.
    ///
    /// `explicit` may name the library file itself or a directory containing
    /// it. Without it, the build-time distribution directory, `lib/` next to
    /// the executable, `lib/` under the working directory and finally the
    /// system loader path are tried in that order.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut attempts = Vec::new();

        for candidate in Self::candidates(explicit) {
            log::debug!("Trying renderer library at {}", candidate.display());
            match unsafe { Library::new(&candidate) } {
                Ok(lib) => {
                    log::info!("Loaded renderer library from {}", candidate.display());
                    return Self::resolve(lib, candidate);
                }
                Err(e) => attempts.push((candidate, e.to_string())),
            }
        }

        Err(FfiError::LibraryLoad { attempts })
    }

    fn resolve(lib: Library, path: PathBuf) -> Result<Self> {
        let run_kanirenderer = unsafe {
            let run: Symbol<RunKanirendererFn> = lib
                .get(ENTRY_POINT.as_bytes())
                .map_err(|e| FfiError::SymbolNotFound(format!("{}: {}", ENTRY_POINT, e)))?;
            *run
        };

        Ok(Self {
            lib,
            run_kanirenderer,
            path,
        })
    }

    /// Where the library was actually opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Candidate locations in the order `load` tries them.
    pub fn candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
        let name = Self::library_name();

        if let Some(path) = explicit {
            let path = if path.is_dir() { path.join(name) } else { path.to_path_buf() };
            return vec![path];
        }

        let mut candidates = Vec::new();

        if let Some(dir) = option_env!("KANI_RENDERER_LIBRARY_PATH") {
            candidates.push(PathBuf::from(dir).join(name));
        }

        if let Some(exe_dir) = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join("lib").join(name));
        }

        candidates.push(Path::new("lib").join(name));
        candidates.push(PathBuf::from(name));

        candidates.dedup();
        candidates
    }

    #[cfg(target_os = "windows")]
    pub fn library_name() -> &'static str {
        "kanirenderer_viewer.dll"
    }

    #[cfg(target_os = "macos")]
    pub fn library_name() -> &'static str {
        "libkanirenderer_viewer.dylib"
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    pub fn library_name() -> &'static str {
        "libkanirenderer_viewer.so"
    }
}

impl RendererEntry for RendererLibrary {
    fn run(&self, args: &MarshaledArgs) {
        let (path, file_type, mode) = args.as_ptrs();
        // SAFETY: assumes the three-argument `run_kanirenderer` header
        // documented on `ENTRY_POINT`; the four-argument (`hdr`) build is not
        // supported. The pointers come from `args`, which outlives this call.
        unsafe { (self.run_kanirenderer)(path, file_type, mode) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SEEN: std::sync::Mutex<Vec<String>> = std::sync::Mutex::new(Vec::new());

    unsafe extern "C" fn three_arg_renderer(
        path: *const c_char,
        file_type: *const c_char,
        mode: *const c_char,
    ) {
        let mut seen = SEEN.lock().unwrap();
        for ptr in [path, file_type, mode] {
            seen.push(unsafe { std::ffi::CStr::from_ptr(ptr) }.to_string_lossy().into_owned());
        }
    }

    #[test]
    fn test_entry_point_takes_exactly_three_strings() {
        let run: RunKanirendererFn = three_arg_renderer;
        let args = MarshaledArgs::new("/models/cube.obj", "opengl", "windowed").unwrap();
        let (path, file_type, mode) = args.as_ptrs();
        unsafe { run(path, file_type, mode) };

        assert_eq!(
            *SEEN.lock().unwrap(),
            vec!["/models/cube.obj", "opengl", "windowed"]
        );
    }

    #[test]
    fn test_explicit_file_is_the_only_candidate() {
        let file = Path::new("/opt/kani/custom_renderer.so");
        let candidates = RendererLibrary::candidates(Some(file));
        assert_eq!(candidates, vec![file.to_path_buf()]);
    }

    #[test]
    fn test_explicit_directory_gets_library_name() {
        let dir = env::temp_dir();
        let candidates = RendererLibrary::candidates(Some(&dir));
        assert_eq!(candidates, vec![dir.join(RendererLibrary::library_name())]);
    }

    #[test]
    fn test_default_candidates_end_with_system_lookup() {
        let name = RendererLibrary::library_name();
        let candidates = RendererLibrary::candidates(None);

        assert_eq!(candidates.last(), Some(&PathBuf::from(name)));
        let local = Path::new("lib").join(name);
        let local_idx = candidates.iter().position(|c| c == &local).unwrap();
        assert_eq!(local_idx, candidates.len() - 2);
    }

    #[test]
    fn test_missing_library_reports_attempts() {
        let missing = env::temp_dir().join("kani-missing").join("nope.so");
        let err = match RendererLibrary::load(Some(&missing)) {
            Ok(_) => panic!("library should not load"),
            Err(e) => e,
        };
        match err {
            FfiError::LibraryLoad { attempts } => {
                assert_eq!(attempts.len(), 1);
                assert_eq!(attempts[0].0, missing);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

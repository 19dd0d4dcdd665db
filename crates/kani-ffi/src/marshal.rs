//! Null-terminated copies of the three forwarded arguments.

use std::ffi::{CStr, CString, c_char};

use crate::error::{FfiError, Result};

/// Owned C strings handed to `run_kanirenderer`.
///
/// The renderer may read its arguments at any point while its event loop
/// runs, so whoever holds this value must keep it alive until the call
/// returns. The launcher never drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarshaledArgs {
    path: CString,
    file_type: CString,
    mode: CString,
}

impl MarshaledArgs {
    pub fn new(path: &str, file_type: &str, mode: &str) -> Result<Self> {
        Ok(Self {
            path: to_cstring("path", path)?,
            file_type: to_cstring("type", file_type)?,
            mode: to_cstring("mode", mode)?,
        })
    }

    pub fn path(&self) -> &CStr {
        &self.path
    }

    pub fn file_type(&self) -> &CStr {
        &self.file_type
    }

    pub fn mode(&self) -> &CStr {
        &self.mode
    }

    /// Raw pointers in entry point order. Valid while `self` is alive.
    pub fn as_ptrs(&self) -> (*const c_char, *const c_char, *const c_char) {
        (self.path.as_ptr(), self.file_type.as_ptr(), self.mode.as_ptr())
    }
}

fn to_cstring(field: &'static str, value: &str) -> Result<CString> {
    CString::new(value).map_err(|e| FfiError::InteriorNul {
        field,
        position: e.nul_position(),
    })
}

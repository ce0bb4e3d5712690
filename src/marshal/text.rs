//! Text-to-UTF8-buffer adapter and the reverse decoders

use crate::errors::{GlError, GlResult};
use crate::types::{GLchar, GLint, GLubyte};
use core::ffi::{c_char, CStr};
use core::slice;
use std::ffi::CString;

/// NUL-terminated UTF-8 copy of a `&str`, alive for one call
#[derive(Debug, Clone)]
pub struct Utf8Buffer {
    bytes: CString,
}

impl Utf8Buffer {
    pub fn new(entry: &'static str, text: &str) -> GlResult<Self> {
        let bytes = CString::new(text).map_err(|e| {
            GlError::invalid(entry, format!("interior NUL at byte {}", e.nul_position()))
        })?;
        Ok(Self { bytes })
    }

    #[inline]
    pub fn as_ptr(&self) -> *const GLchar {
        self.bytes.as_ptr() as *const GLchar
    }

    /// Byte length without the terminator
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte length as a native length value
    pub fn native_len(&self, entry: &'static str) -> GlResult<GLint> {
        GLint::try_from(self.len())
            .map_err(|_| GlError::invalid(entry, format!("text of {} bytes exceeds GLint", self.len())))
    }
}

/// Decode `len` bytes of native text, replacing invalid UTF-8
///
/// # Safety
/// When non-null, `ptr` must be valid for `len` reads.
pub unsafe fn decode_text(ptr: *const GLchar, len: usize) -> String {
    if ptr.is_null() || len == 0 {
        return String::new();
    }
    let bytes = slice::from_raw_parts(ptr as *const u8, len);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Decode text for which the native API reports no length
///
/// # Safety
/// When non-null, `ptr` must point at a NUL-terminated string.
pub unsafe fn decode_nul_terminated(ptr: *const GLubyte) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr as *const c_char).to_string_lossy().into_owned())
}

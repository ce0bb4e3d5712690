//! System resolver - the platform GL library opened with `libloading`
//!
//! Lookups go through the platform "get proc address" entry when the library
//! exports one, then fall back to the plain symbol table.

use super::SymbolResolver;
use crate::config::LibrarySettings;
use crate::errors::{GlError, GlResult};
use core::ffi::{c_char, c_void};
use core::ptr::NonNull;
use libloading::Library;
use std::ffi::CString;
use tracing::{debug, info};

type GetProcAddress = unsafe extern "system" fn(*const c_char) -> *const c_void;

#[cfg(target_os = "windows")]
const DEFAULT_LIBRARIES: &[&str] = &["opengl32.dll"];
#[cfg(target_os = "macos")]
const DEFAULT_LIBRARIES: &[&str] = &[
    "/System/Library/Frameworks/OpenGL.framework/OpenGL",
    "/System/Library/Frameworks/OpenGL.framework/Versions/Current/OpenGL",
];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const DEFAULT_LIBRARIES: &[&str] = &["libGL.so.1", "libGL.so"];

#[cfg(target_os = "windows")]
const GET_PROC_ADDRESS: &[u8] = b"wglGetProcAddress\0";
#[cfg(not(target_os = "windows"))]
const GET_PROC_ADDRESS: &[u8] = b"glXGetProcAddressARB\0";

/// Platform GL library plus its optional proc-address entry
pub struct SystemResolver {
    // Keeps `get_proc_address` valid.
    library: Library,
    get_proc_address: Option<GetProcAddress>,
    path: String,
}

impl SystemResolver {
    /// Open the first default library name that loads
    pub fn open() -> GlResult<Self> {
        Self::open_with(&LibrarySettings::default())
    }

    /// Open using configured paths, or the platform defaults when none are set
    pub fn open_with(settings: &LibrarySettings) -> GlResult<Self> {
        let candidates: Vec<&str> = if settings.paths.is_empty() {
            DEFAULT_LIBRARIES.to_vec()
        } else {
            settings.paths.iter().map(String::as_str).collect()
        };

        let mut last_error = None;
        for path in candidates {
            match Self::open_path(path, settings.use_get_proc_address) {
                Ok(resolver) => return Ok(resolver),
                Err(e) => {
                    debug!(path, error = %e, "GL library candidate rejected");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| GlError::Library {
            path: String::new(),
            reason: "no library candidates".to_string(),
        }))
    }

    /// Open one library by name or path
    pub fn open_path(path: &str, use_get_proc_address: bool) -> GlResult<Self> {
        let library = unsafe { Library::new(path) }.map_err(|e| GlError::Library {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let get_proc_address = if use_get_proc_address {
            unsafe { library.get::<GetProcAddress>(GET_PROC_ADDRESS) }
                .ok()
                .map(|symbol| *symbol)
        } else {
            None
        };

        info!(
            path,
            get_proc_address = get_proc_address.is_some(),
            "opened GL library"
        );

        Ok(Self {
            library,
            get_proc_address,
            path: path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn has_get_proc_address(&self) -> bool {
        self.get_proc_address.is_some()
    }

    fn lookup_symbol(&self, name: &CString) -> Option<NonNull<c_void>> {
        let symbol = unsafe { self.library.get::<*const c_void>(name.as_bytes_with_nul()) }.ok()?;
        NonNull::new(*symbol as *mut c_void)
    }
}

impl SymbolResolver for SystemResolver {
    fn resolve(&self, name: &str) -> Option<NonNull<c_void>> {
        let cname = CString::new(name).ok()?;

        if let Some(get_proc_address) = self.get_proc_address {
            let address = unsafe { get_proc_address(cname.as_ptr()) };
            if !is_proc_sentinel(address) {
                return NonNull::new(address as *mut c_void);
            }
        }

        self.lookup_symbol(&cname)
    }
}

impl std::fmt::Debug for SystemResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemResolver")
            .field("path", &self.path)
            .field("get_proc_address", &self.get_proc_address.is_some())
            .finish()
    }
}

/// `wglGetProcAddress` may return small integers instead of null
pub(crate) fn is_proc_sentinel(address: *const c_void) -> bool {
    matches!(address as isize, 0 | 1 | 2 | 3 | -1)
}

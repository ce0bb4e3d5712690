//! Typed call surface - one method per catalog entry
//!
//! Design: every native call is one transmute-and-call in a generated method
//!
//! Architecture:
//! - `commands.rs` - methods generated from the command table; scalar-only
//!   entries on `Gl`, pointer-taking entries on `RawCommands`
//! - `wrappers.rs` - safe slice/`&str` methods built from the marshaling adapters
//! - `layout.rs` - how many values or bytes the driver touches behind a pointer
//!
//! A call looks up its slot, marshals, calls, applies the configured
//! `glGetError` check and unmarshals the return value.

mod commands;
mod layout;
mod wrappers;

pub use layout::{indexed_state_len, state_len, PixelStore, Transfer};
pub use wrappers::IndexType;

use crate::catalog::{self, EntryId, EntryPoint};
use crate::config::{ErrorCheck, GlVersion, LoaderConfig};
use crate::consts;
use crate::errors::{GlError, GlResult};
use crate::loader::{self, CallTable, LoadReport, SymbolResolver, TableState};
use crate::types::GLenum;
use core::ffi::c_void;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, trace, warn};

/// Upper bound on codes drained per check; a lost context can report errors forever
const MAX_PENDING_ERRORS: usize = 16;

/// Owned GL context: a call table plus call policy
pub struct Gl {
    table: CallTable,
    report: Option<LoadReport>,
    error_check: ErrorCheck,
    trace_calls: bool,
    counters: Counters,
}

#[derive(Debug, Default)]
struct Counters {
    calls: AtomicU64,
    unavailable: AtomicU64,
    marshaling_errors: AtomicU64,
    native_errors: AtomicU64,
}

/// Call statistics for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallStats {
    /// Calls that reached slot lookup
    pub calls: u64,
    pub unavailable: u64,
    /// Arguments rejected by an adapter
    pub marshaling_errors: u64,
    /// Codes reported by `glGetError`
    pub native_errors: u64,
}

/// Pointer-taking entry points, reached through `Gl::raw`
#[derive(Clone, Copy)]
pub struct RawCommands<'a> {
    gl: &'a Gl,
}

impl Gl {
    /// A context whose every call fails with `NotInitialized`
    pub fn uninitialized() -> Self {
        Self::from_table(CallTable::uninitialized(), None, &LoaderConfig::default())
    }

    /// Import with the default configuration
    pub fn import<R>(resolver: &R) -> Self
    where
        R: SymbolResolver + ?Sized,
    {
        Self::import_with(resolver, &LoaderConfig::default())
    }

    pub fn import_with<R>(resolver: &R, config: &LoaderConfig) -> Self
    where
        R: SymbolResolver + ?Sized,
    {
        let (table, report) = loader::import(resolver, config);
        Self::from_table(table, Some(report), config)
    }

    /// Import, failing under `LoadPolicy::RequireCore` when core entries are missing
    pub fn try_import<R>(resolver: &R, config: &LoaderConfig) -> GlResult<Self>
    where
        R: SymbolResolver + ?Sized,
    {
        let (table, report) = loader::try_import(resolver, config)?;
        Ok(Self::from_table(table, Some(report), config))
    }

    pub(crate) fn from_table(table: CallTable, report: Option<LoadReport>, config: &LoaderConfig) -> Self {
        Self {
            table,
            report,
            error_check: config.loader.error_check,
            trace_calls: config.loader.trace_calls,
            counters: Counters::default(),
        }
    }

    /// Raw pointer-taking entry points
    #[inline]
    pub fn raw(&self) -> RawCommands<'_> {
        RawCommands { gl: self }
    }

    #[inline]
    pub fn state(&self) -> TableState {
        self.table.state()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.table.is_ready()
    }

    /// Report from the import that built this context
    pub fn load_report(&self) -> Option<&LoadReport> {
        self.report.as_ref()
    }

    pub fn error_check(&self) -> ErrorCheck {
        self.error_check
    }

    pub fn set_error_check(&mut self, policy: ErrorCheck) {
        self.error_check = policy;
    }

    #[inline]
    pub fn is_bound(&self, id: EntryId) -> bool {
        self.table.slot(id).is_bound()
    }

    /// Every descriptor with whether it resolved
    pub fn entry_status(&self) -> impl Iterator<Item = (&'static EntryPoint, bool)> + '_ {
        catalog::entry_points()
            .iter()
            .map(move |entry| (entry, self.is_bound(entry.id)))
    }

    /// Fail if any core entry of `version` is unbound
    pub fn ensure_core(&self, version: GlVersion) -> GlResult<()> {
        if !self.is_ready() {
            return Err(GlError::NotInitialized);
        }
        let names: Vec<&'static str> = catalog::mandatory_for(version.major, version.minor)
            .filter(|entry| !self.is_bound(entry.id))
            .map(|entry| entry.name)
            .collect();
        if names.is_empty() {
            Ok(())
        } else {
            Err(GlError::MissingMandatory {
                version: version.to_string(),
                names,
            })
        }
    }

    pub fn stats(&self) -> CallStats {
        CallStats {
            calls: self.counters.calls.load(Ordering::Relaxed),
            unavailable: self.counters.unavailable.load(Ordering::Relaxed),
            marshaling_errors: self.counters.marshaling_errors.load(Ordering::Relaxed),
            native_errors: self.counters.native_errors.load(Ordering::Relaxed),
        }
    }

    /// Slot lookup for one call
    #[inline]
    pub(crate) fn address(&self, id: EntryId) -> GlResult<*const c_void> {
        self.counters.calls.fetch_add(1, Ordering::Relaxed);
        match self.table.address(id) {
            Ok(address) => {
                if self.trace_calls {
                    trace!(target: "glbind::call", entry = id.name(), "call");
                }
                Ok(address.as_ptr() as *const c_void)
            }
            Err(e) => {
                if matches!(e, GlError::Unavailable { .. }) {
                    self.counters.unavailable.fetch_add(1, Ordering::Relaxed);
                    debug!(entry = id.name(), "call to unavailable entry point");
                }
                Err(e)
            }
        }
    }

    /// Whether the `ErrorCheck` policy consults `glGetError` around `id`
    #[inline]
    fn checks(&self, id: EntryId) -> bool {
        match self.error_check {
            ErrorCheck::Never => false,
            ErrorCheck::Outputs => id.entry().signature.has_outputs(),
            ErrorCheck::Always => id != EntryId::glGetError,
        }
    }

    /// Clear codes left by earlier unchecked calls so they are not
    /// reported against `id`
    #[inline]
    pub(crate) fn before_call(&self, id: EntryId) {
        if !self.checks(id) {
            return;
        }
        for _ in 0..MAX_PENDING_ERRORS {
            match self.next_error() {
                Some(code) => warn!(entry = id.name(), code, "discarding earlier GL error"),
                None => break,
            }
        }
    }

    /// Apply the `ErrorCheck` policy after a native call returned
    #[inline]
    pub(crate) fn after_call(&self, id: EntryId) -> GlResult<()> {
        if self.checks(id) {
            self.check_native(id)
        } else {
            Ok(())
        }
    }

    /// Drain `glGetError`, reporting the first code; skipped when it is not bound
    pub(crate) fn check_native(&self, id: EntryId) -> GlResult<()> {
        let Some(code) = self.next_error() else {
            return Ok(());
        };
        self.counters.native_errors.fetch_add(1, Ordering::Relaxed);
        for _ in 1..MAX_PENDING_ERRORS {
            let Some(more) = self.next_error() else {
                break;
            };
            self.counters.native_errors.fetch_add(1, Ordering::Relaxed);
            error!(entry = id.name(), code = more, "additional GL error");
        }
        let err = GlError::Native {
            entry: id.name(),
            code,
        };
        error!(entry = id.name(), code, "{}", err);
        Err(err)
    }

    /// One pending `glGetError` code; `None` once clear or when unbound
    fn next_error(&self) -> Option<GLenum> {
        let address = self.table.address(EntryId::glGetError).ok()?;
        let code = unsafe {
            let get_error = core::mem::transmute::<*mut c_void, unsafe extern "system" fn() -> GLenum>(
                address.as_ptr(),
            );
            get_error()
        };
        (code != consts::GL_NO_ERROR).then_some(code)
    }

    /// Count adapter rejections on their way out
    #[inline]
    pub(crate) fn marshal<T>(&self, result: GlResult<T>) -> GlResult<T> {
        if let Err(GlError::InvalidArgument { entry, reason }) = &result {
            self.counters.marshaling_errors.fetch_add(1, Ordering::Relaxed);
            debug!(entry = *entry, reason = %reason, "argument rejected");
        }
        result
    }
}

impl Default for Gl {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl std::fmt::Debug for Gl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gl")
            .field("state", &self.table.state())
            .field("bound", &self.table.bound_count())
            .field("error_check", &self.error_check)
            .field("trace_calls", &self.trace_calls)
            .finish()
    }
}

impl<'a> RawCommands<'a> {
    /// The context these commands dispatch through
    pub fn gl(&self) -> &'a Gl {
        self.gl
    }
}

//! Binding loader - resolve every catalog entry into a call table
//!
//! Design: ask the resolver once per entry, cache the answer in a slot
//!
//! Architecture:
//! - `table.rs` - `CallTable`, `Slot` and the table lifecycle
//! - `library.rs` - `SystemResolver` over the platform GL library
//!
//! An unresolved entry is never a load error. Whether missing core entries
//! are fatal is decided by `LoadPolicy` in `try_import`, or later through
//! `LoadReport::ensure_core`.

mod table;
mod library;

pub use library::SystemResolver;
pub use table::{CallTable, Slot, TableState};

use crate::catalog::{self, Requirement};
use crate::config::{GlVersion, LoadPolicy, LoaderConfig};
use crate::errors::{GlError, GlResult};
use crate::logging::perf;
use core::ffi::{c_char, c_void};
use core::ptr::NonNull;
use std::collections::HashMap;
use std::ffi::CString;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Maps a native symbol name to its address
///
/// `None` is the "not found" sentinel. Implementations must not panic and
/// are not expected to cache.
pub trait SymbolResolver {
    fn resolve(&self, name: &str) -> Option<NonNull<c_void>>;
}

impl<F> SymbolResolver for F
where
    F: Fn(&str) -> *const c_void,
{
    #[inline]
    fn resolve(&self, name: &str) -> Option<NonNull<c_void>> {
        NonNull::new(self(name) as *mut c_void)
    }
}

/// C callback of the shape windowing libraries hand out
/// (`SDL_GL_GetProcAddress`, `glfwGetProcAddress`, ...)
#[derive(Debug, Clone, Copy)]
pub struct CResolver(pub unsafe extern "C" fn(*const c_char) -> *const c_void);

impl SymbolResolver for CResolver {
    fn resolve(&self, name: &str) -> Option<NonNull<c_void>> {
        let cname = CString::new(name).ok()?;
        let address = unsafe { (self.0)(cname.as_ptr()) };
        NonNull::new(address as *mut c_void)
    }
}

/// Pre-resolved name → address map
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    symbols: HashMap<String, NonNull<c_void>>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `address` under `name`; null addresses are ignored
    pub fn insert(&mut self, name: impl Into<String>, address: *const c_void) -> &mut Self {
        if let Some(address) = NonNull::new(address as *mut c_void) {
            self.symbols.insert(name.into(), address);
        }
        self
    }

    pub fn with(mut self, name: impl Into<String>, address: *const c_void) -> Self {
        self.insert(name, address);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<NonNull<c_void>> {
        self.symbols.remove(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

// Addresses are plain code locations.
unsafe impl Send for MapResolver {}
unsafe impl Sync for MapResolver {}

impl SymbolResolver for MapResolver {
    fn resolve(&self, name: &str) -> Option<NonNull<c_void>> {
        self.symbols.get(name).copied()
    }
}

/// Summary of one import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub bound: usize,
    /// Every unresolved entry, in catalog order
    pub unbound: Vec<&'static str>,
    /// Unresolved entries that are core at `required`
    pub missing_core: Vec<&'static str>,
    pub required: GlVersion,
    pub elapsed: Duration,
}

impl LoadReport {
    pub fn total(&self) -> usize {
        self.bound + self.unbound.len()
    }

    /// Whether every catalog entry resolved
    pub fn is_complete(&self) -> bool {
        self.unbound.is_empty()
    }

    /// Fail if any core entry of `version` is unbound
    pub fn ensure_core(&self, version: GlVersion) -> GlResult<()> {
        let names: Vec<&'static str> = self
            .unbound
            .iter()
            .copied()
            .filter(|name| {
                catalog::find(name)
                    .map(|e| e.requirement.is_mandatory_for(version.major, version.minor))
                    .unwrap_or(false)
            })
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
}

/// Resolve every catalog entry; never fails
pub fn import<R>(resolver: &R, config: &LoaderConfig) -> (CallTable, LoadReport)
where
    R: SymbolResolver + ?Sized,
{
    let guard = perf::track("import");
    let required = config.loader.require_version;

    let mut table = CallTable::loading();
    let mut unbound = Vec::new();
    let mut missing_core = Vec::new();

    for entry in catalog::entry_points() {
        match resolver.resolve(entry.name) {
            Some(address) => table.bind(entry.id, address),
            None => {
                debug!(entry = entry.name, requirement = %entry.requirement, "entry point unresolved");
                if entry.requirement.is_mandatory_for(required.major, required.minor) {
                    warn!(entry = entry.name, version = %required, "core entry point missing");
                    missing_core.push(entry.name);
                }
                unbound.push(entry.name);
            }
        }
    }

    let table = table.finish();
    let report = LoadReport {
        bound: table.bound_count(),
        unbound,
        missing_core,
        required,
        elapsed: guard.elapsed(),
    };

    info!(
        bound = report.bound,
        unbound = report.unbound.len(),
        missing_core = report.missing_core.len(),
        extensions_bound = extensions_bound(&table),
        duration_us = report.elapsed.as_micros() as u64,
        "entry points loaded"
    );

    (table, report)
}

/// `import`, then apply the configured `LoadPolicy`
pub fn try_import<R>(resolver: &R, config: &LoaderConfig) -> GlResult<(CallTable, LoadReport)>
where
    R: SymbolResolver + ?Sized,
{
    let (table, report) = import(resolver, config);
    if config.loader.policy == LoadPolicy::RequireCore {
        report.ensure_core(config.loader.require_version)?;
    }
    Ok((table, report))
}

fn extensions_bound(table: &CallTable) -> usize {
    table
        .iter()
        .filter(|(id, slot)| {
            slot.is_bound() && matches!(id.entry().requirement, Requirement::Extension(_))
        })
        .count()
}

#[cfg(test)]
mod tests;

//! Process-wide context, for callers that want one shared `Gl`
//!
//! Design: an `Arc<Gl>` behind a read-mostly lock. Imports are serialized by
//! a separate mutex and build the new table outside the state lock, so calls
//! through the previous context keep working until the swap.

use crate::config::LoaderConfig;
use crate::errors::{GlError, GlResult};
use crate::gl::Gl;
use crate::loader::{self, CallTable, LoadReport, SymbolResolver};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lifecycle of the process-wide context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    /// An import is running; a previously imported context, if any, stays current
    Loading,
    Ready,
}

struct GlobalState {
    current: Option<Arc<Gl>>,
    loading: bool,
}

static STATE: Lazy<RwLock<GlobalState>> = Lazy::new(|| {
    RwLock::new(GlobalState {
        current: None,
        loading: false,
    })
});

static IMPORT_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Import with the default configuration and make the result current
pub fn import<R>(resolver: &R) -> LoadReport
where
    R: SymbolResolver + ?Sized,
{
    import_with(resolver, &LoaderConfig::default())
}

pub fn import_with<R>(resolver: &R, config: &LoaderConfig) -> LoadReport
where
    R: SymbolResolver + ?Sized,
{
    match run_import(config, || Ok::<_, Infallible>(loader::import(resolver, config))) {
        Ok(report) => report,
        Err(never) => match never {},
    }
}

/// Like `import_with`, but honors `LoadPolicy::RequireCore`; on failure the
/// previous context stays current
pub fn try_import<R>(resolver: &R, config: &LoaderConfig) -> GlResult<LoadReport>
where
    R: SymbolResolver + ?Sized,
{
    run_import(config, || loader::try_import(resolver, config))
}

fn run_import<F, E>(config: &LoaderConfig, load: F) -> Result<LoadReport, E>
where
    F: FnOnce() -> Result<(CallTable, LoadReport), E>,
{
    let _serial = IMPORT_LOCK.lock();
    let loading = LoadingGuard::begin();
    debug!("global import started");

    let result = load();

    let mut state = STATE.write();
    loading.finish(&mut state);
    let (table, report) = result?;
    state.current = Some(Arc::new(Gl::from_table(table, Some(report.clone()), config)));
    info!(bound = report.bound, "global context replaced");
    Ok(report)
}

/// Holds `loading` set for one import; clears it if the resolver unwinds
struct LoadingGuard {
    armed: bool,
}

impl LoadingGuard {
    fn begin() -> Self {
        STATE.write().loading = true;
        Self { armed: true }
    }

    /// Clear `loading` under a lock the caller already holds
    fn finish(mut self, state: &mut GlobalState) {
        state.loading = false;
        self.armed = false;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if self.armed {
            STATE.write().loading = false;
            warn!("global import unwound; previous context kept");
        }
    }
}

pub fn state() -> LoadState {
    let state = STATE.read();
    if state.loading {
        LoadState::Loading
    } else if state.current.is_some() {
        LoadState::Ready
    } else {
        LoadState::Uninitialized
    }
}

/// Run `f` against the current context
pub fn with_gl<F, T>(f: F) -> GlResult<T>
where
    F: FnOnce(&Gl) -> T,
{
    let gl = current()?;
    Ok(f(&gl))
}

/// The current context; later imports do not affect the returned handle
pub fn current() -> GlResult<Arc<Gl>> {
    STATE.read().current.clone().ok_or(GlError::NotInitialized)
}

mod common;

use glbind::global::{self, LoadState};
use glbind::{GlError, GlVersion, LoadPolicy, LoaderConfig};
use std::ffi::c_void;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

// The process-wide context cannot be reset, so the whole lifecycle is one test.
#[test]
fn test_global_lifecycle() {
    assert_eq!(global::state(), LoadState::Uninitialized);
    assert_eq!(global::current().err(), Some(GlError::NotInitialized));
    assert_eq!(
        global::with_gl(|gl| gl.clear(0)),
        Err(GlError::NotInitialized)
    );

    // A resolver that panics leaves the state as it found it
    let unwound = panic::catch_unwind(AssertUnwindSafe(|| {
        global::import(&|name: &str| -> *const c_void { panic!("resolver failed on {name}") })
    }));
    assert!(unwound.is_err());
    assert_eq!(global::state(), LoadState::Uninitialized);

    // A failed strict import leaves nothing behind
    let mut strict = LoaderConfig::default();
    strict.loader.policy = LoadPolicy::RequireCore;
    strict.loader.require_version = GlVersion::new(3, 3);
    assert!(matches!(
        global::try_import(&common::resolver(), &strict),
        Err(GlError::MissingMandatory { .. })
    ));
    assert_eq!(global::state(), LoadState::Uninitialized);

    let report = global::import(&common::resolver());
    assert_eq!(report.bound, common::entries().len());
    assert_eq!(global::state(), LoadState::Ready);

    common::take_calls();
    global::with_gl(|gl| gl.clear(0x4000)).unwrap().unwrap();
    assert_eq!(common::take_calls(), vec!["glClear(0x4000)"]);

    // Handles taken before a re-import keep their table
    let before = global::current().unwrap();
    let report = global::import(&common::resolver_without(&["glGetTextureHandleARB"]));
    assert_eq!(report.bound, common::entries().len() - 1);
    let after = global::current().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert!(before.get_texture_handle_arb(1).is_ok());
    assert_eq!(
        after.get_texture_handle_arb(1),
        Err(GlError::Unavailable {
            name: "glGetTextureHandleARB"
        })
    );

    // Concurrent re-imports serialize and always end Ready
    let workers: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| global::import(&common::resolver()).bound))
        .collect();
    for worker in workers {
        assert_eq!(worker.join().unwrap(), common::entries().len());
    }
    assert_eq!(global::state(), LoadState::Ready);
    assert!(global::current().unwrap().is_ready());
}

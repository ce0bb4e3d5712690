//! Unit tests for the loader

use super::*;
use crate::catalog::{entry_points, EntryId};
use crate::config::ErrorCheck;

fn fake_address(id: EntryId) -> *const c_void {
    (0x1000 + id.index() * 16) as *const c_void
}

fn full_resolver() -> MapResolver {
    let mut map = MapResolver::new();
    for entry in entry_points() {
        map.insert(entry.name, fake_address(entry.id));
    }
    map
}

#[test]
fn test_uninitialized_table() {
    let table = CallTable::uninitialized();
    assert_eq!(table.state(), TableState::Uninitialized);
    assert_eq!(table.slot(EntryId::glClear), Slot::Unbound);
    assert_eq!(table.address(EntryId::glClear), Err(GlError::NotInitialized));
    assert_eq!(table.bound_count(), 0);
}

#[test]
fn test_import_binds_everything() {
    let (table, report) = import(&full_resolver(), &LoaderConfig::default());
    assert!(table.is_ready());
    assert_eq!(report.bound, EntryId::COUNT);
    assert!(report.is_complete());
    assert!(report.missing_core.is_empty());
    assert_eq!(report.total(), EntryId::COUNT);
    assert_eq!(
        table.address(EntryId::glGenTextures).unwrap().as_ptr() as *const c_void,
        fake_address(EntryId::glGenTextures)
    );
}

#[test]
fn test_unresolved_entry_is_unavailable() {
    let mut map = full_resolver();
    map.remove("glDebugMessageCallback");

    let (table, report) = import(&map, &LoaderConfig::default());
    assert_eq!(report.unbound, vec!["glDebugMessageCallback"]);
    // 4.3 entry, not core at the default 3.3
    assert!(report.missing_core.is_empty());
    assert_eq!(
        table.address(EntryId::glDebugMessageCallback),
        Err(GlError::Unavailable {
            name: "glDebugMessageCallback"
        })
    );
    assert!(table.address(EntryId::glClear).is_ok());
}

#[test]
fn test_missing_core_recorded() {
    let mut map = full_resolver();
    map.remove("glGenVertexArrays");
    map.remove("glGetTextureHandleARB");

    let (_, report) = import(&map, &LoaderConfig::default());
    assert_eq!(report.unbound, vec!["glGenVertexArrays", "glGetTextureHandleARB"]);
    assert_eq!(report.missing_core, vec!["glGenVertexArrays"]);
}

#[test]
fn test_ensure_core() {
    let mut map = full_resolver();
    map.remove("glDispatchCompute");

    let (_, report) = import(&map, &LoaderConfig::default());
    assert!(report.ensure_core(GlVersion::new(3, 3)).is_ok());
    assert_eq!(
        report.ensure_core(GlVersion::new(4, 3)),
        Err(GlError::MissingMandatory {
            version: "4.3".into(),
            names: vec!["glDispatchCompute"],
        })
    );
}

#[test]
fn test_try_import_policies() {
    let mut map = full_resolver();
    map.remove("glBindVertexArray");
    map.remove("glGenVertexArrays");

    let lenient = LoaderConfig::default();
    assert!(try_import(&map, &lenient).is_ok());

    let mut strict = LoaderConfig::default();
    strict.loader.policy = LoadPolicy::RequireCore;
    match try_import(&map, &strict) {
        Err(GlError::MissingMandatory { version, names }) => {
            assert_eq!(version, "3.3");
            assert_eq!(names, vec!["glBindVertexArray", "glGenVertexArrays"]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_import_idempotent() {
    let map = full_resolver();
    let config = LoaderConfig::default();
    let (first, _) = import(&map, &config);
    let (second, _) = import(&map, &config);
    assert_eq!(first, second);
}

#[test]
fn test_closure_resolver() {
    let resolver = |name: &str| -> *const c_void {
        if name == "glClear" {
            0x42 as *const c_void
        } else {
            core::ptr::null()
        }
    };
    let (table, report) = import(&resolver, &LoaderConfig::default());
    assert_eq!(report.bound, 1);
    assert!(table.slot(EntryId::glClear).is_bound());
    assert!(!table.slot(EntryId::glFlush).is_bound());
}

unsafe extern "C" fn c_lookup(name: *const c_char) -> *const c_void {
    let name = core::ffi::CStr::from_ptr(name);
    if name.to_bytes() == b"glFlush" {
        0x99 as *const c_void
    } else {
        core::ptr::null()
    }
}

#[test]
fn test_c_resolver() {
    let resolver = CResolver(c_lookup);
    assert_eq!(
        resolver.resolve("glFlush").map(|p| p.as_ptr() as usize),
        Some(0x99)
    );
    assert!(resolver.resolve("glFinish").is_none());
    // Names with NUL never reach the callback
    assert!(resolver.resolve("gl\0Flush").is_none());
}

#[test]
fn test_map_resolver_ignores_null() {
    let map = MapResolver::new()
        .with("glClear", core::ptr::null())
        .with("glFlush", 0x10 as *const c_void);
    assert_eq!(map.len(), 1);
    assert!(map.resolve("glClear").is_none());
    assert!(map.resolve("glFlush").is_some());
}

#[test]
fn test_required_version_from_config() {
    let mut map = full_resolver();
    map.remove("glDispatchCompute");

    let mut config = LoaderConfig::default();
    config.loader.require_version = GlVersion::new(4, 6);
    config.loader.error_check = ErrorCheck::Never;
    let (_, report) = import(&map, &config);
    assert_eq!(report.required, GlVersion::new(4, 6));
    assert_eq!(report.missing_core, vec!["glDispatchCompute"]);
}

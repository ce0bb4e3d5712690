//! Entry-point catalog - the static list of every supported native command
//!
//! Architecture:
//! - `kind.rs` - parameter/return kinds and the `NativeType` mapping
//! - `entries.rs` - the command table, the single source for both the
//!   catalog below and the generated call surface in `gl::commands`
//!
//! Every descriptor is a `static`; nothing here changes after compilation.

mod kind;
pub(crate) mod entries;

pub use kind::{Kind, NativeType, Scalar};

use crate::marshal::Marshal;
use crate::types::*;
use core::ffi::c_void;
use core::fmt;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// What makes an entry point mandatory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Part of the core profile since `major.minor`
    Core(u8, u8),
    /// Only present when the named extension is exported
    Extension(&'static str),
    /// Removed from the core profile; bound only by compatibility contexts
    Compatibility(u8, u8),
}

impl Requirement {
    /// Whether a context of version `major.minor` must provide this entry
    #[inline]
    pub fn is_mandatory_for(self, major: u8, minor: u8) -> bool {
        match self {
            Self::Core(req_major, req_minor) => (req_major, req_minor) <= (major, minor),
            Self::Extension(_) | Self::Compatibility(..) => false,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core(major, minor) => write!(f, "GL {}.{}", major, minor),
            Self::Extension(name) => write!(f, "{}", name),
            Self::Compatibility(major, minor) => write!(f, "GL {}.{} compat", major, minor),
        }
    }
}

/// Named parameter of a native signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: Kind,
}

/// Ordered parameter kinds plus the return kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub params: &'static [Param],
    pub ret: Kind,
}

impl Signature {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether any parameter is written by the callee
    pub fn has_outputs(&self) -> bool {
        self.params.iter().any(|p| p.kind.is_output())
    }

    /// Whether every parameter is passed by value
    pub fn is_scalar_only(&self) -> bool {
        self.params.iter().all(|p| !p.kind.is_pointer())
    }
}

/// Descriptor of one native entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPoint {
    pub id: EntryId,
    /// Native symbol name, e.g. `glGenTextures`
    pub name: &'static str,
    pub signature: Signature,
    pub requirement: Requirement,
}

impl EntryPoint {
    /// Render a C-like prototype, e.g. `void glGenTextures(GLsizei n, GLuint* textures)`
    pub fn describe(&self) -> String {
        let params: Vec<String> = self
            .signature
            .params
            .iter()
            .map(|p| format!("{} {}", p.kind, p.name))
            .collect();
        format!("{} {}({})", self.signature.ret, self.name, params.join(", "))
    }
}

macro_rules! define_catalog {
    (
        $(
            $(#[$attr:meta])*
            $req:ident($($req_arg:expr),*) $safety:tt fn $name:ident($($p:ident: $t:ty),* $(,)?) $(-> $r:ty)? = $sym:ident;
        )*
    ) => {
        /// Identifier of a catalog entry, named after its native symbol
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum EntryId {
            $($sym,)*
        }

        impl EntryId {
            /// Every entry in catalog order
            pub const ALL: &'static [EntryId] = &[$(EntryId::$sym,)*];
            pub const COUNT: usize = Self::ALL.len();
        }

        /// The catalog, indexed by `EntryId`
        pub static ENTRY_POINTS: [EntryPoint; EntryId::COUNT] = [
            $(
                EntryPoint {
                    id: EntryId::$sym,
                    name: stringify!($sym),
                    signature: Signature {
                        params: &[$(Param { name: stringify!($p), kind: <$t as Marshal>::KIND },)*],
                        ret: <entry_ret!($($r)?) as Marshal>::KIND,
                    },
                    requirement: Requirement::$req($($req_arg),*),
                },
            )*
        ];
    };
}

/// Return type of a table row, `()` when omitted
macro_rules! entry_ret {
    () => { () };
    ($r:ty) => { $r };
}
pub(crate) use entry_ret;

entries::with_entry_points!(define_catalog);

impl EntryId {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn entry(self) -> &'static EntryPoint {
        &ENTRY_POINTS[self.index()]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.entry().name
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static BY_NAME: Lazy<HashMap<&'static str, EntryId>> =
    Lazy::new(|| ENTRY_POINTS.iter().map(|e| (e.name, e.id)).collect());

/// Every descriptor in catalog order
#[inline]
pub fn entry_points() -> &'static [EntryPoint] {
    &ENTRY_POINTS
}

/// Find a descriptor by native symbol name
pub fn find(name: &str) -> Option<&'static EntryPoint> {
    BY_NAME.get(name).map(|id| id.entry())
}

/// Entries that a `major.minor` core context must provide
pub fn mandatory_for(major: u8, minor: u8) -> impl Iterator<Item = &'static EntryPoint> {
    ENTRY_POINTS
        .iter()
        .filter(move |e| e.requirement.is_mandatory_for(major, minor))
}

/// Entries gated behind an extension
pub fn extensions() -> impl Iterator<Item = &'static EntryPoint> {
    ENTRY_POINTS
        .iter()
        .filter(|e| matches!(e.requirement, Requirement::Extension(_)))
}

/// Entries only a compatibility-profile context exports
pub fn compatibility() -> impl Iterator<Item = &'static EntryPoint> {
    ENTRY_POINTS
        .iter()
        .filter(|e| matches!(e.requirement, Requirement::Compatibility(..)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_indexed_by_id() {
        for (i, entry) in entry_points().iter().enumerate() {
            assert_eq!(entry.id.index(), i);
            assert_eq!(EntryId::ALL[i], entry.id);
        }
        assert_eq!(EntryId::COUNT, ENTRY_POINTS.len());
    }

    #[test]
    fn test_names_unique_and_prefixed() {
        let mut seen = std::collections::HashSet::new();
        for entry in entry_points() {
            assert!(entry.name.starts_with("gl"), "{}", entry.name);
            assert!(seen.insert(entry.name), "duplicate {}", entry.name);
        }
    }

    #[test]
    fn test_find_by_name() {
        let entry = find("glGenTextures").unwrap();
        assert_eq!(entry.id, EntryId::glGenTextures);
        assert_eq!(entry.signature.arity(), 2);
        assert_eq!(entry.signature.params[1].kind, Kind::OutArray(Scalar::U32));
        assert!(find("glNotAThing").is_none());
    }

    #[test]
    fn test_signatures_follow_types() {
        let get_string = EntryId::glGetString.entry();
        assert_eq!(get_string.signature.ret, Kind::Array(Scalar::U8));

        let shader_source = EntryId::glShaderSource.entry();
        assert_eq!(shader_source.signature.params[2].kind, Kind::TextArray);

        let depth_mask = EntryId::glDepthMask.entry();
        assert_eq!(depth_mask.signature.params[0].kind, Kind::Scalar(Scalar::Bool));
        assert!(depth_mask.signature.is_scalar_only());

        let is_enabled = EntryId::glIsEnabled.entry();
        assert_eq!(is_enabled.signature.ret, Kind::Scalar(Scalar::Bool));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            EntryId::glGenTextures.entry().describe(),
            "void glGenTextures(GLint n, GLuint* textures)"
        );
    }

    #[test]
    fn test_requirements() {
        assert!(Requirement::Core(2, 0).is_mandatory_for(3, 3));
        assert!(!Requirement::Core(4, 3).is_mandatory_for(3, 3));
        assert!(!Requirement::Extension("GL_KHR_debug").is_mandatory_for(4, 6));

        let core_33: Vec<_> = mandatory_for(3, 3).map(|e| e.name).collect();
        assert!(core_33.contains(&"glGenVertexArrays"));
        assert!(!core_33.contains(&"glDebugMessageCallback"));
        assert!(extensions().all(|e| matches!(e.requirement, Requirement::Extension(_))));
    }

    #[test]
    fn test_compatibility_entries_never_mandatory() {
        assert!(!Requirement::Compatibility(1, 0).is_mandatory_for(4, 6));
        assert_eq!(Requirement::Compatibility(1, 0).to_string(), "GL 1.0 compat");

        let alpha_func = find("glAlphaFunc").unwrap();
        assert_eq!(alpha_func.requirement, Requirement::Compatibility(1, 0));
        assert_eq!(alpha_func.describe(), "void glAlphaFunc(GLuint func, GLfloat ref_)");
        assert!(alpha_func.signature.is_scalar_only());
        assert!(compatibility().any(|e| e.id == EntryId::glAlphaFunc));
        assert!(!mandatory_for(4, 6).any(|e| e.id == EntryId::glAlphaFunc));
    }
}

//! Runtime-resolved OpenGL entry points
//!
//! A catalog of GL commands is resolved once through a [`SymbolResolver`]
//! into a call table; [`Gl`] exposes one typed method per command.

// Core modules
pub mod types;
pub mod catalog;
pub mod marshal;
pub mod errors;
pub mod loader;
pub mod gl;
pub mod consts;
pub mod global;

// Ambient
pub mod config;
pub mod logging;

// Re-export commonly used items
pub use catalog::{EntryId, EntryPoint, Requirement};
pub use config::{ErrorCheck, GlVersion, LoadPolicy, LoaderConfig};
pub use errors::{GlError, GlResult};
pub use gl::{CallStats, Gl, IndexType, PixelStore, RawCommands, Transfer};
pub use loader::{
    CResolver, CallTable, LoadReport, MapResolver, Slot, SymbolResolver, SystemResolver,
    TableState,
};

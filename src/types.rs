//! Native GL type aliases
//!
//! These mirror the C typedefs of the GL headers. `GLchar` is pinned to `i8`
//! so that text pointers never alias `GLubyte` arrays on targets where
//! `c_char` is unsigned.

use core::ffi::c_void;

pub type GLenum = u32;
pub type GLbitfield = u32;
pub type GLuint = u32;
pub type GLint = i32;
pub type GLsizei = i32;
pub type GLboolean = u8;
pub type GLubyte = u8;
pub type GLshort = i16;
pub type GLushort = u16;
pub type GLfloat = f32;
pub type GLclampf = f32;
pub type GLdouble = f64;
pub type GLclampd = f64;
pub type GLchar = i8;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;
pub type GLint64 = i64;
pub type GLuint64 = u64;
pub type GLvoid = c_void;

/// Opaque fence handle returned by `glFenceSync`.
pub type GLsync = *const c_void;

/// Debug message callback installed through `glDebugMessageCallback`.
pub type GLDEBUGPROC = Option<
    extern "system" fn(
        source: GLenum,
        gltype: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        message: *const GLchar,
        user_param: *mut c_void,
    ),
>;

pub const GL_TRUE: GLboolean = 1;
pub const GL_FALSE: GLboolean = 0;

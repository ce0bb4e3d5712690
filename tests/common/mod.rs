//! Mock GL driver shared by the integration tests
//!
//! Every mock records a readable trace of its call in a thread-local log so
//! tests running in parallel never see each other's calls.

#![allow(dead_code)]

use glbind::types::*;
use glbind::{consts, Gl, MapResolver};
use std::cell::{Cell, RefCell};
use std::ffi::c_void;

thread_local! {
    static LOG: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static PENDING_ERROR: Cell<GLenum> = const { Cell::new(0) };
    static NEXT_NAME: Cell<GLuint> = const { Cell::new(1) };
}

fn record(call: String) {
    LOG.with(|log| log.borrow_mut().push(call));
}

/// Calls recorded on this thread, oldest first; clears the log
pub fn take_calls() -> Vec<String> {
    LOG.with(|log| std::mem::take(&mut *log.borrow_mut()))
}

/// Make the next `glGetError` report `code`
pub fn raise(code: GLenum) {
    PENDING_ERROR.with(|e| e.set(code));
}

extern "system" fn get_error() -> GLenum {
    PENDING_ERROR.with(|e| e.replace(consts::GL_NO_ERROR))
}

extern "system" fn clear(mask: GLbitfield) {
    record(format!("glClear({:#x})", mask));
}

extern "system" fn clear_color(r: GLfloat, g: GLfloat, b: GLfloat, a: GLfloat) {
    record(format!("glClearColor({}, {}, {}, {})", r, g, b, a));
}

extern "system" fn enable(cap: GLenum) {
    record(format!("glEnable({:#x})", cap));
    if cap == 0 {
        raise(consts::GL_INVALID_ENUM);
    }
}

extern "system" fn depth_mask(flag: GLboolean) {
    record(format!("glDepthMask({})", flag));
}

extern "system" fn create_shader(kind: GLenum) -> GLuint {
    record(format!("glCreateShader({:#x})", kind));
    NEXT_NAME.with(|n| n.replace(n.get() + 1))
}

extern "system" fn bind_buffer(target: GLenum, buffer: GLuint) {
    record(format!("glBindBuffer({:#x}, {})", target, buffer));
}

unsafe extern "system" fn gen_names(n: GLsizei, out: *mut GLuint) {
    record(format!("glGen*({})", n));
    for i in 0..n as usize {
        *out.add(i) = NEXT_NAME.with(|next| next.replace(next.get() + 1));
    }
}

unsafe extern "system" fn delete_names(n: GLsizei, ids: *const GLuint) {
    let ids = std::slice::from_raw_parts(ids, n as usize);
    record(format!("glDelete*({:?})", ids));
}

/// Writes garbage for unknown names, like a driver that fails late
unsafe extern "system" fn get_integerv(pname: GLenum, out: *mut GLint) {
    match pname {
        consts::GL_MAJOR_VERSION => *out = 4,
        consts::GL_MINOR_VERSION => *out = 6,
        consts::GL_NUM_EXTENSIONS => *out = 2,
        consts::GL_PACK_ALIGNMENT | consts::GL_UNPACK_ALIGNMENT => *out = 4,
        consts::GL_PACK_ROW_LENGTH
        | consts::GL_PACK_SKIP_PIXELS
        | consts::GL_PACK_SKIP_ROWS
        | consts::GL_UNPACK_ROW_LENGTH
        | consts::GL_UNPACK_SKIP_PIXELS
        | consts::GL_UNPACK_SKIP_ROWS => *out = 0,
        _ => {
            *out = 999;
            raise(consts::GL_INVALID_ENUM);
        }
    }
}

static RENDERER: &[u8] = b"Mock Renderer\0";
static EXT_DEBUG: &[u8] = b"GL_KHR_debug\0";
static EXT_BINDLESS: &[u8] = b"GL_ARB_bindless_texture\0";

unsafe extern "system" fn get_string(name: GLenum) -> *const GLubyte {
    match name {
        consts::GL_RENDERER => RENDERER.as_ptr(),
        _ => std::ptr::null(),
    }
}

unsafe extern "system" fn get_string_i(name: GLenum, index: GLuint) -> *const GLubyte {
    match (name, index) {
        (consts::GL_EXTENSIONS, 0) => EXT_DEBUG.as_ptr(),
        (consts::GL_EXTENSIONS, 1) => EXT_BINDLESS.as_ptr(),
        _ => {
            raise(consts::GL_INVALID_VALUE);
            std::ptr::null()
        }
    }
}

unsafe extern "system" fn shader_source(
    shader: GLuint,
    count: GLsizei,
    strings: *const *const GLchar,
    lengths: *const GLint,
) {
    let mut parts = Vec::new();
    for i in 0..count as usize {
        let bytes = std::slice::from_raw_parts(*strings.add(i) as *const u8, *lengths.add(i) as usize);
        parts.push(String::from_utf8_lossy(bytes).into_owned());
    }
    record(format!("glShaderSource({}, {:?})", shader, parts));
}

unsafe extern "system" fn get_program_iv(_program: GLuint, pname: GLenum, out: *mut GLint) {
    *out = match pname {
        consts::GL_INFO_LOG_LENGTH => 0,
        consts::GL_LINK_STATUS => consts::GL_TRUE as GLint,
        _ => 0,
    };
}

unsafe extern "system" fn buffer_data(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) {
    let head = if data.is_null() {
        None
    } else {
        Some(*(data as *const u8))
    };
    record(format!("glBufferData({:#x}, {}, {:?}, {:#x})", target, size, head, usage));
}

unsafe extern "system" fn multi_draw_arrays(
    mode: GLenum,
    first: *const GLint,
    count: *const GLsizei,
    drawcount: GLsizei,
) {
    let first = std::slice::from_raw_parts(first, drawcount as usize);
    let count = std::slice::from_raw_parts(count, drawcount as usize);
    record(format!("glMultiDrawArrays({:#x}, {:?}, {:?})", mode, first, count));
}

unsafe extern "system" fn multi_draw_elements(
    mode: GLenum,
    count: *const GLsizei,
    type_: GLenum,
    indices: *const *const c_void,
    drawcount: GLsizei,
) {
    let counts = std::slice::from_raw_parts(count, drawcount as usize);
    let mut draws = Vec::new();
    for (i, &n) in counts.iter().enumerate() {
        let ptr = *indices.add(i) as *const u16;
        draws.push(std::slice::from_raw_parts(ptr, n as usize).to_vec());
    }
    record(format!("glMultiDrawElements({:#x}, {:#x}, {:?})", mode, type_, draws));
}

unsafe extern "system" fn object_label(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar) {
    let bytes = std::slice::from_raw_parts(label as *const u8, length as usize);
    record(format!(
        "glObjectLabel({:#x}, {}, {:?})",
        identifier,
        name,
        String::from_utf8_lossy(bytes)
    ));
}

/// Fills the whole RGBA8 rectangle, as a driver writing `width * height` pixels does
#[allow(clippy::too_many_arguments)]
unsafe extern "system" fn read_pixels(
    x: GLint,
    y: GLint,
    width: GLsizei,
    height: GLsizei,
    format: GLenum,
    type_: GLenum,
    pixels: *mut c_void,
) {
    record(format!(
        "glReadPixels({}, {}, {}, {}, {:#x}, {:#x})",
        x, y, width, height, format, type_
    ));
    std::ptr::write_bytes(pixels as *mut u8, 0xAB, (width * height * 4) as usize);
}

#[allow(clippy::too_many_arguments)]
unsafe extern "system" fn tex_image_2d(
    target: GLenum,
    level: GLint,
    internalformat: GLint,
    width: GLsizei,
    height: GLsizei,
    _border: GLint,
    format: GLenum,
    type_: GLenum,
    pixels: *const c_void,
) {
    record(format!(
        "glTexImage2D({:#x}, {}, {:#x}, {}, {}, {:#x}, {:#x}, {})",
        target,
        level,
        internalformat,
        width,
        height,
        format,
        type_,
        if pixels.is_null() { "null" } else { "data" }
    ));
}

unsafe extern "system" fn clear_buffer_fv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat) {
    let n = if buffer == consts::GL_COLOR { 4 } else { 1 };
    let value = std::slice::from_raw_parts(value, n);
    record(format!("glClearBufferfv({:#x}, {}, {:?})", buffer, drawbuffer, value));
}

unsafe extern "system" fn tex_parameter_fv(target: GLenum, pname: GLenum, params: *const GLfloat) {
    let n = if pname == consts::GL_TEXTURE_BORDER_COLOR { 4 } else { 1 };
    let params = std::slice::from_raw_parts(params, n);
    record(format!("glTexParameterfv({:#x}, {:#x}, {:?})", target, pname, params));
}

unsafe extern "system" fn get_texture_handle(texture: GLuint) -> GLuint64 {
    record(format!("glGetTextureHandleARB({})", texture));
    0xABCD_0000 + texture as GLuint64
}

/// Every mock this driver implements, keyed by native name
pub fn entries() -> Vec<(&'static str, *const c_void)> {
    vec![
        ("glGetError", get_error as *const c_void),
        ("glClear", clear as *const c_void),
        ("glClearColor", clear_color as *const c_void),
        ("glEnable", enable as *const c_void),
        ("glDepthMask", depth_mask as *const c_void),
        ("glCreateShader", create_shader as *const c_void),
        ("glBindBuffer", bind_buffer as *const c_void),
        ("glGenTextures", gen_names as *const c_void),
        ("glGenBuffers", gen_names as *const c_void),
        ("glGenFramebuffers", gen_names as *const c_void),
        ("glGenVertexArrays", gen_names as *const c_void),
        ("glDeleteTextures", delete_names as *const c_void),
        ("glDeleteBuffers", delete_names as *const c_void),
        ("glDeleteFramebuffers", delete_names as *const c_void),
        ("glDeleteVertexArrays", delete_names as *const c_void),
        ("glGetIntegerv", get_integerv as *const c_void),
        ("glGetString", get_string as *const c_void),
        ("glGetStringi", get_string_i as *const c_void),
        ("glShaderSource", shader_source as *const c_void),
        ("glGetProgramiv", get_program_iv as *const c_void),
        ("glBufferData", buffer_data as *const c_void),
        ("glMultiDrawArrays", multi_draw_arrays as *const c_void),
        ("glMultiDrawElements", multi_draw_elements as *const c_void),
        ("glObjectLabel", object_label as *const c_void),
        ("glReadPixels", read_pixels as *const c_void),
        ("glTexImage2D", tex_image_2d as *const c_void),
        ("glClearBufferfv", clear_buffer_fv as *const c_void),
        ("glTexParameterfv", tex_parameter_fv as *const c_void),
        ("glGetTextureHandleARB", get_texture_handle as *const c_void),
    ]
}

pub fn resolver() -> MapResolver {
    let mut map = MapResolver::new();
    for (name, address) in entries() {
        map.insert(name, address);
    }
    map
}

/// Resolver that serves the mocks minus `missing`
pub fn resolver_without(missing: &[&str]) -> MapResolver {
    let mut map = resolver();
    for name in missing {
        map.remove(name);
    }
    map
}

pub fn gl() -> Gl {
    take_calls();
    Gl::import(&resolver())
}

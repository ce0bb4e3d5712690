//! Safe wrappers over pointer-taking entry points
//!
//! Each wrapper validates and marshals through the adapters, then goes
//! through the generated raw method so slot lookup and error checking stay
//! in one place.

use super::layout::{self, indexed_state_len, state_len, PixelStore, Transfer};
use super::Gl;
use crate::catalog::EntryId;
use crate::consts;
use crate::errors::{GlError, GlResult};
use crate::marshal::{
    decode_nul_terminated, ensure_min_len, ensure_same_len, FixedOut, Out, OutArray, PointerArray, SeqPtr,
    SeqPtrMut, TextArray, TextOut, Utf8Buffer,
};
use crate::types::*;
use core::ffi::c_void;
use core::mem;

/// Element types accepted as client-side index arrays
pub trait IndexType: Copy {
    const GL_TYPE: GLenum;
}

impl IndexType for u8 {
    const GL_TYPE: GLenum = consts::GL_UNSIGNED_BYTE;
}

impl IndexType for u16 {
    const GL_TYPE: GLenum = consts::GL_UNSIGNED_SHORT;
}

impl IndexType for u32 {
    const GL_TYPE: GLenum = consts::GL_UNSIGNED_INT;
}

/// Byte length of a slice as `GLsizeiptr`
fn byte_len<T>(entry: EntryId, data: &[T]) -> GlResult<GLsizeiptr> {
    GLsizeiptr::try_from(mem::size_of_val(data))
        .map_err(|_| GlError::invalid(entry.name(), "data exceeds GLsizeiptr"))
}

/// Split `values` into whole `width`-sized elements
fn element_count(entry: EntryId, values: &[GLfloat], width: usize) -> GlResult<GLsizei> {
    if values.is_empty() || values.len() % width != 0 {
        return Err(GlError::invalid(
            entry.name(),
            format!("expected a non-empty multiple of {} values, got {}", width, values.len()),
        ));
    }
    crate::marshal::checked_count(entry.name(), values.len() / width)
}

/// Offset into the bound buffer, passed where the native API takes a pointer
#[inline]
fn buffer_offset(offset: usize) -> *const c_void {
    offset as *const c_void
}

macro_rules! object_wrappers {
    ($(
        $gen_many:ident / $delete_many:ident, $gen_one:ident / $delete_one:ident => $gen_id:ident / $delete_id:ident;
    )*) => {
        impl Gl {
            $(
                #[doc = concat!("Fills `ids` through `", stringify!($gen_id), "`.")]
                pub fn $gen_many(&self, ids: &mut [GLuint]) -> GlResult<()> {
                    let mut seq = self.marshal(SeqPtrMut::new(EntryId::$gen_id.name(), ids))?;
                    unsafe { self.raw().$gen_many(seq.count(), seq.as_mut_ptr()) }
                }

                #[doc = concat!("Releases `ids` through `", stringify!($delete_id), "`.")]
                pub fn $delete_many(&self, ids: &[GLuint]) -> GlResult<()> {
                    let seq = self.marshal(SeqPtr::new(EntryId::$delete_id.name(), ids))?;
                    unsafe { self.raw().$delete_many(seq.count(), seq.as_ptr()) }
                }

                pub fn $gen_one(&self) -> GlResult<GLuint> {
                    let mut id = Out::<GLuint>::new();
                    unsafe { self.raw().$gen_many(1, id.as_mut_ptr())? };
                    Ok(id.into_inner())
                }

                pub fn $delete_one(&self, id: GLuint) -> GlResult<()> {
                    unsafe { self.raw().$delete_many(1, &id) }
                }
            )*
        }
    };
}

object_wrappers! {
    gen_textures / delete_textures, gen_texture / delete_texture => glGenTextures / glDeleteTextures;
    gen_buffers / delete_buffers, gen_buffer / delete_buffer => glGenBuffers / glDeleteBuffers;
    gen_framebuffers / delete_framebuffers, gen_framebuffer / delete_framebuffer => glGenFramebuffers / glDeleteFramebuffers;
    gen_renderbuffers / delete_renderbuffers, gen_renderbuffer / delete_renderbuffer => glGenRenderbuffers / glDeleteRenderbuffers;
    gen_vertex_arrays / delete_vertex_arrays, gen_vertex_array / delete_vertex_array => glGenVertexArrays / glDeleteVertexArrays;
    gen_queries / delete_queries, gen_query / delete_query => glGenQueries / glDeleteQueries;
    gen_samplers / delete_samplers, gen_sampler / delete_sampler => glGenSamplers / glDeleteSamplers;
}

macro_rules! uniform_vec_wrappers {
    ($($name:ident => $sym:ident, $width:expr;)*) => {
        impl Gl {
            $(
                #[doc = concat!("Uploads whole ", stringify!($width), "-component vectors through `", stringify!($sym), "`.")]
                pub fn $name(&self, location: GLint, values: &[GLfloat]) -> GlResult<()> {
                    let count = self.marshal(element_count(EntryId::$sym, values, $width))?;
                    unsafe { self.raw().$name(location, count, values.as_ptr()) }
                }
            )*
        }
    };
}

uniform_vec_wrappers! {
    uniform_1fv => glUniform1fv, 1;
    uniform_2fv => glUniform2fv, 2;
    uniform_3fv => glUniform3fv, 3;
    uniform_4fv => glUniform4fv, 4;
}

macro_rules! uniform_matrix_wrappers {
    ($($name:ident => $sym:ident, $width:expr;)*) => {
        impl Gl {
            $(
                #[doc = concat!("Uploads whole matrices through `", stringify!($sym), "`.")]
                pub fn $name(&self, location: GLint, transpose: bool, values: &[GLfloat]) -> GlResult<()> {
                    let count = self.marshal(element_count(EntryId::$sym, values, $width))?;
                    unsafe { self.raw().$name(location, count, transpose, values.as_ptr()) }
                }
            )*
        }
    };
}

uniform_matrix_wrappers! {
    uniform_matrix_2fv => glUniformMatrix2fv, 4;
    uniform_matrix_3fv => glUniformMatrix3fv, 9;
    uniform_matrix_4fv => glUniformMatrix4fv, 16;
}

impl Gl {
    // State queries
    //
    // The single-value getters accept only `pname`s known to write one value;
    // anything larger goes through `get_integers`/`get_floats`, which size
    // their buffer from the same table.

    fn single_state(&self, entry: EntryId, pname: GLenum) -> GlResult<()> {
        self.marshal(layout::expect_single(entry.name(), pname, state_len(pname)))
    }

    pub fn get_integer(&self, pname: GLenum) -> GlResult<GLint> {
        self.single_state(EntryId::glGetIntegerv, pname)?;
        let mut out = Out::new();
        unsafe { self.raw().get_integerv(pname, out.as_mut_ptr())? };
        Ok(out.into_inner())
    }

    /// Every value of an array-valued state such as `GL_VIEWPORT`
    pub fn get_integers(&self, pname: GLenum) -> GlResult<Vec<GLint>> {
        let entry = EntryId::glGetIntegerv.name();
        let len = if pname == consts::GL_COMPRESSED_TEXTURE_FORMATS {
            let count = self.get_integer(consts::GL_NUM_COMPRESSED_TEXTURE_FORMATS)?;
            usize::try_from(count).unwrap_or(0)
        } else {
            self.marshal(layout::known_len(entry, pname, state_len(pname)))?
        };
        if len == 0 {
            return Ok(Vec::new());
        }
        unsafe { self.get_integers_unchecked(pname, len) }
    }

    /// Query `len` values of a state the size table does not know
    ///
    /// # Safety
    /// The driver writes every value `pname` has; `len` must be at least that
    /// many.
    pub unsafe fn get_integers_unchecked(&self, pname: GLenum, len: usize) -> GlResult<Vec<GLint>> {
        let mut out = self.marshal(OutArray::new(EntryId::glGetIntegerv.name(), len))?;
        self.raw().get_integerv(pname, out.as_mut_ptr())?;
        Ok(out.into_inner())
    }

    pub fn get_integer_indexed(&self, target: GLenum, index: GLuint) -> GlResult<GLint> {
        let entry = EntryId::glGetIntegeri_v.name();
        self.marshal(layout::expect_single(entry, target, indexed_state_len(target)))?;
        let mut out = Out::new();
        unsafe { self.raw().get_integer_i_v(target, index, out.as_mut_ptr())? };
        Ok(out.into_inner())
    }

    pub fn get_integer64(&self, pname: GLenum) -> GlResult<GLint64> {
        self.single_state(EntryId::glGetInteger64v, pname)?;
        let mut out = Out::new();
        unsafe { self.raw().get_integer64v(pname, out.as_mut_ptr())? };
        Ok(out.into_inner())
    }

    pub fn get_float(&self, pname: GLenum) -> GlResult<GLfloat> {
        self.single_state(EntryId::glGetFloatv, pname)?;
        let mut out = Out::new();
        unsafe { self.raw().get_floatv(pname, out.as_mut_ptr())? };
        Ok(out.into_inner())
    }

    /// Every value of an array-valued state such as `GL_COLOR_CLEAR_VALUE`
    pub fn get_floats(&self, pname: GLenum) -> GlResult<Vec<GLfloat>> {
        let entry = EntryId::glGetFloatv.name();
        let len = self.marshal(layout::known_len(entry, pname, state_len(pname)))?;
        let mut out = self.marshal(OutArray::new(entry, len))?;
        unsafe { self.raw().get_floatv(pname, out.as_mut_ptr())? };
        Ok(out.into_inner())
    }

    pub fn get_double(&self, pname: GLenum) -> GlResult<GLdouble> {
        self.single_state(EntryId::glGetDoublev, pname)?;
        let mut out = Out::new();
        unsafe { self.raw().get_doublev(pname, out.as_mut_ptr())? };
        Ok(out.into_inner())
    }

    pub fn get_boolean(&self, pname: GLenum) -> GlResult<bool> {
        self.single_state(EntryId::glGetBooleanv, pname)?;
        let mut out = Out::<GLboolean>::new();
        unsafe { self.raw().get_booleanv(pname, out.as_mut_ptr())? };
        Ok(out.into_inner() != GL_FALSE)
    }

    /// `x, y, width, height` of the current viewport
    pub fn get_viewport(&self) -> GlResult<[GLint; 4]> {
        let mut out = FixedOut::<GLint, 4>::new();
        unsafe { self.raw().get_integerv(consts::GL_VIEWPORT, out.as_mut_ptr())? };
        Ok(out.into_inner())
    }

    /// `GL_VENDOR`, `GL_RENDERER`, `GL_VERSION`, ...; `None` when the driver returns null
    pub fn get_string(&self, name: GLenum) -> GlResult<Option<String>> {
        let ptr = unsafe { self.raw().get_string(name)? };
        Ok(unsafe { decode_nul_terminated(ptr) })
    }

    pub fn get_string_indexed(&self, name: GLenum, index: GLuint) -> GlResult<Option<String>> {
        let ptr = unsafe { self.raw().get_string_i(name, index)? };
        Ok(unsafe { decode_nul_terminated(ptr) })
    }

    /// Extension names reported through `glGetStringi`
    pub fn extensions(&self) -> GlResult<Vec<String>> {
        let count = self.get_integer(consts::GL_NUM_EXTENSIONS)?;
        let count = GLuint::try_from(count).unwrap_or(0);
        let mut names = Vec::with_capacity(count as usize);
        for index in 0..count {
            if let Some(name) = self.get_string_indexed(consts::GL_EXTENSIONS, index)? {
                names.push(name);
            }
        }
        Ok(names)
    }

    // Shaders and programs

    pub fn shader_source(&self, shader: GLuint, sources: &[&str]) -> GlResult<()> {
        let sources = self.marshal(TextArray::new(EntryId::glShaderSource.name(), sources))?;
        unsafe {
            self.raw()
                .shader_source(shader, sources.count(), sources.as_ptr(), sources.lengths_ptr())
        }
    }

    pub fn get_shader(&self, shader: GLuint, pname: GLenum) -> GlResult<GLint> {
        let mut out = Out::new();
        unsafe { self.raw().get_shader_iv(shader, pname, out.as_mut_ptr())? };
        Ok(out.into_inner())
    }

    /// `GL_COMPUTE_WORK_GROUP_SIZE` writes three values; see `get_program_work_group_size`
    pub fn get_program(&self, program: GLuint, pname: GLenum) -> GlResult<GLint> {
        if pname == consts::GL_COMPUTE_WORK_GROUP_SIZE {
            return self.marshal(Err(GlError::invalid(
                EntryId::glGetProgramiv.name(),
                "GL_COMPUTE_WORK_GROUP_SIZE writes 3 values",
            )));
        }
        let mut out = Out::new();
        unsafe { self.raw().get_program_iv(program, pname, out.as_mut_ptr())? };
        Ok(out.into_inner())
    }

    /// Local work group size of a linked compute program
    pub fn get_program_work_group_size(&self, program: GLuint) -> GlResult<[GLint; 3]> {
        let mut out = FixedOut::<GLint, 3>::new();
        unsafe {
            self.raw()
                .get_program_iv(program, consts::GL_COMPUTE_WORK_GROUP_SIZE, out.as_mut_ptr())?
        };
        Ok(out.into_inner())
    }

    pub fn get_shader_info_log(&self, shader: GLuint) -> GlResult<String> {
        let len = self.get_shader(shader, consts::GL_INFO_LOG_LENGTH)?;
        if len <= 0 {
            return Ok(String::new());
        }
        let mut log = self.marshal(TextOut::with_capacity(
            EntryId::glGetShaderInfoLog.name(),
            len as usize,
        ))?;
        unsafe {
            self.raw()
                .get_shader_info_log(shader, log.capacity(), log.length_ptr(), log.as_mut_ptr())?
        };
        Ok(log.into_string())
    }

    pub fn get_program_info_log(&self, program: GLuint) -> GlResult<String> {
        let len = self.get_program(program, consts::GL_INFO_LOG_LENGTH)?;
        if len <= 0 {
            return Ok(String::new());
        }
        let mut log = self.marshal(TextOut::with_capacity(
            EntryId::glGetProgramInfoLog.name(),
            len as usize,
        ))?;
        unsafe {
            self.raw()
                .get_program_info_log(program, log.capacity(), log.length_ptr(), log.as_mut_ptr())?
        };
        Ok(log.into_string())
    }

    /// Name, array size and type of an active uniform
    pub fn get_active_uniform(&self, program: GLuint, index: GLuint) -> GlResult<(String, GLint, GLenum)> {
        let max_len = self.get_program(program, consts::GL_ACTIVE_UNIFORM_MAX_LENGTH)?.max(1);
        let mut name = self.marshal(TextOut::with_capacity(
            EntryId::glGetActiveUniform.name(),
            max_len as usize,
        ))?;
        let mut size = Out::<GLint>::new();
        let mut kind = Out::<GLenum>::new();
        unsafe {
            self.raw().get_active_uniform(
                program,
                index,
                name.capacity(),
                name.length_ptr(),
                size.as_mut_ptr(),
                kind.as_mut_ptr(),
                name.as_mut_ptr(),
            )?
        };
        Ok((name.into_string(), size.into_inner(), kind.into_inner()))
    }

    pub fn get_uniform_location(&self, program: GLuint, name: &str) -> GlResult<GLint> {
        let name = self.marshal(Utf8Buffer::new(EntryId::glGetUniformLocation.name(), name))?;
        unsafe { self.raw().get_uniform_location(program, name.as_ptr()) }
    }

    pub fn get_attrib_location(&self, program: GLuint, name: &str) -> GlResult<GLint> {
        let name = self.marshal(Utf8Buffer::new(EntryId::glGetAttribLocation.name(), name))?;
        unsafe { self.raw().get_attrib_location(program, name.as_ptr()) }
    }

    pub fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str) -> GlResult<()> {
        let name = self.marshal(Utf8Buffer::new(EntryId::glBindAttribLocation.name(), name))?;
        unsafe { self.raw().bind_attrib_location(program, index, name.as_ptr()) }
    }

    pub fn bind_frag_data_location(&self, program: GLuint, color: GLuint, name: &str) -> GlResult<()> {
        let name = self.marshal(Utf8Buffer::new(EntryId::glBindFragDataLocation.name(), name))?;
        unsafe { self.raw().bind_frag_data_location(program, color, name.as_ptr()) }
    }

    pub fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GlResult<GLuint> {
        let name = self.marshal(Utf8Buffer::new(EntryId::glGetUniformBlockIndex.name(), name))?;
        unsafe { self.raw().get_uniform_block_index(program, name.as_ptr()) }
    }

    /// A 4x4 float uniform, column-major
    pub fn get_uniform_matrix4(&self, program: GLuint, location: GLint) -> GlResult<[GLfloat; 16]> {
        let mut out = FixedOut::<GLfloat, 16>::new();
        unsafe { self.raw().get_uniform_fv(program, location, out.as_mut_ptr())? };
        Ok(out.into_inner())
    }

    pub fn transform_feedback_varyings(
        &self,
        program: GLuint,
        varyings: &[&str],
        buffer_mode: GLenum,
    ) -> GlResult<()> {
        let varyings = self.marshal(TextArray::new(
            EntryId::glTransformFeedbackVaryings.name(),
            varyings,
        ))?;
        unsafe {
            self.raw()
                .transform_feedback_varyings(program, varyings.count(), varyings.as_ptr(), buffer_mode)
        }
    }

    // Buffers

    pub fn buffer_data<T: Copy>(&self, target: GLenum, data: &[T], usage: GLenum) -> GlResult<()> {
        let seq = self.marshal(SeqPtr::new(EntryId::glBufferData.name(), data))?;
        let size = self.marshal(byte_len(EntryId::glBufferData, data))?;
        unsafe { self.raw().buffer_data(target, size, seq.as_ptr() as *const c_void, usage) }
    }

    /// Allocate `size` bytes of uninitialized storage
    pub fn buffer_storage_uninit(&self, target: GLenum, size: usize, usage: GLenum) -> GlResult<()> {
        let size = GLsizeiptr::try_from(size)
            .map_err(|_| GlError::invalid(EntryId::glBufferData.name(), "size exceeds GLsizeiptr"));
        let size = self.marshal(size)?;
        unsafe { self.raw().buffer_data(target, size, core::ptr::null(), usage) }
    }

    pub fn buffer_sub_data<T: Copy>(&self, target: GLenum, offset: GLintptr, data: &[T]) -> GlResult<()> {
        let seq = self.marshal(SeqPtr::new(EntryId::glBufferSubData.name(), data))?;
        let size = self.marshal(byte_len(EntryId::glBufferSubData, data))?;
        unsafe {
            self.raw()
                .buffer_sub_data(target, offset, size, seq.as_ptr() as *const c_void)
        }
    }

    pub fn get_buffer_sub_data<T: Copy>(&self, target: GLenum, offset: GLintptr, out: &mut [T]) -> GlResult<()> {
        let size = self.marshal(byte_len(EntryId::glGetBufferSubData, out))?;
        let mut seq = self.marshal(SeqPtrMut::new(EntryId::glGetBufferSubData.name(), out))?;
        unsafe {
            self.raw()
                .get_buffer_sub_data(target, offset, size, seq.as_mut_ptr() as *mut c_void)
        }
    }

    pub fn draw_buffers(&self, buffers: &[GLenum]) -> GlResult<()> {
        let seq = self.marshal(SeqPtr::new(EntryId::glDrawBuffers.name(), buffers))?;
        unsafe { self.raw().draw_buffers(seq.count(), seq.as_ptr()) }
    }

    pub fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]) -> GlResult<()> {
        let seq = self.marshal(SeqPtr::new(EntryId::glInvalidateFramebuffer.name(), attachments))?;
        unsafe { self.raw().invalidate_framebuffer(target, seq.count(), seq.as_ptr()) }
    }

    /// `GL_COLOR` reads four values, `GL_DEPTH` and `GL_STENCIL` one
    pub fn clear_buffer_fv(&self, buffer: GLenum, drawbuffer: GLint, value: &[GLfloat]) -> GlResult<()> {
        let entry = EntryId::glClearBufferfv.name();
        let needed = self.marshal(layout::clear_buffer_len(entry, buffer))?;
        self.marshal(ensure_min_len(entry, needed, value.len()))?;
        let seq = self.marshal(SeqPtr::new(entry, value))?;
        unsafe { self.raw().clear_buffer_fv(buffer, drawbuffer, seq.as_ptr()) }
    }

    // Vertex specification and drawing

    /// Attribute sourced from the bound array buffer at byte `offset`
    ///
    /// # Safety
    /// A buffer must be bound to `GL_ARRAY_BUFFER`. Without one, a
    /// compatibility context treats `offset` as a client address and reads
    /// through it at draw time.
    pub unsafe fn vertex_attrib_pointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        normalized: bool,
        stride: GLsizei,
        offset: usize,
    ) -> GlResult<()> {
        self.raw()
            .vertex_attrib_pointer(index, size, type_, normalized, stride, buffer_offset(offset))
    }

    /// Integer attribute sourced from the bound array buffer at byte `offset`
    ///
    /// # Safety
    /// Same contract as [`Gl::vertex_attrib_pointer`].
    pub unsafe fn vertex_attrib_i_pointer(
        &self,
        index: GLuint,
        size: GLint,
        type_: GLenum,
        stride: GLsizei,
        offset: usize,
    ) -> GlResult<()> {
        self.raw()
            .vertex_attrib_i_pointer(index, size, type_, stride, buffer_offset(offset))
    }

    /// Indices sourced from the bound element buffer at byte `offset`
    ///
    /// # Safety
    /// The bound vertex array must have an element buffer holding `count`
    /// indices of `type_` from `offset`. Without one, `offset` is read as a
    /// client address. Vertex attributes must satisfy
    /// [`Gl::vertex_attrib_pointer`].
    pub unsafe fn draw_elements(&self, mode: GLenum, count: GLsizei, type_: GLenum, offset: usize) -> GlResult<()> {
        self.raw().draw_elements(mode, count, type_, buffer_offset(offset))
    }

    /// # Safety
    /// Same contract as [`Gl::draw_elements`].
    pub unsafe fn draw_elements_instanced(
        &self,
        mode: GLenum,
        count: GLsizei,
        type_: GLenum,
        offset: usize,
        instances: GLsizei,
    ) -> GlResult<()> {
        self.raw()
            .draw_elements_instanced(mode, count, type_, buffer_offset(offset), instances)
    }

    /// One draw per `(first, count)` pair
    pub fn multi_draw_arrays(&self, mode: GLenum, first: &[GLint], count: &[GLsizei]) -> GlResult<()> {
        let entry = EntryId::glMultiDrawArrays.name();
        self.marshal(ensure_same_len(entry, first.len(), count.len()))?;
        let first = self.marshal(SeqPtr::new(entry, first))?;
        let count = self.marshal(SeqPtr::new(entry, count))?;
        unsafe {
            self.raw()
                .multi_draw_arrays(mode, first.as_ptr(), count.as_ptr(), first.count())
        }
    }

    /// One draw per client-side index array
    pub fn multi_draw_elements<T: IndexType>(&self, mode: GLenum, indices: &[&[T]]) -> GlResult<()> {
        let indices = self.marshal(PointerArray::new(EntryId::glMultiDrawElements.name(), indices))?;
        unsafe {
            self.raw().multi_draw_elements(
                mode,
                indices.counts_ptr(),
                T::GL_TYPE,
                indices.as_ptr(),
                indices.count(),
            )
        }
    }

    // Textures and pixels

    /// Pixel-store state a 2D transfer in direction `transfer` honors
    pub fn pixel_store(&self, transfer: Transfer) -> GlResult<PixelStore> {
        let [alignment, row_length, skip_pixels, skip_rows, _, _] = transfer.pnames();
        Ok(PixelStore {
            alignment: self.get_integer(alignment)?,
            row_length: self.get_integer(row_length)?,
            skip_pixels: self.get_integer(skip_pixels)?,
            skip_rows: self.get_integer(skip_rows)?,
            ..PixelStore::default()
        })
    }

    /// Pixel-store state a 3D transfer honors, image spacing included
    pub fn volume_pixel_store(&self, transfer: Transfer) -> GlResult<PixelStore> {
        let [.., image_height, skip_images] = transfer.pnames();
        Ok(PixelStore {
            image_height: self.get_integer(image_height)?,
            skip_images: self.get_integer(skip_images)?,
            ..self.pixel_store(transfer)?
        })
    }

    /// Reject a client buffer shorter than the image the driver will walk
    #[allow(clippy::too_many_arguments)]
    fn check_image(
        &self,
        entry: EntryId,
        store: PixelStore,
        (width, height, depth): (GLsizei, GLsizei, GLsizei),
        format: GLenum,
        type_: GLenum,
        got: usize,
    ) -> GlResult<()> {
        let needed = self.marshal(store.image_len(entry.name(), width, height, depth, format, type_))?;
        self.marshal(ensure_min_len(entry.name(), needed, got))
    }

    /// `pixels: None` allocates storage without uploading
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: Option<&[u8]>,
    ) -> GlResult<()> {
        let entry = EntryId::glTexImage2D;
        let data = match pixels {
            Some(pixels) => {
                let store = self.pixel_store(Transfer::Unpack)?;
                self.check_image(entry, store, (width, height, 1), format, type_, pixels.len())?;
                self.marshal(SeqPtr::new(entry.name(), pixels))?.as_ptr() as *const c_void
            }
            None => core::ptr::null(),
        };
        unsafe {
            self.raw()
                .tex_image_2d(target, level, internalformat, width, height, 0, format, type_, data)
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        pixels: &[u8],
    ) -> GlResult<()> {
        let entry = EntryId::glTexSubImage2D;
        let store = self.pixel_store(Transfer::Unpack)?;
        self.check_image(entry, store, (width, height, 1), format, type_, pixels.len())?;
        let seq = self.marshal(SeqPtr::new(entry.name(), pixels))?;
        unsafe {
            self.raw().tex_sub_image_2d(
                target,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                type_,
                seq.as_ptr() as *const c_void,
            )
        }
    }

    /// `pixels: None` allocates storage without uploading
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_3d(
        &self,
        target: GLenum,
        level: GLint,
        internalformat: GLint,
        (width, height, depth): (GLsizei, GLsizei, GLsizei),
        format: GLenum,
        type_: GLenum,
        pixels: Option<&[u8]>,
    ) -> GlResult<()> {
        let entry = EntryId::glTexImage3D;
        let data = match pixels {
            Some(pixels) => {
                let store = self.volume_pixel_store(Transfer::Unpack)?;
                self.check_image(entry, store, (width, height, depth), format, type_, pixels.len())?;
                self.marshal(SeqPtr::new(entry.name(), pixels))?.as_ptr() as *const c_void
            }
            None => core::ptr::null(),
        };
        unsafe {
            self.raw().tex_image_3d(
                target,
                level,
                internalformat,
                width,
                height,
                depth,
                0,
                format,
                type_,
                data,
            )
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_3d(
        &self,
        target: GLenum,
        level: GLint,
        (xoffset, yoffset, zoffset): (GLint, GLint, GLint),
        (width, height, depth): (GLsizei, GLsizei, GLsizei),
        format: GLenum,
        type_: GLenum,
        pixels: &[u8],
    ) -> GlResult<()> {
        let entry = EntryId::glTexSubImage3D;
        let store = self.volume_pixel_store(Transfer::Unpack)?;
        self.check_image(entry, store, (width, height, depth), format, type_, pixels.len())?;
        let seq = self.marshal(SeqPtr::new(entry.name(), pixels))?;
        unsafe {
            self.raw().tex_sub_image_3d(
                target,
                level,
                xoffset,
                yoffset,
                zoffset,
                width,
                height,
                depth,
                format,
                type_,
                seq.as_ptr() as *const c_void,
            )
        }
    }

    /// `out` must hold the whole image under the current pack state
    #[allow(clippy::too_many_arguments)]
    pub fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        out: &mut [u8],
    ) -> GlResult<()> {
        let entry = EntryId::glReadPixels;
        let store = self.pixel_store(Transfer::Pack)?;
        self.check_image(entry, store, (width, height, 1), format, type_, out.len())?;
        let mut seq = self.marshal(SeqPtrMut::new(entry.name(), out))?;
        unsafe {
            self.raw()
                .read_pixels(x, y, width, height, format, type_, seq.as_mut_ptr() as *mut c_void)
        }
    }

    /// `GL_TEXTURE_BORDER_COLOR` and `GL_TEXTURE_SWIZZLE_RGBA` read four values
    pub fn tex_parameter_fv(&self, target: GLenum, pname: GLenum, params: &[GLfloat]) -> GlResult<()> {
        let entry = EntryId::glTexParameterfv.name();
        self.marshal(ensure_min_len(entry, layout::tex_parameter_len(pname), params.len()))?;
        let seq = self.marshal(SeqPtr::new(entry, params))?;
        unsafe { self.raw().tex_parameter_fv(target, pname, seq.as_ptr()) }
    }

    // Debug output

    /// Install `callback` with a null user parameter
    pub fn debug_message_callback(&self, callback: GLDEBUGPROC) -> GlResult<()> {
        unsafe { self.raw().debug_message_callback(callback, core::ptr::null()) }
    }

    pub fn debug_message_insert(
        &self,
        source: GLenum,
        type_: GLenum,
        id: GLuint,
        severity: GLenum,
        message: &str,
    ) -> GlResult<()> {
        let entry = EntryId::glDebugMessageInsert.name();
        let message = self.marshal(Utf8Buffer::new(entry, message))?;
        let length = self.marshal(message.native_len(entry))?;
        unsafe {
            self.raw()
                .debug_message_insert(source, type_, id, severity, length, message.as_ptr())
        }
    }

    pub fn object_label(&self, identifier: GLenum, name: GLuint, label: &str) -> GlResult<()> {
        let entry = EntryId::glObjectLabel.name();
        let label = self.marshal(Utf8Buffer::new(entry, label))?;
        let length = self.marshal(label.native_len(entry))?;
        unsafe { self.raw().object_label(identifier, name, length, label.as_ptr()) }
    }

    pub fn push_debug_group(&self, source: GLenum, id: GLuint, message: &str) -> GlResult<()> {
        let entry = EntryId::glPushDebugGroup.name();
        let message = self.marshal(Utf8Buffer::new(entry, message))?;
        let length = self.marshal(message.native_len(entry))?;
        unsafe { self.raw().push_debug_group(source, id, length, message.as_ptr()) }
    }
}

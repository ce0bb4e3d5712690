//! The command table
//!
//! One row per native entry point:
//!
//! ```text
//! <Requirement> <safe|unsafe> fn <method>(<param>: <type>, ...) [-> <type>] = <symbol>;
//! ```
//!
//! `safe` rows take and return only scalars; `unsafe` rows move raw pointers
//! across the boundary. Rows are fed to a callback macro, so the catalog and
//! the call surface expand from the same tokens. Types are resolved at the
//! expansion site, which must have `crate::types::*` and `c_void` in scope.

macro_rules! with_entry_points {
    ($callback:ident) => {
        $callback! {
            // GL 1.0
            Core(1, 0) safe fn cull_face(mode: GLenum) = glCullFace;
            Core(1, 0) safe fn front_face(mode: GLenum) = glFrontFace;
            Core(1, 0) safe fn hint(target: GLenum, mode: GLenum) = glHint;
            Core(1, 0) safe fn line_width(width: GLfloat) = glLineWidth;
            Core(1, 0) safe fn point_size(size: GLfloat) = glPointSize;
            Core(1, 0) safe fn polygon_mode(face: GLenum, mode: GLenum) = glPolygonMode;
            Core(1, 0) safe fn scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei) = glScissor;
            Core(1, 0) safe fn tex_parameter_f(target: GLenum, pname: GLenum, param: GLfloat) = glTexParameterf;
            Core(1, 0) unsafe fn tex_parameter_fv(target: GLenum, pname: GLenum, params: *const GLfloat) = glTexParameterfv;
            Core(1, 0) safe fn tex_parameter_i(target: GLenum, pname: GLenum, param: GLint) = glTexParameteri;
            Core(1, 0) unsafe fn tex_parameter_iv(target: GLenum, pname: GLenum, params: *const GLint) = glTexParameteriv;
            Core(1, 0) unsafe fn tex_image_1d(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void) = glTexImage1D;
            Core(1, 0) unsafe fn tex_image_2d(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void) = glTexImage2D;
            Core(1, 0) safe fn draw_buffer(buf: GLenum) = glDrawBuffer;
            Core(1, 0) safe fn clear(mask: GLbitfield) = glClear;
            Core(1, 0) safe fn clear_color(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) = glClearColor;
            Core(1, 0) safe fn clear_stencil(s: GLint) = glClearStencil;
            Core(1, 0) safe fn clear_depth(depth: GLdouble) = glClearDepth;
            Core(1, 0) safe fn stencil_mask(mask: GLuint) = glStencilMask;
            Core(1, 0) safe fn color_mask(red: bool, green: bool, blue: bool, alpha: bool) = glColorMask;
            Core(1, 0) safe fn depth_mask(flag: bool) = glDepthMask;
            Core(1, 0) safe fn disable(cap: GLenum) = glDisable;
            Core(1, 0) safe fn enable(cap: GLenum) = glEnable;
            Core(1, 0) safe fn finish() = glFinish;
            Core(1, 0) safe fn flush() = glFlush;
            Core(1, 0) safe fn blend_func(sfactor: GLenum, dfactor: GLenum) = glBlendFunc;
            Core(1, 0) safe fn logic_op(opcode: GLenum) = glLogicOp;
            Core(1, 0) safe fn stencil_func(func: GLenum, ref_: GLint, mask: GLuint) = glStencilFunc;
            Core(1, 0) safe fn stencil_op(fail: GLenum, zfail: GLenum, zpass: GLenum) = glStencilOp;
            Core(1, 0) safe fn depth_func(func: GLenum) = glDepthFunc;
            Core(1, 0) safe fn pixel_store_f(pname: GLenum, param: GLfloat) = glPixelStoref;
            Core(1, 0) safe fn pixel_store_i(pname: GLenum, param: GLint) = glPixelStorei;
            Core(1, 0) safe fn read_buffer(src: GLenum) = glReadBuffer;
            Core(1, 0) unsafe fn read_pixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut c_void) = glReadPixels;
            Core(1, 0) unsafe fn get_booleanv(pname: GLenum, data: *mut GLboolean) = glGetBooleanv;
            Core(1, 0) unsafe fn get_doublev(pname: GLenum, data: *mut GLdouble) = glGetDoublev;
            Core(1, 0) safe fn get_error() -> GLenum = glGetError;
            Core(1, 0) unsafe fn get_floatv(pname: GLenum, data: *mut GLfloat) = glGetFloatv;
            Core(1, 0) unsafe fn get_integerv(pname: GLenum, data: *mut GLint) = glGetIntegerv;
            Core(1, 0) unsafe fn get_string(name: GLenum) -> *const GLubyte = glGetString;
            Core(1, 0) unsafe fn get_tex_image(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void) = glGetTexImage;
            Core(1, 0) unsafe fn get_tex_parameter_fv(target: GLenum, pname: GLenum, params: *mut GLfloat) = glGetTexParameterfv;
            Core(1, 0) unsafe fn get_tex_parameter_iv(target: GLenum, pname: GLenum, params: *mut GLint) = glGetTexParameteriv;
            Core(1, 0) unsafe fn get_tex_level_parameter_iv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint) = glGetTexLevelParameteriv;
            Core(1, 0) safe fn is_enabled(cap: GLenum) -> bool = glIsEnabled;
            Core(1, 0) safe fn depth_range(near: GLdouble, far: GLdouble) = glDepthRange;
            Core(1, 0) safe fn viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) = glViewport;

            // GL 1.1
            Core(1, 1) safe fn draw_arrays(mode: GLenum, first: GLint, count: GLsizei) = glDrawArrays;
            Core(1, 1) unsafe fn draw_elements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void) = glDrawElements;
            Core(1, 1) safe fn polygon_offset(factor: GLfloat, units: GLfloat) = glPolygonOffset;
            Core(1, 1) safe fn copy_tex_image_2d(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint) = glCopyTexImage2D;
            Core(1, 1) safe fn copy_tex_sub_image_2d(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei) = glCopyTexSubImage2D;
            Core(1, 1) unsafe fn tex_sub_image_2d(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) = glTexSubImage2D;
            Core(1, 1) safe fn bind_texture(target: GLenum, texture: GLuint) = glBindTexture;
            Core(1, 1) unsafe fn delete_textures(n: GLsizei, textures: *const GLuint) = glDeleteTextures;
            Core(1, 1) unsafe fn gen_textures(n: GLsizei, textures: *mut GLuint) = glGenTextures;
            Core(1, 1) safe fn is_texture(texture: GLuint) -> bool = glIsTexture;

            // GL 1.2
            Core(1, 2) unsafe fn draw_range_elements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void) = glDrawRangeElements;
            Core(1, 2) unsafe fn tex_image_3d(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void) = glTexImage3D;
            Core(1, 2) unsafe fn tex_sub_image_3d(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) = glTexSubImage3D;
            Core(1, 2) safe fn copy_tex_sub_image_3d(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei) = glCopyTexSubImage3D;

            // GL 1.3
            Core(1, 3) safe fn active_texture(texture: GLenum) = glActiveTexture;
            Core(1, 3) safe fn sample_coverage(value: GLfloat, invert: bool) = glSampleCoverage;
            Core(1, 3) unsafe fn compressed_tex_image_2d(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void) = glCompressedTexImage2D;
            Core(1, 3) unsafe fn compressed_tex_sub_image_2d(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void) = glCompressedTexSubImage2D;
            Core(1, 3) unsafe fn get_compressed_tex_image(target: GLenum, level: GLint, img: *mut c_void) = glGetCompressedTexImage;

            // GL 1.4
            Core(1, 4) safe fn blend_func_separate(sfactor_rgb: GLenum, dfactor_rgb: GLenum, sfactor_alpha: GLenum, dfactor_alpha: GLenum) = glBlendFuncSeparate;
            Core(1, 4) unsafe fn multi_draw_arrays(mode: GLenum, first: *const GLint, count: *const GLsizei, drawcount: GLsizei) = glMultiDrawArrays;
            Core(1, 4) unsafe fn multi_draw_elements(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei) = glMultiDrawElements;
            Core(1, 4) safe fn point_parameter_f(pname: GLenum, param: GLfloat) = glPointParameterf;
            Core(1, 4) safe fn point_parameter_i(pname: GLenum, param: GLint) = glPointParameteri;
            Core(1, 4) safe fn blend_color(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) = glBlendColor;
            Core(1, 4) safe fn blend_equation(mode: GLenum) = glBlendEquation;

            // GL 1.5
            Core(1, 5) unsafe fn gen_queries(n: GLsizei, ids: *mut GLuint) = glGenQueries;
            Core(1, 5) unsafe fn delete_queries(n: GLsizei, ids: *const GLuint) = glDeleteQueries;
            Core(1, 5) safe fn is_query(id: GLuint) -> bool = glIsQuery;
            Core(1, 5) safe fn begin_query(target: GLenum, id: GLuint) = glBeginQuery;
            Core(1, 5) safe fn end_query(target: GLenum) = glEndQuery;
            Core(1, 5) unsafe fn get_query_iv(target: GLenum, pname: GLenum, params: *mut GLint) = glGetQueryiv;
            Core(1, 5) unsafe fn get_query_object_iv(id: GLuint, pname: GLenum, params: *mut GLint) = glGetQueryObjectiv;
            Core(1, 5) unsafe fn get_query_object_uiv(id: GLuint, pname: GLenum, params: *mut GLuint) = glGetQueryObjectuiv;
            Core(1, 5) safe fn bind_buffer(target: GLenum, buffer: GLuint) = glBindBuffer;
            Core(1, 5) unsafe fn delete_buffers(n: GLsizei, buffers: *const GLuint) = glDeleteBuffers;
            Core(1, 5) unsafe fn gen_buffers(n: GLsizei, buffers: *mut GLuint) = glGenBuffers;
            Core(1, 5) safe fn is_buffer(buffer: GLuint) -> bool = glIsBuffer;
            Core(1, 5) unsafe fn buffer_data(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) = glBufferData;
            Core(1, 5) unsafe fn buffer_sub_data(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void) = glBufferSubData;
            Core(1, 5) unsafe fn get_buffer_sub_data(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut c_void) = glGetBufferSubData;
            Core(1, 5) unsafe fn map_buffer(target: GLenum, access: GLenum) -> *mut c_void = glMapBuffer;
            Core(1, 5) safe fn unmap_buffer(target: GLenum) -> bool = glUnmapBuffer;
            Core(1, 5) unsafe fn get_buffer_parameter_iv(target: GLenum, pname: GLenum, params: *mut GLint) = glGetBufferParameteriv;

            // GL 2.0
            Core(2, 0) safe fn blend_equation_separate(mode_rgb: GLenum, mode_alpha: GLenum) = glBlendEquationSeparate;
            Core(2, 0) unsafe fn draw_buffers(n: GLsizei, bufs: *const GLenum) = glDrawBuffers;
            Core(2, 0) safe fn stencil_op_separate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) = glStencilOpSeparate;
            Core(2, 0) safe fn stencil_func_separate(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint) = glStencilFuncSeparate;
            Core(2, 0) safe fn stencil_mask_separate(face: GLenum, mask: GLuint) = glStencilMaskSeparate;
            Core(2, 0) safe fn attach_shader(program: GLuint, shader: GLuint) = glAttachShader;
            Core(2, 0) unsafe fn bind_attrib_location(program: GLuint, index: GLuint, name: *const GLchar) = glBindAttribLocation;
            Core(2, 0) safe fn compile_shader(shader: GLuint) = glCompileShader;
            Core(2, 0) safe fn create_program() -> GLuint = glCreateProgram;
            Core(2, 0) safe fn create_shader(type_: GLenum) -> GLuint = glCreateShader;
            Core(2, 0) safe fn delete_program(program: GLuint) = glDeleteProgram;
            Core(2, 0) safe fn delete_shader(shader: GLuint) = glDeleteShader;
            Core(2, 0) safe fn detach_shader(program: GLuint, shader: GLuint) = glDetachShader;
            Core(2, 0) safe fn disable_vertex_attrib_array(index: GLuint) = glDisableVertexAttribArray;
            Core(2, 0) safe fn enable_vertex_attrib_array(index: GLuint) = glEnableVertexAttribArray;
            Core(2, 0) unsafe fn get_active_attrib(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar) = glGetActiveAttrib;
            Core(2, 0) unsafe fn get_active_uniform(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar) = glGetActiveUniform;
            Core(2, 0) unsafe fn get_attached_shaders(program: GLuint, max_count: GLsizei, count: *mut GLsizei, shaders: *mut GLuint) = glGetAttachedShaders;
            Core(2, 0) unsafe fn get_attrib_location(program: GLuint, name: *const GLchar) -> GLint = glGetAttribLocation;
            Core(2, 0) unsafe fn get_program_iv(program: GLuint, pname: GLenum, params: *mut GLint) = glGetProgramiv;
            Core(2, 0) unsafe fn get_program_info_log(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar) = glGetProgramInfoLog;
            Core(2, 0) unsafe fn get_shader_iv(shader: GLuint, pname: GLenum, params: *mut GLint) = glGetShaderiv;
            Core(2, 0) unsafe fn get_shader_info_log(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar) = glGetShaderInfoLog;
            Core(2, 0) unsafe fn get_shader_source(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, source: *mut GLchar) = glGetShaderSource;
            Core(2, 0) unsafe fn get_uniform_location(program: GLuint, name: *const GLchar) -> GLint = glGetUniformLocation;
            Core(2, 0) unsafe fn get_uniform_fv(program: GLuint, location: GLint, params: *mut GLfloat) = glGetUniformfv;
            Core(2, 0) unsafe fn get_uniform_iv(program: GLuint, location: GLint, params: *mut GLint) = glGetUniformiv;
            Core(2, 0) unsafe fn get_vertex_attrib_iv(index: GLuint, pname: GLenum, params: *mut GLint) = glGetVertexAttribiv;
            Core(2, 0) unsafe fn get_vertex_attrib_fv(index: GLuint, pname: GLenum, params: *mut GLfloat) = glGetVertexAttribfv;
            Core(2, 0) safe fn is_program(program: GLuint) -> bool = glIsProgram;
            Core(2, 0) safe fn is_shader(shader: GLuint) -> bool = glIsShader;
            Core(2, 0) safe fn link_program(program: GLuint) = glLinkProgram;
            Core(2, 0) unsafe fn shader_source(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint) = glShaderSource;
            Core(2, 0) safe fn use_program(program: GLuint) = glUseProgram;
            Core(2, 0) safe fn uniform_1f(location: GLint, v0: GLfloat) = glUniform1f;
            Core(2, 0) safe fn uniform_2f(location: GLint, v0: GLfloat, v1: GLfloat) = glUniform2f;
            Core(2, 0) safe fn uniform_3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) = glUniform3f;
            Core(2, 0) safe fn uniform_4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) = glUniform4f;
            Core(2, 0) safe fn uniform_1i(location: GLint, v0: GLint) = glUniform1i;
            Core(2, 0) safe fn uniform_2i(location: GLint, v0: GLint, v1: GLint) = glUniform2i;
            Core(2, 0) safe fn uniform_3i(location: GLint, v0: GLint, v1: GLint, v2: GLint) = glUniform3i;
            Core(2, 0) safe fn uniform_4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint) = glUniform4i;
            Core(2, 0) unsafe fn uniform_1fv(location: GLint, count: GLsizei, value: *const GLfloat) = glUniform1fv;
            Core(2, 0) unsafe fn uniform_2fv(location: GLint, count: GLsizei, value: *const GLfloat) = glUniform2fv;
            Core(2, 0) unsafe fn uniform_3fv(location: GLint, count: GLsizei, value: *const GLfloat) = glUniform3fv;
            Core(2, 0) unsafe fn uniform_4fv(location: GLint, count: GLsizei, value: *const GLfloat) = glUniform4fv;
            Core(2, 0) unsafe fn uniform_1iv(location: GLint, count: GLsizei, value: *const GLint) = glUniform1iv;
            Core(2, 0) unsafe fn uniform_2iv(location: GLint, count: GLsizei, value: *const GLint) = glUniform2iv;
            Core(2, 0) unsafe fn uniform_3iv(location: GLint, count: GLsizei, value: *const GLint) = glUniform3iv;
            Core(2, 0) unsafe fn uniform_4iv(location: GLint, count: GLsizei, value: *const GLint) = glUniform4iv;
            Core(2, 0) unsafe fn uniform_matrix_2fv(location: GLint, count: GLsizei, transpose: bool, value: *const GLfloat) = glUniformMatrix2fv;
            Core(2, 0) unsafe fn uniform_matrix_3fv(location: GLint, count: GLsizei, transpose: bool, value: *const GLfloat) = glUniformMatrix3fv;
            Core(2, 0) unsafe fn uniform_matrix_4fv(location: GLint, count: GLsizei, transpose: bool, value: *const GLfloat) = glUniformMatrix4fv;
            Core(2, 0) safe fn validate_program(program: GLuint) = glValidateProgram;
            Core(2, 0) safe fn vertex_attrib_1f(index: GLuint, x: GLfloat) = glVertexAttrib1f;
            Core(2, 0) safe fn vertex_attrib_2f(index: GLuint, x: GLfloat, y: GLfloat) = glVertexAttrib2f;
            Core(2, 0) safe fn vertex_attrib_3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) = glVertexAttrib3f;
            Core(2, 0) safe fn vertex_attrib_4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) = glVertexAttrib4f;
            Core(2, 0) unsafe fn vertex_attrib_4fv(index: GLuint, v: *const GLfloat) = glVertexAttrib4fv;
            Core(2, 0) unsafe fn vertex_attrib_pointer(index: GLuint, size: GLint, type_: GLenum, normalized: bool, stride: GLsizei, pointer: *const c_void) = glVertexAttribPointer;

            // GL 2.1
            Core(2, 1) unsafe fn uniform_matrix_2x3fv(location: GLint, count: GLsizei, transpose: bool, value: *const GLfloat) = glUniformMatrix2x3fv;
            Core(2, 1) unsafe fn uniform_matrix_3x2fv(location: GLint, count: GLsizei, transpose: bool, value: *const GLfloat) = glUniformMatrix3x2fv;
            Core(2, 1) unsafe fn uniform_matrix_2x4fv(location: GLint, count: GLsizei, transpose: bool, value: *const GLfloat) = glUniformMatrix2x4fv;
            Core(2, 1) unsafe fn uniform_matrix_4x2fv(location: GLint, count: GLsizei, transpose: bool, value: *const GLfloat) = glUniformMatrix4x2fv;
            Core(2, 1) unsafe fn uniform_matrix_3x4fv(location: GLint, count: GLsizei, transpose: bool, value: *const GLfloat) = glUniformMatrix3x4fv;
            Core(2, 1) unsafe fn uniform_matrix_4x3fv(location: GLint, count: GLsizei, transpose: bool, value: *const GLfloat) = glUniformMatrix4x3fv;

            // GL 3.0
            Core(3, 0) safe fn color_mask_i(index: GLuint, red: bool, green: bool, blue: bool, alpha: bool) = glColorMaski;
            Core(3, 0) unsafe fn get_boolean_i_v(target: GLenum, index: GLuint, data: *mut GLboolean) = glGetBooleani_v;
            Core(3, 0) unsafe fn get_integer_i_v(target: GLenum, index: GLuint, data: *mut GLint) = glGetIntegeri_v;
            Core(3, 0) safe fn enable_i(target: GLenum, index: GLuint) = glEnablei;
            Core(3, 0) safe fn disable_i(target: GLenum, index: GLuint) = glDisablei;
            Core(3, 0) safe fn is_enabled_i(target: GLenum, index: GLuint) -> bool = glIsEnabledi;
            Core(3, 0) safe fn begin_transform_feedback(primitive_mode: GLenum) = glBeginTransformFeedback;
            Core(3, 0) safe fn end_transform_feedback() = glEndTransformFeedback;
            Core(3, 0) safe fn bind_buffer_range(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr) = glBindBufferRange;
            Core(3, 0) safe fn bind_buffer_base(target: GLenum, index: GLuint, buffer: GLuint) = glBindBufferBase;
            Core(3, 0) unsafe fn transform_feedback_varyings(program: GLuint, count: GLsizei, varyings: *const *const GLchar, buffer_mode: GLenum) = glTransformFeedbackVaryings;
            Core(3, 0) safe fn clamp_color(target: GLenum, clamp: GLenum) = glClampColor;
            Core(3, 0) safe fn begin_conditional_render(id: GLuint, mode: GLenum) = glBeginConditionalRender;
            Core(3, 0) safe fn end_conditional_render() = glEndConditionalRender;
            Core(3, 0) unsafe fn vertex_attrib_i_pointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) = glVertexAttribIPointer;
            Core(3, 0) unsafe fn get_uniform_uiv(program: GLuint, location: GLint, params: *mut GLuint) = glGetUniformuiv;
            Core(3, 0) unsafe fn bind_frag_data_location(program: GLuint, color: GLuint, name: *const GLchar) = glBindFragDataLocation;
            Core(3, 0) unsafe fn get_frag_data_location(program: GLuint, name: *const GLchar) -> GLint = glGetFragDataLocation;
            Core(3, 0) safe fn uniform_1ui(location: GLint, v0: GLuint) = glUniform1ui;
            Core(3, 0) safe fn uniform_2ui(location: GLint, v0: GLuint, v1: GLuint) = glUniform2ui;
            Core(3, 0) safe fn uniform_3ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint) = glUniform3ui;
            Core(3, 0) safe fn uniform_4ui(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint) = glUniform4ui;
            Core(3, 0) unsafe fn clear_buffer_iv(buffer: GLenum, drawbuffer: GLint, value: *const GLint) = glClearBufferiv;
            Core(3, 0) unsafe fn clear_buffer_uiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint) = glClearBufferuiv;
            Core(3, 0) unsafe fn clear_buffer_fv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat) = glClearBufferfv;
            Core(3, 0) safe fn clear_buffer_fi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint) = glClearBufferfi;
            Core(3, 0) unsafe fn get_string_i(name: GLenum, index: GLuint) -> *const GLubyte = glGetStringi;
            Core(3, 0) safe fn is_renderbuffer(renderbuffer: GLuint) -> bool = glIsRenderbuffer;
            Core(3, 0) safe fn bind_renderbuffer(target: GLenum, renderbuffer: GLuint) = glBindRenderbuffer;
            Core(3, 0) unsafe fn delete_renderbuffers(n: GLsizei, renderbuffers: *const GLuint) = glDeleteRenderbuffers;
            Core(3, 0) unsafe fn gen_renderbuffers(n: GLsizei, renderbuffers: *mut GLuint) = glGenRenderbuffers;
            Core(3, 0) safe fn renderbuffer_storage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei) = glRenderbufferStorage;
            Core(3, 0) unsafe fn get_renderbuffer_parameter_iv(target: GLenum, pname: GLenum, params: *mut GLint) = glGetRenderbufferParameteriv;
            Core(3, 0) safe fn is_framebuffer(framebuffer: GLuint) -> bool = glIsFramebuffer;
            Core(3, 0) safe fn bind_framebuffer(target: GLenum, framebuffer: GLuint) = glBindFramebuffer;
            Core(3, 0) unsafe fn delete_framebuffers(n: GLsizei, framebuffers: *const GLuint) = glDeleteFramebuffers;
            Core(3, 0) unsafe fn gen_framebuffers(n: GLsizei, framebuffers: *mut GLuint) = glGenFramebuffers;
            Core(3, 0) safe fn check_framebuffer_status(target: GLenum) -> GLenum = glCheckFramebufferStatus;
            Core(3, 0) safe fn framebuffer_texture_2d(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint) = glFramebufferTexture2D;
            Core(3, 0) safe fn framebuffer_renderbuffer(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint) = glFramebufferRenderbuffer;
            Core(3, 0) unsafe fn get_framebuffer_attachment_parameter_iv(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint) = glGetFramebufferAttachmentParameteriv;
            Core(3, 0) safe fn generate_mipmap(target: GLenum) = glGenerateMipmap;
            Core(3, 0) safe fn blit_framebuffer(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum) = glBlitFramebuffer;
            Core(3, 0) safe fn renderbuffer_storage_multisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei) = glRenderbufferStorageMultisample;
            Core(3, 0) safe fn framebuffer_texture_layer(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint) = glFramebufferTextureLayer;
            Core(3, 0) unsafe fn map_buffer_range(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void = glMapBufferRange;
            Core(3, 0) safe fn flush_mapped_buffer_range(target: GLenum, offset: GLintptr, length: GLsizeiptr) = glFlushMappedBufferRange;
            Core(3, 0) safe fn bind_vertex_array(array: GLuint) = glBindVertexArray;
            Core(3, 0) unsafe fn delete_vertex_arrays(n: GLsizei, arrays: *const GLuint) = glDeleteVertexArrays;
            Core(3, 0) unsafe fn gen_vertex_arrays(n: GLsizei, arrays: *mut GLuint) = glGenVertexArrays;
            Core(3, 0) safe fn is_vertex_array(array: GLuint) -> bool = glIsVertexArray;

            // GL 3.1
            Core(3, 1) safe fn draw_arrays_instanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei) = glDrawArraysInstanced;
            Core(3, 1) unsafe fn draw_elements_instanced(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei) = glDrawElementsInstanced;
            Core(3, 1) safe fn tex_buffer(target: GLenum, internalformat: GLenum, buffer: GLuint) = glTexBuffer;
            Core(3, 1) safe fn primitive_restart_index(index: GLuint) = glPrimitiveRestartIndex;
            Core(3, 1) safe fn copy_buffer_sub_data(read_target: GLenum, write_target: GLenum, read_offset: GLintptr, write_offset: GLintptr, size: GLsizeiptr) = glCopyBufferSubData;
            Core(3, 1) unsafe fn get_uniform_indices(program: GLuint, uniform_count: GLsizei, uniform_names: *const *const GLchar, uniform_indices: *mut GLuint) = glGetUniformIndices;
            Core(3, 1) unsafe fn get_active_uniforms_iv(program: GLuint, uniform_count: GLsizei, uniform_indices: *const GLuint, pname: GLenum, params: *mut GLint) = glGetActiveUniformsiv;
            Core(3, 1) unsafe fn get_uniform_block_index(program: GLuint, uniform_block_name: *const GLchar) -> GLuint = glGetUniformBlockIndex;
            Core(3, 1) unsafe fn get_active_uniform_block_iv(program: GLuint, uniform_block_index: GLuint, pname: GLenum, params: *mut GLint) = glGetActiveUniformBlockiv;
            Core(3, 1) safe fn uniform_block_binding(program: GLuint, uniform_block_index: GLuint, uniform_block_binding: GLuint) = glUniformBlockBinding;

            // GL 3.2
            Core(3, 2) unsafe fn draw_elements_base_vertex(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint) = glDrawElementsBaseVertex;
            Core(3, 2) safe fn provoking_vertex(mode: GLenum) = glProvokingVertex;
            Core(3, 2) unsafe fn fence_sync(condition: GLenum, flags: GLbitfield) -> GLsync = glFenceSync;
            Core(3, 2) unsafe fn is_sync(sync: GLsync) -> bool = glIsSync;
            Core(3, 2) unsafe fn delete_sync(sync: GLsync) = glDeleteSync;
            Core(3, 2) unsafe fn client_wait_sync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum = glClientWaitSync;
            Core(3, 2) unsafe fn wait_sync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) = glWaitSync;
            Core(3, 2) unsafe fn get_integer64v(pname: GLenum, data: *mut GLint64) = glGetInteger64v;
            Core(3, 2) unsafe fn get_buffer_parameter_i64v(target: GLenum, pname: GLenum, params: *mut GLint64) = glGetBufferParameteri64v;
            Core(3, 2) safe fn framebuffer_texture(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint) = glFramebufferTexture;
            Core(3, 2) safe fn tex_image_2d_multisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: bool) = glTexImage2DMultisample;
            Core(3, 2) unsafe fn get_multisample_fv(pname: GLenum, index: GLuint, val: *mut GLfloat) = glGetMultisamplefv;
            Core(3, 2) safe fn sample_mask_i(mask_number: GLuint, mask: GLbitfield) = glSampleMaski;

            // GL 3.3
            Core(3, 3) unsafe fn bind_frag_data_location_indexed(program: GLuint, color_number: GLuint, index: GLuint, name: *const GLchar) = glBindFragDataLocationIndexed;
            Core(3, 3) unsafe fn gen_samplers(count: GLsizei, samplers: *mut GLuint) = glGenSamplers;
            Core(3, 3) unsafe fn delete_samplers(count: GLsizei, samplers: *const GLuint) = glDeleteSamplers;
            Core(3, 3) safe fn is_sampler(sampler: GLuint) -> bool = glIsSampler;
            Core(3, 3) safe fn bind_sampler(unit: GLuint, sampler: GLuint) = glBindSampler;
            Core(3, 3) safe fn sampler_parameter_i(sampler: GLuint, pname: GLenum, param: GLint) = glSamplerParameteri;
            Core(3, 3) safe fn sampler_parameter_f(sampler: GLuint, pname: GLenum, param: GLfloat) = glSamplerParameterf;
            Core(3, 3) unsafe fn sampler_parameter_fv(sampler: GLuint, pname: GLenum, param: *const GLfloat) = glSamplerParameterfv;
            Core(3, 3) unsafe fn get_sampler_parameter_iv(sampler: GLuint, pname: GLenum, params: *mut GLint) = glGetSamplerParameteriv;
            Core(3, 3) safe fn query_counter(id: GLuint, target: GLenum) = glQueryCounter;
            Core(3, 3) unsafe fn get_query_object_i64v(id: GLuint, pname: GLenum, params: *mut GLint64) = glGetQueryObjecti64v;
            Core(3, 3) unsafe fn get_query_object_ui64v(id: GLuint, pname: GLenum, params: *mut GLuint64) = glGetQueryObjectui64v;
            Core(3, 3) safe fn vertex_attrib_divisor(index: GLuint, divisor: GLuint) = glVertexAttribDivisor;

            // GL 4.0
            Core(4, 0) safe fn min_sample_shading(value: GLfloat) = glMinSampleShading;
            Core(4, 0) safe fn blend_equation_i(buf: GLuint, mode: GLenum) = glBlendEquationi;
            Core(4, 0) safe fn blend_func_i(buf: GLuint, src: GLenum, dst: GLenum) = glBlendFunci;
            Core(4, 0) unsafe fn draw_arrays_indirect(mode: GLenum, indirect: *const c_void) = glDrawArraysIndirect;
            Core(4, 0) safe fn patch_parameter_i(pname: GLenum, value: GLint) = glPatchParameteri;
            Core(4, 0) safe fn bind_transform_feedback(target: GLenum, id: GLuint) = glBindTransformFeedback;
            Core(4, 0) unsafe fn delete_transform_feedbacks(n: GLsizei, ids: *const GLuint) = glDeleteTransformFeedbacks;
            Core(4, 0) unsafe fn gen_transform_feedbacks(n: GLsizei, ids: *mut GLuint) = glGenTransformFeedbacks;

            // GL 4.1
            Core(4, 1) safe fn release_shader_compiler() = glReleaseShaderCompiler;
            Core(4, 1) safe fn clear_depth_f(depth: GLfloat) = glClearDepthf;
            Core(4, 1) safe fn depth_range_f(near: GLfloat, far: GLfloat) = glDepthRangef;
            Core(4, 1) safe fn program_parameter_i(program: GLuint, pname: GLenum, value: GLint) = glProgramParameteri;
            Core(4, 1) safe fn use_program_stages(pipeline: GLuint, stages: GLbitfield, program: GLuint) = glUseProgramStages;
            Core(4, 1) safe fn bind_program_pipeline(pipeline: GLuint) = glBindProgramPipeline;
            Core(4, 1) unsafe fn delete_program_pipelines(n: GLsizei, pipelines: *const GLuint) = glDeleteProgramPipelines;
            Core(4, 1) unsafe fn gen_program_pipelines(n: GLsizei, pipelines: *mut GLuint) = glGenProgramPipelines;
            Core(4, 1) safe fn viewport_indexed_f(index: GLuint, x: GLfloat, y: GLfloat, w: GLfloat, h: GLfloat) = glViewportIndexedf;

            // GL 4.2
            Core(4, 2) safe fn draw_arrays_instanced_base_instance(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei, baseinstance: GLuint) = glDrawArraysInstancedBaseInstance;
            Core(4, 2) safe fn tex_storage_2d(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei) = glTexStorage2D;
            Core(4, 2) safe fn tex_storage_3d(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei) = glTexStorage3D;
            Core(4, 2) safe fn memory_barrier(barriers: GLbitfield) = glMemoryBarrier;
            Core(4, 2) safe fn bind_image_texture(unit: GLuint, texture: GLuint, level: GLint, layered: bool, layer: GLint, access: GLenum, format: GLenum) = glBindImageTexture;

            // GL 4.3
            Core(4, 3) safe fn dispatch_compute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint) = glDispatchCompute;
            Core(4, 3) safe fn dispatch_compute_indirect(indirect: GLintptr) = glDispatchComputeIndirect;
            Core(4, 3) unsafe fn debug_message_callback(callback: GLDEBUGPROC, user_param: *const c_void) = glDebugMessageCallback;
            Core(4, 3) unsafe fn debug_message_control(source: GLenum, type_: GLenum, severity: GLenum, count: GLsizei, ids: *const GLuint, enabled: bool) = glDebugMessageControl;
            Core(4, 3) unsafe fn debug_message_insert(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: *const GLchar) = glDebugMessageInsert;
            Core(4, 3) unsafe fn get_debug_message_log(count: GLuint, buf_size: GLsizei, sources: *mut GLenum, types: *mut GLenum, ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei, message_log: *mut GLchar) -> GLuint = glGetDebugMessageLog;
            Core(4, 3) unsafe fn object_label(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar) = glObjectLabel;
            Core(4, 3) unsafe fn push_debug_group(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar) = glPushDebugGroup;
            Core(4, 3) safe fn pop_debug_group() = glPopDebugGroup;
            Core(4, 3) unsafe fn invalidate_framebuffer(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum) = glInvalidateFramebuffer;
            Core(4, 3) safe fn copy_image_sub_data(src_name: GLuint, src_target: GLenum, src_level: GLint, src_x: GLint, src_y: GLint, src_z: GLint, dst_name: GLuint, dst_target: GLenum, dst_level: GLint, dst_x: GLint, dst_y: GLint, dst_z: GLint, src_width: GLsizei, src_height: GLsizei, src_depth: GLsizei) = glCopyImageSubData;
            Core(4, 3) unsafe fn multi_draw_arrays_indirect(mode: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei) = glMultiDrawArraysIndirect;

            // GL 4.4
            Core(4, 4) unsafe fn buffer_storage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield) = glBufferStorage;
            Core(4, 4) unsafe fn clear_tex_image(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, data: *const c_void) = glClearTexImage;

            // GL 4.5
            Core(4, 5) unsafe fn create_buffers(n: GLsizei, buffers: *mut GLuint) = glCreateBuffers;
            Core(4, 5) unsafe fn create_textures(target: GLenum, n: GLsizei, textures: *mut GLuint) = glCreateTextures;
            Core(4, 5) unsafe fn create_vertex_arrays(n: GLsizei, arrays: *mut GLuint) = glCreateVertexArrays;
            Core(4, 5) unsafe fn create_framebuffers(n: GLsizei, framebuffers: *mut GLuint) = glCreateFramebuffers;
            Core(4, 5) unsafe fn named_buffer_data(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum) = glNamedBufferData;
            Core(4, 5) safe fn bind_texture_unit(unit: GLuint, texture: GLuint) = glBindTextureUnit;
            Core(4, 5) safe fn texture_parameter_i(texture: GLuint, pname: GLenum, param: GLint) = glTextureParameteri;
            Core(4, 5) safe fn clip_control(origin: GLenum, depth: GLenum) = glClipControl;
            Core(4, 5) safe fn get_graphics_reset_status() -> GLenum = glGetGraphicsResetStatus;
            Core(4, 5) safe fn memory_barrier_by_region(barriers: GLbitfield) = glMemoryBarrierByRegion;

            // GL 4.6
            Core(4, 6) unsafe fn specialize_shader(shader: GLuint, entry_point: *const GLchar, num_specialization_constants: GLuint, constant_index: *const GLuint, constant_value: *const GLuint) = glSpecializeShader;
            Core(4, 6) safe fn polygon_offset_clamp(factor: GLfloat, units: GLfloat, clamp: GLfloat) = glPolygonOffsetClamp;

            // Compatibility profile
            Compatibility(1, 0) safe fn alpha_func(func: GLenum, ref_: GLfloat) = glAlphaFunc;

            // Extensions
            Extension("GL_ARB_debug_output") unsafe fn debug_message_callback_arb(callback: GLDEBUGPROC, user_param: *const c_void) = glDebugMessageCallbackARB;
            Extension("GL_ARB_debug_output") unsafe fn debug_message_insert_arb(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: *const GLchar) = glDebugMessageInsertARB;
            Extension("GL_ARB_robustness") safe fn get_graphics_reset_status_arb() -> GLenum = glGetGraphicsResetStatusARB;
            Extension("GL_ARB_bindless_texture") safe fn get_texture_handle_arb(texture: GLuint) -> GLuint64 = glGetTextureHandleARB;
            Extension("GL_ARB_bindless_texture") safe fn make_texture_handle_resident_arb(handle: GLuint64) = glMakeTextureHandleResidentARB;
            Extension("GL_ARB_bindless_texture") safe fn make_texture_handle_non_resident_arb(handle: GLuint64) = glMakeTextureHandleNonResidentARB;
            Extension("GL_ARB_parallel_shader_compile") safe fn max_shader_compiler_threads_arb(count: GLuint) = glMaxShaderCompilerThreadsARB;
            Extension("GL_ARB_sparse_texture") safe fn tex_page_commitment_arb(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, commit: bool) = glTexPageCommitmentARB;
            Extension("GL_EXT_debug_marker") unsafe fn insert_event_marker_ext(length: GLsizei, marker: *const GLchar) = glInsertEventMarkerEXT;
            Extension("GL_EXT_debug_marker") unsafe fn push_group_marker_ext(length: GLsizei, marker: *const GLchar) = glPushGroupMarkerEXT;
            Extension("GL_EXT_debug_marker") safe fn pop_group_marker_ext() = glPopGroupMarkerEXT;
            Extension("GL_EXT_window_rectangles") unsafe fn window_rectangles_ext(mode: GLenum, count: GLsizei, box_: *const GLint) = glWindowRectanglesEXT;
            Extension("GL_NV_conservative_raster") safe fn subpixel_precision_bias_nv(xbits: GLuint, ybits: GLuint) = glSubpixelPrecisionBiasNV;
        }
    };
}

pub(crate) use with_entry_points;

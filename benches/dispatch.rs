//! Dispatch benchmarks
//!
//! Measures the cost a call pays on top of the native function: slot lookup,
//! marshaling and the error-check policy.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glbind::catalog;
use glbind::types::*;
use glbind::{ErrorCheck, Gl, LoaderConfig, MapResolver};
use std::ffi::c_void;

extern "system" fn nop_clear(_mask: GLbitfield) {}

extern "system" fn nop_get_error() -> GLenum {
    0
}

unsafe extern "system" fn nop_get_integerv(_pname: GLenum, out: *mut GLint) {
    *out = 1;
}

unsafe extern "system" fn nop_uniform_4fv(_location: GLint, _count: GLsizei, _value: *const GLfloat) {}

unsafe extern "system" fn nop_shader_source(
    _shader: GLuint,
    _count: GLsizei,
    _strings: *const *const GLchar,
    _lengths: *const GLint,
) {
}

fn resolver() -> MapResolver {
    MapResolver::new()
        .with("glClear", nop_clear as *const c_void)
        .with("glGetError", nop_get_error as *const c_void)
        .with("glGetIntegerv", nop_get_integerv as *const c_void)
        .with("glUniform4fv", nop_uniform_4fv as *const c_void)
        .with("glShaderSource", nop_shader_source as *const c_void)
}

fn gl_with(policy: ErrorCheck) -> Gl {
    let mut config = LoaderConfig::default();
    config.loader.error_check = policy;
    Gl::import_with(&resolver(), &config)
}

fn bench_scalar_call(c: &mut Criterion) {
    let gl = gl_with(ErrorCheck::Outputs);
    let mut group = c.benchmark_group("scalar_call");

    group.bench_function("direct", |b| {
        let clear: extern "system" fn(GLbitfield) = nop_clear;
        b.iter(|| clear(black_box(0x4000)))
    });

    group.bench_function("through_table", |b| {
        b.iter(|| gl.clear(black_box(0x4000)))
    });

    group.bench_function("unavailable", |b| b.iter(|| gl.flush()));

    group.finish();
}

fn bench_error_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("error_check");

    for policy in [ErrorCheck::Never, ErrorCheck::Outputs, ErrorCheck::Always] {
        let gl = gl_with(policy);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", policy)),
            &gl,
            |b, gl| b.iter(|| gl.get_integer(black_box(0x0D33))),
        );
    }

    group.finish();
}

fn bench_marshaling(c: &mut Criterion) {
    let gl = gl_with(ErrorCheck::Never);
    let mut group = c.benchmark_group("marshaling");

    for count in [1usize, 16, 256] {
        let values = vec![0.5f32; count * 4];
        group.bench_with_input(BenchmarkId::new("uniform_4fv", count), &values, |b, values| {
            b.iter(|| gl.uniform_4fv(0, black_box(values)))
        });
    }

    let sources = ["#version 330 core\n", "uniform vec4 color;\n", "void main() {}\n"];
    group.bench_function("shader_source", |b| {
        b.iter(|| gl.shader_source(1, black_box(&sources)))
    });

    group.finish();
}

fn bench_import(c: &mut Criterion) {
    let mut full = MapResolver::new();
    for (i, entry) in catalog::entry_points().iter().enumerate() {
        full.insert(entry.name, (0x1000 + i * 16) as *const c_void);
    }

    c.bench_function("import_full_catalog", |b| {
        b.iter(|| Gl::import(black_box(&full)))
    });
}

criterion_group!(
    benches,
    bench_scalar_call,
    bench_error_check,
    bench_marshaling,
    bench_import
);
criterion_main!(benches);

//! Unit tests for the marshaling adapters

use super::*;
use crate::catalog::{Kind, Scalar};
use crate::errors::GlError;
use crate::types::*;
use core::ffi::CStr;

#[test]
fn test_bool_marshal() {
    assert_eq!(true.to_native(), 1);
    assert_eq!(false.to_native(), 0);
    assert!(bool::from_native(1));
    assert!(bool::from_native(0xFF));
    assert!(!bool::from_native(0));
    assert_eq!(<bool as Marshal>::KIND, Kind::Scalar(Scalar::Bool));
}

#[test]
fn test_identity_marshal() {
    assert_eq!(42u32.to_native(), 42);
    assert_eq!(<f32 as Marshal>::from_native(1.5), 1.5);
    assert_eq!(<GLuint as Marshal>::KIND, Kind::Scalar(Scalar::U32));
    assert_eq!(<*mut GLint as Marshal>::KIND, Kind::OutArray(Scalar::I32));
    assert_eq!(<() as Marshal>::KIND, Kind::Void);
}

#[test]
fn test_seq_ptr() {
    let data = [1.0f32, 2.0, 3.0];
    let seq = SeqPtr::new("glUniform1fv", &data).unwrap();
    assert_eq!(seq.count(), 3);
    assert_eq!(seq.as_ptr(), data.as_ptr());
    assert!(!seq.is_empty());
}

#[test]
fn test_seq_ptr_rejects_empty() {
    let empty: [u32; 0] = [];
    let err = SeqPtr::new("glDeleteTextures", &empty).unwrap_err();
    assert!(matches!(
        err,
        GlError::InvalidArgument { entry: "glDeleteTextures", .. }
    ));

    let mut empty_mut: [u32; 0] = [];
    assert!(SeqPtrMut::new("glGenTextures", &mut empty_mut).is_err());
}

#[test]
fn test_seq_ptr_mut_writes_through() {
    let mut ids = [0u32; 2];
    {
        let mut seq = SeqPtrMut::new("glGenTextures", &mut ids).unwrap();
        assert_eq!(seq.count(), 2);
        unsafe {
            *seq.as_mut_ptr() = 7;
            *seq.as_mut_ptr().add(1) = 8;
        }
    }
    assert_eq!(ids, [7, 8]);
}

#[test]
fn test_checked_count_overflow() {
    assert_eq!(checked_count("glDrawArrays", 10).unwrap(), 10);
    let too_big = GLsizei::MAX as usize + 1;
    assert!(checked_count("glDrawArrays", too_big).is_err());
}

#[test]
fn test_ensure_same_len() {
    assert!(ensure_same_len("glMultiDrawArrays", 3, 3).is_ok());
    let err = ensure_same_len("glMultiDrawArrays", 3, 2).unwrap_err();
    assert!(err.to_string().contains("3 vs 2"));
}

#[test]
fn test_ensure_min_len() {
    assert!(ensure_min_len("glReadPixels", 16, 16).is_ok());
    assert!(ensure_min_len("glReadPixels", 16, 64).is_ok());
    assert_eq!(
        ensure_min_len("glReadPixels", 16384, 1),
        Err(GlError::InvalidArgument {
            entry: "glReadPixels",
            reason: "expected at least 16384 values, got 1".into(),
        })
    );
}

#[test]
fn test_read_back() {
    let data = [5i32, 6, 7];
    let copy = unsafe { read_back("glGetIntegerv", data.as_ptr(), 3) }.unwrap();
    assert_eq!(copy, vec![5, 6, 7]);

    let empty = unsafe { read_back::<i32>("glGetIntegerv", core::ptr::null(), 0) }.unwrap();
    assert!(empty.is_empty());

    assert!(unsafe { read_back::<i32>("glGetIntegerv", core::ptr::null(), 1) }.is_err());
}

#[test]
fn test_utf8_buffer() {
    let buf = Utf8Buffer::new("glGetUniformLocation", "u_color").unwrap();
    assert_eq!(buf.len(), 7);
    let back = unsafe { CStr::from_ptr(buf.as_ptr() as *const core::ffi::c_char) };
    assert_eq!(back.to_str().unwrap(), "u_color");
}

#[test]
fn test_utf8_buffer_empty_and_multibyte() {
    let empty = Utf8Buffer::new("glObjectLabel", "").unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.native_len("glObjectLabel").unwrap(), 0);

    let text = "héllo, 世界";
    let buf = Utf8Buffer::new("glObjectLabel", text).unwrap();
    assert_eq!(buf.len(), text.len());
    assert_eq!(unsafe { decode_text(buf.as_ptr(), buf.len()) }, text);
}

#[test]
fn test_utf8_buffer_rejects_interior_nul() {
    let err = Utf8Buffer::new("glBindAttribLocation", "pos\0ition").unwrap_err();
    match err {
        GlError::InvalidArgument { entry, reason } => {
            assert_eq!(entry, "glBindAttribLocation");
            assert!(reason.contains("byte 3"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_decode_text_uses_length() {
    let raw = b"error: line 1\0garbage";
    let text = unsafe { decode_text(raw.as_ptr() as *const GLchar, 13) };
    assert_eq!(text, "error: line 1");
    assert_eq!(unsafe { decode_text(core::ptr::null(), 4) }, "");
}

#[test]
fn test_decode_text_lossy() {
    let raw = [b'o', b'k', 0xFF];
    let text = unsafe { decode_text(raw.as_ptr() as *const GLchar, raw.len()) };
    assert_eq!(text, "ok\u{FFFD}");
}

#[test]
fn test_decode_nul_terminated() {
    let raw = b"4.6.0 NVIDIA\0";
    assert_eq!(
        unsafe { decode_nul_terminated(raw.as_ptr()) }.as_deref(),
        Some("4.6.0 NVIDIA")
    );
    assert_eq!(unsafe { decode_nul_terminated(core::ptr::null()) }, None);
}

#[test]
fn test_out_value() {
    let mut out = Out::<GLint>::new();
    unsafe { *out.as_mut_ptr() = 16 };
    assert_eq!(out.into_inner(), 16);
}

#[test]
fn test_out_array() {
    let mut out = OutArray::<GLuint>::new("glGenBuffers", 3).unwrap();
    assert_eq!(out.count(), 3);
    unsafe {
        for i in 0..3 {
            *out.as_mut_ptr().add(i) = i as GLuint + 10;
        }
    }
    assert_eq!(out.into_inner(), vec![10, 11, 12]);
    assert!(OutArray::<GLuint>::new("glGenBuffers", 0).is_err());
}

#[test]
fn test_fixed_out() {
    let mut out = FixedOut::<GLfloat, 16>::new();
    assert_eq!(out.len(), 16);
    unsafe { *out.as_mut_ptr().add(15) = 1.0 };
    let matrix = out.into_inner();
    assert_eq!(matrix[15], 1.0);
    assert_eq!(matrix[0], 0.0);
}

#[test]
fn test_text_out() {
    let mut out = TextOut::with_capacity("glGetShaderInfoLog", 32).unwrap();
    assert_eq!(out.capacity(), 32);
    let msg = b"0:1: error";
    unsafe {
        for (i, b) in msg.iter().enumerate() {
            *out.as_mut_ptr().add(i) = *b as GLchar;
        }
        *out.length_ptr() = msg.len() as GLsizei;
    }
    assert_eq!(out.into_string(), "0:1: error");
}

#[test]
fn test_text_out_clamps_reported_length() {
    let mut out = TextOut::with_capacity("glGetProgramInfoLog", 4).unwrap();
    unsafe { *out.length_ptr() = 100 };
    assert_eq!(out.into_string().len(), 3);

    let mut negative = TextOut::with_capacity("glGetProgramInfoLog", 4).unwrap();
    unsafe { *negative.length_ptr() = -1 };
    assert_eq!(negative.into_string(), "");

    assert!(TextOut::with_capacity("glGetProgramInfoLog", 0).is_err());
}

#[test]
fn test_text_array() {
    let sources = ["#version 330 core\n", "void main() {}"];
    let array = TextArray::new("glShaderSource", &sources).unwrap();
    assert_eq!(array.count(), 2);
    unsafe {
        let ptrs = core::slice::from_raw_parts(array.as_ptr(), 2);
        let lengths = core::slice::from_raw_parts(array.lengths_ptr(), 2);
        for (i, source) in sources.iter().enumerate() {
            assert_eq!(lengths[i] as usize, source.len());
            assert_eq!(decode_text(ptrs[i], lengths[i] as usize), *source);
        }
    }
}

#[test]
fn test_text_array_rejects_bad_input() {
    assert!(TextArray::new("glShaderSource", &[]).is_err());
    assert!(TextArray::new("glShaderSource", &["ok", "bad\0"]).is_err());
}

#[test]
fn test_pointer_array() {
    let a = [0u32, 1, 2];
    let b = [3u32, 4];
    let array = PointerArray::new("glMultiDrawElements", &[&a[..], &b[..]]).unwrap();
    assert_eq!(array.count(), 2);
    unsafe {
        let ptrs = core::slice::from_raw_parts(array.as_ptr(), 2);
        let counts = core::slice::from_raw_parts(array.counts_ptr(), 2);
        assert_eq!(counts, &[3, 2]);
        assert_eq!(ptrs[0] as *const u32, a.as_ptr());
        assert_eq!(ptrs[1] as *const u32, b.as_ptr());
    }
}

#[test]
fn test_pointer_array_rejects_empty_element() {
    let a = [1u32];
    let empty: [u32; 0] = [];
    assert!(PointerArray::new("glMultiDrawElements", &[&a[..], &empty[..]]).is_err());
    assert!(PointerArray::<u32>::new("glMultiDrawElements", &[]).is_err());
}

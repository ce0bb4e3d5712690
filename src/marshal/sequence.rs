//! Sequence-to-pointer adapters
//!
//! Borrow a non-empty slice for the duration of one native call and expose
//! its base address plus a checked element count.

use crate::errors::{GlError, GlResult};
use crate::types::GLsizei;
use core::slice;

/// Convert a Rust length to a native count, rejecting overflow
#[inline]
pub fn checked_count(entry: &'static str, len: usize) -> GlResult<GLsizei> {
    GLsizei::try_from(len)
        .map_err(|_| GlError::invalid(entry, format!("length {} exceeds GLsizei", len)))
}

/// Parallel arrays must agree element for element
#[inline]
pub fn ensure_same_len(entry: &'static str, left: usize, right: usize) -> GlResult<()> {
    if left == right {
        Ok(())
    } else {
        Err(GlError::invalid(
            entry,
            format!("parallel sequences differ in length ({} vs {})", left, right),
        ))
    }
}

/// A caller buffer must hold everything the native side reads or writes
#[inline]
pub fn ensure_min_len(entry: &'static str, needed: usize, got: usize) -> GlResult<()> {
    if got >= needed {
        Ok(())
    } else {
        Err(GlError::invalid(
            entry,
            format!("expected at least {} values, got {}", needed, got),
        ))
    }
}

/// Read-only view of a slice as `(pointer, count)`
#[derive(Debug, Clone, Copy)]
pub struct SeqPtr<'a, T> {
    items: &'a [T],
    count: GLsizei,
}

impl<'a, T> SeqPtr<'a, T> {
    pub fn new(entry: &'static str, items: &'a [T]) -> GlResult<Self> {
        if items.is_empty() {
            return Err(GlError::invalid(entry, "sequence must not be empty"));
        }
        let count = checked_count(entry, items.len())?;
        Ok(Self { items, count })
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    #[inline]
    pub fn count(&self) -> GLsizei {
        self.count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; emptiness is rejected at construction
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Writable view of a caller-owned slice as `(pointer, count)`
#[derive(Debug)]
pub struct SeqPtrMut<'a, T> {
    items: &'a mut [T],
    count: GLsizei,
}

impl<'a, T> SeqPtrMut<'a, T> {
    pub fn new(entry: &'static str, items: &'a mut [T]) -> GlResult<Self> {
        if items.is_empty() {
            return Err(GlError::invalid(entry, "sequence must not be empty"));
        }
        let count = checked_count(entry, items.len())?;
        Ok(Self { items, count })
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    #[inline]
    pub fn count(&self) -> GLsizei {
        self.count
    }
}

/// Copy `len` elements out of native memory
///
/// # Safety
/// When `len > 0` and `ptr` is non-null, `ptr` must be valid for `len`
/// reads of `T`.
pub unsafe fn read_back<T: Copy>(entry: &'static str, ptr: *const T, len: usize) -> GlResult<Vec<T>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return Err(GlError::invalid(entry, "null pointer with non-zero length"));
    }
    Ok(slice::from_raw_parts(ptr, len).to_vec())
}

//! Output-parameter adapters
//!
//! The destination lives inside the adapter. A value only leaves through
//! `into_inner` once the call and its error check have succeeded; on any
//! error the adapter is dropped with its contents.

use super::sequence::checked_count;
use crate::errors::{GlError, GlResult};
use crate::types::{GLchar, GLsizei};

/// Single value written by the callee
#[derive(Debug)]
pub struct Out<T> {
    value: T,
}

impl<T: Copy + Default> Out<T> {
    #[inline]
    pub fn new() -> Self {
        Self { value: T::default() }
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        &mut self.value
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy + Default> Default for Out<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Heap array of `len` values written by the callee
#[derive(Debug)]
pub struct OutArray<T> {
    buf: Vec<T>,
    count: GLsizei,
}

impl<T: Copy + Default> OutArray<T> {
    pub fn new(entry: &'static str, len: usize) -> GlResult<Self> {
        if len == 0 {
            return Err(GlError::invalid(entry, "output length must not be zero"));
        }
        let count = checked_count(entry, len)?;
        Ok(Self {
            buf: vec![T::default(); len],
            count,
        })
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    #[inline]
    pub fn count(&self) -> GLsizei {
        self.count
    }

    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.buf
    }
}

/// Inline array of `N` values, e.g. a 4x4 matrix query
#[derive(Debug)]
pub struct FixedOut<T, const N: usize> {
    buf: [T; N],
}

impl<T: Copy + Default, const N: usize> FixedOut<T, N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: [T::default(); N],
        }
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.buf
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedOut<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Capacity-bounded character buffer plus the length the callee reports
#[derive(Debug)]
pub struct TextOut {
    buf: Vec<GLchar>,
    capacity: GLsizei,
    written: GLsizei,
}

impl TextOut {
    /// `capacity` includes room for the terminator
    pub fn with_capacity(entry: &'static str, capacity: usize) -> GlResult<Self> {
        if capacity == 0 {
            return Err(GlError::invalid(entry, "text buffer capacity must not be zero"));
        }
        let native = checked_count(entry, capacity)?;
        Ok(Self {
            buf: vec![0; capacity],
            capacity: native,
            written: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> GLsizei {
        self.capacity
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut GLchar {
        self.buf.as_mut_ptr()
    }

    #[inline]
    pub fn length_ptr(&mut self) -> *mut GLsizei {
        &mut self.written
    }

    /// Decode the reported prefix; a length outside the buffer is clamped
    pub fn into_string(self) -> String {
        let max = self.buf.len().saturating_sub(1);
        let len = usize::try_from(self.written).unwrap_or(0).min(max);
        let bytes: Vec<u8> = self.buf[..len].iter().map(|&c| c as u8).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

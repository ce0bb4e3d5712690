//! Array-of-pointers adapters for "multi" entry points
//!
//! Each element is marshaled on its own, then a temporary array of element
//! pointers is built next to a parallel array of counts or lengths.

use super::sequence::{checked_count, SeqPtr};
use super::text::Utf8Buffer;
use crate::errors::{GlError, GlResult};
use crate::types::{GLchar, GLint, GLsizei};
use core::ffi::c_void;
use core::marker::PhantomData;

/// Strings as `(const GLchar**, const GLint*)`
#[derive(Debug)]
pub struct TextArray {
    // Holds the heap buffers that `ptrs` points into.
    _buffers: Vec<Utf8Buffer>,
    ptrs: Vec<*const GLchar>,
    lengths: Vec<GLint>,
    count: GLsizei,
}

impl TextArray {
    pub fn new(entry: &'static str, texts: &[&str]) -> GlResult<Self> {
        if texts.is_empty() {
            return Err(GlError::invalid(entry, "text array must not be empty"));
        }
        let count = checked_count(entry, texts.len())?;

        let buffers = texts
            .iter()
            .map(|text| Utf8Buffer::new(entry, text))
            .collect::<GlResult<Vec<_>>>()?;
        let lengths = buffers
            .iter()
            .map(|buf| buf.native_len(entry))
            .collect::<GlResult<Vec<_>>>()?;
        let ptrs = buffers.iter().map(Utf8Buffer::as_ptr).collect();

        Ok(Self {
            _buffers: buffers,
            ptrs,
            lengths,
            count,
        })
    }

    #[inline]
    pub fn as_ptr(&self) -> *const *const GLchar {
        self.ptrs.as_ptr()
    }

    #[inline]
    pub fn lengths_ptr(&self) -> *const GLint {
        self.lengths.as_ptr()
    }

    #[inline]
    pub fn count(&self) -> GLsizei {
        self.count
    }
}

/// Slices as `(const void* const*, const GLsizei*)`
#[derive(Debug)]
pub struct PointerArray<'a, T> {
    ptrs: Vec<*const c_void>,
    counts: Vec<GLsizei>,
    count: GLsizei,
    _borrow: PhantomData<&'a [T]>,
}

impl<'a, T> PointerArray<'a, T> {
    pub fn new(entry: &'static str, seqs: &[&'a [T]]) -> GlResult<Self> {
        if seqs.is_empty() {
            return Err(GlError::invalid(entry, "pointer array must not be empty"));
        }
        let count = checked_count(entry, seqs.len())?;

        let mut ptrs = Vec::with_capacity(seqs.len());
        let mut counts = Vec::with_capacity(seqs.len());
        for seq in seqs {
            let seq = SeqPtr::new(entry, seq)?;
            ptrs.push(seq.as_ptr() as *const c_void);
            counts.push(seq.count());
        }

        Ok(Self {
            ptrs,
            counts,
            count,
            _borrow: PhantomData,
        })
    }

    #[inline]
    pub fn as_ptr(&self) -> *const *const c_void {
        self.ptrs.as_ptr()
    }

    #[inline]
    pub fn counts_ptr(&self) -> *const GLsizei {
        self.counts.as_ptr()
    }

    /// Number of element sequences
    #[inline]
    pub fn count(&self) -> GLsizei {
        self.count
    }
}

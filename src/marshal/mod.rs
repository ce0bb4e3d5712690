//! Marshaling adapters - Rust values to native call arguments and back
//!
//! Design: validate before crossing, own temporaries for exactly one call
//!
//! Architecture:
//! - `scalar.rs` - `Marshal` trait, identity and `bool` conversions
//! - `sequence.rs` - slices as `(pointer, count)`
//! - `text.rs` - `&str` as NUL-terminated UTF-8, native text back to `String`
//! - `output.rs` - values, arrays and text written by the callee
//! - `multi.rs` - arrays of pointers with parallel counts

mod scalar;
mod sequence;
mod text;
mod output;
mod multi;

pub use scalar::Marshal;
pub use sequence::{checked_count, ensure_min_len, ensure_same_len, read_back, SeqPtr, SeqPtrMut};
pub use text::{decode_nul_terminated, decode_text, Utf8Buffer};
pub use output::{FixedOut, Out, OutArray, TextOut};
pub use multi::{PointerArray, TextArray};

#[cfg(test)]
mod tests;

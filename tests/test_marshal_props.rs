//! Property tests for the marshaling adapters
//!
//! Sequences and text must survive the trip to a native pointer and back
//! unchanged, for every non-empty sequence and every NUL-free string.

mod common;

use glbind::marshal::{
    decode_nul_terminated, decode_text, read_back, Marshal, PointerArray, SeqPtr, TextArray,
    Utf8Buffer,
};
use glbind::GlError;
use proptest::prelude::*;

fn nul_free() -> impl Strategy<Value = String> {
    any::<String>().prop_map(|s| s.replace('\0', ""))
}

proptest! {
    #[test]
    fn sequence_round_trip(items in prop::collection::vec(any::<u32>(), 1..256)) {
        let seq = SeqPtr::new("glTest", &items).unwrap();
        prop_assert_eq!(seq.count() as usize, items.len());
        let back = unsafe { read_back("glTest", seq.as_ptr(), seq.len()) }.unwrap();
        prop_assert_eq!(back, items);
    }

    #[test]
    fn float_sequence_round_trip(items in prop::collection::vec(any::<f32>().prop_filter("finite", |f| f.is_finite()), 1..64)) {
        let seq = SeqPtr::new("glTest", &items).unwrap();
        let back = unsafe { read_back("glTest", seq.as_ptr(), seq.len()) }.unwrap();
        prop_assert_eq!(back, items);
    }

    #[test]
    fn text_round_trip(text in nul_free()) {
        let buf = Utf8Buffer::new("glTest", &text).unwrap();
        prop_assert_eq!(buf.len(), text.len());
        prop_assert_eq!(unsafe { decode_text(buf.as_ptr(), buf.len()) }, text.clone());
        prop_assert_eq!(
            unsafe { decode_nul_terminated(buf.as_ptr() as *const u8) },
            Some(text)
        );
    }

    #[test]
    fn interior_nul_rejected(head in nul_free(), tail in nul_free()) {
        let text = format!("{}\0{}", head, tail);
        let err = Utf8Buffer::new("glTest", &text).unwrap_err();
        prop_assert_eq!(
            err,
            GlError::InvalidArgument {
                entry: "glTest",
                reason: format!("interior NUL at byte {}", head.len()),
            }
        );
    }

    #[test]
    fn text_array_lengths(texts in prop::collection::vec(nul_free(), 1..8)) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let array = TextArray::new("glTest", &refs).unwrap();
        prop_assert_eq!(array.count() as usize, texts.len());
        for (i, text) in texts.iter().enumerate() {
            let (ptr, len) = unsafe { (*array.as_ptr().add(i), *array.lengths_ptr().add(i)) };
            prop_assert_eq!(len as usize, text.len());
            prop_assert_eq!(unsafe { decode_text(ptr, len as usize) }, text.clone());
        }
    }

    #[test]
    fn pointer_array_counts(seqs in prop::collection::vec(prop::collection::vec(any::<u16>(), 1..32), 1..8)) {
        let refs: Vec<&[u16]> = seqs.iter().map(Vec::as_slice).collect();
        let array = PointerArray::new("glTest", &refs).unwrap();
        for (i, seq) in seqs.iter().enumerate() {
            let (ptr, count) = unsafe { (*array.as_ptr().add(i), *array.counts_ptr().add(i)) };
            let back = unsafe { read_back("glTest", ptr as *const u16, count as usize) }.unwrap();
            prop_assert_eq!(&back, seq);
        }
    }

    #[test]
    fn bool_normalization(flag in any::<bool>(), native in any::<u8>()) {
        prop_assert_eq!(<bool as Marshal>::to_native(flag), flag as u8);
        prop_assert_eq!(<bool as Marshal>::from_native(native), native != 0);
    }

    #[test]
    fn shader_sources_reach_driver(texts in prop::collection::vec("[ -~]{0,40}", 1..4)) {
        let gl = common::gl();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        gl.shader_source(9, &refs).unwrap();
        prop_assert_eq!(
            common::take_calls(),
            vec![format!("glShaderSource(9, {:?})", texts)]
        );
    }
}

#[test]
fn empty_inputs_rejected() {
    let empty: [u32; 0] = [];
    assert!(SeqPtr::new("glTest", &empty).is_err());
    assert!(TextArray::new("glTest", &[]).is_err());
    assert!(PointerArray::<u16>::new("glTest", &[]).is_err());
    assert!(Utf8Buffer::new("glTest", "").unwrap().is_empty());
}

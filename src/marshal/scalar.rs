//! Scalar pass-through
//!
//! Every type written in the command table implements [`Marshal`]. Native
//! types map to themselves; `bool` is carried as `GLboolean`.

use crate::catalog::{Kind, NativeType, Scalar};
use crate::types::*;
use core::ffi::c_void;

/// Conversion between a Rust parameter type and its native representation
pub trait Marshal: Sized {
    type Native: NativeType;

    /// Kind recorded in the catalog for this type
    const KIND: Kind = <Self::Native as NativeType>::KIND;

    fn to_native(self) -> Self::Native;
    fn from_native(native: Self::Native) -> Self;
}

macro_rules! identity_marshal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Marshal for $ty {
                type Native = $ty;

                #[inline(always)]
                fn to_native(self) -> Self::Native {
                    self
                }

                #[inline(always)]
                fn from_native(native: Self::Native) -> Self {
                    native
                }
            }
        )*
    };
}

macro_rules! identity_scalars {
    ($($ty:ty),* $(,)?) => {
        $(identity_marshal!($ty, *const $ty, *mut $ty);)*
    };
}

identity_scalars!(u8, i16, u16, i32, u32, i64, u64, isize, f32, f64);

identity_marshal!(
    (),
    *const GLchar,
    *mut GLchar,
    *const *const GLchar,
    *const c_void,
    *mut c_void,
    *const *const c_void,
    GLDEBUGPROC,
);

impl Marshal for bool {
    type Native = GLboolean;
    const KIND: Kind = Kind::Scalar(Scalar::Bool);

    #[inline(always)]
    fn to_native(self) -> GLboolean {
        if self {
            GL_TRUE
        } else {
            GL_FALSE
        }
    }

    /// Drivers are only required to return 0 for false
    #[inline(always)]
    fn from_native(native: GLboolean) -> Self {
        native != GL_FALSE
    }
}

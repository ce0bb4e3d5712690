//! Parameter and return kinds for entry-point signatures
//!
//! Kinds are attached to native Rust types through [`NativeType`], so a
//! signature is always derived from the types written in the catalog table
//! and never inferred at run time.

use crate::types::*;
use core::ffi::c_void;
use core::fmt;

/// Fixed-width scalar carried by value or as an array element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Scalar {
    Bool,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    Isize,
    F32,
    F64,
}

impl Scalar {
    /// Size of the scalar in bytes
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            Self::Bool | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
            Self::Isize => core::mem::size_of::<isize>(),
        }
    }

    #[inline]
    pub const fn is_integral(self) -> bool {
        !self.is_float()
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// C spelling used when rendering prototypes
    pub const fn c_name(self) -> &'static str {
        match self {
            Self::Bool => "GLboolean",
            Self::U8 => "GLubyte",
            Self::I16 => "GLshort",
            Self::U16 => "GLushort",
            Self::I32 => "GLint",
            Self::U32 => "GLuint",
            Self::I64 => "GLint64",
            Self::U64 => "GLuint64",
            Self::Isize => "GLsizeiptr",
            Self::F32 => "GLfloat",
            Self::F64 => "GLdouble",
        }
    }
}

/// Shape of one parameter or of the return value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No value (return position only)
    Void,
    Scalar(Scalar),
    /// Untyped memory region or opaque handle
    Pointer,
    /// Read-only array of scalars
    Array(Scalar),
    /// Array of scalars written by the callee
    OutArray(Scalar),
    /// NUL-terminated or length-delimited UTF-8 input
    Text,
    /// Character buffer written by the callee
    TextOut,
    /// Array of text pointers
    TextArray,
    /// Array of untyped pointers
    PointerArray,
}

impl Kind {
    /// Whether the kind crosses the boundary as an address
    #[inline]
    pub const fn is_pointer(self) -> bool {
        !matches!(self, Self::Void | Self::Scalar(_))
    }

    /// Whether the callee writes through this parameter
    #[inline]
    pub const fn is_output(self) -> bool {
        matches!(self, Self::OutArray(_) | Self::TextOut)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Scalar(s) => write!(f, "{}", s.c_name()),
            Self::Pointer => write!(f, "void*"),
            Self::Array(s) => write!(f, "const {}*", s.c_name()),
            Self::OutArray(s) => write!(f, "{}*", s.c_name()),
            Self::Text => write!(f, "const GLchar*"),
            Self::TextOut => write!(f, "GLchar*"),
            Self::TextArray => write!(f, "const GLchar* const*"),
            Self::PointerArray => write!(f, "const void* const*"),
        }
    }
}

/// A type that may appear in a native call signature
pub trait NativeType: Copy {
    const KIND: Kind;
}

impl NativeType for () {
    const KIND: Kind = Kind::Void;
}

macro_rules! scalar_natives {
    ($($ty:ty => $scalar:ident),* $(,)?) => {
        $(
            impl NativeType for $ty {
                const KIND: Kind = Kind::Scalar(Scalar::$scalar);
            }
            impl NativeType for *const $ty {
                const KIND: Kind = Kind::Array(Scalar::$scalar);
            }
            impl NativeType for *mut $ty {
                const KIND: Kind = Kind::OutArray(Scalar::$scalar);
            }
        )*
    };
}

// `GLboolean` and `GLubyte` are both `u8`; the boolean meaning is carried by
// the `bool` marshaling in `marshal::scalar`.
scalar_natives! {
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    isize => Isize,
    f32 => F32,
    f64 => F64,
}

impl NativeType for *const GLchar {
    const KIND: Kind = Kind::Text;
}

impl NativeType for *mut GLchar {
    const KIND: Kind = Kind::TextOut;
}

impl NativeType for *const *const GLchar {
    const KIND: Kind = Kind::TextArray;
}

impl NativeType for *const c_void {
    const KIND: Kind = Kind::Pointer;
}

impl NativeType for *mut c_void {
    const KIND: Kind = Kind::Pointer;
}

impl NativeType for *const *const c_void {
    const KIND: Kind = Kind::PointerArray;
}

impl NativeType for GLDEBUGPROC {
    const KIND: Kind = Kind::Pointer;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_sizes() {
        assert_eq!(Scalar::U8.size(), 1);
        assert_eq!(Scalar::I16.size(), 2);
        assert_eq!(Scalar::F32.size(), 4);
        assert_eq!(Scalar::F64.size(), 8);
        assert_eq!(Scalar::Isize.size(), core::mem::size_of::<GLsizeiptr>());
    }

    #[test]
    fn test_kinds_from_types() {
        assert_eq!(<GLenum as NativeType>::KIND, Kind::Scalar(Scalar::U32));
        assert_eq!(<*mut GLuint as NativeType>::KIND, Kind::OutArray(Scalar::U32));
        assert_eq!(<*const GLfloat as NativeType>::KIND, Kind::Array(Scalar::F32));
        assert_eq!(<*const GLchar as NativeType>::KIND, Kind::Text);
        assert_eq!(<*const *const GLchar as NativeType>::KIND, Kind::TextArray);
        assert_eq!(<() as NativeType>::KIND, Kind::Void);
    }

    #[test]
    fn test_kind_classification() {
        assert!(Kind::OutArray(Scalar::I32).is_output());
        assert!(Kind::TextOut.is_output());
        assert!(!Kind::Array(Scalar::I32).is_output());
        assert!(!Kind::Scalar(Scalar::U32).is_pointer());
        assert!(Kind::PointerArray.is_pointer());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Array(Scalar::F32).to_string(), "const GLfloat*");
        assert_eq!(Kind::TextOut.to_string(), "GLchar*");
    }
}

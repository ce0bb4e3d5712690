//! Methods generated from the command table
//!
//! Every method follows the same path: slot lookup, argument marshaling,
//! clearing stale error codes, one `unsafe` transmute to the exact native
//! function type of its table row, the `ErrorCheck` policy, return
//! unmarshaling.

use super::{Gl, RawCommands};
use crate::catalog::{entries::with_entry_points, entry_ret, EntryId};
use crate::errors::GlResult;
use crate::marshal::Marshal;
use crate::types::*;
use core::ffi::c_void;

macro_rules! command_body {
    ($gl:expr, $sym:ident, ($($p:ident: $t:ty),*), $ret:ty) => {{
        type Native = unsafe extern "system" fn($(<$t as Marshal>::Native),*) -> <$ret as Marshal>::Native;

        let gl: &Gl = $gl;
        let address = gl.address(EntryId::$sym)?;
        $(let $p = <$t as Marshal>::to_native($p);)*
        gl.before_call(EntryId::$sym);
        // SAFETY: `address` was resolved for this symbol and `Native` is
        // derived from the same table row as the catalog signature.
        let out = unsafe {
            let native = core::mem::transmute::<*const c_void, Native>(address);
            native($($p),*)
        };
        gl.after_call(EntryId::$sym)?;
        Ok(<$ret as Marshal>::from_native(out))
    }};
}

macro_rules! command_method {
    (gl safe $name:ident($($p:ident: $t:ty),*) -> $ret:ty = $sym:ident) => {
        #[doc = concat!("Calls `", stringify!($sym), "`.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $name(&self, $($p: $t),*) -> GlResult<$ret> {
            command_body!(self, $sym, ($($p: $t),*), $ret)
        }
    };
    (raw unsafe $name:ident($($p:ident: $t:ty),*) -> $ret:ty = $sym:ident) => {
        #[doc = concat!("Calls `", stringify!($sym), "`.")]
        ///
        /// # Safety
        /// Every pointer argument must satisfy the native entry point's
        /// contract: valid for the reads and writes the command performs,
        /// for as long as the command uses it.
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub unsafe fn $name(&self, $($p: $t),*) -> GlResult<$ret> {
            command_body!(self.gl, $sym, ($($p: $t),*), $ret)
        }
    };
    (gl unsafe $($rest:tt)*) => {};
    (raw safe $($rest:tt)*) => {};
}

macro_rules! define_commands {
    (
        $(
            $(#[$attr:meta])*
            $req:ident($($req_arg:expr),*) $safety:tt fn $name:ident($($p:ident: $t:ty),* $(,)?) $(-> $r:ty)? = $sym:ident;
        )*
    ) => {
        impl Gl {
            $(command_method!(gl $safety $name($($p: $t),*) -> entry_ret!($($r)?) = $sym);)*
        }

        impl<'a> RawCommands<'a> {
            $(command_method!(raw $safety $name($($p: $t),*) -> entry_ret!($($r)?) = $sym);)*
        }
    };
}

with_entry_points!(define_commands);

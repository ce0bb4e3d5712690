//! Error types for loading and calling entry points

use crate::consts;
use crate::types::GLenum;
use thiserror::Error;

/// Everything that can go wrong between the resolver and the native call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GlError {
    /// The entry point was not resolved at load time
    #[error("entry point `{name}` is unavailable")]
    Unavailable { name: &'static str },

    /// The call table was never imported
    #[error("entry points have not been loaded")]
    NotInitialized,

    /// Rejected by a marshaling adapter before reaching native code
    #[error("invalid argument to `{entry}`: {reason}")]
    InvalidArgument { entry: &'static str, reason: String },

    /// `glGetError` reported a code after the call
    #[error("`{entry}` failed with {} (0x{code:04X})", code_name(.code))]
    Native { entry: &'static str, code: GLenum },

    /// Strict load policy found core entries the resolver could not provide
    #[error("GL {version} entry points missing: {}", .names.join(", "))]
    MissingMandatory {
        version: String,
        names: Vec<&'static str>,
    },

    /// The system GL library could not be opened
    #[error("failed to open GL library `{path}`: {reason}")]
    Library { path: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl GlError {
    #[inline]
    pub fn invalid(entry: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            entry,
            reason: reason.into(),
        }
    }

    /// Whether the error was raised before any native code ran
    pub fn is_pre_call(&self) -> bool {
        matches!(
            self,
            Self::Unavailable { .. } | Self::NotInitialized | Self::InvalidArgument { .. }
        )
    }
}

pub type GlResult<T> = Result<T, GlError>;

fn code_name(code: &GLenum) -> &'static str {
    consts::name_of(*code).unwrap_or("unknown error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_display_names_code() {
        let err = GlError::Native {
            entry: "glGenTextures",
            code: consts::GL_INVALID_VALUE,
        };
        assert_eq!(
            err.to_string(),
            "`glGenTextures` failed with GL_INVALID_VALUE (0x0501)"
        );
    }

    #[test]
    fn test_native_display_unknown_code() {
        let err = GlError::Native {
            entry: "glClear",
            code: 0xBEEF,
        };
        assert!(err.to_string().contains("unknown error"));
    }

    #[test]
    fn test_missing_mandatory_lists_names() {
        let err = GlError::MissingMandatory {
            version: "3.3".into(),
            names: vec!["glGenVertexArrays", "glBindVertexArray"],
        };
        assert_eq!(
            err.to_string(),
            "GL 3.3 entry points missing: glGenVertexArrays, glBindVertexArray"
        );
    }

    #[test]
    fn test_pre_call_classification() {
        assert!(GlError::NotInitialized.is_pre_call());
        assert!(GlError::invalid("glShaderSource", "empty").is_pre_call());
        assert!(!GlError::Native { entry: "glClear", code: 0x500 }.is_pre_call());
    }
}

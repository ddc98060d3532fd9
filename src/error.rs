//! Error types.
//!
//! `Error` is fatal: the process cannot continue without the graphics
//! factories or its window. `SurfaceError` is recovered inside a surface by
//! discarding and lazily recreating the affected resources.

use std::fmt;

/// Result alias for fatal start-up operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors raised while starting up.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A process-wide factory or device could not be constructed.
    #[error("{message} ({code})")]
    Factory { message: String, code: HResult },

    /// The native window could not be created.
    #[error("unable to create window \"{class}\": {code}")]
    Window { class: String, code: HResult },

    /// Configuration file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn factory(message: impl Into<String>, code: i32) -> Self {
        Error::Factory {
            message: message.into(),
            code: HResult(code),
        }
    }

    /// Native status code, when the error came from the OS.
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::Factory { code, .. } | Error::Window { code, .. } => Some(code.0),
            Error::Config(_) => None,
        }
    }
}

/// Recoverable per-surface errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The client area has a zero dimension; nothing can be created yet.
    #[error("client area is empty")]
    EmptyClientArea,

    /// A device-dependent operation failed; the device tier is rebuilt.
    #[error("{operation} failed ({code})")]
    Device {
        operation: &'static str,
        code: HResult,
    },

    /// The selected image could not be decoded.
    #[error("unable to load image {source_name} ({code})")]
    Image { source_name: String, code: HResult },
}

impl SurfaceError {
    pub fn device(operation: &'static str, code: i32) -> Self {
        SurfaceError::Device {
            operation,
            code: HResult(code),
        }
    }

    /// Device errors invalidate every device-dependent resource.
    pub fn invalidates_device(&self) -> bool {
        matches!(self, SurfaceError::Device { .. })
    }
}

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("unable to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Native status code, displayed the way Windows tools print HRESULTs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HResult(pub i32);

impl fmt::Display for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hresult_prints_as_unsigned_hex() {
        assert_eq!(HResult(0x887A0005u32 as i32).to_string(), "0x887A0005");
        assert_eq!(HResult(0).to_string(), "0x00000000");
    }

    #[test]
    fn factory_error_message_carries_code() {
        let err = Error::factory("Unable to create Direct3D device.", 0x887A0004u32 as i32);
        assert_eq!(
            err.to_string(),
            "Unable to create Direct3D device. (0x887A0004)"
        );
        assert_eq!(err.code(), Some(0x887A0004u32 as i32));
    }

    #[test]
    fn only_device_errors_invalidate_the_device() {
        assert!(SurfaceError::device("Present", -1).invalidates_device());
        assert!(!SurfaceError::EmptyClientArea.invalidates_device());
        let image = SurfaceError::Image {
            source_name: "x.png".into(),
            code: HResult(-1),
        };
        assert!(!image.invalidates_device());
    }
}

//! Error conversion implementations.
//!
//! Lets callers use `?` on lower-level results (JSON decoding, ZIP I/O)
//! inside functions returning the unified [`Error`].

use super::types::{Error, InputError};
use crate::ooxml::error::OoxmlError;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Input(InputError::Json(err))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::Ooxml(OoxmlError::Zip(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_is_input_error() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Input(InputError::Json(_))));
    }

    #[test]
    fn test_zip_io_error_stays_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = zip::result::ZipError::Io(io).into();
        assert!(matches!(err, Error::Io(_)));
    }
}

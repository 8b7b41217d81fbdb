use super::Error;

/// Error when a driver response has an unexpected shape.
///
/// The backend answered, but not with what the operation asked for (a count
/// where rows were expected, an insert that produced no identity).
#[derive(Debug)]
pub(super) struct InvalidResult {
    message: Box<str>,
}

impl std::error::Error for InvalidResult {}

impl core::fmt::Display for InvalidResult {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid result error.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResult(InvalidResult {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an invalid result error.
    pub fn is_invalid_result(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidResult(_))
    }
}

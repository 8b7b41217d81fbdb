use super::Error;

/// Error when a condition cannot be constructed.
///
/// This occurs when:
/// - The condition names an operator that does not exist
/// - An operator receives the wrong number of operands
/// - An operand has the wrong shape (a field name that is not a string, a
///   logical operand that is not itself a condition)
///
/// Raised while the condition is built, before any storage is touched.
#[derive(Debug)]
pub(super) struct InvalidCondition {
    message: Box<str>,
}

impl std::error::Error for InvalidCondition {}

impl core::fmt::Display for InvalidCondition {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid condition: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid condition error.
    pub fn invalid_condition(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidCondition(InvalidCondition {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an invalid condition.
    pub fn is_invalid_condition(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidCondition(_))
    }
}

use super::Error;

/// Error when a query or write cannot be executed as described.
///
/// This occurs when:
/// - A query has no source table
/// - A write targets a table the driver does not know about
/// - A record references an attribute its type does not declare
#[derive(Debug)]
pub(super) struct InvalidStatement {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl core::fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidStatement(_))
    }
}

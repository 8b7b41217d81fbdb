use super::Error;

/// Error when a relation descriptor is misconfigured.
///
/// This occurs when:
/// - The relation targets a record type that was never registered
/// - A via-relation names a relation that does not exist, or the via chain loops
/// - A junction table is referenced but not declared
/// - An array-valued key is declared on the side that cannot hold it
///
/// Reported when the registry is built, or when a link operation meets a
/// mediation shape it cannot write through.
#[derive(Debug)]
pub(super) struct InvalidRelation {
    message: Box<str>,
}

impl std::error::Error for InvalidRelation {}

impl core::fmt::Display for InvalidRelation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid relation: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid relation error.
    pub fn invalid_relation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRelation(InvalidRelation {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an invalid relation.
    pub fn is_invalid_relation(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidRelation(_))
    }
}

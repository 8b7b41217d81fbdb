use super::Error;

/// Error when an operation needs a stored identity and the record has none.
///
/// Linking, unlinking, updating and deleting all address rows by key. A
/// record without a key was never saved, so the caller has a bug to fix.
#[derive(Debug)]
pub(super) struct NotPersisted {
    record_type: Box<str>,
}

impl std::error::Error for NotPersisted {}

impl core::fmt::Display for NotPersisted {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "record of type `{}` has no persisted identity",
            self.record_type
        )
    }
}

impl Error {
    /// Creates a not-persisted error for a record of the given type.
    pub fn not_persisted(record_type: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotPersisted(NotPersisted {
            record_type: record_type.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is a not-persisted error.
    pub fn is_not_persisted(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::NotPersisted(_))
    }
}

use super::Error;

/// Error when a record type has no relation registered under a name.
#[derive(Debug)]
pub(super) struct UnknownRelation {
    record_type: Box<str>,
    name: Box<str>,
}

impl std::error::Error for UnknownRelation {}

impl core::fmt::Display for UnknownRelation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown relation `{}` on record type `{}`",
            self.name, self.record_type
        )
    }
}

impl Error {
    /// Creates an unknown relation error.
    pub fn unknown_relation(record_type: impl Into<String>, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownRelation(UnknownRelation {
            record_type: record_type.into().into(),
            name: name.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an unknown relation error.
    pub fn is_unknown_relation(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::UnknownRelation(_))
    }
}

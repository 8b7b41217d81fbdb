use super::Error;

/// Error when a storage backend rejects an operation.
///
/// This wraps errors from the underlying libraries (rusqlite, JSON decoding,
/// pattern compilation). The engine never retries: the error travels up the
/// awaiting call chain unchanged.
#[derive(Debug)]
pub(super) struct DriverOperationFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver operation failure.
    pub fn driver_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::DriverOperationFailed(
            DriverOperationFailed {
                inner: Box::new(err),
            },
        ))
    }

    /// Returns `true` if the root cause of this error is a driver operation failure.
    pub fn is_driver_operation_failed(&self) -> bool {
        matches!(
            self.root().kind(),
            super::ErrorKind::DriverOperationFailed(_)
        )
    }
}

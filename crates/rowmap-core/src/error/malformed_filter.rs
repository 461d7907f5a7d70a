use super::Error;

/// Error when a filter value cannot be rendered, such as a range that does
/// not have exactly two bounds.
#[derive(Debug)]
pub(super) struct MalformedFilterError {
    message: Box<str>,
}

impl std::error::Error for MalformedFilterError {}

impl core::fmt::Display for MalformedFilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed filter: {}", self.message)
    }
}

impl Error {
    /// Creates a malformed filter error.
    pub fn malformed_filter(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedFilter(MalformedFilterError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a malformed filter error.
    pub fn is_malformed_filter(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MalformedFilter(_)))
    }
}

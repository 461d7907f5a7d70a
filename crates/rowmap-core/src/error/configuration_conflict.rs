use super::Error;

/// Error when a table declaration contradicts itself.
///
/// These are raised while the schema is constructed, never per request:
/// - a `zero_to_null` column that is not `nullable`
/// - a primary key that is not one of the declared columns
/// - an unknown column or relation type name
#[derive(Debug)]
pub(super) struct ConfigurationConflictError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationConflictError {}

impl core::fmt::Display for ConfigurationConflictError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "configuration conflict: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration conflict error.
    pub fn configuration_conflict(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConfigurationConflict(
            ConfigurationConflictError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a configuration conflict error.
    pub fn is_configuration_conflict(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ConfigurationConflict(_)))
    }
}

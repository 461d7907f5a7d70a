use super::Error;

/// Error when a schema column or relation cannot be mapped onto a field of
/// the record type at decode time.
#[derive(Debug)]
pub(super) struct UnresolvedFieldError {
    what: &'static str,
    name: Box<str>,
    model: Box<str>,
}

impl std::error::Error for UnresolvedFieldError {}

impl core::fmt::Display for UnresolvedFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unresolved field: {} `{}` has no field on `{}`",
            self.what, self.name, self.model
        )
    }
}

impl Error {
    /// Creates an unresolved-field error.
    ///
    /// `what` names the schema element (`"column"`, `"relation"`, `"primary key"`).
    pub fn unresolved_field(what: &'static str, name: impl Into<String>, model: &str) -> Error {
        Error::from(super::ErrorKind::UnresolvedField(UnresolvedFieldError {
            what,
            name: name.into().into(),
            model: model.into(),
        }))
    }

    /// Returns `true` if this error is an unresolved-field error.
    pub fn is_unresolved_field(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnresolvedField(_)))
    }
}

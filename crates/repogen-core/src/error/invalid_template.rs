use super::Error;

/// Error when a template cannot be parsed or references something the
/// metadata does not provide.
#[derive(Debug)]
pub(super) struct InvalidTemplate {
    template: Box<str>,
    line: usize,
    message: Box<str>,
}

impl std::error::Error for InvalidTemplate {}

impl core::fmt::Display for InvalidTemplate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid template `{}` (line {}): {}",
            self.template, self.line, self.message
        )
    }
}

impl Error {
    /// Creates an invalid template error. `line` is 1-based.
    pub fn invalid_template(
        template: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidTemplate(InvalidTemplate {
            template: template.into().into(),
            line,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid template error.
    pub fn is_invalid_template(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidTemplate(_)))
    }
}

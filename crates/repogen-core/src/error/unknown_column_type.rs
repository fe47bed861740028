use super::Error;

/// Error when a column's database type is outside the set the type mapper
/// understands.
#[derive(Debug)]
pub(super) struct UnknownColumnType {
    raw_type: Box<str>,
    column: Box<str>,
}

impl std::error::Error for UnknownColumnType {}

impl core::fmt::Display for UnknownColumnType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown column type `{}` for column `{}`",
            self.raw_type, self.column
        )
    }
}

impl Error {
    /// Creates an unknown column type error for `column` declared as `raw_type`.
    pub fn unknown_column_type(raw_type: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownColumnType(UnknownColumnType {
            raw_type: raw_type.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an unknown column type error.
    pub fn is_unknown_column_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnknownColumnType(_)))
    }
}

use std::fmt;

/// Non-fatal findings recorded while building [`TableMetadata`](super::TableMetadata).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// No column is flagged as primary key. Key-based repository operations
    /// render a sentinel instead of a column.
    MissingPrimaryKey { table: String },

    /// More than one column is flagged as primary key. The first one is used
    /// and the others are ordinary fields.
    CompositePrimaryKey { table: String, ignored: Vec<String> },

    /// A column name normalized to something that is not a usable exported
    /// identifier, such as `__`; the field was named after the column's
    /// position instead.
    UnusableName { column: String, renamed_to: String },

    /// A column normalized to the identifier of another column or of a
    /// generated method; the column's field was renamed.
    RenamedField {
        column: String,
        collides_with: String,
        renamed_to: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingPrimaryKey { table } => {
                write!(f, "table `{table}` has no primary key column")
            }
            Warning::CompositePrimaryKey { table, ignored } => write!(
                f,
                "table `{table}` has several primary key columns; ignoring {}",
                ignored.join(", ")
            ),
            Warning::UnusableName { column, renamed_to } => write!(
                f,
                "column `{column}` has no usable identifier; field named `{renamed_to}`"
            ),
            Warning::RenamedField {
                column,
                collides_with,
                renamed_to,
            } => write!(
                f,
                "column `{column}` collides with `{collides_with}`; field renamed to `{renamed_to}`"
            ),
        }
    }
}

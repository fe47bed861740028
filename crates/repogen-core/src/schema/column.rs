use serde::{Deserialize, Serialize};

/// A physical column as reported by schema introspection.
///
/// The order of columns handed to [`TableMetadata::build`](super::TableMetadata::build)
/// is the declaration order of every generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// The name of the column in the database.
    pub name: String,

    /// The database type name, e.g. `varchar` or `bigint`.
    pub raw_type: String,

    /// Whether or not the column is nullable
    #[serde(default)]
    pub nullable: bool,

    /// True if the column is part of the table's primary key
    #[serde(default)]
    pub primary_key: bool,
}

impl ColumnDescriptor {
    /// A non-null, non-key column.
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.into(),
            raw_type: raw_type.into(),
            nullable: false,
            primary_key: false,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }
}

use super::{ColumnType, FieldType};

/// A record field derived from one [`ColumnDescriptor`](super::ColumnDescriptor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column name as stored in the database
    pub raw_name: String,

    /// Exported Go identifier
    pub exported_name: String,

    /// Column type family the Go type was mapped from
    pub column_type: ColumnType,

    /// Go type of the field
    pub target_type: FieldType,

    /// True only for the field chosen as the table's primary key
    pub primary_key: bool,
}

impl FieldDescriptor {
    pub fn is_temporal(&self) -> bool {
        self.column_type.is_temporal()
    }
}

mod column;
pub use column::ColumnDescriptor;

mod field;
pub use field::FieldDescriptor;

mod initialisms;
pub use initialisms::Initialisms;

mod name;
pub use name::Normalizer;

mod options;
pub use options::{GenerationOptions, Packages};

mod table;
pub use table::TableMetadata;

mod ty;
pub use ty::{ColumnType, FieldType};

mod warning;
pub use warning::Warning;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{
    ColumnDescriptor, FieldDescriptor, FieldType, GenerationOptions, Initialisms, Normalizer,
    TableMetadata, Warning,
};

/// A Result type alias that uses repogen's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

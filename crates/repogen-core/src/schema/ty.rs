use std::fmt;

/// Database column type families understood by the type mapper.
///
/// `ColumnType` is the **input** side of the mapping: the `DATA_TYPE` reported
/// by the database for a column, reduced to the families that map to the same
/// Go type. Anything outside this closed set has no mapping.
///
/// | family       | raw names                                                          |
/// |--------------|--------------------------------------------------------------------|
/// | `Integer`    | `tinyint`, `smallint`, `mediumint`, `int`                          |
/// | `BigInteger` | `bigint`                                                           |
/// | `Text`       | `char`, `enum`, `varchar`, `tinytext`, `text`, `mediumtext`, `longtext` |
/// | `Temporal`   | `date`, `datetime`, `time`, `timestamp`                            |
/// | `Double`     | `decimal`, `double`                                                |
/// | `Float`      | `float`                                                            |
/// | `Binary`     | `binary`, `varbinary`, `blob`, `mediumblob`, `longblob`            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    BigInteger,
    Text,
    Temporal,
    Double,
    Float,
    Binary,
}

impl ColumnType {
    /// Parses a raw database type name. Matching ignores ASCII case and
    /// surrounding whitespace.
    pub fn parse(raw: &str) -> Option<ColumnType> {
        let raw = raw.trim().to_ascii_lowercase();

        let ty = match raw.as_str() {
            "tinyint" | "int" | "smallint" | "mediumint" => ColumnType::Integer,
            "bigint" => ColumnType::BigInteger,
            "char" | "enum" | "varchar" | "longtext" | "mediumtext" | "text" | "tinytext" => {
                ColumnType::Text
            }
            "date" | "datetime" | "time" | "timestamp" => ColumnType::Temporal,
            "decimal" | "double" => ColumnType::Double,
            "float" => ColumnType::Float,
            "binary" | "blob" | "longblob" | "mediumblob" | "varbinary" => ColumnType::Binary,
            _ => return None,
        };

        Some(ty)
    }

    pub fn is_temporal(self) -> bool {
        matches!(self, ColumnType::Temporal)
    }

    /// Maps this column type to the Go field type.
    ///
    /// `null_wrapper` selects the `gopkg.in/guregu/null` types over the
    /// standard library's `database/sql` null types for nullable columns.
    ///
    /// The binary family always maps to `[]byte`: a nil slice already encodes
    /// SQL `NULL`, so nullability is ignored for it.
    pub fn field_type(self, nullable: bool, null_wrapper: bool) -> FieldType {
        use FieldType::*;

        match (self, nullable, null_wrapper) {
            (ColumnType::Integer, false, _) => Int,
            (ColumnType::BigInteger, false, _) => Int64,
            (ColumnType::Integer | ColumnType::BigInteger, true, true) => NullInt,
            (ColumnType::Integer | ColumnType::BigInteger, true, false) => SqlNullInt64,

            (ColumnType::Text, false, _) => String,
            (ColumnType::Text, true, true) => NullString,
            (ColumnType::Text, true, false) => SqlNullString,

            (ColumnType::Temporal, false, _) => Time,
            (ColumnType::Temporal, true, true) => NullTime,
            (ColumnType::Temporal, true, false) => SqlNullTime,

            (ColumnType::Double, false, _) => Float64,
            (ColumnType::Float, false, _) => Float32,
            (ColumnType::Double | ColumnType::Float, true, true) => NullFloat,
            (ColumnType::Double | ColumnType::Float, true, false) => SqlNullFloat64,

            (ColumnType::Binary, _, _) => Bytes,
        }
    }
}

/// Go field types emitted into the generated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int,
    Int64,
    Float32,
    Float64,
    String,
    Time,
    Bytes,

    /// `gopkg.in/guregu/null` wrappers
    NullInt,
    NullFloat,
    NullString,
    NullTime,

    /// `database/sql` null types
    SqlNullInt64,
    SqlNullFloat64,
    SqlNullString,
    SqlNullTime,
}

impl FieldType {
    /// Maps a raw database type to a Go field type.
    ///
    /// Returns `None` for raw types outside the closed set understood by
    /// [`ColumnType::parse`]; callers must treat that as an error rather than
    /// emit an empty type.
    pub fn map(raw_type: &str, nullable: bool, null_wrapper: bool) -> Option<FieldType> {
        ColumnType::parse(raw_type).map(|ty| ty.field_type(nullable, null_wrapper))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Int64 => "int64",
            FieldType::Float32 => "float32",
            FieldType::Float64 => "float64",
            FieldType::String => "string",
            FieldType::Time => "time.Time",
            FieldType::Bytes => "[]byte",
            FieldType::NullInt => "null.Int",
            FieldType::NullFloat => "null.Float",
            FieldType::NullString => "null.String",
            FieldType::NullTime => "null.Time",
            FieldType::SqlNullInt64 => "sql.NullInt64",
            FieldType::SqlNullFloat64 => "sql.NullFloat64",
            FieldType::SqlNullString => "sql.NullString",
            FieldType::SqlNullTime => "sql.NullTime",
        }
    }

    /// True for the `null.*` wrapper types, which need the wrapper import.
    pub fn is_null_wrapper(self) -> bool {
        matches!(
            self,
            FieldType::NullInt | FieldType::NullFloat | FieldType::NullString | FieldType::NullTime
        )
    }

    /// True for the `sql.Null*` types, which need the `database/sql` import.
    pub fn is_sql_null(self) -> bool {
        matches!(
            self,
            FieldType::SqlNullInt64
                | FieldType::SqlNullFloat64
                | FieldType::SqlNullString
                | FieldType::SqlNullTime
        )
    }

    /// True if the Go type is spelled with the `time` package.
    pub fn uses_time_package(self) -> bool {
        matches!(self, FieldType::Time)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

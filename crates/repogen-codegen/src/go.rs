//! Go spellings the templates cannot derive on their own.

use repogen_core::{err, FieldDescriptor, FieldType, GenerationOptions, Result};

/// Package that must be imported to spell `ty`, if any.
pub(crate) fn import_for(ty: FieldType, options: &GenerationOptions) -> Option<&str> {
    if ty.is_sql_null() {
        Some("database/sql")
    } else if ty.is_null_wrapper() {
        Some(&options.null_import)
    } else if ty.uses_time_package() {
        Some("time")
    } else {
        None
    }
}

/// The zero value of `ty` as a Go expression.
pub(crate) fn zero_value(ty: FieldType) -> String {
    match ty {
        FieldType::Int | FieldType::Int64 | FieldType::Float32 | FieldType::Float64 => {
            "0".to_string()
        }
        FieldType::String => "\"\"".to_string(),
        FieldType::Bytes => "nil".to_string(),
        _ => format!("{ty}{{}}"),
    }
}

/// Expression assigning the current time to a field of type `ty`. Integer
/// timestamps hold Unix seconds.
pub(crate) fn now_expr(ty: FieldType) -> Result<&'static str> {
    let expr = match ty {
        FieldType::Time => "time.Now()",
        FieldType::NullTime => "null.TimeFrom(time.Now())",
        FieldType::SqlNullTime => "sql.NullTime{Time: time.Now(), Valid: true}",
        FieldType::Int => "int(time.Now().Unix())",
        FieldType::Int64 => "time.Now().Unix()",
        FieldType::NullInt => "null.IntFrom(time.Now().Unix())",
        FieldType::SqlNullInt64 => "sql.NullInt64{Int64: time.Now().Unix(), Valid: true}",
        _ => return Err(err!("cannot store a timestamp in a `{ty}` field")),
    };

    Ok(expr)
}

/// The struct tag contents for `field`, without the surrounding backquotes.
/// Empty when neither tag kind is enabled.
pub(crate) fn struct_tags(field: &FieldDescriptor, options: &GenerationOptions) -> String {
    let mut tags = vec![];

    if options.include_orm_tags {
        if field.primary_key {
            tags.push(format!("gorm:\"column:{};primary_key\"", field.raw_name));
        } else {
            tags.push(format!("gorm:\"column:{}\"", field.raw_name));
        }
    }

    if options.include_json_tags {
        tags.push(format!("json:\"{}\"", field.raw_name));
    }

    tags.join(" ")
}

/// The package name declared by a package at `path`: its last segment.
pub(crate) fn package_name(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

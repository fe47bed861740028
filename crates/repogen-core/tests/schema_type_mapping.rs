use repogen_core::{schema::ColumnType, FieldType};

const RECOGNIZED: &[&str] = &[
    "tinyint",
    "smallint",
    "mediumint",
    "int",
    "bigint",
    "char",
    "enum",
    "varchar",
    "tinytext",
    "text",
    "mediumtext",
    "longtext",
    "date",
    "datetime",
    "time",
    "timestamp",
    "decimal",
    "double",
    "float",
    "binary",
    "varbinary",
    "blob",
    "mediumblob",
    "longblob",
];

#[test]
fn every_recognized_type_maps_in_all_modes() {
    for raw in RECOGNIZED {
        for nullable in [false, true] {
            for wrapper in [false, true] {
                let ty = FieldType::map(raw, nullable, wrapper)
                    .unwrap_or_else(|| panic!("{raw} has no mapping"));
                assert!(!ty.as_str().is_empty());
            }
        }
    }
}

#[test]
fn unrecognized_types_have_no_mapping() {
    for raw in ["geometry", "json", "bit", "year", "set", ""] {
        assert_eq!(FieldType::map(raw, false, false), None, "{raw}");
    }
}

#[test]
fn binary_ignores_nullability() {
    for raw in ["binary", "varbinary", "blob", "mediumblob", "longblob"] {
        for wrapper in [false, true] {
            assert_eq!(FieldType::map(raw, false, wrapper), Some(FieldType::Bytes));
            assert_eq!(FieldType::map(raw, true, wrapper), Some(FieldType::Bytes));
        }
    }
}

#[test]
fn temporal_family() {
    for raw in ["date", "datetime", "time", "timestamp"] {
        assert_eq!(ColumnType::parse(raw), Some(ColumnType::Temporal));
        assert_eq!(FieldType::map(raw, false, false), Some(FieldType::Time));
        assert_eq!(FieldType::map(raw, true, true), Some(FieldType::NullTime));
        assert_eq!(FieldType::map(raw, true, false), Some(FieldType::SqlNullTime));
    }
}

#[test]
fn text_family() {
    assert_eq!(FieldType::map("enum", false, false), Some(FieldType::String));
    assert_eq!(FieldType::map("longtext", true, true), Some(FieldType::NullString));
    assert_eq!(
        FieldType::map("char", true, false),
        Some(FieldType::SqlNullString)
    );
}

#[test]
fn go_spellings() {
    assert_eq!(FieldType::Int64.to_string(), "int64");
    assert_eq!(FieldType::Time.to_string(), "time.Time");
    assert_eq!(FieldType::Bytes.to_string(), "[]byte");
    assert_eq!(FieldType::NullFloat.to_string(), "null.Float");
    assert_eq!(FieldType::SqlNullFloat64.to_string(), "sql.NullFloat64");
}

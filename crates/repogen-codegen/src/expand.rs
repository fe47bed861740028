mod imports;
use imports::Imports;

use crate::go;
use crate::template::Scope;

use repogen_core::{FieldDescriptor, FieldType, GenerationOptions, Result, TableMetadata};

/// Builds the scope every artifact template is rendered against.
///
/// | variable            | value                                                    |
/// |---------------------|----------------------------------------------------------|
/// | `TableName`         | raw table name                                           |
/// | `StructName`        | record type name                                         |
/// | `ModelPackage`      | package name of the record                               |
/// | `RepositoryPackage` | package name of the repository interface                 |
/// | `ImplPackage`       | package name of the implementation                       |
/// | `Fields`            | list of `Name`, `Column`, `Type`, `Tags`                 |
/// | `PrimaryKey`        | object with `Name`, `Column`, `Type`; absent without key |
/// | `KeyType`           | Go type of the key, `int` without key                    |
/// | `KeyZero`           | zero value of `KeyType`                                  |
/// | `CreatedAt`         | object with `Name`, `Column`, `Now`; absent if unresolved |
/// | `UpdatedAt`         | same as `CreatedAt`                                      |
/// | `HasRecordImports`  | true if the record imports anything                      |
/// | `RecordImports`     | list of `Path`                                           |
/// | `RepositoryImports` | list of `Path`                                           |
/// | `ImplImports`       | list of `Path`                                           |
pub(crate) fn root_scope(metadata: &TableMetadata, options: &GenerationOptions) -> Result<Scope> {
    let packages = &options.packages;
    let key_type = metadata.primary_key().map(|field| field.target_type);
    let created_at = metadata.created_at();
    let updated_at = metadata.updated_at();

    let fields: Vec<Scope> = metadata
        .fields()
        .iter()
        .map(|field| {
            Scope::new()
                .with("Name", field.exported_name.as_str())
                .with("Column", field.raw_name.as_str())
                .with("Type", field.target_type.as_str())
                .with("Tags", go::struct_tags(field, options))
        })
        .collect();

    let primary_key = metadata.primary_key().map(|field| {
        Scope::new()
            .with("Name", field.exported_name.as_str())
            .with("Column", field.raw_name.as_str())
            .with("Type", field.target_type.as_str())
    });

    let mut record_imports = Imports::new();
    if metadata.uses_sql_null() {
        record_imports.add("database/sql");
    }
    if metadata.uses_time() {
        record_imports.add("time");
    }
    if metadata.uses_null_wrapper() {
        record_imports.add(&options.null_import);
    }

    if !packages.has_module() {
        tracing::warn!(
            table = %metadata.table_name(),
            "no Go module path set; generated packages import bare package names"
        );
    }

    // One of the repository's sentinel errors is always declared.
    let mut repository_imports = Imports::new();
    repository_imports.add("errors");
    repository_imports.add(packages.model_import());
    repository_imports.add_opt(key_type.and_then(|ty| go::import_for(ty, options)));

    let mut impl_imports = Imports::new();
    impl_imports.add("errors");
    impl_imports.add(&options.orm_import);
    impl_imports.add(packages.model_import());
    impl_imports.add(packages.repository_import());
    impl_imports.add_opt(key_type.and_then(|ty| go::import_for(ty, options)));
    for field in [created_at, updated_at].into_iter().flatten() {
        impl_imports.add("time");
        impl_imports.add_opt(go::import_for(field.target_type, options));
    }

    let key_type = key_type.unwrap_or(FieldType::Int);

    let mut scope = Scope::new();
    scope
        .set("TableName", metadata.table_name())
        .set("StructName", metadata.struct_name())
        .set("ModelPackage", go::package_name(&packages.model))
        .set("RepositoryPackage", go::package_name(&packages.repository))
        .set("ImplPackage", go::package_name(&packages.implementation))
        .set("Fields", fields)
        .set("PrimaryKey", primary_key)
        .set("KeyType", key_type.as_str())
        .set("KeyZero", go::zero_value(key_type))
        .set("CreatedAt", created_at.map(timestamp).transpose()?)
        .set("UpdatedAt", updated_at.map(timestamp).transpose()?)
        .set("HasRecordImports", !record_imports.is_empty())
        .set("RecordImports", record_imports.into_scopes())
        .set("RepositoryImports", repository_imports.into_scopes())
        .set("ImplImports", impl_imports.into_scopes());

    Ok(scope)
}

fn timestamp(field: &FieldDescriptor) -> Result<Scope> {
    let now = go::now_expr(field.target_type).map_err(|err| {
        err.context(format!("timestamp column `{}`", field.raw_name))
    })?;

    Ok(Scope::new()
        .with("Name", field.exported_name.as_str())
        .with("Column", field.raw_name.as_str())
        .with("Now", now))
}

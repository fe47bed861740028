use super::{
    ColumnDescriptor, ColumnType, FieldDescriptor, GenerationOptions, Normalizer, Warning,
};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Everything the templates need to know about one table.
///
/// Built once per generation run by [`TableMetadata::build`] and immutable
/// afterwards. Every artifact is rendered from the same instance, so they all
/// agree on the struct name and field identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMetadata {
    table_name: String,
    struct_name: String,

    /// One field per column, in column order
    fields: Vec<FieldDescriptor>,

    /// Indices into `fields`
    primary_key: Option<usize>,
    created_at: Option<usize>,
    updated_at: Option<usize>,

    uses_null_wrapper: bool,
    uses_sql_null: bool,
    uses_time: bool,

    warnings: Vec<Warning>,
}

/// Methods the generated record defines; a field may not share their names.
const RESERVED_FIELD_NAMES: &[&str] = &["TableName"];

/// Which timestamp is being resolved; used for sniffing and messages.
#[derive(Debug, Clone, Copy)]
enum Timestamp {
    CreatedAt,
    UpdatedAt,
}

impl TableMetadata {
    /// Builds the metadata for `table_name` using the normalizer configured
    /// by `options`.
    ///
    /// Fails with an unknown column type error if a column's type cannot be
    /// mapped, and with a configuration error if the table has no columns, an
    /// explicit timestamp column does not exist, or ORM tags are requested
    /// and a timestamp column cannot be resolved.
    pub fn build(
        table_name: impl Into<String>,
        struct_name: impl Into<String>,
        columns: &[ColumnDescriptor],
        options: &GenerationOptions,
    ) -> Result<TableMetadata> {
        Self::build_with(
            table_name,
            struct_name,
            columns,
            options,
            &options.normalizer(),
        )
    }

    /// Like [`build`](Self::build) with an explicit normalizer.
    pub fn build_with(
        table_name: impl Into<String>,
        struct_name: impl Into<String>,
        columns: &[ColumnDescriptor],
        options: &GenerationOptions,
        normalizer: &Normalizer,
    ) -> Result<TableMetadata> {
        let table_name = table_name.into();
        let struct_name = struct_name.into();

        if columns.is_empty() {
            return Err(Error::configuration(format!(
                "table `{table_name}` has no columns"
            )));
        }

        let mut fields = Vec::with_capacity(columns.len());
        let mut warnings = vec![];

        // exported name -> raw column name
        let mut seen: IndexMap<String, String> = RESERVED_FIELD_NAMES
            .iter()
            .map(|name| (name.to_string(), format!("{name}()")))
            .collect();
        let mut primary_key = None;
        let mut ignored_keys = vec![];

        for (index, column) in columns.iter().enumerate() {
            let column_type = ColumnType::parse(&column.raw_type).ok_or_else(|| {
                Error::unknown_column_type(&column.raw_type, &column.name)
                    .context(format!("table `{table_name}`"))
            })?;
            let target_type =
                column_type.field_type(column.nullable, options.use_nullable_wrapper_types);

            let mut exported_name = normalizer.normalize(&column.name);
            if !exported_name.starts_with(char::is_alphabetic) {
                let renamed_to = format!("Column{}", index + 1);
                warnings.push(Warning::UnusableName {
                    column: column.name.clone(),
                    renamed_to: renamed_to.clone(),
                });
                exported_name = renamed_to;
            }

            if let Some(collides_with) = seen.get(&exported_name) {
                let renamed_to = (2..)
                    .map(|n| format!("{exported_name}{n}"))
                    .find(|candidate| !seen.contains_key(candidate))
                    .unwrap_or_default();

                warnings.push(Warning::RenamedField {
                    column: column.name.clone(),
                    collides_with: collides_with.clone(),
                    renamed_to: renamed_to.clone(),
                });
                exported_name = renamed_to;
            }

            let is_primary_key = column.primary_key && primary_key.is_none();
            if is_primary_key {
                primary_key = Some(index);
            } else if column.primary_key {
                ignored_keys.push(column.name.clone());
            }

            tracing::debug!(
                table = %table_name,
                column = %column.name,
                raw_type = %column.raw_type,
                field = %exported_name,
                ty = %target_type,
                "mapped column"
            );

            seen.insert(exported_name.clone(), column.name.clone());
            fields.push(FieldDescriptor {
                raw_name: column.name.clone(),
                exported_name,
                column_type,
                target_type,
                primary_key: is_primary_key,
            });
        }

        let created_at = resolve_timestamp(
            &table_name,
            &fields,
            options.created_at_override(),
            Timestamp::CreatedAt,
        )?;
        let updated_at = resolve_timestamp(
            &table_name,
            &fields,
            options.updated_at_override(),
            Timestamp::UpdatedAt,
        )?;

        if options.include_orm_tags {
            for (resolved, which) in [
                (created_at, Timestamp::CreatedAt),
                (updated_at, Timestamp::UpdatedAt),
            ] {
                if resolved.is_none() {
                    return Err(Error::configuration(format!(
                        "table `{table_name}` has no {} column; ORM repositories need one, \
                         name it explicitly with the {} option",
                        which.label(),
                        which.option_name(),
                    )));
                }
            }
        }

        if primary_key.is_none() {
            let warning = Warning::MissingPrimaryKey {
                table: table_name.clone(),
            };
            tracing::warn!("{warning}");
            warnings.push(warning);
        }

        if !ignored_keys.is_empty() {
            let warning = Warning::CompositePrimaryKey {
                table: table_name.clone(),
                ignored: ignored_keys,
            };
            tracing::warn!("{warning}");
            warnings.push(warning);
        }

        let uses_null_wrapper = fields.iter().any(|f| f.target_type.is_null_wrapper());
        let uses_sql_null = fields.iter().any(|f| f.target_type.is_sql_null());
        let uses_time = fields.iter().any(|f| f.target_type.uses_time_package());

        Ok(TableMetadata {
            table_name,
            struct_name,
            fields,
            primary_key,
            created_at,
            updated_at,
            uses_null_wrapper,
            uses_sql_null,
            uses_time,
            warnings,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn struct_name(&self) -> &str {
        &self.struct_name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// The field for the first column flagged as primary key.
    pub fn primary_key(&self) -> Option<&FieldDescriptor> {
        self.primary_key.map(|i| &self.fields[i])
    }

    pub fn created_at(&self) -> Option<&FieldDescriptor> {
        self.created_at.map(|i| &self.fields[i])
    }

    pub fn updated_at(&self) -> Option<&FieldDescriptor> {
        self.updated_at.map(|i| &self.fields[i])
    }

    /// True if any field uses a nullable wrapper type, which needs the
    /// wrapper package import.
    pub fn uses_null_wrapper(&self) -> bool {
        self.uses_null_wrapper
    }

    /// True if any field uses a `database/sql` null type.
    pub fn uses_sql_null(&self) -> bool {
        self.uses_sql_null
    }

    /// True if any field is a `time.Time`.
    pub fn uses_time(&self) -> bool {
        self.uses_time
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

impl Timestamp {
    fn needle(self) -> &'static str {
        match self {
            Timestamp::CreatedAt => "create",
            Timestamp::UpdatedAt => "update",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Timestamp::CreatedAt => "created-at",
            Timestamp::UpdatedAt => "updated-at",
        }
    }

    fn option_name(self) -> &'static str {
        match self {
            Timestamp::CreatedAt => "`explicit_created_at_column`",
            Timestamp::UpdatedAt => "`explicit_updated_at_column`",
        }
    }
}

/// An explicit column wins; otherwise the first temporal column whose name
/// contains the needle.
fn resolve_timestamp(
    table_name: &str,
    fields: &[FieldDescriptor],
    explicit: Option<&str>,
    which: Timestamp,
) -> Result<Option<usize>> {
    let resolved = match explicit {
        Some(column) => {
            let index = fields
                .iter()
                .position(|field| field.raw_name.eq_ignore_ascii_case(column))
                .ok_or_else(|| {
                    Error::configuration(format!(
                        "{} column `{column}` does not exist in table `{table_name}`",
                        which.label()
                    ))
                })?;

            let column_type = fields[index].column_type;
            if !matches!(
                column_type,
                ColumnType::Temporal | ColumnType::Integer | ColumnType::BigInteger
            ) {
                return Err(Error::configuration(format!(
                    "{} column `{column}` in table `{table_name}` must be a temporal or \
                     integer column, found {column_type:?}",
                    which.label()
                )));
            }

            Some(index)
        }
        None => fields.iter().position(|field| {
            field.is_temporal() && field.raw_name.to_lowercase().contains(which.needle())
        }),
    };

    if let Some(index) = resolved {
        tracing::debug!(
            table = %table_name,
            column = %fields[index].raw_name,
            "resolved {} column",
            which.label()
        );
    }

    Ok(resolved)
}

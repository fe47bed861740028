use pretty_assertions::assert_eq;
use repogen_codegen::{render, ArtifactKind, Templates};
use repogen_core::{ColumnDescriptor, GenerationOptions, TableMetadata};

use std::path::Path;

fn users() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id", "int").primary_key(true),
        ColumnDescriptor::new("user_name", "varchar"),
        ColumnDescriptor::new("created_at", "datetime"),
        ColumnDescriptor::new("updated_at", "datetime"),
    ]
}

#[test]
fn users_metadata() {
    let metadata =
        TableMetadata::build("users", "User", &users(), &GenerationOptions::default()).unwrap();

    assert_eq!(metadata.primary_key().unwrap().exported_name, "ID");
    assert_eq!(metadata.fields()[1].exported_name, "UserName");
    assert_eq!(metadata.fields()[1].target_type.as_str(), "string");
    assert_eq!(metadata.created_at().unwrap().exported_name, "CreatedAt");
    assert_eq!(metadata.updated_at().unwrap().exported_name, "UpdatedAt");
    assert!(metadata.warnings().is_empty());
}

#[test]
fn users_record() {
    let options = GenerationOptions::default();
    let metadata = TableMetadata::build("users", "User", &users(), &options).unwrap();
    let artifacts = render(&metadata, &options, &Templates::go_gorm().unwrap()).unwrap();

    assert_eq!(artifacts.record.kind, ArtifactKind::Record);
    assert_eq!(artifacts.record.path, Path::new("model/users_model.go"));
    assert_eq!(
        artifacts.record.contents,
        r#"package model

import (
	"time"
)

// User maps a row of table users.
type User struct {
	ID int
	UserName string
	CreatedAt time.Time
	UpdatedAt time.Time
}

// TableName returns the name of the table backing User.
func (User) TableName() string {
	return "users"
}
"#
    );
}

#[test]
fn users_every_artifact_names_the_table() {
    let options = GenerationOptions::default();
    let metadata = TableMetadata::build("users", "User", &users(), &options).unwrap();
    let artifacts = render(&metadata, &options, &Templates::go_gorm().unwrap()).unwrap();

    for artifact in artifacts.iter() {
        assert!(
            artifact.contents.contains("\"users\""),
            "{:?} does not reference the table literal",
            artifact.kind
        );
    }
}

#[test]
fn users_repository_interface() {
    let options = GenerationOptions::default();
    let metadata = TableMetadata::build("users", "User", &users(), &options).unwrap();
    let artifacts = render(&metadata, &options, &Templates::go_gorm().unwrap()).unwrap();
    let repository = &artifacts.repository.contents;

    assert_eq!(
        artifacts.repository.path,
        Path::new("repository/users_repository.go")
    );
    assert!(repository.starts_with(
        "package repository\n\nimport (\n\t\"errors\"\n\t\"model\"\n)\n"
    ));
    assert!(repository.contains("type UserRepository interface {"));
    assert!(repository.contains("\tCreate(m *model.User) (int, error)\n"));
    assert!(repository.contains("opts *UserSearchOptions) ([]*model.User, error)\n"));
    assert!(repository.contains("\tOffset *int\n"));
    assert!(!repository.contains("NoPrimaryKey"));
    assert!(repository.contains(
        "var ErrUserNotNewRecord = errors.New(\"users: this is not a new record\")\n"
    ));
}

#[test]
fn users_repository_implementation() {
    let options = GenerationOptions::default();
    let metadata = TableMetadata::build("users", "User", &users(), &options).unwrap();
    let artifacts = render(&metadata, &options, &Templates::go_gorm().unwrap()).unwrap();
    let imp = &artifacts.repository_impl.contents;

    assert_eq!(
        artifacts.repository_impl.path,
        Path::new("repository/mysql/users_repository.go")
    );
    assert!(imp.starts_with(concat!(
        "package mysql\n\nimport (\n",
        "\t\"errors\"\n\t\"model\"\n\t\"repository\"\n\t\"time\"\n",
        "\t\"github.com/jinzhu/gorm\"\n)\n",
    )));
    assert!(imp.contains("type userRepository struct {"));
    assert!(imp.contains("func NewUserRepository(db *gorm.DB) repository.UserRepository {"));
    assert!(imp.contains("\tm.CreatedAt = time.Now()\n\tm.UpdatedAt = time.Now()\n"));
    assert!(imp.contains("\treturn m.ID, nil\n"));
    assert!(imp.contains("q.Where(\"`id` = ?\", id).First(&m)"));
    assert!(imp.contains("q.Where(\"`id` IN (?)\", ids)"));
    assert!(imp.contains("\tfields[\"updated_at\"] = time.Now()\n"));
    assert!(!imp.contains("{{"));
}

#[test]
fn where_entries_without_an_argument_are_raw_conditions() {
    let options = GenerationOptions::default();
    let metadata = TableMetadata::build("users", "User", &users(), &options).unwrap();
    let artifacts = render(&metadata, &options, &Templates::go_gorm().unwrap()).unwrap();
    let imp = &artifacts.repository_impl.contents;

    assert!(imp.contains(
        "\tfor cond, arg := range where {\n\
         \t\tif arg != nil {\n\
         \t\t\tq = q.Where(cond, arg)\n\
         \t\t} else {\n\
         \t\t\tq = q.Where(cond)\n\
         \t\t}\n"
    ));
    assert!(!imp.contains("q = q.Where(cond, arg)\n\t}\n\treturn q"));
}

#[test]
fn fetches_select_fields_and_tolerate_missing_rows() {
    let options = GenerationOptions::default();
    let metadata = TableMetadata::build("users", "User", &users(), &options).unwrap();
    let artifacts = render(&metadata, &options, &Templates::go_gorm().unwrap()).unwrap();
    let repository = &artifacts.repository.contents;
    let imp = &artifacts.repository_impl.contents;

    for signature in [
        "FetchOneById(id int, fields []string) (*model.User, error)",
        "FetchOne(where map[string]interface{}, fields []string) (*model.User, error)",
        "FetchByWhere(where map[string]interface{}, fields []string) ([]*model.User, error)",
        "FetchByIds(ids []int, fields []string) ([]*model.User, error)",
    ] {
        assert!(repository.contains(&format!("\t{signature}\n")), "{signature}");
        assert!(
            imp.contains(&format!("func (r *userRepository) {signature} {{\n")),
            "{signature}"
        );
    }

    assert!(imp.contains("\tif len(fields) > 0 {\n\t\tq = q.Select(fields)\n\t}\n"));
    assert_eq!(
        imp.matches("q := selectUserFields(r.db.Table(r.TableName()), fields)").count(),
        5
    );
    assert_eq!(
        imp.matches("\t\tif errors.Is(err, gorm.ErrRecordNotFound) {\n\t\t\treturn nil, nil\n")
            .count(),
        2
    );
}

#[test]
fn create_rejects_records_with_a_key() {
    let options = GenerationOptions::default();
    let metadata = TableMetadata::build("users", "User", &users(), &options).unwrap();
    let artifacts = render(&metadata, &options, &Templates::go_gorm().unwrap()).unwrap();
    let imp = &artifacts.repository_impl.contents;

    assert!(imp.contains(
        "(m *model.User) (int, error) {\n\
         \tif !r.db.NewRecord(m) {\n\
         \t\treturn 0, repository.ErrUserNotNewRecord\n\
         \t}\n\
         \tm.CreatedAt = time.Now()\n"
    ));
}

#[test]
fn interface_and_implementation_agree() {
    let options = GenerationOptions::default();
    let metadata = TableMetadata::build("users", "User", &users(), &options).unwrap();
    let artifacts = render(&metadata, &options, &Templates::go_gorm().unwrap()).unwrap();

    let methods: Vec<&str> = artifacts
        .repository
        .contents
        .lines()
        .skip_while(|line| !line.starts_with("type UserRepository interface"))
        .skip(1)
        .take_while(|line| *line != "}")
        .filter_map(|line| line.trim().split('(').next())
        .collect();

    assert_eq!(methods.len(), 12);
    for method in methods {
        assert!(
            artifacts
                .repository_impl
                .contents
                .contains(&format!("func (r *userRepository) {method}(")),
            "implementation is missing {method}"
        );
    }
}

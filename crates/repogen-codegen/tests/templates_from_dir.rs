use pretty_assertions::assert_eq;
use repogen_codegen::{render, Templates};
use repogen_core::{ColumnDescriptor, GenerationOptions, TableMetadata};

use std::fs;

fn metadata(options: &GenerationOptions) -> TableMetadata {
    let columns = [
        ColumnDescriptor::new("id", "int").primary_key(true),
        ColumnDescriptor::new("email_address", "varchar"),
    ];
    TableMetadata::build("accounts", "Account", &columns, options).unwrap()
}

#[test]
fn override_one_template() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("record.tpl"),
        "{{#Fields}}\n{{Column}} -> {{Name}}\n{{/Fields}}\n",
    )
    .unwrap();

    let templates = Templates::from_dir(dir.path()).unwrap();
    let options = GenerationOptions::default();
    let artifacts = render(&metadata(&options), &options, &templates).unwrap();

    assert_eq!(
        artifacts.record.contents,
        "id -> ID\nemail_address -> EmailAddress\n"
    );
    assert!(artifacts
        .repository
        .contents
        .contains("type AccountRepository interface {"));
}

#[test]
fn broken_override_reports_file_and_line() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("repository_impl.tpl"),
        "package x\n\n{{#PrimaryKey}}\n",
    )
    .unwrap();

    let err = Templates::from_dir(dir.path()).unwrap_err();
    assert!(err.is_invalid_template());
    assert_eq!(
        err.to_string(),
        "invalid template `repository_impl` (line 3): unclosed section `PrimaryKey`"
    );
}

#[test]
fn unknown_variable_fails_render() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("repository.tpl"), "{{Nope}}").unwrap();

    let templates = Templates::from_dir(dir.path()).unwrap();
    let options = GenerationOptions::default();
    let err = render(&metadata(&options), &options, &templates).unwrap_err();

    assert!(err.is_invalid_template());
    assert_eq!(
        err.to_string(),
        "rendering repository for table `accounts`: \
         invalid template `repository` (line 1): unknown variable `Nope`"
    );
}

#[test]
fn empty_dir_uses_builtin_templates() {
    let dir = tempfile::tempdir().unwrap();
    let options = GenerationOptions::default();

    let builtin = render(&metadata(&options), &options, &Templates::go_gorm().unwrap()).unwrap();
    let loaded = render(
        &metadata(&options),
        &options,
        &Templates::from_dir(dir.path()).unwrap(),
    )
    .unwrap();

    assert_eq!(builtin, loaded);
}

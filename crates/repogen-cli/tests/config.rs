use pretty_assertions::assert_eq;
use repogen_cli::{default_struct_name, Config};

use std::{fs, path::PathBuf};

#[test]
fn parse_config_file() {
    let config: Config = r#"
        url = "mysql://root@localhost:3306/shop"
        out = "internal"

        [generate]
        include_json_tags = true
        use_nullable_wrapper_types = true

        [generate.packages]
        module = "github.com/acme/shop/internal"
    "#
    .parse()
    .unwrap();

    assert_eq!(config.url.as_deref(), Some("mysql://root@localhost:3306/shop"));
    assert_eq!(config.out, Some(PathBuf::from("internal")));
    assert_eq!(config.templates, None);
    assert!(config.generate.include_json_tags);
    assert!(config.generate.use_nullable_wrapper_types);
    assert!(!config.generate.include_orm_tags);
    assert_eq!(
        config.generate.packages.model_import(),
        "github.com/acme/shop/internal/model"
    );
}

#[test]
fn unknown_sections_are_rejected() {
    assert!("[generat]\ninclude_json_tags = true".parse::<Config>().is_err());
}

#[test]
fn missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("repogen.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("repogen.toml");
    fs::write(&path, "url = 3").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("repogen.toml"));
}

#[test]
fn struct_names_from_tables() {
    assert_eq!(default_struct_name("users"), "User");
    assert_eq!(default_struct_name("order_items"), "OrderItem");
    assert_eq!(default_struct_name("categories"), "Category");
}

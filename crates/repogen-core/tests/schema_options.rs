use pretty_assertions::assert_eq;
use repogen_core::{schema::Packages, GenerationOptions};

#[test]
fn defaults() {
    let options = GenerationOptions::default();

    assert!(!options.include_json_tags);
    assert!(!options.include_orm_tags);
    assert!(!options.use_nullable_wrapper_types);
    assert_eq!(options.created_at_override(), None);
    assert_eq!(options.null_import, "gopkg.in/guregu/null.v3");
    assert_eq!(options.orm_import, "github.com/jinzhu/gorm");
    assert_eq!(options.packages, Packages::default());
    assert_eq!(options.packages.model_import(), "model");
}

#[test]
fn load_from_toml() {
    let options: GenerationOptions = toml::from_str(
        r#"
        include_json_tags = true
        include_orm_tags = true
        explicit_updated_at_column = "modified_on"
        extra_initialisms = ["sku", "Vat"]

        [packages]
        module = "github.com/acme/shop/"
        implementation = "gormrepo"
        "#,
    )
    .unwrap();

    assert!(options.include_json_tags);
    assert!(options.include_orm_tags);
    assert!(!options.use_nullable_wrapper_types);
    assert_eq!(options.updated_at_override(), Some("modified_on"));
    assert_eq!(options.created_at_override(), None);

    assert_eq!(options.packages.model, "model");
    assert_eq!(options.packages.implementation, "gormrepo");
    assert_eq!(
        options.packages.repository_import(),
        "github.com/acme/shop/repository"
    );

    let normalizer = options.normalizer();
    assert_eq!(normalizer.normalize("net_vat"), "NetVAT");
    assert_eq!(normalizer.normalize("sku"), "SKU");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = toml::from_str::<GenerationOptions>("include_jsn_tags = true").unwrap_err();
    assert!(err.to_string().contains("include_jsn_tags"));
}

#[test]
fn blank_module_is_ignored() {
    let packages = Packages::default().module("  ");
    assert!(!packages.has_module());
    assert_eq!(packages.model_import(), "model");
}

#[test]
fn module_is_unset_by_default() {
    assert!(!Packages::default().has_module());
    assert!(Packages::default().module("github.com/acme/shop").has_module());
}

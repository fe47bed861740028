use proptest::prelude::*;
use repogen_core::{GenerationOptions, Initialisms, Normalizer};

fn normalize(raw: &str) -> String {
    Normalizer::default().normalize(raw)
}

#[test]
fn initialisms_become_uppercase_units() {
    assert_eq!(normalize("id"), "ID");
    assert_eq!(normalize("user_id"), "UserID");
    assert_eq!(normalize("api_url"), "APIURL");
    assert_eq!(normalize("home_page_url"), "HomePageURL");
    assert_eq!(normalize("userId"), "UserID");
}

#[test]
fn snake_and_camel_case() {
    assert_eq!(normalize("user_name"), "UserName");
    assert_eq!(normalize("createdAt"), "CreatedAt");
    assert_eq!(normalize("name"), "Name");
    assert_eq!(normalize("Name"), "Name");
}

#[test]
fn leading_digit_is_spelled_out() {
    let name = normalize("1_name");
    assert!(name.starts_with("One"), "{name}");
    assert_eq!(name, "OneName");
    assert_eq!(normalize("3d_model"), "ThreeDModel");
}

#[test]
fn underscore_runs() {
    assert_eq!(normalize("foo__bar"), "FooBar");
    assert_eq!(normalize("__id"), "ID");
    assert_eq!(normalize("trailing_"), "Trailing");

    let versioned = normalize("v1_2");
    assert_eq!(versioned, "V1_2");
    assert_eq!(versioned.matches('_').count(), 1);
}

#[test]
fn degenerate_inputs() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("_"), "_");
    assert_eq!(normalize("user-name"), "User_name");
}

#[test]
fn initialism_set_is_injected() {
    let bare = Normalizer::new(Initialisms::empty());
    assert_eq!(bare.normalize("user_id"), "UserId");

    let options = GenerationOptions::new().extra_initialism("sku");
    assert_eq!(options.normalizer().normalize("product_sku"), "ProductSKU");
    assert_eq!(options.normalizer().normalize("user_id"), "UserID");
}

proptest! {
    #[test]
    fn normalize_is_deterministic(raw in "\\PC{0,24}") {
        prop_assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn output_is_a_legal_identifier(raw in "\\PC{1,24}") {
        let name = normalize(&raw);

        prop_assert!(!name.starts_with(|c: char| c.is_ascii_digit()));
        prop_assert!(name.chars().all(|c| c.is_alphanumeric() || c == '_'));
    }

    #[test]
    fn snake_case_words_lose_their_underscores(raw in "[a-z]{1,6}(_[a-z]{1,6}){0,3}") {
        let name = normalize(&raw);

        prop_assert!(!name.contains('_'));
        prop_assert!(name.starts_with(|c: char| c.is_ascii_uppercase()));
    }

    #[test]
    fn no_double_underscores(raw in "[a-z][a-z0-9_]{0,15}") {
        prop_assert!(!normalize(&raw).contains("__"));
    }
}

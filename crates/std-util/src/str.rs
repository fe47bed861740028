/// Uppercases the first character, leaving the rest untouched.
///
/// ```
/// assert_eq!(std_util::str::ucfirst("userName"), "UserName");
/// assert_eq!(std_util::str::ucfirst(""), "");
/// ```
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character, leaving the rest untouched.
///
/// ```
/// assert_eq!(std_util::str::lcfirst("UserRepository"), "userRepository");
/// assert_eq!(std_util::str::lcfirst("URL"), "uRL");
/// ```
pub fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts `s` to `UpperCamelCase`.
pub fn upper_camel_case(s: &str) -> String {
    heck::ToUpperCamelCase::to_upper_camel_case(s)
}

/// The singular form of an English noun.
///
/// Only the last `_`-separated word is inflected, so `order_items` becomes
/// `order_item`.
pub fn singularize(s: &str) -> String {
    match s.rsplit_once('_') {
        Some((head, last)) if !last.is_empty() => {
            format!("{head}_{}", pluralizer::pluralize(last, 1, false))
        }
        _ => pluralizer::pluralize(s, 1, false),
    }
}

/// Hides the password of a connection URL before it is printed.
pub(crate) fn redact_url_password(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("***"));
            }
            parsed.to_string()
        }
        Err(_) => url.to_string(),
    }
}

/// `users` becomes `User`, `order_items` becomes `OrderItem`.
pub fn default_struct_name(table: &str) -> String {
    std_util::str::upper_camel_case(&std_util::str::singularize(table))
}

use super::Initialisms;

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Converts raw column names into exported Go identifiers.
///
/// ```
/// use repogen_core::Normalizer;
///
/// let normalizer = Normalizer::default();
/// assert_eq!(normalizer.normalize("user_id"), "UserID");
/// assert_eq!(normalizer.normalize("createdAt"), "CreatedAt");
/// assert_eq!(normalizer.normalize("2fa_secret"), "TwoFaSecret");
/// ```
///
/// The conversion is pure: the same input always yields the same output, and
/// the empty string maps to the empty string.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    initialisms: Initialisms,
}

impl Normalizer {
    pub fn new(initialisms: Initialisms) -> Normalizer {
        Normalizer { initialisms }
    }

    pub fn initialisms(&self) -> &Initialisms {
        &self.initialisms
    }

    pub fn normalize(&self, raw: &str) -> String {
        let escaped = escape_leading_digit(raw);
        let linted = self.lint(&escaped);
        sanitize(&linted)
    }

    /// Splits `name` into words and re-cases each one.
    fn lint(&self, name: &str) -> String {
        if name == "_" {
            return name.to_string();
        }

        let name = name.trim_start_matches('_');
        if name.is_empty() {
            return String::new();
        }

        if name.chars().all(char::is_lowercase) {
            let upper = name.to_uppercase();
            if self.initialisms.contains(&upper) {
                return upper;
            }
            return std_util::str::ucfirst(name);
        }

        let mut runes: Vec<char> = name.chars().collect();

        // [w, i) is the word being scanned
        let mut w = 0;
        let mut i = 0;

        while i < runes.len() {
            let mut eow = false;

            if i + 1 == runes.len() {
                eow = true;
            } else if runes[i + 1] == '_' {
                eow = true;

                let mut n = 1;
                while i + n + 1 < runes.len() && runes[i + n + 1] == '_' {
                    n += 1;
                }

                // Keep one underscore between two digits: `v1_2` stays `V1_2`
                if i + n + 1 < runes.len()
                    && runes[i].is_ascii_digit()
                    && runes[i + n + 1].is_ascii_digit()
                {
                    n -= 1;
                }

                runes.drain(i + 1..i + 1 + n);
            } else if runes[i].is_lowercase() && !runes[i + 1].is_lowercase() {
                eow = true;
            }

            i += 1;
            if !eow {
                continue;
            }

            let word: String = runes[w..i].iter().collect();
            let upper = word.to_uppercase();

            if self.initialisms.contains(&upper) {
                let replacement: Vec<char> = upper.chars().collect();
                let len = replacement.len();
                runes.splice(w..i, replacement);
                i = w + len;
            } else if word.to_lowercase() == word {
                let first: Vec<char> = runes[w].to_uppercase().collect();
                let len = first.len();
                runes.splice(w..w + 1, first);
                i += len - 1;
            }

            w = i;
        }

        runes.into_iter().collect()
    }
}

/// `"1_foo"` becomes `"one__foo"`; identifiers cannot start with a digit.
fn escape_leading_digit(raw: &str) -> String {
    let mut chars = raw.chars();

    match chars.next().and_then(|c| c.to_digit(10)) {
        Some(digit) => format!("{}_{}", DIGIT_WORDS[digit as usize], chars.as_str()),
        None => raw.to_string(),
    }
}

/// Replaces anything that cannot appear in an identifier with `_`.
fn sanitize(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            let ok = if i == 0 {
                c.is_alphabetic()
            } else {
                c.is_alphanumeric()
            };
            if ok {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_leading_digit_only_touches_first_char() {
        assert_eq!(escape_leading_digit("1_foo"), "one__foo");
        assert_eq!(escape_leading_digit("9lives"), "nine_lives");
        assert_eq!(escape_leading_digit("a1"), "a1");
        assert_eq!(escape_leading_digit(""), "");
    }

    #[test]
    fn sanitize_replaces_illegal_chars() {
        assert_eq!(sanitize("User-name"), "User_name");
        assert_eq!(sanitize("_"), "_");
        assert_eq!(sanitize("Price$"), "Price_");
    }
}

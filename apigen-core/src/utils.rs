//! Shared utility functions for code generation.

/// Split an identifier into lowercase words.
///
/// Word boundaries are `-`, `_` and whitespace, a lowercase letter or digit
/// followed by an uppercase letter (`petId`), and the last capital of an
/// uppercase run when it starts a lowercase word (`HTTPServer`).
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let camel = prev.is_lowercase() || prev.is_ascii_digit();
            let acronym_end = prev.is_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_lowercase())
                && chars.get(i + 2).is_some_and(|n| n.is_lowercase());
            if camel || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to kebab-case (e.g., "getPetById" -> "get-pet-by-id")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert a string to camelCase (e.g., "pets id get" -> "petsIdGet")
pub fn to_camel_case(s: &str) -> String {
    let mut words = split_words(s).into_iter();
    match words.next() {
        None => String::new(),
        Some(first) => first + &words.map(|w| capitalize(&w)).collect::<String>(),
    }
}

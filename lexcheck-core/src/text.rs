//! Small string helpers shared by the rules

/// First character is uppercase
#[inline]
pub fn starts_with_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// No lowercase letter anywhere in `s`
pub fn is_all_uppercase(s: &str) -> bool {
    !s.chars().any(char::is_lowercase)
}

/// `s` with its first character lowercased
pub fn lowercase_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `s` with its first character uppercased
pub fn uppercase_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

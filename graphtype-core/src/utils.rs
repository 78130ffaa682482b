//! Identifier case helpers.

/// Uppercase the first character, leaving the rest untouched
/// (e.g., "search" -> "Search", "heroByID" -> "HeroByID").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "NEW_HOPE" -> "NewHope", "first_name" -> "FirstName").
///
/// Words are split on `_` and `-`. A word written entirely in uppercase is
/// lowered before capitalizing, so SCREAMING_CASE enum labels read naturally;
/// mixed-case words keep their inner capitals.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            if part.chars().any(char::is_lowercase) {
                capitalize(part)
            } else {
                capitalize(&part.to_lowercase())
            }
        })
        .collect()
}

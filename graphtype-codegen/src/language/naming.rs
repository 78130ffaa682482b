//! Naming conventions for generated declarations.

/// Language-specific naming conventions.
///
/// Defines how schema names become declaration names and enum member keys,
/// and how names that clash with the target language are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a schema type name to a declaration name
    pub type_to_name: fn(&str) -> String,
    /// Transform an enum label to a member key (e.g., "NEW_HOPE" -> "NewHope")
    pub enum_to_key: fn(&str) -> String,
    /// Names the language reserves for its own types
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "string" -> "_string")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a declaration name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.type_to_name)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as an enum member key.
    pub fn enum_key(&self, label: &str) -> String {
        let transformed = (self.enum_to_key)(label);
        self.safe_name(&transformed)
    }
}

//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines where a type's source file lives and how reserved words are
/// handled.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Qualified type name to a relative path without extension
    /// (e.g., "com.acme.Leaf" -> "com/acme/Leaf")
    pub type_to_path: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "class_")
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

    /// Relative source path for a qualified type name.
    pub fn file_path(&self, qualified_name: &str, extension: &str) -> String {
        format!("{}.{}", (self.type_to_path)(qualified_name), extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOTTED: NamingConvention = NamingConvention {
        type_to_path: |name| name.replace('.', "/"),
        reserved_words: &["class", "new"],
        escape_reserved: |name| format!("{}_", name),
    };

    #[test]
    fn test_safe_name() {
        assert_eq!(DOTTED.safe_name("class"), "class_");
        assert_eq!(DOTTED.safe_name("name"), "name");
    }

    #[test]
    fn test_file_path() {
        assert_eq!(DOTTED.file_path("com.acme.Leaf", "java"), "com/acme/Leaf.java");
        assert_eq!(DOTTED.file_path("Leaf", "java"), "Leaf.java");
    }
}

//! Tree printing configuration

/// Tree printing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    /// Number of spaces per nesting level
    pub indent_width: usize,
    /// Whether each node line ends with its `start..end` byte span
    pub show_spans: bool,
    /// Whether terminal lines include their spelling
    pub show_spellings: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_spans: true,
            show_spellings: true,
        }
    }
}

impl PrintConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Show or hide node spans
    pub fn with_spans(mut self, show: bool) -> Self {
        self.show_spans = show;
        self
    }

    /// Show or hide terminal spellings
    pub fn with_spellings(mut self, show: bool) -> Self {
        self.show_spellings = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PrintConfig::default();
        assert_eq!(config.indent_width, 2);
        assert!(config.show_spans);
        assert!(config.show_spellings);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(PrintConfig::new(), PrintConfig::default());
    }

    #[test]
    fn test_with_indent_width() {
        let config = PrintConfig::new().with_indent_width(4);
        assert_eq!(config.indent_width, 4);
        // Other fields unchanged
        assert!(config.show_spans);
    }

    #[test]
    fn test_with_spans_off() {
        let config = PrintConfig::new().with_spans(false);
        assert!(!config.show_spans);
        assert!(config.show_spellings);
    }

    #[test]
    fn test_builder_override() {
        let config = PrintConfig::new().with_spellings(false).with_spellings(true);
        assert!(config.show_spellings); // Last value wins
    }
}

//! Configuration for CSS output

/// Configuration options for the generated stylesheet
#[derive(Debug, Clone)]
pub struct CssConfig {
    /// Prefix for class selectors (e.g., "ov-" for ".ov-overlay")
    pub class_prefix: Option<String>,

    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            class_prefix: Some("ov-".to_string()),
            pretty_print: true,
        }
    }
}

impl CssConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class selector prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the class selector prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CssConfig::default();
        assert_eq!(config.class_prefix, Some("ov-".to_string()));
        assert!(config.pretty_print);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CssConfig::new()
            .with_class_prefix("brand-")
            .with_pretty_print(false);

        assert_eq!(config.class_prefix, Some("brand-".to_string()));
        assert!(!config.pretty_print);
    }
}

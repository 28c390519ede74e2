//! Brand palette themes
//!
//! Color stops, borders, shadows and text colors may name symbolic
//! tokens instead of hex values. A theme maps those tokens to concrete
//! colors so the same overlay settings render correctly across brands.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing theme files
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A brand palette mapping symbolic tokens to hex colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> hex color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - dark scrim neutrals with a blue primary and warm secondary
const DEFAULT_PALETTE: &str = r##"
[colors]
# Brand colors
primary = "#2563eb"
primary-light = "#93c5fd"
primary-dark = "#1e3a8a"
secondary = "#f97316"
secondary-light = "#fdba74"
secondary-dark = "#9a3412"
accent = "#14b8a6"
accent-light = "#5eead4"
accent-dark = "#0f766e"

# Overlay scrim colors
background = "#111111"
background-light = "#333333"
background-dark = "#000000"

# Text colors
text = "#ffffff"
text-muted = "#d1d5db"
text-dark = "#111827"

# Status colors
status-success = "#22c55e"
status-warning = "#f59e0b"
status-error = "#ef4444"
"##;

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic token to a concrete color value
    ///
    /// Returns None if the token is not defined in this theme.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic token with fallback to the default palette
    ///
    /// Fallback order:
    /// 1. Check this theme for the exact token
    /// 2. Check the default palette for the exact token
    /// 3. Use the category default (primary → #2563eb, etc.)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        if token.starts_with("primary") {
            return "#2563eb".to_string();
        }
        if token.starts_with("secondary") {
            return "#f97316".to_string();
        }
        if token.starts_with("accent") {
            return "#14b8a6".to_string();
        }
        if token.starts_with("background") {
            return "#111111".to_string();
        }
        if token.starts_with("text") {
            return "#ffffff".to_string();
        }
        if token.starts_with("status") {
            return "#6b7280".to_string();
        }

        // Unknown category - dark neutral
        "#111111".to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_toml(DEFAULT_PALETTE).expect("default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert!(theme.colors.contains_key("primary"));
        assert!(theme.colors.contains_key("background"));
        assert!(theme.colors.contains_key("text"));
        assert!(theme.colors.contains_key("accent"));
    }

    #[test]
    fn test_resolve_existing_token() {
        let theme = Theme::default();
        assert_eq!(theme.resolve("primary"), Some("#2563eb"));
        assert_eq!(theme.resolve("text"), Some("#ffffff"));
    }

    #[test]
    fn test_resolve_missing_token() {
        let theme = Theme::default();
        assert_eq!(theme.resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        let empty = Theme {
            name: None,
            description: None,
            colors: HashMap::new(),
        };
        assert_eq!(empty.resolve_or_default("primary"), "#2563eb");
    }

    #[test]
    fn test_resolve_or_default_category_fallback() {
        let empty = Theme {
            name: None,
            description: None,
            colors: HashMap::new(),
        };
        // Unknown specific token but known category
        assert_eq!(empty.resolve_or_default("primary-99"), "#2563eb");
        assert_eq!(empty.resolve_or_default("text-custom"), "#ffffff");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Acme Brand"
description = "Palette for Acme overlays"

[colors]
primary = "#ff0044"
"##;
        let theme = Theme::from_toml(toml_str).expect("should parse");
        assert_eq!(theme.name, Some("Acme Brand".to_string()));
        assert_eq!(theme.description, Some("Palette for Acme overlays".to_string()));
        assert_eq!(theme.resolve("primary"), Some("#ff0044"));
    }

    #[test]
    fn test_parse_toml_without_metadata() {
        let toml_str = r##"
[colors]
primary = "#111111"
"##;
        let theme = Theme::from_toml(toml_str).expect("should parse");
        assert_eq!(theme.name, None);
        assert_eq!(theme.resolve("primary"), Some("#111111"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Theme::from_toml(invalid);
        assert!(result.is_err());
    }
}

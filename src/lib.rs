//! Overlay Composer - branded image overlay styles as CSS
//!
//! This library turns typed overlay settings (gradient layer, logo
//! placement/framing, text positioning) into CSS declaration blocks,
//! and reconciles AI-suggested partial settings with current state.
//!
//! # Example
//!
//! ```rust
//! use overlay_composer::{compose, OverlaySettings};
//!
//! let css = compose(&OverlaySettings::default()).unwrap();
//! assert!(css.contains("linear-gradient"));
//! ```

pub mod css;
pub mod settings;
pub mod store;
pub mod suggestion;
pub mod theme;

pub use css::{ColorError, CssConfig};
pub use settings::{OverlaySettings, SettingsError};
pub use suggestion::{merge_settings, OverlaySuggestion};
pub use theme::Theme;

use thiserror::Error;

/// Errors that can occur during the compose pipeline
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Structurally invalid settings
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Unresolvable color value
    #[error("color error: {0}")]
    Color(#[from] ColorError),
}

/// Configuration for the complete compose pipeline
#[derive(Debug, Clone)]
pub struct ComposeConfig {
    /// CSS output configuration
    pub css: CssConfig,
    /// Brand palette for symbolic color resolution
    pub theme: Theme,
    /// Debug mode: dump the normalized settings to stderr
    pub debug: bool,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            css: CssConfig::default(),
            theme: Theme::default(),
            debug: false,
        }
    }
}

impl ComposeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS output configuration
    pub fn with_css(mut self, config: CssConfig) -> Self {
        self.css = config;
        self
    }

    /// Set the brand palette
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Compose overlay settings into a stylesheet with default configuration
///
/// This is the main entry point for the library. It validates and
/// normalizes the settings, then emits one rule per layer.
///
/// # Example
///
/// ```rust
/// use overlay_composer::{compose, OverlaySettings};
///
/// let mut settings = OverlaySettings::default();
/// settings.logo.x = 25.0;
///
/// let css = compose(&settings).unwrap();
/// assert!(css.contains(".ov-logo"));
/// assert!(css.contains("left: 25%;"));
/// ```
pub fn compose(settings: &OverlaySettings) -> Result<String, ComposeError> {
    compose_with_config(settings, ComposeConfig::default())
}

/// Compose overlay settings into a stylesheet with custom configuration
///
/// # Example
///
/// ```rust
/// use overlay_composer::{compose_with_config, ComposeConfig, CssConfig, OverlaySettings};
///
/// let config = ComposeConfig::new()
///     .with_css(CssConfig::default().with_class_prefix("brand-"));
///
/// let css = compose_with_config(&OverlaySettings::default(), config).unwrap();
/// assert!(css.contains(".brand-overlay"));
/// ```
pub fn compose_with_config(
    settings: &OverlaySettings,
    config: ComposeConfig,
) -> Result<String, ComposeError> {
    settings.validate()?;
    let normalized = settings.normalized();

    if config.debug {
        eprintln!("=== Normalized Settings ===");
        eprintln!("{:#?}", normalized);
        eprintln!("===========================");
    }

    let css = css::render_css(&normalized, &config.css, &config.theme)?;
    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_default_settings() {
        let css = compose(&OverlaySettings::default()).unwrap();
        assert!(css.contains(".ov-overlay {"));
        assert!(css.contains(".ov-logo {"));
        assert!(css.contains(".ov-text {"));
        assert!(css.contains("background: linear-gradient("));
    }

    #[test]
    fn test_compose_clamps_out_of_range_input() {
        let mut settings = OverlaySettings::default();
        settings.logo.x = 180.0;
        let css = compose(&settings).unwrap();
        assert!(css.contains("left: 100%;"));
    }

    #[test]
    fn test_compose_rejects_non_finite_input() {
        let mut settings = OverlaySettings::default();
        settings.text.font_size = f64::INFINITY;
        let result = compose(&settings);
        assert!(matches!(result, Err(ComposeError::Settings(_))));
    }

    #[test]
    fn test_compose_with_custom_theme() {
        let theme = Theme::from_toml(
            r##"
[colors]
primary = "#ff0044"
"##,
        )
        .unwrap();
        let mut settings = OverlaySettings::default();
        settings.text.color = "primary".to_string();

        let config = ComposeConfig::new().with_theme(theme);
        let css = compose_with_config(&settings, config).unwrap();
        assert!(css.contains("color: rgba(255, 0, 68, 1);"));
    }

    #[test]
    fn test_compose_compact_output() {
        let config =
            ComposeConfig::new().with_css(CssConfig::default().with_pretty_print(false));
        let css = compose_with_config(&OverlaySettings::default(), config).unwrap();
        assert!(!css.contains('\n'));
        assert!(css.contains(".ov-overlay{"));
    }
}

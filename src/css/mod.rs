//! CSS generation from overlay settings
//!
//! This module takes normalized settings and produces the stylesheet
//! string: one rule per layer, assembled through [`CssBuilder`].

pub mod builder;
pub mod color;
pub mod config;
pub mod gradient;
pub mod rules;
pub mod shape;

pub use builder::CssBuilder;
pub use color::{css_color, ColorError, Rgba};
pub use config::CssConfig;
pub use gradient::gradient_css;
pub use shape::frame_css;

use crate::settings::OverlaySettings;
use crate::theme::Theme;

/// Format a numeric value rounded to 2 decimals, shortest form
/// (no trailing `.0`)
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}

/// Render the full stylesheet for a set of overlay settings.
///
/// Expects normalized settings; [`crate::compose`] normalizes first.
pub fn render_css(
    settings: &OverlaySettings,
    config: &CssConfig,
    theme: &Theme,
) -> Result<String, ColorError> {
    let mut builder = CssBuilder::new(config.clone());
    rules::render_overlay(&mut builder, &settings.gradient, theme)?;
    rules::render_logo(&mut builder, &settings.logo, theme)?;
    rules::render_text(&mut builder, &settings.text, theme)?;
    Ok(builder.build())
}

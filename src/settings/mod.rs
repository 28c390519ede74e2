//! Typed settings model for the overlay layers
//!
//! Everything here serializes with camelCase field names so documents
//! written by the web editor (and replies from the suggestion model)
//! deserialize directly. All fields are defaulted: a partial or empty
//! document is always valid.

pub mod gradient;
pub mod logo;
pub mod text;

pub use gradient::{BlendMode, ColorStop, GradientSettings, GradientType};
pub use logo::{BorderSettings, FrameShape, LogoSettings, ShadowSettings};
pub use text::{TextAlign, TextSettings};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by structural validation of settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A numeric field holds NaN or an infinity; such values cannot
    /// come from a JSON document but can be constructed in code
    #[error("non-finite value in field {field}")]
    NonFinite { field: &'static str },
}

/// Complete settings for one composed overlay
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlaySettings {
    pub gradient: GradientSettings,
    pub logo: LogoSettings,
    pub text: TextSettings,
}

impl OverlaySettings {
    /// Copy with every field pulled into its legal range
    pub fn normalized(&self) -> Self {
        Self {
            gradient: self.gradient.normalized(),
            logo: self.logo.normalized(),
            text: self.text.normalized(),
        }
    }

    /// Reject settings containing non-finite numbers.
    ///
    /// Clamping cannot repair NaN (`clamp` keeps it), so this runs
    /// before normalization in the compose pipeline.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let g = &self.gradient;
        finite(g.angle, "gradient.angle")?;
        finite(g.center_x, "gradient.centerX")?;
        finite(g.center_y, "gradient.centerY")?;
        finite(g.size, "gradient.size")?;
        finite(g.opacity, "gradient.opacity")?;
        for stop in &g.color_stops {
            finite(stop.opacity, "gradient.colorStops.opacity")?;
            finite(stop.position, "gradient.colorStops.position")?;
        }

        let l = &self.logo;
        finite(l.x, "logo.x")?;
        finite(l.y, "logo.y")?;
        finite(l.size, "logo.size")?;
        finite(l.opacity, "logo.opacity")?;
        finite(l.border.width, "logo.border.width")?;
        finite(l.border.opacity, "logo.border.opacity")?;
        finite_shadow(&l.shadow, "logo.shadow")?;

        let t = &self.text;
        finite(t.x, "text.x")?;
        finite(t.y, "text.y")?;
        finite(t.font_size, "text.fontSize")?;
        finite(t.opacity, "text.opacity")?;
        finite_shadow(&t.shadow, "text.shadow")?;

        Ok(())
    }
}

fn finite(value: f64, field: &'static str) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::NonFinite { field })
    }
}

fn finite_shadow(shadow: &ShadowSettings, field: &'static str) -> Result<(), SettingsError> {
    finite(shadow.blur, field)?;
    finite(shadow.offset_x, field)?;
    finite(shadow.offset_y, field)?;
    finite(shadow.opacity, field)
}

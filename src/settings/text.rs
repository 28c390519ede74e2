//! Text positioning settings

use serde::{Deserialize, Serialize};

use super::logo::ShadowSettings;

/// Horizontal alignment of the text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    Left,
    Right,
    #[serde(other)]
    Center,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

impl Default for TextAlign {
    fn default() -> Self {
        TextAlign::Center
    }
}

/// Settings for the text layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextSettings {
    /// Anchor position, percent of the canvas
    pub x: f64,
    pub y: f64,
    /// Font size in pixels
    pub font_size: f64,
    pub align: TextAlign,
    pub color: String,
    pub opacity: f64,
    pub shadow: ShadowSettings,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            x: 50.0,
            y: 85.0,
            font_size: 32.0,
            align: TextAlign::Center,
            color: "#ffffff".to_string(),
            opacity: 1.0,
            shadow: ShadowSettings::default(),
        }
    }
}

impl TextSettings {
    /// Copy with percentages clamped to [0, 100] and opacities to [0, 1]
    pub fn normalized(&self) -> Self {
        Self {
            x: self.x.clamp(0.0, 100.0),
            y: self.y.clamp(0.0, 100.0),
            font_size: self.font_size.max(0.0),
            align: self.align,
            color: self.color.clone(),
            opacity: self.opacity.clamp(0.0, 1.0),
            shadow: self.shadow.normalized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_clamps() {
        let settings = TextSettings {
            x: -5.0,
            y: 110.0,
            font_size: -12.0,
            opacity: 2.0,
            ..Default::default()
        };
        let normalized = settings.normalized();
        assert_eq!(normalized.x, 0.0);
        assert_eq!(normalized.y, 100.0);
        assert_eq!(normalized.font_size, 0.0);
        assert_eq!(normalized.opacity, 1.0);
    }

    #[test]
    fn test_unknown_align_falls_back_to_center() {
        let parsed: TextAlign = serde_json::from_str(r#""justify""#).unwrap();
        assert_eq!(parsed, TextAlign::Center);
    }
}

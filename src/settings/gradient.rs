//! Gradient overlay settings

use serde::{Deserialize, Serialize};

/// Named gradient styles understood by the generator.
///
/// The first six are plain geometric gradients that interpolate the
/// user's color stops directly. The thematic styles stack fixed
/// decorative layers over a base built from the stops, and the
/// fixed-ramp styles (rainbow, spectrum, gold, silver, steel) carry
/// their own built-in color ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientType {
    Radial,
    Conic,
    Reflected,
    RepeatingLinear,
    RepeatingRadial,
    Sunset,
    Dawn,
    Fire,
    Ember,
    Lava,
    Aurora,
    Galaxy,
    Nebula,
    Ocean,
    Wave,
    Forest,
    Meadow,
    Neon,
    Cyber,
    Twilight,
    Midnight,
    Ice,
    Mist,
    Candy,
    Rose,
    Rainbow,
    Spectrum,
    Gold,
    Silver,
    Steel,
    /// Unknown style names in loose payloads fall back to linear.
    #[serde(other)]
    Linear,
}

impl GradientType {
    /// Every known style, in presentation order.
    pub const ALL: [GradientType; 31] = [
        GradientType::Linear,
        GradientType::Radial,
        GradientType::Conic,
        GradientType::Reflected,
        GradientType::RepeatingLinear,
        GradientType::RepeatingRadial,
        GradientType::Sunset,
        GradientType::Dawn,
        GradientType::Fire,
        GradientType::Ember,
        GradientType::Lava,
        GradientType::Aurora,
        GradientType::Galaxy,
        GradientType::Nebula,
        GradientType::Ocean,
        GradientType::Wave,
        GradientType::Forest,
        GradientType::Meadow,
        GradientType::Neon,
        GradientType::Cyber,
        GradientType::Twilight,
        GradientType::Midnight,
        GradientType::Ice,
        GradientType::Mist,
        GradientType::Candy,
        GradientType::Rose,
        GradientType::Rainbow,
        GradientType::Spectrum,
        GradientType::Gold,
        GradientType::Silver,
        GradientType::Steel,
    ];

    /// The wire/display name of the style (matches the serde form)
    pub fn name(self) -> &'static str {
        match self {
            GradientType::Linear => "linear",
            GradientType::Radial => "radial",
            GradientType::Conic => "conic",
            GradientType::Reflected => "reflected",
            GradientType::RepeatingLinear => "repeating-linear",
            GradientType::RepeatingRadial => "repeating-radial",
            GradientType::Sunset => "sunset",
            GradientType::Dawn => "dawn",
            GradientType::Fire => "fire",
            GradientType::Ember => "ember",
            GradientType::Lava => "lava",
            GradientType::Aurora => "aurora",
            GradientType::Galaxy => "galaxy",
            GradientType::Nebula => "nebula",
            GradientType::Ocean => "ocean",
            GradientType::Wave => "wave",
            GradientType::Forest => "forest",
            GradientType::Meadow => "meadow",
            GradientType::Neon => "neon",
            GradientType::Cyber => "cyber",
            GradientType::Twilight => "twilight",
            GradientType::Midnight => "midnight",
            GradientType::Ice => "ice",
            GradientType::Mist => "mist",
            GradientType::Candy => "candy",
            GradientType::Rose => "rose",
            GradientType::Rainbow => "rainbow",
            GradientType::Spectrum => "spectrum",
            GradientType::Gold => "gold",
            GradientType::Silver => "silver",
            GradientType::Steel => "steel",
        }
    }
}

impl Default for GradientType {
    fn default() -> Self {
        GradientType::Linear
    }
}

/// CSS blend mode applied to the overlay layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
    #[serde(other)]
    Normal,
}

impl BlendMode {
    /// CSS keyword for this blend mode
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::Normal
    }
}

/// A single color stop in a gradient ramp
///
/// `color` is a hex value (`#rgb`, `#rrggbb`, `#rrggbbaa`) or a
/// symbolic theme token; `position` is a percentage along the ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorStop {
    pub color: String,
    pub opacity: f64,
    pub position: f64,
}

impl ColorStop {
    pub fn new(color: impl Into<String>, opacity: f64, position: f64) -> Self {
        Self {
            color: color.into(),
            opacity,
            position,
        }
    }
}

impl Default for ColorStop {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            opacity: 1.0,
            position: 0.0,
        }
    }
}

/// Settings for the gradient overlay layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientSettings {
    pub gradient_type: GradientType,
    /// Direction in degrees for linear styles, start angle for conic
    pub angle: f64,
    /// Gradient center, percent of the overlay box
    pub center_x: f64,
    pub center_y: f64,
    /// Extent percentage: ellipse radii for radial styles, repeat
    /// period for repeating styles
    pub size: f64,
    pub color_stops: Vec<ColorStop>,
    /// Emit hard transitions between stops instead of smooth ramps
    pub use_sharp_stops: bool,
    pub blend_mode: BlendMode,
    /// Opacity of the whole overlay layer
    pub opacity: f64,
}

impl Default for GradientSettings {
    fn default() -> Self {
        Self {
            gradient_type: GradientType::Linear,
            angle: 135.0,
            center_x: 50.0,
            center_y: 50.0,
            size: 100.0,
            color_stops: vec![
                ColorStop::new("#000000", 0.6, 0.0),
                ColorStop::new("#000000", 0.0, 100.0),
            ],
            use_sharp_stops: false,
            blend_mode: BlendMode::Normal,
            opacity: 1.0,
        }
    }
}

impl GradientSettings {
    /// Produce a copy with every field pulled into its legal range.
    ///
    /// Percentages clamp to [0, 100], opacities to [0, 1], the angle
    /// wraps into [0, 360). Stops are sorted ascending by position and
    /// padded so at least two remain: an empty list becomes black at 0
    /// to white at 100, a single stop gets the missing end filled in.
    pub fn normalized(&self) -> Self {
        let mut stops: Vec<ColorStop> = self
            .color_stops
            .iter()
            .map(|s| ColorStop {
                color: s.color.clone(),
                opacity: s.opacity.clamp(0.0, 1.0),
                position: s.position.clamp(0.0, 100.0),
            })
            .collect();

        match stops.len() {
            0 => {
                stops.push(ColorStop::new("#000000", 1.0, 0.0));
                stops.push(ColorStop::new("#ffffff", 1.0, 100.0));
            }
            1 => {
                if stops[0].position < 100.0 {
                    stops.push(ColorStop::new("#ffffff", 1.0, 100.0));
                } else {
                    stops.insert(0, ColorStop::new("#000000", 1.0, 0.0));
                }
            }
            _ => {}
        }

        stops.sort_by(|a, b| {
            a.position
                .partial_cmp(&b.position)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Self {
            gradient_type: self.gradient_type,
            angle: self.angle.rem_euclid(360.0),
            center_x: self.center_x.clamp(0.0, 100.0),
            center_y: self.center_y.clamp(0.0, 100.0),
            size: self.size.clamp(0.0, 100.0),
            color_stops: stops,
            use_sharp_stops: self.use_sharp_stops,
            blend_mode: self.blend_mode,
            opacity: self.opacity.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sorts_stops() {
        let settings = GradientSettings {
            color_stops: vec![
                ColorStop::new("#ffffff", 1.0, 80.0),
                ColorStop::new("#000000", 1.0, 10.0),
            ],
            ..Default::default()
        };
        let normalized = settings.normalized();
        assert_eq!(normalized.color_stops[0].position, 10.0);
        assert_eq!(normalized.color_stops[1].position, 80.0);
    }

    #[test]
    fn test_normalize_pads_empty_stops() {
        let settings = GradientSettings {
            color_stops: vec![],
            ..Default::default()
        };
        let normalized = settings.normalized();
        assert_eq!(normalized.color_stops.len(), 2);
        assert_eq!(normalized.color_stops[0].color, "#000000");
        assert_eq!(normalized.color_stops[1].color, "#ffffff");
    }

    #[test]
    fn test_normalize_pads_single_stop() {
        let settings = GradientSettings {
            color_stops: vec![ColorStop::new("#ff0000", 1.0, 30.0)],
            ..Default::default()
        };
        let normalized = settings.normalized();
        assert_eq!(normalized.color_stops.len(), 2);
        assert_eq!(normalized.color_stops[1].color, "#ffffff");
        assert_eq!(normalized.color_stops[1].position, 100.0);
    }

    #[test]
    fn test_normalize_clamps_ranges() {
        let settings = GradientSettings {
            angle: 405.0,
            center_x: 120.0,
            center_y: -10.0,
            opacity: 1.5,
            color_stops: vec![
                ColorStop::new("#000000", 2.0, -5.0),
                ColorStop::new("#ffffff", -0.5, 150.0),
            ],
            ..Default::default()
        };
        let normalized = settings.normalized();
        assert_eq!(normalized.angle, 45.0);
        assert_eq!(normalized.center_x, 100.0);
        assert_eq!(normalized.center_y, 0.0);
        assert_eq!(normalized.opacity, 1.0);
        assert_eq!(normalized.color_stops[0].position, 0.0);
        assert_eq!(normalized.color_stops[0].opacity, 1.0);
        assert_eq!(normalized.color_stops[1].position, 100.0);
        assert_eq!(normalized.color_stops[1].opacity, 0.0);
    }

    #[test]
    fn test_unknown_gradient_type_falls_back_to_linear() {
        let parsed: GradientType = serde_json::from_str(r#""holographic""#).unwrap();
        assert_eq!(parsed, GradientType::Linear);
    }

    #[test]
    fn test_gradient_type_wire_names() {
        let parsed: GradientType = serde_json::from_str(r#""repeating-linear""#).unwrap();
        assert_eq!(parsed, GradientType::RepeatingLinear);
        assert_eq!(parsed.name(), "repeating-linear");
    }

    #[test]
    fn test_unknown_blend_mode_falls_back_to_normal() {
        let parsed: BlendMode = serde_json::from_str(r#""plasma""#).unwrap();
        assert_eq!(parsed, BlendMode::Normal);
    }
}

//! Logo placement and framing settings

use serde::{Deserialize, Serialize};

/// Decorative frame applied around the logo.
///
/// Each shape maps to a `clip-path` value or a `border-radius`
/// shorthand; `None` leaves the logo unclipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameShape {
    Circle,
    Ellipse,
    Rounded,
    Squircle,
    Pill,
    Blob,
    Triangle,
    InvertedTriangle,
    Diamond,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    Star,
    Cross,
    Chevron,
    Arrow,
    Parallelogram,
    Trapezoid,
    Shield,
    Message,
    /// Unknown shape names in loose payloads fall back to no frame.
    #[serde(other)]
    None,
}

impl FrameShape {
    /// Every known frame shape, in presentation order.
    pub const ALL: [FrameShape; 22] = [
        FrameShape::None,
        FrameShape::Circle,
        FrameShape::Ellipse,
        FrameShape::Rounded,
        FrameShape::Squircle,
        FrameShape::Pill,
        FrameShape::Blob,
        FrameShape::Triangle,
        FrameShape::InvertedTriangle,
        FrameShape::Diamond,
        FrameShape::Pentagon,
        FrameShape::Hexagon,
        FrameShape::Heptagon,
        FrameShape::Octagon,
        FrameShape::Star,
        FrameShape::Cross,
        FrameShape::Chevron,
        FrameShape::Arrow,
        FrameShape::Parallelogram,
        FrameShape::Trapezoid,
        FrameShape::Shield,
        FrameShape::Message,
    ];

    /// The wire/display name of the shape (matches the serde form)
    pub fn name(self) -> &'static str {
        match self {
            FrameShape::None => "none",
            FrameShape::Circle => "circle",
            FrameShape::Ellipse => "ellipse",
            FrameShape::Rounded => "rounded",
            FrameShape::Squircle => "squircle",
            FrameShape::Pill => "pill",
            FrameShape::Blob => "blob",
            FrameShape::Triangle => "triangle",
            FrameShape::InvertedTriangle => "inverted-triangle",
            FrameShape::Diamond => "diamond",
            FrameShape::Pentagon => "pentagon",
            FrameShape::Hexagon => "hexagon",
            FrameShape::Heptagon => "heptagon",
            FrameShape::Octagon => "octagon",
            FrameShape::Star => "star",
            FrameShape::Cross => "cross",
            FrameShape::Chevron => "chevron",
            FrameShape::Arrow => "arrow",
            FrameShape::Parallelogram => "parallelogram",
            FrameShape::Trapezoid => "trapezoid",
            FrameShape::Shield => "shield",
            FrameShape::Message => "message",
        }
    }
}

impl Default for FrameShape {
    fn default() -> Self {
        FrameShape::None
    }
}

/// Border drawn around the logo frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderSettings {
    /// Border thickness in pixels; 0 disables the border
    pub width: f64,
    pub color: String,
    pub opacity: f64,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            width: 0.0,
            color: "#ffffff".to_string(),
            opacity: 1.0,
        }
    }
}

/// Drop shadow behind the logo or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShadowSettings {
    /// Blur radius in pixels; a shadow with 0 blur and 0 offsets is
    /// not emitted
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub color: String,
    pub opacity: f64,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            blur: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            color: "#000000".to_string(),
            opacity: 0.35,
        }
    }
}

impl ShadowSettings {
    /// A shadow at its neutral values produces no declaration
    pub fn is_neutral(&self) -> bool {
        self.blur == 0.0 && self.offset_x == 0.0 && self.offset_y == 0.0
    }
}

/// Settings for the logo layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoSettings {
    /// Center position, percent of the canvas
    pub x: f64,
    pub y: f64,
    /// Logo width, percent of the canvas
    pub size: f64,
    pub opacity: f64,
    pub frame: FrameShape,
    pub border: BorderSettings,
    pub shadow: ShadowSettings,
}

impl Default for LogoSettings {
    fn default() -> Self {
        Self {
            x: 50.0,
            y: 50.0,
            size: 20.0,
            opacity: 1.0,
            frame: FrameShape::None,
            border: BorderSettings::default(),
            shadow: ShadowSettings::default(),
        }
    }
}

impl LogoSettings {
    /// Copy with percentages clamped to [0, 100] and opacities to [0, 1]
    pub fn normalized(&self) -> Self {
        Self {
            x: self.x.clamp(0.0, 100.0),
            y: self.y.clamp(0.0, 100.0),
            size: self.size.clamp(0.0, 100.0),
            opacity: self.opacity.clamp(0.0, 1.0),
            frame: self.frame,
            border: BorderSettings {
                width: self.border.width.max(0.0),
                color: self.border.color.clone(),
                opacity: self.border.opacity.clamp(0.0, 1.0),
            },
            shadow: self.shadow.normalized(),
        }
    }
}

impl ShadowSettings {
    /// Copy with blur made non-negative and opacity clamped
    pub fn normalized(&self) -> Self {
        Self {
            blur: self.blur.max(0.0),
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            color: self.color.clone(),
            opacity: self.opacity.clamp(0.0, 1.0),
        }
    }
}

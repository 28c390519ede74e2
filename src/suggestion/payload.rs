//! Suggestion payloads returned by the external model
//!
//! The model is an opaque collaborator: it answers with JSON that may
//! be wrapped in markdown fences or prose, may omit any field, and may
//! use style names we do not know. Every record here is therefore
//! all-`Option`, defaulted, and parsed tolerantly — a bad reply never
//! fails hard, it degrades to "no suggestion".

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::{BlendMode, FrameShape, GradientType, TextAlign};

/// Errors raised by strict suggestion parsing
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// The reply contains no JSON object at all
    #[error("no JSON object found in model reply")]
    NoJsonObject,

    /// The extracted object does not deserialize
    #[error("malformed suggestion JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Suggested changes to a single color stop
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StopSuggestion {
    pub color: Option<String>,
    pub opacity: Option<f64>,
    pub position: Option<f64>,
}

/// Suggested changes to the gradient layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientSuggestion {
    pub gradient_type: Option<GradientType>,
    pub angle: Option<f64>,
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
    pub size: Option<f64>,
    pub color_stops: Option<Vec<StopSuggestion>>,
    pub use_sharp_stops: Option<bool>,
    pub blend_mode: Option<BlendMode>,
    pub opacity: Option<f64>,
}

/// Suggested changes to the logo border
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderSuggestion {
    pub width: Option<f64>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
}

/// Suggested changes to a drop shadow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShadowSuggestion {
    pub blur: Option<f64>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
}

/// Suggested changes to the logo layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoSuggestion {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub size: Option<f64>,
    pub opacity: Option<f64>,
    pub frame: Option<FrameShape>,
    pub border: Option<BorderSuggestion>,
    pub shadow: Option<ShadowSuggestion>,
}

/// Suggested changes to the text layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextSuggestion {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub font_size: Option<f64>,
    pub align: Option<TextAlign>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
    pub shadow: Option<ShadowSuggestion>,
}

/// A complete suggestion: any subset of the three layers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlaySuggestion {
    pub gradient: Option<GradientSuggestion>,
    pub logo: Option<LogoSuggestion>,
    pub text: Option<TextSuggestion>,
    /// Models like to explain themselves; keep it for display
    pub rationale: Option<String>,
}

impl OverlaySuggestion {
    /// True when the suggestion carries no changes at all
    pub fn is_empty(&self) -> bool {
        self.gradient.is_none() && self.logo.is_none() && self.text.is_none()
    }

    /// Strict parse: extract the JSON object from `reply` and
    /// deserialize it.
    pub fn from_json(reply: &str) -> Result<Self, SuggestionError> {
        let object = extract_json_object(reply).ok_or(SuggestionError::NoJsonObject)?;
        Ok(serde_json::from_str(object)?)
    }

    /// Lenient parse: any failure degrades to an empty suggestion.
    ///
    /// This is the entry point for raw model replies — per the error
    /// handling design, nothing the model says can be fatal.
    pub fn from_model_reply(reply: &str) -> Self {
        match Self::from_json(reply) {
            Ok(suggestion) => suggestion,
            Err(err) => {
                log::warn!("discarding unusable model reply: {}", err);
                Self::default()
            }
        }
    }
}

/// Find the outermost JSON object in free-form text.
///
/// Models wrap replies in ```json fences or surround them with prose;
/// scanning for the first balanced `{...}` (string- and escape-aware)
/// recovers the payload without caring about the wrapping.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

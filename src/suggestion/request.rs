//! Construction of suggestion requests for the external model
//!
//! The crate does not talk to the network; it builds the JSON body a
//! caller posts to the generative endpoint and the prompt that teaches
//! the model which style names and reply shape we understand.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Value};
use thiserror::Error;

use crate::settings::{FrameShape, GradientType};

/// Upper bound on raw image bytes accepted for inline upload
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// Errors raised while building a request
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("image is {len} bytes, limit is {max}")]
    ImageTooLarge { len: usize, max: usize },

    #[error("unsupported mime type: {0}")]
    UnsupportedMime(String),
}

/// Which part of the overlay the model is asked to restyle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionTarget {
    Gradient,
    Logo,
    Text,
    Full,
}

impl SuggestionTarget {
    fn instruction(self) -> &'static str {
        match self {
            SuggestionTarget::Gradient => {
                "Suggest gradient overlay settings for this image. Fill only the \"gradient\" section."
            }
            SuggestionTarget::Logo => {
                "Suggest logo placement and framing for this image. Fill only the \"logo\" section."
            }
            SuggestionTarget::Text => {
                "Suggest text positioning for this image. Fill only the \"text\" section."
            }
            SuggestionTarget::Full => {
                "Suggest a complete overlay style for this image: gradient, logo and text sections."
            }
        }
    }
}

/// An inline image part: base64 payload plus its mime type
#[derive(Debug, Clone)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// A ready-to-post suggestion request
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    prompt: String,
    image: Option<InlineImage>,
}

impl SuggestionRequest {
    /// Create a request for the given target with the standard prompt
    pub fn new(target: SuggestionTarget) -> Self {
        Self {
            prompt: prompt_for(target),
            image: None,
        }
    }

    /// Attach the source image as inline data.
    ///
    /// Rejects non-image mime types and payloads over
    /// [`MAX_IMAGE_BYTES`] raw bytes.
    pub fn with_image(mut self, bytes: &[u8], mime_type: &str) -> Result<Self, RequestError> {
        if !mime_type.starts_with("image/") {
            return Err(RequestError::UnsupportedMime(mime_type.to_string()));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(RequestError::ImageTooLarge {
                len: bytes.len(),
                max: MAX_IMAGE_BYTES,
            });
        }
        self.image = Some(InlineImage {
            mime_type: mime_type.to_string(),
            data: STANDARD.encode(bytes),
        });
        Ok(self)
    }

    /// The prompt text sent to the model
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Build the generateContent-style JSON body
    pub fn to_body(&self) -> Value {
        let mut parts = vec![json!({ "text": self.prompt })];
        if let Some(image) = &self.image {
            parts.push(json!({
                "inlineData": {
                    "mimeType": image.mime_type,
                    "data": image.data,
                }
            }));
        }
        json!({
            "contents": [{ "parts": parts }],
            "generationConfig": { "responseMimeType": "application/json" },
        })
    }
}

/// The prompt for a target: instruction plus the skill document
fn prompt_for(target: SuggestionTarget) -> String {
    format!("{}\n\n{}", target.instruction(), skill_document())
}

/// Reference document teaching the model our vocabulary and reply shape.
///
/// Also printed by the CLI's `--skill` flag so agent integrations can
/// embed it in their own context.
pub fn skill_document() -> String {
    let styles = GradientType::ALL
        .iter()
        .map(|g| g.name())
        .collect::<Vec<_>>()
        .join(", ");
    let shapes = FrameShape::ALL
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r##"# Overlay Suggestion Skill

Reply with a single JSON object, no markdown fences, no prose.

## Reply shape

{{
  "gradient": {{
    "gradientType": "<style name>",
    "angle": 135,
    "centerX": 50, "centerY": 50, "size": 100,
    "colorStops": [{{"color": "#000000", "opacity": 0.6, "position": 0}}],
    "useSharpStops": false,
    "blendMode": "normal",
    "opacity": 1
  }},
  "logo": {{
    "x": 50, "y": 50, "size": 20, "opacity": 1,
    "frame": "<shape name>",
    "border": {{"width": 0, "color": "#ffffff", "opacity": 1}},
    "shadow": {{"blur": 0, "offsetX": 0, "offsetY": 0, "color": "#000000", "opacity": 0.35}}
  }},
  "text": {{
    "x": 50, "y": 85, "fontSize": 32, "align": "center",
    "color": "#ffffff", "opacity": 1,
    "shadow": {{"blur": 0, "offsetX": 0, "offsetY": 0, "color": "#000000", "opacity": 0.35}}
  }},
  "rationale": "one short sentence"
}}

## Rules

1. Every field is optional; omit what should keep its current value.
2. Positions and sizes are percentages (0-100); opacities are 0-1.
3. Colors are hex values or palette tokens (primary, secondary,
   accent, background, text, status-*).
4. At least two color stops, positions ascending.

## Gradient styles

{styles}

## Frame shapes

{shapes}
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_has_prompt_part() {
        let request = SuggestionRequest::new(SuggestionTarget::Gradient);
        let body = request.to_body();
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("gradient"));
        assert!(text.contains("Overlay Suggestion Skill"));
    }

    #[test]
    fn test_body_with_image() {
        let request = SuggestionRequest::new(SuggestionTarget::Full)
            .with_image(&[137, 80, 78, 71], "image/png")
            .unwrap();
        let body = request.to_body();
        let inline = &body["contents"][0]["parts"][1]["inlineData"];
        assert_eq!(inline["mimeType"], "image/png");
        assert_eq!(inline["data"], "iVBORw==");
    }

    #[test]
    fn test_image_size_cap() {
        let oversized = vec![0u8; MAX_IMAGE_BYTES + 1];
        let result = SuggestionRequest::new(SuggestionTarget::Full)
            .with_image(&oversized, "image/jpeg");
        assert!(matches!(result, Err(RequestError::ImageTooLarge { .. })));
    }

    #[test]
    fn test_non_image_mime_rejected() {
        let result =
            SuggestionRequest::new(SuggestionTarget::Full).with_image(&[1, 2, 3], "text/plain");
        assert!(matches!(result, Err(RequestError::UnsupportedMime(_))));
    }

    #[test]
    fn test_skill_document_lists_vocabulary() {
        let doc = skill_document();
        for gradient_type in GradientType::ALL {
            assert!(doc.contains(gradient_type.name()));
        }
        for shape in FrameShape::ALL {
            assert!(doc.contains(shape.name()));
        }
    }
}

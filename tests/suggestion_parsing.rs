//! Tolerant parsing of model replies and request construction

use overlay_composer::settings::{FrameShape, GradientType};
use overlay_composer::suggestion::{
    merge_settings, OverlaySuggestion, SuggestionRequest, SuggestionTarget, MAX_IMAGE_BYTES,
};
use overlay_composer::OverlaySettings;

#[test]
fn test_fenced_reply_parses() {
    let reply = r##"Sure! Here's a style that should work well:

```json
{
    "gradient": {
        "gradientType": "sunset",
        "angle": 180,
        "colorStops": [
            {"color": "#2a1a4a", "opacity": 0.8, "position": 0},
            {"color": "#ff7e5f", "opacity": 0.3, "position": 100}
        ]
    },
    "rationale": "warm dusk tones to match the sky"
}
```

Let me know if you'd like something bolder."##;

    let suggestion = OverlaySuggestion::from_model_reply(reply);
    let gradient = suggestion.gradient.expect("gradient section");
    assert_eq!(gradient.gradient_type, Some(GradientType::Sunset));
    assert_eq!(gradient.angle, Some(180.0));
    assert_eq!(gradient.color_stops.as_ref().map(|s| s.len()), Some(2));
}

#[test]
fn test_prose_only_reply_degrades_to_empty() {
    let suggestion =
        OverlaySuggestion::from_model_reply("I'm sorry, I can't see the image clearly.");
    assert!(suggestion.is_empty());
}

#[test]
fn test_degraded_reply_merge_keeps_settings_unchanged() {
    let current = OverlaySettings::default().normalized();
    let suggestion = OverlaySuggestion::from_model_reply("garbage }{ reply");
    let merged = merge_settings(&current, &suggestion);
    assert_eq!(merged, current);
}

#[test]
fn test_unknown_names_degrade_not_fail() {
    let reply = r#"{"gradient": {"gradientType": "vaporwave-9000"}, "logo": {"frame": "mobius"}}"#;
    let suggestion = OverlaySuggestion::from_model_reply(reply);
    assert_eq!(
        suggestion.gradient.unwrap().gradient_type,
        Some(GradientType::Linear)
    );
    assert_eq!(suggestion.logo.unwrap().frame, Some(FrameShape::None));
}

#[test]
fn test_reply_to_css_end_to_end() {
    let reply = r#"{"logo": {"frame": "hexagon", "x": 85, "y": 10, "size": 10}}"#;
    let suggestion = OverlaySuggestion::from_model_reply(reply);
    let merged = merge_settings(&OverlaySettings::default(), &suggestion);
    let css = overlay_composer::compose(&merged).expect("should compose");
    assert!(css.contains("left: 85%;"));
    assert!(css.contains("top: 10%;"));
    assert!(css.contains("clip-path: polygon(25% 0%, 75% 0%, 100% 50%, 75% 100%, 25% 100%, 0% 50%);"));
}

#[test]
fn test_request_body_layout() {
    let request = SuggestionRequest::new(SuggestionTarget::Logo)
        .with_image(&[0xff, 0xd8, 0xff, 0xe0], "image/jpeg")
        .expect("image should be accepted");
    let body = request.to_body();

    assert!(body["contents"].is_array());
    let parts = body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert!(parts[0]["text"].as_str().unwrap().contains("logo"));
    assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
}

#[test]
fn test_request_rejects_oversized_image() {
    let oversized = vec![0u8; MAX_IMAGE_BYTES + 1];
    assert!(SuggestionRequest::new(SuggestionTarget::Full)
        .with_image(&oversized, "image/png")
        .is_err());
}

#[test]
fn test_prompt_teaches_the_vocabulary() {
    let request = SuggestionRequest::new(SuggestionTarget::Full);
    let prompt = request.prompt();
    assert!(prompt.contains("fire"));
    assert!(prompt.contains("aurora"));
    assert!(prompt.contains("hexagon"));
    assert!(prompt.contains("colorStops"));
}

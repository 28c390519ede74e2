//! Merging suggestions into current settings
//!
//! The merge rule for every scalar field is `suggestion ?? current`;
//! defaults already live in the current settings via `Default`, so an
//! empty suggestion is the identity and a full suggestion wins
//! everywhere. Stop lists replace wholesale — stops carry no stable
//! identity to merge element-wise. The merged result is re-normalized
//! so out-of-range suggested values are clamped like any other input.

use crate::settings::{
    BorderSettings, ColorStop, GradientSettings, LogoSettings, OverlaySettings, ShadowSettings,
    TextSettings,
};

use super::payload::{
    BorderSuggestion, GradientSuggestion, LogoSuggestion, OverlaySuggestion, ShadowSuggestion,
    StopSuggestion, TextSuggestion,
};

/// Apply a suggestion to the current settings, producing the merged,
/// normalized result.
pub fn merge_settings(
    current: &OverlaySettings,
    suggestion: &OverlaySuggestion,
) -> OverlaySettings {
    OverlaySettings {
        gradient: match &suggestion.gradient {
            Some(g) => merge_gradient(&current.gradient, g),
            None => current.gradient.clone(),
        },
        logo: match &suggestion.logo {
            Some(l) => merge_logo(&current.logo, l),
            None => current.logo.clone(),
        },
        text: match &suggestion.text {
            Some(t) => merge_text(&current.text, t),
            None => current.text.clone(),
        },
    }
    .normalized()
}

fn merge_gradient(current: &GradientSettings, suggestion: &GradientSuggestion) -> GradientSettings {
    GradientSettings {
        gradient_type: suggestion.gradient_type.unwrap_or(current.gradient_type),
        angle: suggestion.angle.unwrap_or(current.angle),
        center_x: suggestion.center_x.unwrap_or(current.center_x),
        center_y: suggestion.center_y.unwrap_or(current.center_y),
        size: suggestion.size.unwrap_or(current.size),
        color_stops: match &suggestion.color_stops {
            Some(stops) => resolve_stops(stops),
            None => current.color_stops.clone(),
        },
        use_sharp_stops: suggestion.use_sharp_stops.unwrap_or(current.use_sharp_stops),
        blend_mode: suggestion.blend_mode.unwrap_or(current.blend_mode),
        opacity: suggestion.opacity.unwrap_or(current.opacity),
    }
}

/// Turn suggested stops into concrete ones.
///
/// A stop with no position is spread evenly across the ramp by its
/// index; missing colors default to black at full opacity.
fn resolve_stops(stops: &[StopSuggestion]) -> Vec<ColorStop> {
    let count = stops.len();
    stops
        .iter()
        .enumerate()
        .map(|(i, stop)| {
            let spread = if count > 1 {
                i as f64 * 100.0 / (count - 1) as f64
            } else {
                0.0
            };
            ColorStop {
                color: stop.color.clone().unwrap_or_else(|| "#000000".to_string()),
                opacity: stop.opacity.unwrap_or(1.0),
                position: stop.position.unwrap_or(spread),
            }
        })
        .collect()
}

fn merge_logo(current: &LogoSettings, suggestion: &LogoSuggestion) -> LogoSettings {
    LogoSettings {
        x: suggestion.x.unwrap_or(current.x),
        y: suggestion.y.unwrap_or(current.y),
        size: suggestion.size.unwrap_or(current.size),
        opacity: suggestion.opacity.unwrap_or(current.opacity),
        frame: suggestion.frame.unwrap_or(current.frame),
        border: match &suggestion.border {
            Some(b) => merge_border(&current.border, b),
            None => current.border.clone(),
        },
        shadow: match &suggestion.shadow {
            Some(s) => merge_shadow(&current.shadow, s),
            None => current.shadow.clone(),
        },
    }
}

fn merge_border(current: &BorderSettings, suggestion: &BorderSuggestion) -> BorderSettings {
    BorderSettings {
        width: suggestion.width.unwrap_or(current.width),
        color: suggestion.color.clone().unwrap_or_else(|| current.color.clone()),
        opacity: suggestion.opacity.unwrap_or(current.opacity),
    }
}

fn merge_shadow(current: &ShadowSettings, suggestion: &ShadowSuggestion) -> ShadowSettings {
    ShadowSettings {
        blur: suggestion.blur.unwrap_or(current.blur),
        offset_x: suggestion.offset_x.unwrap_or(current.offset_x),
        offset_y: suggestion.offset_y.unwrap_or(current.offset_y),
        color: suggestion.color.clone().unwrap_or_else(|| current.color.clone()),
        opacity: suggestion.opacity.unwrap_or(current.opacity),
    }
}

fn merge_text(current: &TextSettings, suggestion: &TextSuggestion) -> TextSettings {
    TextSettings {
        x: suggestion.x.unwrap_or(current.x),
        y: suggestion.y.unwrap_or(current.y),
        font_size: suggestion.font_size.unwrap_or(current.font_size),
        align: suggestion.align.unwrap_or(current.align),
        color: suggestion.color.clone().unwrap_or_else(|| current.color.clone()),
        opacity: suggestion.opacity.unwrap_or(current.opacity),
        shadow: match &suggestion.shadow {
            Some(s) => merge_shadow(&current.shadow, s),
            None => current.shadow.clone(),
        },
    }
}

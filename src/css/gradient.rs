//! Gradient CSS generation
//!
//! Maps a [`GradientSettings`] record to a CSS `background` value.
//! Geometric styles interpolate the user's color stops directly.
//! Thematic styles stack fixed decorative layers over a base built
//! from the stops (layers listed first paint on top). Fixed-ramp
//! styles carry their own built-in color ramp and only honor the
//! geometry parameters.

use crate::settings::{ColorStop, GradientSettings, GradientType};
use crate::theme::Theme;

use super::color::{css_color, ColorError};
use super::fmt_num;

/// Generate the CSS background value for a gradient overlay.
///
/// Expects normalized settings (stops sorted, ranges clamped); the
/// compose pipeline normalizes before calling in here.
pub fn gradient_css(g: &GradientSettings, theme: &Theme) -> Result<String, ColorError> {
    let a = fmt_num(g.angle);
    let cx = fmt_num(g.center_x);
    let cy = fmt_num(g.center_y);
    let s = fmt_num(g.size);

    let stops = stop_list(&g.color_stops, g.use_sharp_stops, theme)?;
    let linear_base = format!("linear-gradient({a}deg, {stops})");
    let radial_base = format!("radial-gradient(ellipse {s}% {s}% at {cx}% {cy}%, {stops})");

    let layers: Vec<String> = match g.gradient_type {
        GradientType::Linear => vec![linear_base],
        GradientType::Radial => vec![radial_base],
        GradientType::Conic => {
            vec![format!("conic-gradient(from {a}deg at {cx}% {cy}%, {stops})")]
        }
        GradientType::Reflected => {
            let mirrored = mirrored_stop_list(&g.color_stops, g.use_sharp_stops, theme)?;
            vec![format!("linear-gradient({a}deg, {mirrored})")]
        }
        GradientType::RepeatingLinear => {
            let period = scaled_stop_list(&g.color_stops, g.size / 100.0, theme)?;
            vec![format!("repeating-linear-gradient({a}deg, {period})")]
        }
        GradientType::RepeatingRadial => {
            let period = scaled_stop_list(&g.color_stops, g.size / 100.0, theme)?;
            vec![format!(
                "repeating-radial-gradient(circle at {cx}% {cy}%, {period})"
            )]
        }
        GradientType::Sunset => vec![
            "linear-gradient(0deg, rgba(255, 94, 58, 0.45) 0%, rgba(255, 94, 58, 0) 60%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Dawn => vec![
            "radial-gradient(ellipse 80% 50% at 50% 100%, rgba(255, 214, 165, 0.55) 0%, rgba(255, 214, 165, 0) 70%)"
                .to_string(),
            linear_base,
        ],
        // The canonical composite: a radial heat bloom stacked on the
        // linear base, anchored to the bottom edge at the user's center x.
        GradientType::Fire => vec![
            format!(
                "radial-gradient(ellipse 90% 70% at {cx}% 100%, rgba(255, 177, 60, 0.85) 0%, rgba(255, 88, 20, 0.55) 45%, rgba(120, 20, 8, 0) 80%)"
            ),
            linear_base,
        ],
        GradientType::Ember => vec![
            "radial-gradient(circle at 50% 100%, rgba(255, 120, 40, 0.6) 0%, rgba(120, 30, 10, 0.3) 50%, rgba(20, 5, 2, 0) 75%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Lava => vec![
            "radial-gradient(ellipse 60% 40% at 30% 80%, rgba(255, 60, 0, 0.7) 0%, rgba(255, 60, 0, 0) 60%)"
                .to_string(),
            "radial-gradient(ellipse 50% 35% at 75% 65%, rgba(255, 140, 0, 0.5) 0%, rgba(255, 140, 0, 0) 55%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Aurora => vec![
            "linear-gradient(115deg, rgba(56, 255, 176, 0.4) 0%, rgba(56, 255, 176, 0) 45%)"
                .to_string(),
            "linear-gradient(245deg, rgba(130, 80, 255, 0.35) 0%, rgba(130, 80, 255, 0) 50%)"
                .to_string(),
            "linear-gradient(25deg, rgba(64, 220, 255, 0.3) 0%, rgba(64, 220, 255, 0) 40%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Galaxy => vec![
            "radial-gradient(circle at 20% 25%, rgba(255, 255, 255, 0.25) 0%, rgba(255, 255, 255, 0) 18%)"
                .to_string(),
            "radial-gradient(circle at 75% 70%, rgba(200, 160, 255, 0.3) 0%, rgba(200, 160, 255, 0) 35%)"
                .to_string(),
            format!(
                "conic-gradient(from {a}deg at {cx}% {cy}%, rgba(40, 20, 80, 0.4) 0%, rgba(10, 5, 30, 0) 50%, rgba(40, 20, 80, 0.4) 100%)"
            ),
            radial_base,
        ],
        GradientType::Nebula => vec![
            "radial-gradient(ellipse 70% 55% at 30% 30%, rgba(255, 0, 180, 0.35) 0%, rgba(255, 0, 180, 0) 60%)"
                .to_string(),
            "radial-gradient(ellipse 60% 50% at 70% 65%, rgba(0, 200, 255, 0.3) 0%, rgba(0, 200, 255, 0) 55%)"
                .to_string(),
            radial_base,
        ],
        GradientType::Ocean => vec![
            "linear-gradient(180deg, rgba(255, 255, 255, 0) 55%, rgba(0, 80, 140, 0.45) 100%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Wave => vec![
            "repeating-radial-gradient(circle at 50% 120%, rgba(255, 255, 255, 0.12) 0%, rgba(255, 255, 255, 0.12) 2%, rgba(255, 255, 255, 0) 2%, rgba(255, 255, 255, 0) 8%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Forest => vec![
            "radial-gradient(ellipse 85% 60% at 50% 0%, rgba(34, 120, 60, 0.4) 0%, rgba(34, 120, 60, 0) 65%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Meadow => vec![
            "radial-gradient(ellipse 80% 55% at 50% 100%, rgba(180, 220, 90, 0.35) 0%, rgba(180, 220, 90, 0) 60%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Neon => {
            // Neon always renders hard transitions
            let sharp = stop_list(&g.color_stops, true, theme)?;
            vec![
                format!(
                    "radial-gradient(circle at {cx}% {cy}%, rgba(57, 255, 20, 0.35) 0%, rgba(57, 255, 20, 0) 45%)"
                ),
                format!("linear-gradient({a}deg, {sharp})"),
            ]
        }
        GradientType::Cyber => vec![
            "linear-gradient(135deg, rgba(255, 0, 170, 0.35) 0%, rgba(255, 0, 170, 0) 40%)"
                .to_string(),
            "linear-gradient(315deg, rgba(0, 229, 255, 0.35) 0%, rgba(0, 229, 255, 0) 40%)"
                .to_string(),
            format!("conic-gradient(from {a}deg at {cx}% {cy}%, {stops})"),
        ],
        GradientType::Twilight => vec![
            format!(
                "conic-gradient(from {a}deg at 50% 0%, rgba(90, 60, 150, 0.25) 0%, rgba(20, 15, 50, 0) 50%, rgba(90, 60, 150, 0.25) 100%)"
            ),
            linear_base,
        ],
        GradientType::Midnight => vec![
            "radial-gradient(circle at 80% 15%, rgba(220, 230, 255, 0.35) 0%, rgba(220, 230, 255, 0) 12%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Ice => vec![
            "linear-gradient(205deg, rgba(255, 255, 255, 0.4) 0%, rgba(255, 255, 255, 0) 35%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Mist => vec![
            "radial-gradient(ellipse 100% 60% at 50% 50%, rgba(255, 255, 255, 0.3) 0%, rgba(255, 255, 255, 0) 70%)"
                .to_string(),
            "linear-gradient(0deg, rgba(255, 255, 255, 0.25) 0%, rgba(255, 255, 255, 0) 40%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Candy => vec![
            "repeating-linear-gradient(45deg, rgba(255, 255, 255, 0.18) 0%, rgba(255, 255, 255, 0.18) 4%, rgba(255, 255, 255, 0) 4%, rgba(255, 255, 255, 0) 8%)"
                .to_string(),
            linear_base,
        ],
        GradientType::Rose => vec![
            format!(
                "radial-gradient(ellipse 75% 60% at {cx}% {cy}%, rgba(255, 150, 180, 0.4) 0%, rgba(255, 150, 180, 0) 65%)"
            ),
            linear_base,
        ],
        GradientType::Rainbow => vec![format!(
            "linear-gradient({a}deg, rgba(255, 0, 0, 1) 0%, rgba(255, 165, 0, 1) 17%, rgba(255, 255, 0, 1) 33%, rgba(0, 128, 0, 1) 50%, rgba(0, 0, 255, 1) 67%, rgba(75, 0, 130, 1) 83%, rgba(238, 130, 238, 1) 100%)"
        )],
        GradientType::Spectrum => vec![format!(
            "conic-gradient(from {a}deg at {cx}% {cy}%, rgba(255, 0, 0, 1) 0%, rgba(255, 255, 0, 1) 17%, rgba(0, 255, 0, 1) 33%, rgba(0, 255, 255, 1) 50%, rgba(0, 0, 255, 1) 67%, rgba(255, 0, 255, 1) 83%, rgba(255, 0, 0, 1) 100%)"
        )],
        GradientType::Gold => vec![format!(
            "linear-gradient({a}deg, rgba(184, 134, 11, 1) 0%, rgba(255, 215, 0, 1) 25%, rgba(255, 248, 220, 1) 50%, rgba(255, 215, 0, 1) 75%, rgba(184, 134, 11, 1) 100%)"
        )],
        GradientType::Silver => vec![format!(
            "linear-gradient({a}deg, rgba(107, 114, 128, 1) 0%, rgba(203, 213, 225, 1) 25%, rgba(248, 250, 252, 1) 50%, rgba(203, 213, 225, 1) 75%, rgba(107, 114, 128, 1) 100%)"
        )],
        GradientType::Steel => vec![
            "linear-gradient(115deg, rgba(255, 255, 255, 0.25) 0%, rgba(255, 255, 255, 0) 30%)"
                .to_string(),
            format!(
                "linear-gradient({a}deg, rgba(51, 65, 85, 1) 0%, rgba(148, 163, 184, 1) 45%, rgba(71, 85, 105, 1) 55%, rgba(30, 41, 59, 1) 100%)"
            ),
        ],
    };

    Ok(layers.join(", "))
}

/// Format one stop as `<color> <position>%`
fn stop_css(stop: &ColorStop, position: f64, theme: &Theme) -> Result<String, ColorError> {
    Ok(format!(
        "{} {}%",
        css_color(&stop.color, stop.opacity, theme)?,
        fmt_num(position)
    ))
}

/// Build a comma-separated stop list.
///
/// In sharp mode each color is also emitted at the next stop's
/// position, so every transition becomes a hard edge.
fn stop_list(stops: &[ColorStop], sharp: bool, theme: &Theme) -> Result<String, ColorError> {
    let mut parts = Vec::with_capacity(stops.len() * 2);
    for (i, stop) in stops.iter().enumerate() {
        parts.push(stop_css(stop, stop.position, theme)?);
        if sharp {
            if let Some(next) = stops.get(i + 1) {
                parts.push(stop_css(stop, next.position, theme)?);
            }
        }
    }
    Ok(parts.join(", "))
}

/// Stop list with every position multiplied by `factor` (repeat period)
fn scaled_stop_list(
    stops: &[ColorStop],
    factor: f64,
    theme: &Theme,
) -> Result<String, ColorError> {
    let parts = stops
        .iter()
        .map(|stop| stop_css(stop, stop.position * factor, theme))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(", "))
}

/// Stop list compressed into [0, 50] and mirrored back out to 100
fn mirrored_stop_list(
    stops: &[ColorStop],
    sharp: bool,
    theme: &Theme,
) -> Result<String, ColorError> {
    let mut mirrored: Vec<ColorStop> = stops
        .iter()
        .map(|stop| ColorStop {
            color: stop.color.clone(),
            opacity: stop.opacity,
            position: stop.position / 2.0,
        })
        .collect();
    for stop in stops.iter().rev() {
        mirrored.push(ColorStop {
            color: stop.color.clone(),
            opacity: stop.opacity,
            position: 100.0 - stop.position / 2.0,
        });
    }
    stop_list(&mirrored, sharp, theme)
}

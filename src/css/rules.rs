//! Per-layer rule emitters
//!
//! One rule per overlay layer. Declarations at their neutral values
//! (opacity 1, zero-width border, neutral shadow, normal blend mode)
//! are omitted rather than emitted redundantly.

use crate::settings::{BlendMode, GradientSettings, LogoSettings, ShadowSettings, TextSettings};
use crate::theme::Theme;

use super::builder::CssBuilder;
use super::color::{css_color, ColorError};
use super::gradient::gradient_css;
use super::shape::frame_css;
use super::fmt_num;

/// Emit the gradient overlay rule
pub fn render_overlay(
    builder: &mut CssBuilder,
    gradient: &GradientSettings,
    theme: &Theme,
) -> Result<(), ColorError> {
    builder.start_rule("overlay");
    builder.decl("background", gradient_css(gradient, theme)?);
    if gradient.blend_mode != BlendMode::Normal {
        builder.decl("mix-blend-mode", gradient.blend_mode.as_css());
    }
    if gradient.opacity < 1.0 {
        builder.decl("opacity", fmt_num(gradient.opacity));
    }
    Ok(())
}

/// Emit the logo placement/framing rule
pub fn render_logo(
    builder: &mut CssBuilder,
    logo: &LogoSettings,
    theme: &Theme,
) -> Result<(), ColorError> {
    builder.start_rule("logo");
    builder.decl("left", format!("{}%", fmt_num(logo.x)));
    builder.decl("top", format!("{}%", fmt_num(logo.y)));
    builder.decl("width", format!("{}%", fmt_num(logo.size)));
    builder.decl("transform", "translate(-50%, -50%)");
    if logo.opacity < 1.0 {
        builder.decl("opacity", fmt_num(logo.opacity));
    }
    if let Some((property, value)) = frame_css(logo.frame) {
        builder.decl(property, value);
    }
    if logo.border.width > 0.0 {
        builder.decl(
            "border",
            format!(
                "{}px solid {}",
                fmt_num(logo.border.width),
                css_color(&logo.border.color, logo.border.opacity, theme)?
            ),
        );
    }
    if !logo.shadow.is_neutral() {
        builder.decl("box-shadow", shadow_css(&logo.shadow, theme)?);
    }
    Ok(())
}

/// Emit the text positioning rule
pub fn render_text(
    builder: &mut CssBuilder,
    text: &TextSettings,
    theme: &Theme,
) -> Result<(), ColorError> {
    builder.start_rule("text");
    builder.decl("left", format!("{}%", fmt_num(text.x)));
    builder.decl("top", format!("{}%", fmt_num(text.y)));
    builder.decl("transform", "translate(-50%, -50%)");
    builder.decl("font-size", format!("{}px", fmt_num(text.font_size)));
    builder.decl("text-align", text.align.as_css());
    builder.decl("color", css_color(&text.color, text.opacity, theme)?);
    if !text.shadow.is_neutral() {
        builder.decl("text-shadow", shadow_css(&text.shadow, theme)?);
    }
    Ok(())
}

/// `<offset-x>px <offset-y>px <blur>px <color>` (box- and text-shadow)
fn shadow_css(shadow: &ShadowSettings, theme: &Theme) -> Result<String, ColorError> {
    Ok(format!(
        "{}px {}px {}px {}",
        fmt_num(shadow.offset_x),
        fmt_num(shadow.offset_y),
        fmt_num(shadow.blur),
        css_color(&shadow.color, shadow.opacity, theme)?
    ))
}

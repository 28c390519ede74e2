//! Frame shape CSS generation
//!
//! Pure lookup from [`FrameShape`] to the declaration that clips the
//! logo: a `clip-path` value for polygonal shapes, a `border-radius`
//! shorthand for the rounded family.

use crate::settings::FrameShape;

/// The declaration produced for a frame shape: `(property, value)`.
///
/// `FrameShape::None` (including unknown names degraded to it during
/// deserialization) produces no declaration.
pub fn frame_css(shape: FrameShape) -> Option<(&'static str, &'static str)> {
    let decl = match shape {
        FrameShape::None => return None,
        FrameShape::Circle => ("clip-path", "circle(50% at 50% 50%)"),
        FrameShape::Ellipse => ("clip-path", "ellipse(50% 35% at 50% 50%)"),
        FrameShape::Rounded => ("border-radius", "12%"),
        FrameShape::Squircle => ("border-radius", "30%"),
        FrameShape::Pill => ("border-radius", "999px"),
        FrameShape::Blob => ("border-radius", "30% 70% 70% 30% / 30% 30% 70% 70%"),
        FrameShape::Triangle => ("clip-path", "polygon(50% 0%, 0% 100%, 100% 100%)"),
        FrameShape::InvertedTriangle => ("clip-path", "polygon(0% 0%, 100% 0%, 50% 100%)"),
        FrameShape::Diamond => ("clip-path", "polygon(50% 0%, 100% 50%, 50% 100%, 0% 50%)"),
        FrameShape::Pentagon => (
            "clip-path",
            "polygon(50% 0%, 100% 38%, 82% 100%, 18% 100%, 0% 38%)",
        ),
        FrameShape::Hexagon => (
            "clip-path",
            "polygon(25% 0%, 75% 0%, 100% 50%, 75% 100%, 25% 100%, 0% 50%)",
        ),
        FrameShape::Heptagon => (
            "clip-path",
            "polygon(50% 0%, 90% 20%, 100% 60%, 75% 100%, 25% 100%, 0% 60%, 10% 20%)",
        ),
        FrameShape::Octagon => (
            "clip-path",
            "polygon(30% 0%, 70% 0%, 100% 30%, 100% 70%, 70% 100%, 30% 100%, 0% 70%, 0% 30%)",
        ),
        FrameShape::Star => (
            "clip-path",
            "polygon(50% 0%, 61% 35%, 98% 35%, 68% 57%, 79% 91%, 50% 70%, 21% 91%, 32% 57%, 2% 35%, 39% 35%)",
        ),
        FrameShape::Cross => (
            "clip-path",
            "polygon(35% 0%, 65% 0%, 65% 35%, 100% 35%, 100% 65%, 65% 65%, 65% 100%, 35% 100%, 35% 65%, 0% 65%, 0% 35%, 35% 35%)",
        ),
        FrameShape::Chevron => (
            "clip-path",
            "polygon(75% 0%, 100% 50%, 75% 100%, 0% 100%, 25% 50%, 0% 0%)",
        ),
        FrameShape::Arrow => (
            "clip-path",
            "polygon(0% 20%, 60% 20%, 60% 0%, 100% 50%, 60% 100%, 60% 80%, 0% 80%)",
        ),
        FrameShape::Parallelogram => {
            ("clip-path", "polygon(25% 0%, 100% 0%, 75% 100%, 0% 100%)")
        }
        FrameShape::Trapezoid => ("clip-path", "polygon(20% 0%, 80% 0%, 100% 100%, 0% 100%)"),
        FrameShape::Shield => (
            "clip-path",
            "polygon(50% 0%, 100% 15%, 100% 55%, 50% 100%, 0% 55%, 0% 15%)",
        ),
        FrameShape::Message => (
            "clip-path",
            "polygon(0% 0%, 100% 0%, 100% 75%, 75% 75%, 75% 100%, 50% 75%, 0% 75%)",
        ),
    };
    Some(decl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_produces_no_declaration() {
        assert_eq!(frame_css(FrameShape::None), None);
    }

    #[test]
    fn test_circle_is_clip_path() {
        let (property, value) = frame_css(FrameShape::Circle).unwrap();
        assert_eq!(property, "clip-path");
        assert_eq!(value, "circle(50% at 50% 50%)");
    }

    #[test]
    fn test_rounded_family_is_border_radius() {
        for shape in [
            FrameShape::Rounded,
            FrameShape::Squircle,
            FrameShape::Pill,
            FrameShape::Blob,
        ] {
            let (property, _) = frame_css(shape).unwrap();
            assert_eq!(property, "border-radius", "shape {}", shape.name());
        }
    }

    #[test]
    fn test_every_polygon_is_well_formed() {
        for shape in FrameShape::ALL {
            let Some((property, value)) = frame_css(shape) else {
                continue;
            };
            if property == "clip-path" && value.starts_with("polygon(") {
                let inner = value
                    .strip_prefix("polygon(")
                    .and_then(|v| v.strip_suffix(')'))
                    .unwrap();
                for point in inner.split(", ") {
                    let coords: Vec<&str> = point.split(' ').collect();
                    assert_eq!(coords.len(), 2, "bad point in {}: {}", shape.name(), point);
                    for coord in coords {
                        assert!(
                            coord.ends_with('%'),
                            "bad coordinate in {}: {}",
                            shape.name(),
                            coord
                        );
                    }
                }
            }
        }
    }
}

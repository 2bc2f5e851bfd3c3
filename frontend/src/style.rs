use std::borrow::Cow;
use std::fmt;

use crate::theme::Palette;

/// Ordered inline-style declarations. Setting a property that is already
/// present replaces its value in place, so `a.merge(&b)` behaves like
/// spreading `b` over `a`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Css {
    decls: Vec<(&'static str, Cow<'static, str>)>,
}

impl Css {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: &'static str, value: impl Into<Cow<'static, str>>) {
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.decls.push((property, value)),
        }
    }

    pub fn merge(mut self, other: &Css) -> Self {
        for (property, value) in &other.decls {
            self.set(*property, value.clone());
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }
}

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", property, value)?;
        }
        Ok(())
    }
}

/// Full-bleed absolutely positioned layer that never takes pointer events.
pub fn overlay() -> Css {
    Css::new()
        .with("position", "absolute")
        .with("top", "0")
        .with("left", "0")
        .with("right", "0")
        .with("bottom", "0")
        .with("pointer-events", "none")
}

/// Background texture drawn behind a section frame's content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pattern {
    BlueprintGrid,
    TechnicalDots,
    DiagonalHatch,
    CrossHatch,
    #[default]
    None,
}

impl Pattern {
    /// Layer style, or `None` when nothing should be rendered.
    pub fn layer(self, palette: &Palette) -> Option<Css> {
        let base = overlay().with("opacity", "0.08");
        let css = match self {
            Pattern::BlueprintGrid => base
                .with(
                    "background-image",
                    format!(
                        "linear-gradient({strong} 1px, transparent 1px), linear-gradient(90deg, {strong} 1px, transparent 1px), linear-gradient({faint} 1px, transparent 1px), linear-gradient(90deg, {faint} 1px, transparent 1px)",
                        strong = palette.glow(0.15),
                        faint = palette.glow(0.05),
                    ),
                )
                .with("background-size", "100px 100px, 100px 100px, 20px 20px, 20px 20px"),
            Pattern::TechnicalDots => base
                .with(
                    "background-image",
                    format!(
                        "radial-gradient(circle, {} 0.5px, transparent 0.5px), radial-gradient(circle, {} 0.5px, transparent 0.5px)",
                        palette.glow(0.3),
                        palette.glow(0.15),
                    ),
                )
                .with("background-size", "20px 20px, 100px 100px")
                .with("background-position", "0 0, 10px 10px"),
            Pattern::DiagonalHatch => base.with("background-image", hatch(palette, 10, 0.08)),
            Pattern::CrossHatch => base
                .with("background-image", hatch(palette, 15, 0.06))
                .with("opacity", "0.12"),
            Pattern::None => return None,
        };
        Some(css)
    }
}

fn hatch(palette: &Palette, gap: u32, alpha: f32) -> String {
    let line = palette.glow(alpha);
    let stripe = |angle: i32| {
        format!(
            "repeating-linear-gradient({angle}deg, transparent, transparent {gap}px, {line} {gap}px, {line} {edge}px)",
            edge = gap + 1,
        )
    };
    format!("{}, {}", stripe(45), stripe(-45))
}

/// Soft radial light placed over a section frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Spotlight {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
    Dual,
    #[default]
    None,
}

impl Spotlight {
    pub fn layer(self, palette: &Palette) -> Option<Css> {
        let corner = |x: u8, y: u8| {
            format!(
                "radial-gradient(ellipse 800px 600px at {}% {}%, {}, transparent 50%)",
                x,
                y,
                palette.glow(0.12)
            )
        };
        let background = match self {
            Spotlight::TopLeft => corner(15, 20),
            Spotlight::TopRight => corner(85, 20),
            Spotlight::BottomLeft => corner(15, 80),
            Spotlight::BottomRight => corner(85, 80),
            Spotlight::Center => format!(
                "radial-gradient(ellipse 900px 700px at 50% 50%, {}, transparent 60%)",
                palette.glow(0.1)
            ),
            Spotlight::Dual => format!(
                "radial-gradient(ellipse 700px 500px at 25% 30%, {glow}, transparent 50%), radial-gradient(ellipse 700px 500px at 75% 70%, {glow}, transparent 50%)",
                glow = palette.glow(0.1)
            ),
            Spotlight::None => return None,
        };
        Some(overlay().with("z-index", "0").with("background", background))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::BLUEPRINT;

    #[test]
    fn later_values_win_and_keep_position() {
        let base = Css::new().with("width", "80px").with("display", "flex");
        let merged = base.merge(&Css::new().with("width", "auto").with("height", "auto"));
        assert_eq!(merged.to_string(), "width: auto; display: flex; height: auto;");
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn empty_css_renders_empty_string() {
        assert!(Css::new().is_empty());
        assert_eq!(Css::new().to_string(), "");
    }

    #[test]
    fn none_pattern_and_spotlight_render_no_layer() {
        assert!(Pattern::None.layer(&BLUEPRINT).is_none());
        assert!(Spotlight::None.layer(&BLUEPRINT).is_none());
    }

    #[test]
    fn cross_hatch_overrides_base_opacity() {
        let css = Pattern::CrossHatch.layer(&BLUEPRINT).unwrap_or_default();
        assert_eq!(css.get("opacity"), Some("0.12"));
        let hatch = css.get("background-image").unwrap_or_default();
        assert!(hatch.contains("transparent 15px"));
        assert!(hatch.contains("rgba(37, 99, 235, 0.06) 16px"));
        assert!(hatch.contains("-45deg"));
    }

    #[test]
    fn spotlights_sit_at_their_corner() {
        let at = |s: Spotlight| {
            s.layer(&BLUEPRINT)
                .and_then(|css| css.get("background").map(str::to_string))
                .unwrap_or_default()
        };
        assert!(at(Spotlight::TopLeft).contains("at 15% 20%"));
        assert!(at(Spotlight::TopRight).contains("at 85% 20%"));
        assert!(at(Spotlight::BottomLeft).contains("at 15% 80%"));
        assert!(at(Spotlight::BottomRight).contains("at 85% 80%"));
        assert!(at(Spotlight::Center).contains("900px 700px at 50% 50%"));
        assert_eq!(at(Spotlight::Dual).matches("radial-gradient").count(), 2);
    }
}

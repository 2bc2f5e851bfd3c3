use yew::prelude::*;

use crate::style::{Css, Pattern, Spotlight};
use crate::theme::{Palette, Theme};

#[derive(Properties, PartialEq)]
pub struct SectionFrameProps {
    #[prop_or_default]
    pub style: Css,
    #[prop_or_default]
    pub pattern: Pattern,
    #[prop_or_default]
    pub spotlight: Spotlight,
    #[prop_or_default]
    pub corner_marks: bool,
    #[prop_or_default]
    pub dimensions: bool,
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Copy)]
enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    const ALL: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];

    fn sides(self) -> (&'static str, &'static str) {
        match self {
            Corner::TopLeft => ("top", "left"),
            Corner::TopRight => ("top", "right"),
            Corner::BottomLeft => ("bottom", "left"),
            Corner::BottomRight => ("bottom", "right"),
        }
    }

    fn border_props(self) -> (&'static str, &'static str) {
        match self {
            Corner::TopLeft => ("border-top", "border-left"),
            Corner::TopRight => ("border-top", "border-right"),
            Corner::BottomLeft => ("border-bottom", "border-left"),
            Corner::BottomRight => ("border-bottom", "border-right"),
        }
    }
}

// Registration mark: an L-bracket with a dot just outside its corner.
fn corner_mark(corner: Corner, palette: &Palette) -> Html {
    let (vertical, horizontal) = corner.sides();
    let (border_a, border_b) = corner.border_props();
    let stroke = format!("2px solid {}", palette.accent);

    let bracket = Css::new()
        .with("position", "absolute")
        .with(vertical, "16px")
        .with(horizontal, "16px")
        .with("width", "20px")
        .with("height", "20px")
        .with(border_a, stroke.clone())
        .with(border_b, stroke)
        .with("opacity", "0.6");
    let dot = Css::new()
        .with("position", "absolute")
        .with(vertical, "-8px")
        .with(horizontal, "-8px")
        .with("width", "4px")
        .with("height", "4px")
        .with("background-color", palette.accent)
        .with("border-radius", "50%");

    html! {
        <div style={bracket.to_string()}>
            <div style={dot.to_string()}></div>
        </div>
    }
}

fn dimension_mark(label: &'static str, placement: Css, palette: &Palette) -> Html {
    let css = Css::new()
        .with("position", "absolute")
        .with("display", "flex")
        .with("align-items", "center")
        .with("gap", "8px")
        .with("font-size", "9px")
        .with("font-family", "monospace")
        .with("color", palette.accent)
        .with("opacity", "0.5")
        .merge(&placement);
    let tick = Css::new()
        .with("width", "30px")
        .with("height", "1px")
        .with("background-color", palette.accent)
        .to_string();

    html! {
        <div style={css.to_string()}>
            <div style={tick.clone()}></div>
            <span>{label}</span>
            <div style={tick}></div>
        </div>
    }
}

/// Bordered drawing sheet around one section. Decorations stack beneath the
/// children, which always sit on their own layer above them.
#[function_component(SectionFrame)]
pub fn section_frame(props: &SectionFrameProps) -> Html {
    let palette = use_context::<Theme>().unwrap_or_default().palette;

    let container = Css::new()
        .with("border", format!("1px solid {}", palette.line))
        .with("background-color", palette.frame)
        .with("position", "relative")
        .with(
            "box-shadow",
            format!("inset 0 0 0 1px {}, 0 0 20px {}", palette.glow(0.1), palette.glow(0.05)),
        )
        .with("overflow", "hidden")
        .merge(&props.style);

    let corners = if props.corner_marks {
        Corner::ALL.iter().map(|c| corner_mark(*c, &palette)).collect::<Html>()
    } else {
        html! {}
    };

    let dimensions = if props.dimensions {
        html! {
            <>
                { dimension_mark(
                    "1400px",
                    Css::new().with("top", "8px").with("left", "50%").with("transform", "translateX(-50%)"),
                    &palette,
                ) }
                { dimension_mark(
                    "AUTO",
                    Css::new().with("left", "8px").with("top", "50%").with("transform", "translateY(-50%) rotate(-90deg)"),
                    &palette,
                ) }
            </>
        }
    } else {
        html! {}
    };

    let spotlight = props
        .spotlight
        .layer(&palette)
        .map(|css| html! { <div style={css.to_string()}></div> })
        .unwrap_or_default();
    let pattern = props
        .pattern
        .layer(&palette)
        .map(|css| html! { <div style={css.to_string()}></div> })
        .unwrap_or_default();

    html! {
        <div style={container.to_string()}>
            { corners }
            { dimensions }
            { spotlight }
            { pattern }
            <div style="position: relative; z-index: 1;">
                { for props.children.iter() }
            </div>
        </div>
    }
}

use yew::prelude::*;

use crate::style::Css;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ClippedCardProps {
    #[prop_or_default]
    pub style: Css,
    #[prop_or_default]
    pub children: Children,
}

/// Card with its top-right corner cut away and two faint corner accents.
#[function_component(ClippedCard)]
pub fn clipped_card(props: &ClippedCardProps) -> Html {
    let palette = use_context::<Theme>().unwrap_or_default().palette;

    let container = Css::new()
        .with("background-color", palette.surface)
        .with("border", format!("1px solid {}", palette.line))
        .with("position", "relative")
        .with("padding", "28px")
        .with("box-shadow", format!("inset 0 0 0 1px {}", palette.glow(0.1)))
        .merge(&props.style);

    let cut = Css::new()
        .with("position", "absolute")
        .with("top", "0")
        .with("right", "0")
        .with("width", "0")
        .with("height", "0")
        .with("border-style", "solid")
        .with("border-width", "0 12px 12px 0")
        .with("border-color", format!("transparent {} transparent transparent", palette.frame));

    let accent = |vertical: &'static str, horizontal: &'static str| {
        let stroke = format!("1px solid {}", palette.accent);
        Css::new()
            .with("position", "absolute")
            .with(vertical, "8px")
            .with(horizontal, "8px")
            .with("width", "8px")
            .with("height", "8px")
            .with(if vertical == "top" { "border-top" } else { "border-bottom" }, stroke.clone())
            .with(if horizontal == "left" { "border-left" } else { "border-right" }, stroke)
            .with("opacity", "0.4")
            .to_string()
    };

    html! {
        <div style={container.to_string()}>
            <div style={cut.to_string()}></div>
            <div style={accent("top", "left")}></div>
            <div style={accent("bottom", "right")}></div>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub number: AttrValue,
    pub label: AttrValue,
}

/// Large figure with a caption. Blueprint pages draw a crosshair behind it;
/// the other themes render a plain tile.
#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let palette = theme.palette;
    let crosshair = theme.variant == crate::config::Variant::Blueprint;

    let container = Css::new()
        .with("border", format!("1px solid {}", palette.line))
        .with("border-radius", palette.radius)
        .with("padding", "32px 24px")
        .with("text-align", "center")
        .with("background-color", palette.frame)
        .with("position", "relative")
        .with("box-shadow", format!("inset 0 0 0 1px {}", palette.glow(0.1)));

    let number = Css::new()
        .with("font-size", "48px")
        .with("font-weight", "700")
        .with("color", palette.accent)
        .with("margin-bottom", "8px")
        .with("font-family", "monospace")
        .with("letter-spacing", "-0.02em")
        .with("position", "relative")
        .with("z-index", "1");

    let label = Css::new()
        .with("font-size", "12px")
        .with("color", palette.highlight)
        .with("text-transform", "uppercase")
        .with("letter-spacing", "0.1em")
        .with("font-weight", "600")
        .with("position", "relative")
        .with("z-index", "1");

    let overlay = if crosshair {
        let fade = |direction: &str| {
            format!(
                "linear-gradient(to {}, transparent, {} 50%, transparent)",
                direction,
                palette.glow(0.1)
            )
        };
        let horizontal = Css::new()
            .with("position", "absolute")
            .with("top", "50%")
            .with("left", "0")
            .with("right", "0")
            .with("height", "1px")
            .with("background-image", fade("right"));
        let vertical = Css::new()
            .with("position", "absolute")
            .with("left", "50%")
            .with("top", "0")
            .with("bottom", "0")
            .with("width", "1px")
            .with("background-image", fade("bottom"));
        html! {
            <div style="position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); width: 100%; height: 100%; pointer-events: none;">
                <div style={horizontal.to_string()}></div>
                <div style={vertical.to_string()}></div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div style={container.to_string()} data-metric={props.label.clone()}>
            { overlay }
            <div style={number.to_string()}>{ props.number.clone() }</div>
            <div style={label.to_string()}>{ props.label.clone() }</div>
        </div>
    }
}

use yew::prelude::*;

use crate::style::Css;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct RailProps {
    #[prop_or_default]
    pub style: Css,
    #[prop_or_default]
    pub children: Children,
}

/// Narrow vertical gutter with a dashed measurement line down its right edge.
#[function_component(Rail)]
pub fn rail(props: &RailProps) -> Html {
    let palette = use_context::<Theme>().unwrap_or_default().palette;

    let container = Css::new()
        .with("width", "80px")
        .with("background-color", palette.frame)
        .with("border-right", format!("1px solid {}", palette.line))
        .with("display", "flex")
        .with("align-items", "flex-start")
        .with("justify-content", "center")
        .with("padding-top", "32px")
        .with("position", "relative")
        .merge(&props.style);

    let marks = Css::new()
        .with("position", "absolute")
        .with("right", "0")
        .with("top", "0")
        .with("bottom", "0")
        .with("width", "1px")
        .with(
            "background-image",
            format!(
                "repeating-linear-gradient(to bottom, {line} 0px, {line} 2px, transparent 2px, transparent 20px)",
                line = palette.line
            ),
        );

    html! {
        <div style={container.to_string()} data-collapse="rail">
            <div style={marks.to_string()}></div>
            { for props.children.iter() }
        </div>
    }
}

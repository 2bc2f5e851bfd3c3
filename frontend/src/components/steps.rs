use yew::prelude::*;

use crate::config::Variant;
use crate::content::Step;
use crate::style::Css;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct StepTrackProps {
    pub steps: &'static [Step],
}

/// Steps left to right, each badged with its 1-based position, with an arrow
/// between neighbours.
#[function_component(StepTrack)]
pub fn step_track(props: &StepTrackProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let palette = theme.palette;
    let badge_radius = if theme.variant == Variant::Technical { "2px" } else { "50%" };

    let card = Css::new()
        .with("flex", "1")
        .with("background-color", palette.surface)
        .with("border", format!("1px solid {}", palette.line))
        .with("border-radius", palette.radius)
        .with("padding", "32px 24px")
        .with("position", "relative")
        .with("box-shadow", format!("inset 0 0 0 1px {}", palette.glow(0.1)))
        .to_string();
    let badge = Css::new()
        .with("position", "absolute")
        .with("top", "12px")
        .with("right", "12px")
        .with("width", "24px")
        .with("height", "24px")
        .with("border", format!("1px solid {}", palette.accent))
        .with("border-radius", badge_radius)
        .with("display", "flex")
        .with("align-items", "center")
        .with("justify-content", "center")
        .with("font-size", "10px")
        .with("color", palette.accent)
        .with("font-family", "monospace")
        .to_string();
    let title = format!(
        "font-size: 16px; font-weight: 600; margin: 0 0 8px 0; letter-spacing: 0.05em; text-transform: uppercase; color: {};",
        palette.accent
    );
    let desc = format!("font-size: 13px; line-height: 1.6; margin: 0; color: {};", palette.muted);
    let arrow = format!(
        "display: flex; align-items: center; justify-content: center; align-self: center; position: relative; top: -20px; font-size: 20px; color: {};",
        palette.accent
    );

    let count = props.steps.len();

    html! {
        <div style="display: flex; gap: 16px; align-items: flex-start;" data-stack="steps">
            { for props.steps.iter().enumerate().map(|(i, step)| html! {
                <>
                    <div style={card.clone()} data-step={(i + 1).to_string()}>
                        <div style={badge.clone()}>{ i + 1 }</div>
                        <h3 style={title.clone()}>{ step.title }</h3>
                        <p style={desc.clone()}>{ step.desc }</p>
                    </div>
                    if i + 1 < count {
                        <div style={arrow.clone()} data-collapse="arrow">{"→"}</div>
                    }
                </>
            }) }
        </div>
    }
}

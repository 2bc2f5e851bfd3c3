use yew::prelude::*;

use crate::config::Variant;
use crate::content::CallToAction;
use crate::style::Css;
use crate::theme::{Palette, Theme};

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub primary: bool,
    #[prop_or_default]
    pub style: Css,
    #[prop_or_default]
    pub children: Children,
}

fn blueprint_button(palette: &Palette, primary: bool) -> Css {
    Css::new()
        .with("background-color", if primary { palette.line } else { "transparent" })
        .with("border", format!("1px solid {}", if primary { palette.accent } else { palette.line }))
        .with("color", if primary { palette.highlight } else { palette.text })
        .with("padding", "14px 32px")
        .with("font-size", "14px")
        .with("font-weight", "600")
        .with("cursor", "pointer")
        .with("text-transform", "uppercase")
        .with("letter-spacing", "0.05em")
        .with("transition", "all 0.15s ease")
        .with("position", "relative")
        .with("overflow", "hidden")
        .with("font-family", "monospace")
        .with(
            "box-shadow",
            if primary {
                format!("inset 0 0 0 1px {}, 0 0 10px {}", palette.glow(0.3), palette.glow(0.2))
            } else {
                format!("inset 0 0 0 1px {}", palette.glow(0.1))
            },
        )
}

fn technical_button(palette: &Palette, primary: bool) -> Css {
    Css::new()
        .with("background-color", if primary { palette.glow(0.12) } else { "transparent".to_string() })
        .with("border", format!("1px solid {}", if primary { palette.accent } else { palette.line }))
        .with("border-radius", palette.radius)
        .with("color", if primary { palette.accent } else { palette.text })
        .with("padding", "12px 24px")
        .with("font-size", "13px")
        .with("font-family", palette.font)
        .with("letter-spacing", "0.08em")
        .with("cursor", "pointer")
        .with("transition", "all 0.15s ease")
        .with(
            "box-shadow",
            if primary { format!("0 0 16px {}", palette.glow(0.35)) } else { "none".to_string() },
        )
}

fn dashboard_button(palette: &Palette, primary: bool) -> Css {
    Css::new()
        .with(
            "background",
            if primary {
                format!("linear-gradient(135deg, {}, {})", palette.accent, palette.glow(0.6))
            } else {
                palette.surface.to_string()
            },
        )
        .with("border", format!("1px solid {}", if primary { "transparent" } else { palette.line }))
        .with("border-radius", "999px")
        .with("color", if primary { palette.heading } else { palette.text })
        .with("padding", "12px 28px")
        .with("font-size", "14px")
        .with("font-weight", "600")
        .with("font-family", palette.font)
        .with("cursor", "pointer")
        .with("transition", "all 0.2s ease")
        .with(
            "box-shadow",
            if primary { format!("0 8px 24px {}", palette.glow(0.3)) } else { "none".to_string() },
        )
}

/// Call-to-action button. Purely visual; nothing is wired to it.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let palette = theme.palette;

    let base = match theme.variant {
        Variant::Blueprint => blueprint_button(&palette, props.primary),
        Variant::Technical => technical_button(&palette, props.primary),
        Variant::Dashboard => dashboard_button(&palette, props.primary),
    };
    let css = base.merge(&props.style);

    let decoration = match theme.variant {
        Variant::Blueprint => {
            let cut = Css::new()
                .with("position", "absolute")
                .with("top", "0")
                .with("right", "0")
                .with("width", "0")
                .with("height", "0")
                .with("border-style", "solid")
                .with("border-width", "0 6px 6px 0")
                .with("border-color", format!("transparent {} transparent transparent", palette.frame));
            html! { <div style={cut.to_string()}></div> }
        }
        _ => html! {},
    };

    html! {
        <button type="button" style={css.to_string()} data-primary={props.primary.to_string()}>
            { decoration }
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionRowProps {
    pub actions: &'static [CallToAction],
    #[prop_or_default]
    pub style: Css,
}

/// Row of call-to-action buttons, primary styling decided by the action.
#[function_component(ActionRow)]
pub fn action_row(props: &ActionRowProps) -> Html {
    let css = Css::new()
        .with("display", "flex")
        .with("gap", "16px")
        .with("flex-wrap", "wrap")
        .merge(&props.style);

    html! {
        <div style={css.to_string()}>
            { for props.actions.iter().map(|action| html! {
                <Button primary={action.is_primary()}>{ action.label() }</Button>
            }) }
        </div>
    }
}

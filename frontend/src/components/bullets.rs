use yew::prelude::*;

use crate::content::BulletGroup;
use crate::style::Css;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    Triangle,
    Arrow,
    Check,
    Square,
    Prompt,
}

impl Marker {
    pub fn glyph(self) -> &'static str {
        match self {
            Marker::Triangle => "▸",
            Marker::Arrow => "→",
            Marker::Check => "✓",
            Marker::Square => "■",
            Marker::Prompt => ">",
        }
    }
}

/// Vertical spacing of a list: `Roomy` for stand-alone lists, `Compact`
/// inside cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Density {
    #[default]
    Roomy,
    Regular,
    Compact,
}

#[derive(Properties, PartialEq)]
pub struct BulletListProps {
    pub group: BulletGroup,
    #[prop_or_default]
    pub marker: Marker,
    #[prop_or_default]
    pub density: Density,
    #[prop_or_default]
    pub style: Css,
}

#[function_component(BulletList)]
pub fn bullet_list(props: &BulletListProps) -> Html {
    let palette = use_context::<Theme>().unwrap_or_default().palette;

    let (padding, font_size, rule, gap) = match props.density {
        Density::Roomy => ("10px 0 10px 24px", "15px", "2px", "8px"),
        Density::Regular => ("8px 0 8px 20px", "14px", "1px", "0"),
        Density::Compact => ("6px 0 6px 20px", "13px", "1px", "0"),
    };

    let list = Css::new()
        .with("list-style", "none")
        .with("padding", "0")
        .with("margin", "0")
        .merge(&props.style);
    let item = Css::new()
        .with("font-size", font_size)
        .with("line-height", "1.6")
        .with("color", palette.muted)
        .with("padding", padding)
        .with("position", "relative")
        .with("border-left", format!("{} solid {}", rule, palette.line))
        .with("margin-bottom", gap)
        .to_string();
    let marker = Css::new()
        .with("position", "absolute")
        .with("left", "8px")
        .with("color", palette.accent)
        .to_string();
    let glyph = props.marker.glyph();

    html! {
        <ul style={list.to_string()} data-group={props.group.key}>
            { for props.group.items.iter().map(|text| html! {
                <li style={item.clone()} data-bullet={props.group.key}>
                    <span style={marker.clone()}>{ glyph }</span>
                    { *text }
                </li>
            }) }
        </ul>
    }
}

use log::debug;
use yew::prelude::*;

use crate::components::bullets::{BulletList, Density, Marker};
use crate::components::button::ActionRow;
use crate::components::card::MetricCard;
use crate::components::pricing::PriceTable;
use crate::components::steps::StepTrack;
use crate::config::{self, Variant};
use crate::content::{self, BulletGroup, Feature, SectionMeta, Tier};
use crate::style::Css;
use crate::theme::{Palette, Theme, DASHBOARD};

const P: Palette = DASHBOARD;

fn card() -> Css {
    Css::new()
        .with("background-color", P.frame)
        .with("border", format!("1px solid {}", P.line))
        .with("border-radius", P.radius)
        .with("padding", "28px")
        .with("box-shadow", "0 1px 2px rgba(0, 0, 0, 0.4), 0 12px 32px rgba(0, 0, 0, 0.25)")
}

fn inner_card() -> Css {
    Css::new()
        .with("background-color", P.surface)
        .with("border", format!("1px solid {}", P.line))
        .with("border-radius", "10px")
        .with("padding", "20px")
}

fn chip(color: &str) -> String {
    format!(
        "display: inline-block; padding: 4px 10px; border-radius: 999px; font-size: 11px; font-weight: 600; letter-spacing: 0.06em; color: {color}; background-color: {}; border: 1px solid {};",
        P.glow(0.12),
        P.glow(0.3),
    )
}

fn title() -> Css {
    Css::new()
        .with("font-size", "22px")
        .with("font-weight", "700")
        .with("margin", "0")
        .with("color", P.heading)
}

fn subtitle() -> Css {
    Css::new()
        .with("font-size", "15px")
        .with("line-height", "1.6")
        .with("color", P.muted)
        .with("margin", "0")
}

fn label() -> Css {
    Css::new()
        .with("font-size", "12px")
        .with("font-weight", "600")
        .with("text-transform", "uppercase")
        .with("letter-spacing", "0.08em")
        .with("color", P.muted)
        .with("margin", "0 0 12px 0")
}

#[derive(Properties, PartialEq)]
struct WidgetProps {
    meta: SectionMeta,
    #[prop_or(1)]
    span: u8,
    #[prop_or_default]
    children: Children,
}

/// One dashboard card; `span` is the number of grid columns it covers.
#[function_component(Widget)]
fn widget(props: &WidgetProps) -> Html {
    let meta = props.meta;
    let css = card().with("grid-column", format!("span {}", props.span));

    html! {
        <section style={css.to_string()} data-section={meta.label}>
            <header style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 20px;">
                <h2 style={title().to_string()}>{ meta.title }</h2>
                <span style={chip(P.accent)}>{ content::section_index(meta.index) }</span>
            </header>
            { for props.children.iter() }
        </section>
    }
}

fn sidebar() -> Html {
    html! {
        <aside
            style={format!(
                "position: sticky; top: 0; align-self: start; height: 100vh; padding: 32px 20px; border-right: 1px solid {}; background-color: {};",
                P.line, P.frame
            )}
            data-collapse="sidebar"
        >
            <div style={format!("font-weight: 800; font-size: 16px; color: {}; margin-bottom: 4px;", P.heading)}>
                { content::BRAND }
            </div>
            <div style={format!("font-size: 11px; color: {}; margin-bottom: 32px;", P.muted)}>
                { format!("rev {}", content::REVISION) }
            </div>
            <nav>
                <ul style="list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 4px;">
                    { for content::SECTIONS.iter().map(|s| html! {
                        <li style={format!(
                            "display: flex; gap: 12px; padding: 8px 12px; border-radius: 8px; font-size: 13px; color: {};",
                            P.text
                        )}>
                            <span style={format!("color: {}; font-variant-numeric: tabular-nums;", P.muted)}>
                                { content::section_index(s.index) }
                            </span>
                            <span>{ s.title }</span>
                        </li>
                    }) }
                </ul>
            </nav>
        </aside>
    }
}

fn hero() -> Html {
    html! {
        <section
            style={card()
                .with("grid-column", "span 12")
                .with("padding", "40px")
                .with("background", format!("linear-gradient(135deg, {} 0%, {} 60%)", P.glow(0.18), P.frame))
                .to_string()}
            data-section={content::HERO.label}
        >
            <div style="display: grid; grid-template-columns: 1.1fr 1fr; gap: 40px; align-items: center;" data-grid="hero">
                <div>
                    <span style={chip(P.highlight)}>{ content::HERO.label }</span>
                    <h1 style={format!(
                        "font-size: 52px; font-weight: 800; line-height: 1.05; margin: 20px 0; color: {}; letter-spacing: -0.02em;",
                        P.heading
                    )}>
                        { content::HERO.title }
                    </h1>
                    <p style={subtitle().with("font-size", "17px").with("color", P.text).with("margin-bottom", "12px").to_string()}>
                        { content::HERO_PITCH }
                    </p>
                    <p style={subtitle().with("font-size", "13px").with("margin-bottom", "28px").to_string()}>
                        { content::HERO_TAG }
                    </p>
                    <ActionRow actions={content::HERO_ACTIONS} />
                </div>
                <div style={format!(
                    "position: relative; aspect-ratio: 16/9; border-radius: 12px; overflow: hidden; border: 1px solid {};",
                    P.line
                )}>
                    <iframe
                        width="100%"
                        height="100%"
                        src={config::VIDEO_EMBED_URL}
                        title={config::VIDEO_TITLE}
                        frameborder="0"
                        allow={config::VIDEO_ALLOW}
                        allowfullscreen=true
                        style="position: absolute; top: 0; left: 0; width: 100%; height: 100%;"
                    />
                </div>
            </div>
        </section>
    }
}

fn feature_cards(features: &'static [Feature], columns: u8) -> Html {
    html! {
        <div
            style={format!("display: grid; grid-template-columns: repeat({}, 1fr); gap: 12px; margin: 20px 0;", columns)}
            data-grid="features"
        >
            { for features.iter().map(|f| html! {
                <div style={inner_card().to_string()}>
                    <div style={format!("font-size: 14px; font-weight: 700; color: {}; margin-bottom: 6px;", P.heading)}>{ f.title }</div>
                    <div style={subtitle().with("font-size", "13px").to_string()}>{ f.caption }</div>
                </div>
            }) }
        </div>
    }
}

fn list_card(group: BulletGroup, marker: Marker) -> Html {
    html! {
        <div style={inner_card().to_string()}>
            <div style={label().to_string()}>{ group.heading.trim_end_matches(':') }</div>
            <BulletList group={group} marker={marker} density={Density::Regular} />
        </div>
    }
}

fn tier_card(tier: &Tier) -> Html {
    html! {
        <div style={inner_card().with("padding", "24px").to_string()} data-tier={tier.code}>
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;">
                <span style={chip(P.accent)}>{ tier.code }</span>
                <span style={format!("font-size: 18px; font-weight: 700; color: {};", P.highlight)}>{ tier.price }</span>
            </div>
            <div style={format!("font-size: 20px; font-weight: 700; color: {}; margin-bottom: 6px;", P.heading)}>{ tier.name }</div>
            <p style={subtitle().with("font-size", "13px").with("margin-bottom", "20px").to_string()}>{ tier.tagline }</p>
            <div style={label().to_string()}>{ tier.outcomes.heading }</div>
            <BulletList group={tier.outcomes} marker={Marker::Check} density={Density::Compact} style={Css::new().with("margin-bottom", "16px")} />
            <div style={label().to_string()}>{ tier.includes.heading }</div>
            <BulletList group={tier.includes} marker={Marker::Arrow} density={Density::Compact} />
        </div>
    }
}

fn widgets() -> Html {
    let center_row = Css::new().with("justify-content", "center");
    html! {
        <>
            <Widget meta={content::COMMUNITY} span={7}>
                <p style={subtitle().to_string()}>{ content::COMMUNITY_INTRO }</p>
                { feature_cards(content::PILLARS, 2) }
                <p style={subtitle().with("font-size", "13px").to_string()}>{ content::COMMUNITY_NOTE }</p>
            </Widget>

            <Widget meta={content::PROBLEM} span={5}>
                { list_card(content::FAILURE_POINTS, Marker::Triangle) }
                <div style={inner_card()
                    .with("margin-top", "12px")
                    .with("border-color", P.highlight)
                    .to_string()}>
                    <div style={format!("font-size: 11px; font-weight: 700; color: {}; margin-bottom: 6px;", P.highlight)}>
                        { content::SOLUTION_TAG }
                    </div>
                    <div style={subtitle().with("color", P.text).to_string()}>{ content::SOLUTION }</div>
                </div>
            </Widget>

            <Widget meta={content::FREE_ACCESS} span={12}>
                <p style={subtitle().to_string()}>{ content::FREE_ACCESS_TAG }</p>
                { feature_cards(content::RESOURCES, 4) }
                <ActionRow actions={content::FREE_ACCESS_ACTIONS} />
            </Widget>

            <Widget meta={content::CONSULT} span={12}>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px;" data-grid="consult">
                    { list_card(content::CONSULT_INPUT, Marker::Arrow) }
                    { list_card(content::CONSULT_OUTPUT, Marker::Check) }
                </div>
                <p style={subtitle().with("font-size", "13px").with("margin", "20px 0").to_string()}>{ content::CONSULT_NOTE }</p>
                <ActionRow actions={content::CONSULT_ACTIONS} />
            </Widget>

            <Widget meta={content::SERVICES} span={12}>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px;" data-grid="tiers">
                    { for content::TIERS.iter().map(tier_card) }
                </div>
            </Widget>

            <Widget meta={content::PIPELINE} span={12}>
                <StepTrack steps={content::STEPS} />
            </Widget>

            <Widget meta={content::ASSETS} span={12}>
                <p style={subtitle().with("margin-bottom", "16px").to_string()}>{ content::ASSETS_TAG }</p>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px;" data-grid="assets">
                    { list_card(content::ASSET_SERVICES, Marker::Square) }
                    <div style={inner_card().to_string()}>
                        <div style={label().to_string()}>{ content::ASSET_PRICING_HEADING.trim_end_matches(':') }</div>
                        <PriceTable entries={content::ASSET_PRICES} />
                    </div>
                </div>
            </Widget>

            <Widget meta={content::PROOF} span={12}>
                <p style={subtitle().with("margin-bottom", "20px").to_string()}>{ content::PROOF_TAG }</p>
                <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-bottom: 20px;" data-grid="metrics">
                    { for content::METRICS.iter().map(|m| html! {
                        <MetricCard number={m.number} label={m.label} />
                    }) }
                </div>
                <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px;" data-grid="thumbnails">
                    { for content::THUMBNAILS.iter().enumerate().map(|(i, src)| html! {
                        <div style="position: relative; border-radius: 8px; overflow: hidden;">
                            <img
                                src={*src}
                                alt={content::project_alt(i)}
                                style="display: block; width: 100%; aspect-ratio: 16/9; object-fit: cover;"
                            />
                            <span style={format!(
                                "position: absolute; left: 8px; bottom: 8px; padding: 2px 8px; border-radius: 999px; font-size: 10px; color: {}; background-color: rgba(14, 16, 22, 0.8);",
                                P.heading
                            )}>
                                { content::project_label(i) }
                            </span>
                        </div>
                    }) }
                </div>
            </Widget>

            <Widget meta={content::VALUES} span={12}>
                { list_card(content::MISSION, Marker::Arrow) }
                <p style={subtitle().with("text-align", "center").with("margin-top", "20px").with("color", P.highlight).to_string()}>
                    { content::PRINCIPLE }
                </p>
            </Widget>

            <Widget meta={content::START} span={12}>
                <div style="text-align: center;">
                    <p style={subtitle().with("max-width", "640px").with("margin", "0 auto 28px auto").with("color", P.text).to_string()}>
                        { content::START_PITCH }
                    </p>
                    <ActionRow actions={content::START_ACTIONS} style={center_row} />
                </div>
            </Widget>
        </>
    }
}

/// Card-based rendition: a sidebar index plus a twelve-column widget grid.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    debug!("Rendering dashboard landing page");
    let theme = Theme::for_variant(Variant::Dashboard);

    html! {
        <ContextProvider<Theme> context={theme}>
            <div
                style={format!(
                    "display: grid; grid-template-columns: 240px 1fr; background-color: {}; color: {}; font-family: {}; min-height: 100vh;",
                    P.page, P.text, P.font
                )}
                data-grid="shell"
                data-variant={Variant::Dashboard.as_str()}
            >
                { sidebar() }
                <main style="padding: 32px; display: grid; grid-template-columns: repeat(12, 1fr); gap: 20px; align-content: start;" data-grid="widgets">
                    { hero() }
                    { widgets() }
                </main>
            </div>
        </ContextProvider<Theme>>
    }
}

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
use crate::theme::{Palette, Theme, TECHNICAL};

const P: Palette = TECHNICAL;

/// `community-first` style slug for the panel path line.
fn slug(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn h2() -> Css {
    Css::new()
        .with("font-size", "36px")
        .with("font-weight", "700")
        .with("line-height", "1.2")
        .with("margin", "0 0 16px 0")
        .with("color", P.heading)
        .with("letter-spacing", "-0.01em")
}

fn h3() -> Css {
    Css::new()
        .with("font-size", "15px")
        .with("font-weight", "600")
        .with("margin", "0 0 12px 0")
        .with("color", P.accent)
        .with("letter-spacing", "0.06em")
}

fn body() -> Css {
    Css::new()
        .with("font-size", "14px")
        .with("line-height", "1.7")
        .with("color", P.muted)
        .with("margin", "0")
}

fn lead() -> Css {
    Css::new()
        .with("font-size", "17px")
        .with("line-height", "1.6")
        .with("color", P.text)
        .with("margin", "0")
}

fn tile() -> Css {
    Css::new()
        .with("background-color", P.surface)
        .with("border", format!("1px solid {}", P.line))
        .with("border-left", format!("2px solid {}", P.accent))
        .with("border-radius", P.radius)
        .with("padding", "24px")
}

#[derive(Properties, PartialEq)]
struct TerminalPanelProps {
    meta: SectionMeta,
    #[prop_or_default]
    command: Option<&'static str>,
    #[prop_or_default]
    children: Children,
}

/// Window chrome around one section: traffic-light dots, the section path,
/// and the command that "printed" the content below it.
#[function_component(TerminalPanel)]
fn terminal_panel(props: &TerminalPanelProps) -> Html {
    let meta = props.meta;
    let chrome = format!(
        "display: flex; align-items: center; gap: 8px; padding: 12px 16px; border-bottom: 1px solid {}; background-color: {}; font-size: 12px; color: {};",
        P.line, P.frame, P.muted
    );
    let dot = |color: &str| format!("width: 10px; height: 10px; border-radius: 50%; background-color: {};", color);
    let command = props
        .command
        .map(|cmd| html! {
            <div style={format!("font-size: 13px; color: {}; margin-bottom: 16px;", P.highlight)}>
                { format!("$ {}", cmd) }
            </div>
        })
        .unwrap_or_default();

    html! {
        <section style="padding: 0 0 56px 0;" data-section={meta.label}>
            <div style={format!(
                "max-width: 1200px; margin: 0 auto; border: 1px solid {}; border-radius: {}; background-color: {}; box-shadow: 0 0 0 1px {}, 0 24px 48px rgba(0, 0, 0, 0.45);",
                P.line, P.radius, P.frame, P.glow(0.06)
            )}>
                <div style={chrome}>
                    <span style={dot("#EF4444")}></span>
                    <span style={dot("#F59E0B")}></span>
                    <span style={dot(P.highlight)}></span>
                    <span style="margin-left: 12px;">
                        { format!("~/{}/{}", meta.label.to_ascii_lowercase(), slug(meta.title)) }
                    </span>
                    <span style={format!("margin-left: auto; color: {};", P.accent)}>
                        { format!("[{}]", content::section_index(meta.index)) }
                    </span>
                </div>
                <div style="padding: 48px 56px;">
                    { command }
                    <h2 style={h2().to_string()}>{ meta.title }</h2>
                    { for props.children.iter() }
                </div>
            </div>
        </section>
    }
}

fn feature_tiles(features: &'static [Feature]) -> Html {
    html! {
        <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin: 32px 0;" data-grid="features">
            { for features.iter().map(|f| html! {
                <div style={tile().to_string()}>
                    <h3 style={h3().to_string()}>{ f.title }</h3>
                    <p style={body().with("font-size", "13px").to_string()}>{ f.caption }</p>
                </div>
            }) }
        </div>
    }
}

fn listing(group: BulletGroup, marker: Marker) -> Html {
    html! {
        <div style={tile().to_string()}>
            <h3 style={h3().with("margin-bottom", "20px").to_string()}>{ format!("// {}", group.heading) }</h3>
            <BulletList group={group} marker={marker} density={Density::Regular} />
        </div>
    }
}

fn tier_block(tier: &Tier) -> Html {
    html! {
        <div style={tile().with("padding", "32px").to_string()} data-tier={tier.code}>
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;">
                <span style={format!("font-size: 11px; letter-spacing: 0.12em; color: {};", P.highlight)}>{ tier.code }</span>
                <span style={format!("font-size: 15px; color: {};", P.accent)}>{ tier.price }</span>
            </div>
            <h3 style={h3().with("font-size", "22px").with("color", P.heading).to_string()}>{ tier.name }</h3>
            <p style={body().with("margin-bottom", "24px").to_string()}>{ tier.tagline }</p>
            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 24px;" data-grid="tier-lists">
                <div>
                    <div style={format!("font-size: 11px; color: {}; margin-bottom: 8px;", P.muted)}>{ format!("{}[]", tier.outcomes.heading.to_ascii_lowercase()) }</div>
                    <BulletList group={tier.outcomes} marker={Marker::Check} density={Density::Compact} />
                </div>
                <div>
                    <div style={format!("font-size: 11px; color: {}; margin-bottom: 8px;", P.muted)}>{ format!("{}[]", tier.includes.heading.to_ascii_lowercase()) }</div>
                    <BulletList group={tier.includes} marker={Marker::Prompt} density={Density::Compact} />
                </div>
            </div>
        </div>
    }
}

fn status_bar() -> Html {
    html! {
        <div style={format!(
            "position: sticky; top: 0; z-index: 100; display: flex; gap: 24px; align-items: center; padding: 10px 32px; font-size: 11px; letter-spacing: 0.08em; background-color: rgba(5, 7, 9, 0.92); border-bottom: 1px solid {}; color: {};",
            P.line, P.muted
        )}>
            <span style={format!("color: {};", P.highlight)}>{"●"}</span>
            <span>{ format!("{} :: online", content::PROJECT_CODE.to_ascii_lowercase()) }</span>
            <span data-collapse="status-rev">{ format!("rev {}", content::REVISION) }</span>
            <span style="margin-left: auto;" data-collapse="status-scale">{ format!("scale {}", content::SCALE) }</span>
        </div>
    }
}

fn hero() -> Html {
    html! {
        <section style="padding: 96px 0 72px 0;" data-section={content::HERO.label}>
            <div style="max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: 1.1fr 1fr; gap: 56px; align-items: center;" data-grid="hero">
                <div>
                    <div style={format!("font-size: 12px; color: {}; margin-bottom: 20px;", P.highlight)}>
                        { format!("$ whoami --hub {}", content::HERO.label.to_ascii_lowercase()) }
                    </div>
                    <h1 style={format!(
                        "font-size: 60px; font-weight: 800; line-height: 1.05; margin: 0 0 24px 0; color: {}; text-shadow: 0 0 24px {};",
                        P.heading, P.glow(0.35)
                    )}>
                        { content::HERO.title }
                        <span style={format!("color: {};", P.accent)}>{"_"}</span>
                    </h1>
                    <p style={lead().with("margin-bottom", "16px").to_string()}>{ content::HERO_PITCH }</p>
                    <p style={body().with("margin-bottom", "32px").to_string()}>{ content::HERO_TAG }</p>
                    <ActionRow actions={content::HERO_ACTIONS} />
                </div>
                <div style={format!(
                    "position: relative; aspect-ratio: 16/10; border: 1px solid {}; border-radius: {}; overflow: hidden; box-shadow: 0 0 32px {};",
                    P.accent, P.radius, P.glow(0.2)
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

fn sections() -> Html {
    let center_row = Css::new().with("justify-content", "center");
    html! {
        <>
            <TerminalPanel meta={content::COMMUNITY} command={"cat about.md"}>
                <p style={lead().to_string()}>{ content::COMMUNITY_INTRO }</p>
                { feature_tiles(content::PILLARS) }
                <p style={body().with("text-align", "center").to_string()}>{ content::COMMUNITY_NOTE }</p>
            </TerminalPanel>

            <TerminalPanel meta={content::PROBLEM} command={"diagnose --project"}>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 32px; margin-top: 24px;" data-grid="problem">
                    { listing(content::FAILURE_POINTS, Marker::Triangle) }
                    <div style={tile().with("display", "flex").with("align-items", "center").with("border-left", format!("2px solid {}", P.highlight)).to_string()}>
                        <p style={lead().to_string()}>
                            <span style={format!("color: {};", P.highlight)}>{ content::SOLUTION_TAG }</span>
                            <br />
                            { content::SOLUTION }
                        </p>
                    </div>
                </div>
            </TerminalPanel>

            <TerminalPanel meta={content::FREE_ACCESS} command={"ls ./free"}>
                <p style={lead().to_string()}>{ content::FREE_ACCESS_TAG }</p>
                { feature_tiles(content::RESOURCES) }
                <ActionRow actions={content::FREE_ACCESS_ACTIONS} style={center_row.clone()} />
            </TerminalPanel>

            <TerminalPanel meta={content::CONSULT} command={"consult --free --minutes 30"}>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-top: 24px;" data-grid="consult">
                    { listing(content::CONSULT_INPUT, Marker::Prompt) }
                    { listing(content::CONSULT_OUTPUT, Marker::Arrow) }
                </div>
                <div style="text-align: center; margin-top: 32px;">
                    <p style={body().with("margin-bottom", "20px").to_string()}>{ content::CONSULT_NOTE }</p>
                    <ActionRow actions={content::CONSULT_ACTIONS} style={center_row.clone()} />
                </div>
            </TerminalPanel>

            <TerminalPanel meta={content::SERVICES} command={"services --paid"}>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-top: 24px;" data-grid="tiers">
                    { for content::TIERS.iter().map(tier_block) }
                </div>
            </TerminalPanel>

            <TerminalPanel meta={content::PIPELINE} command={"pipeline --run"}>
                <div style="margin-top: 24px;">
                    <StepTrack steps={content::STEPS} />
                </div>
            </TerminalPanel>

            <TerminalPanel meta={content::ASSETS} command={"assets --quote"}>
                <p style={lead().with("margin-bottom", "24px").to_string()}>{ content::ASSETS_TAG }</p>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 24px;" data-grid="assets">
                    { listing(content::ASSET_SERVICES, Marker::Square) }
                    <div style={tile().to_string()}>
                        <h3 style={h3().with("margin-bottom", "20px").to_string()}>{ format!("// {}", content::ASSET_PRICING_HEADING) }</h3>
                        <PriceTable entries={content::ASSET_PRICES} />
                    </div>
                </div>
            </TerminalPanel>

            <TerminalPanel meta={content::PROOF} command={"git log --oneline --shipped"}>
                <p style={lead().with("margin-bottom", "24px").to_string()}>{ content::PROOF_TAG }</p>
                <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin-bottom: 32px;" data-grid="thumbnails">
                    { for content::THUMBNAILS.iter().enumerate().map(|(i, src)| html! {
                        <figure style={format!("margin: 0; border: 1px solid {}; border-radius: {}; overflow: hidden; background-color: {};", P.line, P.radius, P.surface)}>
                            <img
                                src={*src}
                                alt={content::project_alt(i)}
                                style="display: block; width: 100%; aspect-ratio: 16/9; object-fit: cover; opacity: 0.7; filter: grayscale(60%) contrast(1.15);"
                            />
                            <figcaption style={format!("padding: 8px 12px; font-size: 11px; letter-spacing: 0.1em; color: {};", P.accent)}>
                                { content::project_label(i) }
                            </figcaption>
                        </figure>
                    }) }
                </div>
                <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;" data-grid="metrics">
                    { for content::METRICS.iter().map(|m| html! {
                        <MetricCard number={m.number} label={m.label} />
                    }) }
                </div>
            </TerminalPanel>

            <TerminalPanel meta={content::VALUES} command={"cat MISSION"}>
                <div style="margin-top: 24px;">
                    { listing(content::MISSION, Marker::Arrow) }
                </div>
                <p style={lead().with("text-align", "center").with("margin-top", "32px").with("color", P.highlight).to_string()}>
                    { content::PRINCIPLE }
                </p>
            </TerminalPanel>

            <TerminalPanel meta={content::START} command={"./start.sh"}>
                <div style="text-align: center;">
                    <p style={lead().with("max-width", "640px").with("margin", "0 auto 40px auto").to_string()}>
                        { content::START_PITCH }
                    </p>
                    <ActionRow actions={content::START_ACTIONS} style={center_row} />
                </div>
            </TerminalPanel>
        </>
    }
}

/// Dark terminal rendition: each section is a shell window.
#[function_component(TechnicalPage)]
pub fn technical_page() -> Html {
    debug!("Rendering technical landing page");
    let theme = Theme::for_variant(Variant::Technical);

    html! {
        <ContextProvider<Theme> context={theme}>
            <div
                style={format!(
                    "background-color: {}; background-image: radial-gradient({} 1px, transparent 1px); background-size: 24px 24px; color: {}; font-family: {}; min-height: 100vh; padding: 0 32px 96px 32px;",
                    P.page, P.glow(0.06), P.text, P.font
                )}
                data-variant={Variant::Technical.as_str()}
            >
                { status_bar() }
                { hero() }
                { sections() }
            </div>
        </ContextProvider<Theme>>
    }
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(slug("COMMUNITY FIRST"), "community-first");
        assert_eq!(slug("3D ASSETS"), "3d-assets");
        assert_eq!(slug("START"), "start");
    }
}

use log::debug;
use yew::prelude::*;

use crate::components::bullets::{BulletList, Density, Marker};
use crate::components::button::ActionRow;
use crate::components::card::{ClippedCard, MetricCard};
use crate::components::frame::SectionFrame;
use crate::components::pricing::PriceTable;
use crate::components::rail::Rail;
use crate::components::steps::StepTrack;
use crate::config::{self, Variant};
use crate::content::{self, BulletGroup, Feature, SectionMeta, Tier};
use crate::style::{Css, Pattern, Spotlight};
use crate::theme::{Palette, Theme, BLUEPRINT};

const P: Palette = BLUEPRINT;

fn section_label() -> Css {
    Css::new()
        .with("font-size", "10px")
        .with("color", P.accent)
        .with("text-transform", "uppercase")
        .with("letter-spacing", "0.2em")
        .with("font-weight", "700")
        .with("font-family", "monospace")
        .with("padding", "4px 8px")
        .with("border", format!("1px solid {}", P.line))
        .with("display", "inline-block")
        .with("background-color", "rgba(30, 58, 138, 0.1)")
}

fn section_index() -> Css {
    Css::new()
        .with("font-size", "14px")
        .with("color", P.line)
        .with("font-weight", "700")
        .with("font-family", "monospace")
        .with("writing-mode", "vertical-rl")
        .with("transform", "rotate(180deg)")
        .with("padding", "8px 4px")
        .with("border", format!("1px solid {}", P.line))
        .with("background-color", "rgba(30, 58, 138, 0.1)")
}

fn heading(size: &'static str, line_height: &'static str, margin: &'static str, spacing: &'static str) -> Css {
    Css::new()
        .with("font-size", size)
        .with("font-weight", "700")
        .with("line-height", line_height)
        .with("margin", margin)
        .with("color", P.heading)
        .with("letter-spacing", spacing)
        .with("font-family", "monospace")
        .with("text-transform", "uppercase")
}

fn h1() -> Css {
    heading("64px", "1.1", "0 0 24px 0", "-0.02em")
}

fn h2() -> Css {
    heading("42px", "1.2", "0 0 16px 0", "-0.01em")
}

fn h3() -> Css {
    Css::new()
        .with("font-size", "18px")
        .with("font-weight", "600")
        .with("margin", "0 0 12px 0")
        .with("color", P.text)
        .with("letter-spacing", "0.05em")
        .with("font-family", "monospace")
        .with("text-transform", "uppercase")
}

fn body() -> Css {
    Css::new()
        .with("font-size", "15px")
        .with("line-height", "1.6")
        .with("color", P.muted)
        .with("margin", "0")
        .with("font-family", "monospace")
}

fn body_large() -> Css {
    Css::new()
        .with("font-size", "18px")
        .with("line-height", "1.55")
        .with("color", P.text)
        .with("margin", "0")
        .with("font-family", "monospace")
}

fn panel(border: &'static str, padding: &'static str, glow: f32) -> Css {
    Css::new()
        .with("background-color", P.surface)
        .with("border", format!("{} solid {}", border, P.line))
        .with("padding", padding)
        .with("box-shadow", format!("inset 0 0 0 1px {}", P.glow(glow)))
}

fn section_heading(meta: &SectionMeta, margin_bottom: &'static str) -> Html {
    html! {
        <div style={format!("margin-bottom: {};", margin_bottom)}>
            <div style={section_label().with("margin-bottom", "16px").to_string()}>{ meta.label }</div>
            <h2 style={h2().to_string()}>{ meta.title }</h2>
        </div>
    }
}

fn feature_grid(features: &'static [Feature]) -> Html {
    html! {
        <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; margin-bottom: 48px;" data-grid="features">
            { for features.iter().map(|f| html! {
                <ClippedCard>
                    <h3 style={h3().to_string()}>{ f.title }</h3>
                    <p style={body().with("font-size", "13px").to_string()}>{ f.caption }</p>
                </ClippedCard>
            }) }
        </div>
    }
}

fn titled_list(group: BulletGroup, marker: Marker, density: Density) -> Html {
    html! {
        <>
            <h3 style={h3().with("margin-bottom", "24px").with("font-size", "14px").to_string()}>{ group.heading }</h3>
            <BulletList group={group} marker={marker} density={density} />
        </>
    }
}

fn tier_card(tier: &Tier) -> Html {
    let badge = Css::new()
        .with("display", "inline-block")
        .with("background-color", P.line)
        .with("color", P.highlight)
        .with("padding", "4px 12px")
        .with("font-size", "10px")
        .with("font-weight", "700")
        .with("letter-spacing", "0.1em")
        .with("margin-bottom", "16px");
    let small_label = section_label().with("margin-bottom", "12px").with("font-size", "9px").to_string();

    html! {
        <div style={panel("2px", "40px", 0.2).to_string()} data-tier={tier.code}>
            <div style="display: flex; justify-content: space-between; align-items: baseline;">
                <div style={badge.to_string()}>{ tier.code }</div>
                <span style={body().with("color", P.accent).with("font-size", "14px").to_string()}>{ tier.price }</span>
            </div>
            <h3 style={h3().with("font-size", "24px").with("margin-bottom", "8px").to_string()}>{ tier.name }</h3>
            <p style={body().with("margin-bottom", "32px").with("font-size", "13px").to_string()}>{ tier.tagline }</p>

            <div style="margin-bottom: 24px;">
                <div style={small_label.clone()}>{ tier.outcomes.heading }</div>
                <BulletList group={tier.outcomes} marker={Marker::Check} density={Density::Compact} />
            </div>
            <div>
                <div style={small_label}>{ tier.includes.heading }</div>
                <BulletList group={tier.includes} marker={Marker::Arrow} density={Density::Compact} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NumberedSectionProps {
    meta: SectionMeta,
    pattern: Pattern,
    spotlight: Spotlight,
    #[prop_or_default]
    dimensions: bool,
    #[prop_or("0 0 80px 0")]
    padding: &'static str,
    #[prop_or_default]
    children: Children,
}

/// Rail with the section number, then the framed drawing sheet.
#[function_component(NumberedSection)]
fn numbered_section(props: &NumberedSectionProps) -> Html {
    html! {
        <section style={format!("padding: {};", props.padding)} data-section={props.meta.label}>
            <div style="max-width: 1400px; margin: 0 auto;">
                <div style="display: flex;">
                    <Rail style={Css::new().with("height", "auto")}>
                        <div style={section_index().to_string()}>{ content::section_index(props.meta.index) }</div>
                    </Rail>
                    <SectionFrame
                        style={Css::new().with("flex", "1").with("margin", "0 40px 0 0")}
                        pattern={props.pattern}
                        spotlight={props.spotlight}
                        corner_marks={true}
                        dimensions={props.dimensions}
                    >
                        { for props.children.iter() }
                    </SectionFrame>
                </div>
            </div>
        </section>
    }
}

fn title_block() -> Html {
    html! {
        <div style={format!(
            "position: fixed; top: 20px; left: 20px; z-index: 1000; border: 1px solid {}; background-color: rgba(10, 14, 39, 0.95); padding: 12px 16px; font-size: 10px; font-family: monospace; color: {}; letter-spacing: 0.1em;",
            P.line, P.accent
        )} data-collapse="title-block">
            <div>{ format!("PROJECT: {}", content::PROJECT_CODE) }</div>
            <div style="opacity: 0.6; margin-top: 4px;">{ format!("REV: {}", content::REVISION) }</div>
            <div style="opacity: 0.6; margin-top: 4px;">{ format!("SCALE: {}", content::SCALE) }</div>
        </div>
    }
}

fn video_frame() -> Html {
    html! {
        <div style={format!(
            "background-color: {}; border: 1px solid {}; display: flex; align-items: center; justify-content: center; min-height: 400px; position: relative; overflow: hidden; box-shadow: inset 0 0 0 1px {};",
            P.surface, P.line, P.glow(0.2)
        )}>
            <div style={format!(
                "position: absolute; top: 12px; left: 12px; right: 12px; bottom: 12px; border: 1px solid {}; pointer-events: none; z-index: 10;",
                P.line
            )}></div>
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
    }
}

fn hero() -> Html {
    let main_label = section_label()
        .with("writing-mode", "vertical-rl")
        .with("transform", "rotate(180deg)");

    html! {
        <section data-section={content::HERO.label}>
            <div style="max-width: 1400px; margin: 0 auto;">
                <div style="display: flex; min-height: 100vh;">
                    <Rail>
                        <div style={main_label.to_string()}>{"MAIN"}</div>
                    </Rail>
                    <SectionFrame
                        style={Css::new().with("flex", "1").with("margin", "40px 40px 40px 0").with("display", "flex")}
                        pattern={Pattern::BlueprintGrid}
                        spotlight={Spotlight::TopLeft}
                        corner_marks={true}
                        dimensions={true}
                    >
                        <div style="display: flex; min-height: 100%;">
                            <Rail>
                                <div style={section_index().to_string()}>{ content::section_index(content::HERO.index) }</div>
                            </Rail>
                            <div style="flex: 1; display: flex; align-items: center;">
                                <div style="display: grid; grid-template-columns: 1.2fr 1fr; gap: 64px; padding: 80px;" data-grid="hero">
                                    <div>
                                        <div style={section_label().with("margin-bottom", "20px").to_string()}>{ content::HERO.label }</div>
                                        <h1 style={h1().to_string()}>{ content::HERO.title }</h1>
                                        <p style={body_large().with("margin-bottom", "20px").with("max-width", "540px").to_string()}>
                                            { content::HERO_PITCH }
                                        </p>
                                        <p style={body().with("margin-bottom", "32px").with("max-width", "540px").with("font-size", "13px").to_string()}>
                                            { content::HERO_TAG }
                                        </p>
                                        <ActionRow actions={content::HERO_ACTIONS} style={Css::new().with("margin-top", "40px")} />
                                    </div>
                                    { video_frame() }
                                </div>
                            </div>
                        </div>
                    </SectionFrame>
                </div>
            </div>
        </section>
    }
}

fn community() -> Html {
    html! {
        <NumberedSection meta={content::COMMUNITY} pattern={Pattern::TechnicalDots} spotlight={Spotlight::Center}>
            <div style="padding: 80px;">
                <div style="margin-bottom: 56px;">
                    <div style={section_label().with("margin-bottom", "16px").to_string()}>{ content::COMMUNITY.label }</div>
                    <h2 style={h2().to_string()}>{ content::COMMUNITY.title }</h2>
                    <p style={body_large().with("max-width", "800px").to_string()}>{ content::COMMUNITY_INTRO }</p>
                </div>
                { feature_grid(content::PILLARS) }
                <div style={format!("border-top: 1px solid {}; padding-top: 32px;", P.line)}>
                    <p style={body().with("text-align", "center").to_string()}>{ content::COMMUNITY_NOTE }</p>
                </div>
            </div>
        </NumberedSection>
    }
}

fn problem() -> Html {
    html! {
        <NumberedSection meta={content::PROBLEM} pattern={Pattern::DiagonalHatch} spotlight={Spotlight::BottomRight}>
            <div style="padding: 80px;">
                { section_heading(&content::PROBLEM, "48px") }
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 64px;" data-grid="problem">
                    <div>{ titled_list(content::FAILURE_POINTS, Marker::Triangle, Density::Roomy) }</div>
                    <div style={panel("2px", "32px", 0.2)
                        .with("display", "flex")
                        .with("align-items", "center")
                        .with("justify-content", "center")
                        .with("box-shadow", format!("inset 0 0 0 1px {}, 0 0 20px {}", P.glow(0.2), P.glow(0.1)))
                        .to_string()}>
                        <p style={body_large().with("text-align", "center").to_string()}>
                            { content::SOLUTION_TAG }<br />{ content::SOLUTION }
                        </p>
                    </div>
                </div>
            </div>
        </NumberedSection>
    }
}

fn free_access() -> Html {
    html! {
        <NumberedSection meta={content::FREE_ACCESS} pattern={Pattern::BlueprintGrid} spotlight={Spotlight::TopRight} dimensions={true}>
            <div style="padding: 80px;">
                <div style="margin-bottom: 56px;">
                    <div style={section_label().with("margin-bottom", "16px").to_string()}>{ content::FREE_ACCESS.label }</div>
                    <h2 style={h2().to_string()}>{ content::FREE_ACCESS.title }</h2>
                    <p style={body_large().to_string()}>{ content::FREE_ACCESS_TAG }</p>
                </div>
                { feature_grid(content::RESOURCES) }
                <ActionRow actions={content::FREE_ACCESS_ACTIONS} style={Css::new().with("justify-content", "center")} />
            </div>
        </NumberedSection>
    }
}

fn consult() -> Html {
    html! {
        <NumberedSection meta={content::CONSULT} pattern={Pattern::CrossHatch} spotlight={Spotlight::Dual}>
            <div style="padding: 80px;">
                { section_heading(&content::CONSULT, "56px") }
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 48px;" data-grid="consult">
                    <div style={panel("1px", "32px", 0.1).to_string()}>
                        { titled_list(content::CONSULT_INPUT, Marker::Arrow, Density::Regular) }
                    </div>
                    <div style={panel("1px", "32px", 0.1).to_string()}>
                        { titled_list(content::CONSULT_OUTPUT, Marker::Arrow, Density::Regular) }
                    </div>
                </div>
                <div style={format!("border-top: 1px solid {}; margin-top: 48px; padding-top: 32px; text-align: center;", P.line)}>
                    <p style={body().with("margin-bottom", "24px").to_string()}>{ content::CONSULT_NOTE }</p>
                    <ActionRow actions={content::CONSULT_ACTIONS} style={Css::new().with("justify-content", "center")} />
                </div>
            </div>
        </NumberedSection>
    }
}

fn services() -> Html {
    html! {
        <NumberedSection meta={content::SERVICES} pattern={Pattern::TechnicalDots} spotlight={Spotlight::BottomLeft}>
            <div style="padding: 80px;">
                { section_heading(&content::SERVICES, "56px") }
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 32px;" data-grid="tiers">
                    { for content::TIERS.iter().map(tier_card) }
                </div>
            </div>
        </NumberedSection>
    }
}

fn pipeline() -> Html {
    html! {
        <NumberedSection meta={content::PIPELINE} pattern={Pattern::BlueprintGrid} spotlight={Spotlight::Center}>
            <div style="padding: 80px;">
                { section_heading(&content::PIPELINE, "56px") }
                <StepTrack steps={content::STEPS} />
            </div>
        </NumberedSection>
    }
}

fn assets() -> Html {
    html! {
        <NumberedSection meta={content::ASSETS} pattern={Pattern::DiagonalHatch} spotlight={Spotlight::TopLeft}>
            <div style="padding: 80px;">
                <div style="margin-bottom: 48px;">
                    <div style={section_label().with("margin-bottom", "16px").to_string()}>{ content::ASSETS.label }</div>
                    <h2 style={h2().to_string()}>{ content::ASSETS.title }</h2>
                    <p style={body_large().to_string()}>{ content::ASSETS_TAG }</p>
                </div>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 48px;" data-grid="assets">
                    <div>
                        <h3 style={h3().with("margin-bottom", "24px").to_string()}>{ content::ASSET_SERVICES.heading }</h3>
                        <BulletList group={content::ASSET_SERVICES} marker={Marker::Square} />
                    </div>
                    <div style={panel("2px", "32px", 0.2).to_string()}>
                        <h3 style={h3().with("margin-bottom", "24px").to_string()}>{ content::ASSET_PRICING_HEADING }</h3>
                        <PriceTable entries={content::ASSET_PRICES} />
                    </div>
                </div>
            </div>
        </NumberedSection>
    }
}

fn thumbnail(position: usize, src: &'static str) -> Html {
    html! {
        <div style={format!(
            "background-color: {}; border: 1px solid {}; aspect-ratio: 16/9; overflow: hidden; position: relative; box-shadow: inset 0 0 0 1px {};",
            P.surface, P.line, P.glow(0.1)
        )}>
            <img
                src={src}
                alt={content::project_alt(position)}
                style="width: 100%; height: 100%; object-fit: cover; opacity: 0.6; filter: grayscale(100%) brightness(0.8) contrast(1.2);"
            />
            <div style={format!(
                "position: absolute; bottom: 12px; left: 12px; font-size: 10px; color: {}; font-family: monospace; letter-spacing: 0.1em; background-color: rgba(10, 14, 39, 0.9); padding: 4px 8px; border: 1px solid {};",
                P.accent, P.line
            )}>
                { content::project_label(position) }
            </div>
        </div>
    }
}

fn proof() -> Html {
    html! {
        <NumberedSection meta={content::PROOF} pattern={Pattern::CrossHatch} spotlight={Spotlight::BottomRight}>
            <div style="padding: 80px;">
                <div style="margin-bottom: 56px;">
                    <div style={section_label().with("margin-bottom", "16px").to_string()}>{ content::PROOF.label }</div>
                    <h2 style={h2().to_string()}>{ content::PROOF.title }</h2>
                    <p style={body_large().to_string()}>{ content::PROOF_TAG }</p>
                </div>
                <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; margin-bottom: 48px;" data-grid="thumbnails">
                    { for content::THUMBNAILS.iter().enumerate().map(|(i, src)| thumbnail(i, *src)) }
                </div>
                <div style={format!("border-top: 2px solid {}; padding-top: 48px;", P.line)}>
                    <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px;" data-grid="metrics">
                        { for content::METRICS.iter().map(|m| html! {
                            <MetricCard number={m.number} label={m.label} />
                        }) }
                    </div>
                </div>
            </div>
        </NumberedSection>
    }
}

fn values() -> Html {
    html! {
        <NumberedSection meta={content::VALUES} pattern={Pattern::TechnicalDots} spotlight={Spotlight::TopRight}>
            <div style="padding: 80px;">
                { section_heading(&content::VALUES, "48px") }
                <div style={panel("2px", "48px", 0.2).to_string()}>
                    <h3 style={h3().with("margin-bottom", "24px").with("font-size", "16px").to_string()}>{ content::MISSION.heading }</h3>
                    <BulletList group={content::MISSION} marker={Marker::Arrow} style={Css::new().with("margin", "0 0 32px 0")} />
                    <div style={format!("border-top: 2px solid {}; padding-top: 24px;", P.line)}>
                        <p style={body_large().with("text-align", "center").with("color", P.accent).to_string()}>
                            { content::PRINCIPLE }
                        </p>
                    </div>
                </div>
            </div>
        </NumberedSection>
    }
}

fn start() -> Html {
    html! {
        <NumberedSection
            meta={content::START}
            pattern={Pattern::BlueprintGrid}
            spotlight={Spotlight::Dual}
            dimensions={true}
            padding="0 0 120px 0"
        >
            <div style="padding: 80px; text-align: center;">
                <div style={section_label().with("margin-bottom", "16px").to_string()}>{ content::START.label }</div>
                <h2 style={h2().with("font-size", "52px").with("margin-bottom", "24px").to_string()}>{ content::START.title }</h2>
                <p style={body_large().with("max-width", "600px").with("margin", "0 auto 48px auto").to_string()}>
                    { content::START_PITCH }
                </p>
                <ActionRow actions={content::START_ACTIONS} style={Css::new().with("justify-content", "center")} />
            </div>
        </NumberedSection>
    }
}

/// Schematic rendition: every section drawn as a framed blueprint sheet.
#[function_component(BlueprintPage)]
pub fn blueprint_page() -> Html {
    debug!("Rendering blueprint landing page");
    let theme = Theme::for_variant(Variant::Blueprint);

    let background = format!(
        "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background-image: linear-gradient(to right, {strong} 1px, transparent 1px), linear-gradient(to bottom, {strong} 1px, transparent 1px), linear-gradient(to right, {faint} 1px, transparent 1px), linear-gradient(to bottom, {faint} 1px, transparent 1px); background-size: 100px 100px, 100px 100px, 20px 20px, 20px 20px; pointer-events: none; z-index: 0;",
        strong = P.glow(0.03),
        faint = P.glow(0.01),
    );

    html! {
        <ContextProvider<Theme> context={theme}>
            <div
                style={format!("background-color: {}; color: {}; font-family: {}; min-height: 100vh; position: relative; overflow: hidden;", P.page, P.text, P.font)}
                data-variant={Variant::Blueprint.as_str()}
            >
                <div style={background}></div>
                { title_block() }
                <div style="position: relative; z-index: 1;">
                    { hero() }
                    { community() }
                    { problem() }
                    { free_access() }
                    { consult() }
                    { services() }
                    { pipeline() }
                    { assets() }
                    { proof() }
                    { values() }
                    { start() }
                </div>
            </div>
        </ContextProvider<Theme>>
    }
}

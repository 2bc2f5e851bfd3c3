use lastrift::config::{self, Variant};
use lastrift::content::{self, bullet_groups};
use lastrift::pages::blueprint::BlueprintPage;
use lastrift::pages::dashboard::DashboardPage;
use lastrift::pages::technical::TechnicalPage;
use lastrift::{switch, App};
use yew::prelude::*;
use yew::ServerRenderer;

async fn render(variant: Variant) -> String {
    match variant {
        Variant::Blueprint => ServerRenderer::<BlueprintPage>::new().render().await,
        Variant::Technical => ServerRenderer::<TechnicalPage>::new().render().await,
        Variant::Dashboard => ServerRenderer::<DashboardPage>::new().render().await,
    }
}

/// Text nodes come back HTML-escaped.
fn escaped(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Slice from section `at`'s block up to where the next section begins.
fn section_block<'a>(html: &'a str, at: usize) -> &'a str {
    let start = |i: usize| html.find(&format!("data-section=\"{}\"", content::SECTIONS[i].label));
    let from = start(at).unwrap_or_else(|| panic!("{} missing", content::SECTIONS[at].label));
    let to = if at + 1 < content::SECTIONS.len() {
        start(at + 1).unwrap_or(html.len())
    } else {
        html.len()
    };
    assert!(from < to, "{} is out of order", content::SECTIONS[at].label);
    &html[from..to]
}

#[derive(Properties, PartialEq)]
struct SwitchedProps {
    variant: Variant,
}

#[function_component]
fn Switched(props: &SwitchedProps) -> Html {
    switch(props.variant)
}

fn count_attr(html: &str, name: &str, value: &str) -> usize {
    html.matches(&format!("{}=\"{}\"", name, value)).count()
}

#[tokio::test]
async fn every_variant_renders_and_tags_itself() {
    for variant in Variant::ALL {
        let html = render(variant).await;
        assert!(!html.is_empty(), "{} rendered nothing", variant);
        assert_eq!(count_attr(&html, "data-variant", variant.as_str()), 1, "{}", variant);
    }
}

#[tokio::test]
async fn every_section_is_present() {
    for variant in Variant::ALL {
        let html = render(variant).await;
        for (at, section) in content::SECTIONS.iter().enumerate() {
            assert!(
                section_block(&html, at).contains(&escaped(section.title)),
                "{}: {} block lacks its title",
                variant,
                section.label
            );
        }
    }
}

#[tokio::test]
async fn switch_dispatches_each_variant() {
    for variant in Variant::ALL {
        let html = ServerRenderer::<Switched>::with_props(move || SwitchedProps { variant })
            .render()
            .await;
        assert_eq!(count_attr(&html, "data-variant", variant.as_str()), 1, "{}", variant);
        for other in Variant::ALL.into_iter().filter(|v| *v != variant) {
            assert_eq!(count_attr(&html, "data-variant", other.as_str()), 0, "{}", variant);
        }
    }
}

#[tokio::test]
async fn app_renders_the_configured_variant() {
    let html = ServerRenderer::<App>::new().render().await;
    let variant = config::active_variant();
    assert_eq!(count_attr(&html, "data-variant", variant.as_str()), 1);
    assert!(html.contains(&escaped(content::HERO.title)));
}

#[tokio::test]
async fn bullet_groups_render_their_literal_counts() {
    for variant in Variant::ALL {
        let html = render(variant).await;
        for group in bullet_groups() {
            assert_eq!(
                count_attr(&html, "data-bullet", group.key),
                group.items.len(),
                "{}: wrong item count for {}",
                variant,
                group.key
            );
            for item in group.items {
                assert!(html.contains(&escaped(item)), "{}: missing bullet {:?}", variant, item);
            }
        }
        assert_eq!(count_attr(&html, "data-bullet", "failure-points"), 6);
    }
}

#[tokio::test]
async fn prices_render_exact_literals() {
    for variant in Variant::ALL {
        let html = render(variant).await;
        for entry in content::ASSET_PRICES {
            assert_eq!(count_attr(&html, "data-price", entry.label), 1, "{}", variant);
            assert!(html.contains(entry.price), "{}: missing price {}", variant, entry.price);
        }
        assert!(html.contains("$50–150"));
        assert!(html.contains("$1K–$4K/mo"));
        for tier in content::TIERS {
            assert_eq!(count_attr(&html, "data-tier", tier.code), 1, "{}", variant);
            assert!(html.contains(tier.price));
        }
    }
}

#[tokio::test]
async fn pipeline_steps_are_numbered_in_order() {
    for variant in Variant::ALL {
        let html = render(variant).await;
        let positions: Vec<usize> = (1..=content::STEPS.len())
            .map(|n| {
                html.find(&format!("data-step=\"{}\"", n))
                    .unwrap_or_else(|| panic!("{}: step {} missing", variant, n))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}: steps out of order", variant);
        assert_eq!(count_attr(&html, "data-collapse", "arrow"), content::STEPS.len() - 1);
        for (step, at) in content::STEPS.iter().zip(&positions) {
            assert!(html[*at..].contains(step.title));
        }
    }
}

#[tokio::test]
async fn proof_and_calls_to_action_render() {
    for variant in Variant::ALL {
        let html = render(variant).await;
        assert!(html.contains(config::VIDEO_EMBED_URL), "{}: video missing", variant);
        for i in 0..content::THUMBNAILS.len() {
            assert!(html.contains(&content::project_label(i)), "{}", variant);
        }
        for metric in content::METRICS {
            assert_eq!(count_attr(&html, "data-metric", metric.label), 1, "{}", variant);
            assert!(html.contains(metric.number));
        }

        let primary_actions = [
            content::HERO_ACTIONS,
            content::FREE_ACCESS_ACTIONS,
            content::CONSULT_ACTIONS,
            content::START_ACTIONS,
        ]
        .iter()
        .flat_map(|row| row.iter())
        .filter(|a| a.is_primary())
        .count();
        assert_eq!(count_attr(&html, "data-primary", "true"), primary_actions, "{}", variant);
        assert!(html.contains("BOOK_YOUR_FREE_CALL"));
        assert!(html.contains("JOIN_DISCORD"));
        assert!(html.contains("WATCH_TUTORIALS"));
    }
}

#[tokio::test]
async fn blueprint_keeps_its_drawing_furniture() {
    let html = render(Variant::Blueprint).await;
    assert!(html.contains("PROJECT: LAST_RIFT_LABS"));
    assert!(html.contains("REV: 2026.02.17"));
    assert!(html.contains("1400px"));
    assert!(html.contains("AUTO"));
    for index in 0..=10u8 {
        assert!(html.contains(&content::section_index(index)));
    }
}

use log::info;
use yew::prelude::*;

pub mod config;
pub mod content;
pub mod global;
pub mod style;
pub mod theme;

pub mod components {
    pub mod bullets;
    pub mod button;
    pub mod card;
    pub mod frame;
    pub mod pricing;
    pub mod rail;
    pub mod steps;
}

pub mod pages {
    pub mod blueprint;
    pub mod dashboard;
    pub mod technical;
}

use config::Variant;
use pages::{blueprint::BlueprintPage, dashboard::DashboardPage, technical::TechnicalPage};

pub fn switch(variant: Variant) -> Html {
    match variant {
        Variant::Blueprint => {
            info!("Rendering blueprint variant");
            html! { <BlueprintPage /> }
        }
        Variant::Technical => {
            info!("Rendering technical variant");
            html! { <TechnicalPage /> }
        }
        Variant::Dashboard => {
            info!("Rendering dashboard variant");
            html! { <DashboardPage /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    let variant = *use_state(config::active_variant);

    // Global sheet, title and scroll position follow the mounted variant
    use_effect_with_deps(
        move |variant| {
            let style = global::mount_global_style(*variant);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
                if let Some(document) = window.document() {
                    document.set_title(&format!("{} | {}", content::BRAND, variant));
                }
            }
            move || {
                if let Some(style) = style {
                    style.unregister();
                }
            }
        },
        variant,
    );

    switch(variant)
}

use log::{debug, error};
use stylist::GlobalStyle;

use crate::config::Variant;
use crate::theme::Theme;

/// Page-wide rules that inline styles can't express: resets, selection color,
/// and collapsing the multi-column grids on narrow screens.
pub fn global_css(variant: Variant) -> String {
    let palette = Theme::for_variant(variant).palette;
    format!(
        r#"
        html, body {{
            margin: 0;
            padding: 0;
            background-color: {page};
            color: {text};
            font-family: {font};
            -webkit-font-smoothing: antialiased;
        }}

        *, *::before, *::after {{
            box-sizing: border-box;
        }}

        ::selection {{
            background: {selection};
            color: {heading};
        }}

        button:hover {{
            filter: brightness(1.2);
        }}

        button:focus-visible {{
            outline: 1px dashed {accent};
            outline-offset: 3px;
        }}

        @media (max-width: 900px) {{
            [data-grid] {{
                grid-template-columns: 1fr !important;
            }}
            [data-grid] > * {{
                grid-column: auto !important;
            }}
            [data-collapse] {{
                display: none !important;
            }}
            [data-stack] {{
                flex-direction: column !important;
            }}
        }}
        "#,
        page = palette.page,
        text = palette.text,
        font = palette.font,
        selection = palette.glow(0.35),
        heading = palette.heading,
        accent = palette.accent,
    )
}

/// Registers the global sheet for `variant`. On failure the page still
/// renders, just without the global rules.
pub fn mount_global_style(variant: Variant) -> Option<GlobalStyle> {
    match GlobalStyle::new(global_css(variant)) {
        Ok(style) => {
            debug!("mounted global style for {} variant", variant);
            Some(style)
        }
        Err(e) => {
            error!("failed to mount global style for {} variant: {}", variant, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_uses_the_variant_palette() {
        let sheet = global_css(Variant::Technical);
        assert!(sheet.contains("background-color: #050709;"));
        assert!(sheet.contains("rgba(34, 211, 238, 0.35)"));
        assert!(!sheet.contains("{page}"));
    }

    #[test]
    fn every_sheet_parses() {
        use std::str::FromStr;
        use stylist::ast::Sheet;

        for variant in Variant::ALL {
            assert!(Sheet::from_str(&global_css(variant)).is_ok(), "{}", variant);
        }
    }

    #[test]
    fn sheet_collapses_grids_on_narrow_screens() {
        for variant in Variant::ALL {
            let sheet = global_css(variant);
            assert!(sheet.contains("@media (max-width: 900px)"));
            assert!(sheet.contains("[data-grid]"));
        }
    }
}

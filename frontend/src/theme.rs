use crate::config::Variant;

/// Named colors for one variant. Values are raw CSS color strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub frame: &'static str,
    pub surface: &'static str,
    pub line: &'static str,
    pub accent: &'static str,
    pub highlight: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    /// rgba() triplet+alpha prefix used for glows and washes, e.g. `rgba(37, 99, 235,`.
    pub tint: &'static str,
    pub font: &'static str,
    pub radius: &'static str,
}

impl Palette {
    /// `rgba(r, g, b, alpha)` in the palette's glow color.
    pub fn glow(&self, alpha: f32) -> String {
        format!("{} {})", self.tint, alpha)
    }
}

pub const BLUEPRINT: Palette = Palette {
    page: "#020617",
    frame: "#0A0E27",
    surface: "#0F172A",
    line: "#1E3A8A",
    accent: "#2563EB",
    highlight: "#60A5FA",
    heading: "#60A5FA",
    text: "#93C5FD",
    muted: "#64748B",
    tint: "rgba(37, 99, 235,",
    font: "\"IBM Plex Mono\", \"Courier New\", monospace",
    radius: "0",
};

pub const TECHNICAL: Palette = Palette {
    page: "#050709",
    frame: "#0B0F14",
    surface: "#10161D",
    line: "#1F2933",
    accent: "#22D3EE",
    highlight: "#A3E635",
    heading: "#F1F5F9",
    text: "#CBD5E1",
    muted: "#6B7280",
    tint: "rgba(34, 211, 238,",
    font: "\"JetBrains Mono\", \"Fira Code\", monospace",
    radius: "2px",
};

pub const DASHBOARD: Palette = Palette {
    page: "#0E1016",
    frame: "#151821",
    surface: "#1B1F2A",
    line: "#2A3040",
    accent: "#8B5CF6",
    highlight: "#F59E0B",
    heading: "#F9FAFB",
    text: "#E5E7EB",
    muted: "#9CA3AF",
    tint: "rgba(139, 92, 246,",
    font: "\"Inter\", \"Segoe UI\", system-ui, sans-serif",
    radius: "14px",
};

/// Context value handed down by each page so primitives can style themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub variant: Variant,
    pub palette: Palette,
}

impl Theme {
    pub fn for_variant(variant: Variant) -> Self {
        let palette = match variant {
            Variant::Blueprint => BLUEPRINT,
            Variant::Technical => TECHNICAL,
            Variant::Dashboard => DASHBOARD,
        };
        Theme { variant, palette }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::for_variant(Variant::Blueprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_builds_rgba() {
        assert_eq!(BLUEPRINT.glow(0.1), "rgba(37, 99, 235, 0.1)");
        assert_eq!(TECHNICAL.glow(0.35), "rgba(34, 211, 238, 0.35)");
    }

    #[test]
    fn every_variant_gets_a_distinct_palette() {
        let pages: Vec<_> = Variant::ALL.iter().map(|v| Theme::for_variant(*v).palette.page).collect();
        assert_eq!(pages.len(), 3);
        assert_ne!(pages[0], pages[1]);
        assert_ne!(pages[1], pages[2]);
        assert_eq!(Theme::default().palette, BLUEPRINT);
    }
}

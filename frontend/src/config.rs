use std::fmt;
use std::str::FromStr;

use log::{warn, Level};
use thiserror::Error;

pub const VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/Wf4RGt3zCM8";
pub const VIDEO_TITLE: &str = "Fortnite UEFN Gameplay";
pub const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown landing variant `{0}` (expected blueprint, technical or dashboard)")]
    UnknownVariant(String),
}

/// Which cosmetic rendition of the landing page to mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Blueprint,
    Technical,
    Dashboard,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Blueprint, Variant::Technical, Variant::Dashboard];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Blueprint => "blueprint",
            Variant::Technical => "technical",
            Variant::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownVariant(wanted.to_string()))
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Picks the first usable value out of the ordered candidates, skipping
/// (and logging) ones that don't parse.
pub fn resolve_variant<'a, I>(candidates: I) -> Variant
where
    I: IntoIterator<Item = (&'static str, Option<&'a str>)>,
{
    for (source, raw) in candidates {
        let Some(raw) = raw else { continue };
        match raw.parse::<Variant>() {
            Ok(variant) => return variant,
            Err(e) => warn!("ignoring {}: {}", source, e),
        }
    }
    Variant::default()
}

#[cfg(target_arch = "wasm32")]
fn document_variant() -> Option<String> {
    web_sys::window()?
        .document()?
        .document_element()?
        .get_attribute("data-variant")
}

// No browser document when rendering natively.
#[cfg(not(target_arch = "wasm32"))]
fn document_variant() -> Option<String> {
    None
}

/// `<html data-variant="...">` wins over the build-time `LASTRIFT_VARIANT`.
pub fn active_variant() -> Variant {
    let from_document = document_variant();
    resolve_variant([
        ("data-variant attribute", from_document.as_deref()),
        ("LASTRIFT_VARIANT", option_env!("LASTRIFT_VARIANT")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variant_names_case_insensitively() {
        assert_eq!("blueprint".parse(), Ok(Variant::Blueprint));
        assert_eq!(" Technical ".parse(), Ok(Variant::Technical));
        assert_eq!("DASHBOARD".parse(), Ok(Variant::Dashboard));
    }

    #[test]
    fn rejects_unknown_variant() {
        let err = "neon".parse::<Variant>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownVariant("neon".to_string()));
        assert!(err.to_string().contains("`neon`"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for v in Variant::ALL {
            assert_eq!(v.to_string().parse::<Variant>(), Ok(v));
        }
    }

    #[test]
    fn resolve_skips_missing_and_invalid_sources() {
        let picked = resolve_variant([
            ("first", None),
            ("second", Some("bogus")),
            ("third", Some("dashboard")),
        ]);
        assert_eq!(picked, Variant::Dashboard);
    }

    #[test]
    fn native_builds_resolve_from_the_build_time_variable() {
        let expected = resolve_variant([("LASTRIFT_VARIANT", option_env!("LASTRIFT_VARIANT"))]);
        assert_eq!(active_variant(), expected);
    }

    #[test]
    fn resolve_falls_back_to_blueprint() {
        assert_eq!(resolve_variant([("only", Some("nope"))]), Variant::Blueprint);
        assert_eq!(resolve_variant(std::iter::empty()), Variant::Blueprint);
    }
}

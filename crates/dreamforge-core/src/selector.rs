//! Content variant selection
//!
//! Each section with per-theme variants has an ordered rule table of
//! `(predicate, variant)` pairs. Rules are evaluated top to bottom and the
//! first matching predicate wins; when nothing matches the section's
//! fallback variant is used.
//!
//! ```text
//! world map:  horror -> Horror | fantasy -> Fantasy | Default
//! art style:  horror -> Horror | sci-fi  -> SciFi   | Default
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content;
use crate::theme::ThemeFlags;

/// A selection rule: when the predicate holds, the variant is chosen
pub type Rule<V> = (fn(&ThemeFlags) -> bool, V);

/// World map variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorldMapVariant {
    Horror,
    Fantasy,
    Default,
}

impl WorldMapVariant {
    /// The pre-authored text block for this variant
    pub fn text(self) -> &'static str {
        match self {
            WorldMapVariant::Horror => content::WORLD_MAP_HORROR,
            WorldMapVariant::Fantasy => content::WORLD_MAP_FANTASY,
            WorldMapVariant::Default => content::WORLD_MAP_DEFAULT,
        }
    }
}

impl fmt::Display for WorldMapVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldMapVariant::Horror => write!(f, "horror"),
            WorldMapVariant::Fantasy => write!(f, "fantasy"),
            WorldMapVariant::Default => write!(f, "default"),
        }
    }
}

/// Art style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtStyleVariant {
    Horror,
    SciFi,
    Default,
}

impl ArtStyleVariant {
    /// The pre-authored text block for this variant
    pub fn text(self) -> &'static str {
        match self {
            ArtStyleVariant::Horror => content::ART_STYLE_HORROR,
            ArtStyleVariant::SciFi => content::ART_STYLE_SCI_FI,
            ArtStyleVariant::Default => content::ART_STYLE_DEFAULT,
        }
    }
}

impl fmt::Display for ArtStyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtStyleVariant::Horror => write!(f, "horror"),
            ArtStyleVariant::SciFi => write!(f, "sci-fi"),
            ArtStyleVariant::Default => write!(f, "default"),
        }
    }
}

fn is_horror(flags: &ThemeFlags) -> bool {
    flags.horror
}

fn is_fantasy(flags: &ThemeFlags) -> bool {
    flags.fantasy
}

fn is_sci_fi(flags: &ThemeFlags) -> bool {
    flags.sci_fi
}

/// Priority-ordered world map rules
pub const WORLD_MAP_RULES: [Rule<WorldMapVariant>; 2] = [
    (is_horror, WorldMapVariant::Horror),
    (is_fantasy, WorldMapVariant::Fantasy),
];

/// Priority-ordered art style rules (fantasy has no dedicated art style)
pub const ART_STYLE_RULES: [Rule<ArtStyleVariant>; 2] = [
    (is_horror, ArtStyleVariant::Horror),
    (is_sci_fi, ArtStyleVariant::SciFi),
];

/// Evaluate rules in order; first match wins, else `fallback`.
pub fn first_match<V: Copy>(rules: &[Rule<V>], flags: &ThemeFlags, fallback: V) -> V {
    rules
        .iter()
        .find(|(predicate, _)| predicate(flags))
        .map(|(_, variant)| *variant)
        .unwrap_or(fallback)
}

pub fn select_world_map(flags: &ThemeFlags) -> WorldMapVariant {
    first_match(&WORLD_MAP_RULES, flags, WorldMapVariant::Default)
}

pub fn select_art_style(flags: &ThemeFlags) -> ArtStyleVariant {
    first_match(&ART_STYLE_RULES, flags, ArtStyleVariant::Default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::classify;

    #[test]
    fn test_horror_beats_everything() {
        let flags = ThemeFlags {
            horror: true,
            fantasy: true,
            sci_fi: true,
            dream: true,
            ..Default::default()
        };
        assert_eq!(select_world_map(&flags), WorldMapVariant::Horror);
        assert_eq!(select_art_style(&flags), ArtStyleVariant::Horror);
    }

    #[test]
    fn test_fantasy_world_map_default_art() {
        let flags = classify("An epic fantasy adventure with magic and dragons");
        assert_eq!(select_world_map(&flags), WorldMapVariant::Fantasy);
        assert_eq!(select_art_style(&flags), ArtStyleVariant::Default);
    }

    #[test]
    fn test_sci_fi_only_affects_art_style() {
        let flags = classify("a futuristic space station");
        assert_eq!(select_world_map(&flags), WorldMapVariant::Default);
        assert_eq!(select_art_style(&flags), ArtStyleVariant::SciFi);
    }

    #[test]
    fn test_fantasy_and_sci_fi() {
        let flags = classify("medieval knights in space");
        assert_eq!(select_world_map(&flags), WorldMapVariant::Fantasy);
        assert_eq!(select_art_style(&flags), ArtStyleVariant::SciFi);
    }

    #[test]
    fn test_empty_flags_fall_back() {
        let flags = ThemeFlags::default();
        assert_eq!(select_world_map(&flags), WorldMapVariant::Default);
        assert_eq!(select_art_style(&flags), ArtStyleVariant::Default);
    }

    #[test]
    fn test_dream_only_uses_default() {
        let flags = classify("a lucid dream");
        assert_eq!(select_world_map(&flags), WorldMapVariant::Default);
        assert_eq!(select_art_style(&flags), ArtStyleVariant::Default);
    }

    #[test]
    fn test_first_match_respects_order() {
        fn is_time(flags: &ThemeFlags) -> bool {
            flags.time
        }
        let rules: [Rule<u8>; 2] = [(is_time, 1), (is_time, 2)];
        let flags = ThemeFlags {
            time: true,
            ..Default::default()
        };
        assert_eq!(first_match(&rules, &flags, 0), 1);
        assert_eq!(first_match(&rules, &ThemeFlags::default(), 0), 0);
    }

    #[test]
    fn test_variant_text() {
        assert_eq!(WorldMapVariant::Horror.text(), content::WORLD_MAP_HORROR);
        assert_eq!(ArtStyleVariant::SciFi.text(), content::ART_STYLE_SCI_FI);
        assert_eq!(ArtStyleVariant::Default.to_string(), "default");
    }
}

//! Core types for DreamForge

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::inspiration::InspirationImage;
use crate::selector::{ArtStyleVariant, WorldMapVariant};
use crate::theme::ThemeFlags;

/// Free-text game idea as entered by the user
///
/// Any string is accepted; a blank idea simply cannot be generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIdea(String);

impl GameIdea {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for empty or whitespace-only text
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for GameIdea {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for GameIdea {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for GameIdea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structured template alternative to a free-text idea
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTemplate {
    pub title: String,
    pub genre: String,
    pub setting: String,
    pub storyline: String,
    pub characters: String,
    pub mechanics: String,
}

impl GameTemplate {
    /// Fields in join order
    fn fields(&self) -> [&str; 6] {
        [
            &self.title,
            &self.genre,
            &self.setting,
            &self.storyline,
            &self.characters,
            &self.mechanics,
        ]
    }

    /// True when every field is blank
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|f| f.trim().is_empty())
    }

    /// Join the non-blank fields with single spaces
    pub fn to_idea(&self) -> GameIdea {
        let joined = self
            .fields()
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        GameIdea(joined)
    }
}

/// Identifier of one generated concept (session-scoped)
///
/// ULIDs sort by creation time, so later generations compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConceptId(pub Ulid);

impl ConceptId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ConceptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "concept_{}", self.0)
    }
}

/// The five text sections of a game design document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedConcept {
    pub plotline: String,
    pub world_map: String,
    pub art_style: String,
    pub game_loop: String,
    pub ui_sketches: String,
}

impl GeneratedConcept {
    /// Sections paired with their display titles, in document order
    pub fn sections(&self) -> [(&'static str, &str); 5] {
        [
            ("Plotline", &self.plotline),
            ("World Map", &self.world_map),
            ("Art Style", &self.art_style),
            ("Game Loop", &self.game_loop),
            ("UI Sketches", &self.ui_sketches),
        ]
    }
}

/// Non-fatal message surfaced to the user after a generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GenerationNotice {
    /// The image generator failed for one gallery entry
    ImageFallback {
        index: usize,
        description: String,
        reason: String,
    },
}

impl fmt::Display for GenerationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationNotice::ImageFallback {
                index, reason, ..
            } => write!(
                f,
                "Image {} could not be generated ({}); using a static image instead",
                index + 1,
                reason
            ),
        }
    }
}

/// Everything produced for one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutcome {
    pub id: ConceptId,
    pub idea: GameIdea,
    pub flags: ThemeFlags,
    pub world_map_variant: WorldMapVariant,
    pub art_style_variant: ArtStyleVariant,
    pub concept: GeneratedConcept,
    pub images: Vec<InspirationImage>,
    pub notices: Vec<GenerationNotice>,
}

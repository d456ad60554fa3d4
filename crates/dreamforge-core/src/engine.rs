//! DreamEngine - drives one generation request at a time
//!
//! The engine owns the session state: the current generation state and the
//! latest outcome. Classification and selection are delegated to the pure
//! functions in `theme`, `selector` and `inspiration`.
//!
//! ```text
//! Idle ──► Generating(Images) ──► Generating(Content) ──► Ready
//!                ▲                                          │
//!                └──────────────── next request ────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use dreamforge_core::{DreamEngine, EngineConfig, GameIdea};
//!
//! let mut engine = DreamEngine::new(EngineConfig::default());
//! let outcome = engine.generate(&GameIdea::new("a scary lighthouse")).await?;
//! println!("{}", outcome.concept.world_map);
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::clock::{Delay, TokioDelay};
use crate::config::EngineConfig;
use crate::content;
use crate::error::{DreamError, DreamResult};
use crate::images::{generate_gallery, ImageGenerator};
use crate::inspiration::select_inspiration_images;
use crate::selector::{select_art_style, select_world_map};
use crate::theme::classify;
use crate::types::{ConceptId, GameIdea, GeneratedConcept, GenerationNotice, GenerationOutcome};

/// Default capacity for event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Step within a running generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStep {
    /// Resolving the inspiration gallery
    Images,
    /// Classifying the idea and assembling text sections
    Content,
}

/// Generation state of the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationState {
    /// Nothing generated yet
    #[default]
    Idle,
    /// A request is in flight
    Generating(GenerationStep),
    /// The latest outcome is available
    Ready,
}

impl GenerationState {
    pub fn is_generating(&self) -> bool {
        matches!(self, GenerationState::Generating(_))
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationState::Idle => write!(f, "Idle"),
            GenerationState::Generating(GenerationStep::Images) => {
                write!(f, "Generating (images)")
            }
            GenerationState::Generating(GenerationStep::Content) => {
                write!(f, "Generating (content)")
            }
            GenerationState::Ready => write!(f, "Ready"),
        }
    }
}

/// Events emitted while generating
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationEvent {
    /// The engine moved to a new state
    StateChanged(GenerationState),
    /// An image fell back to its static asset
    ImageFallback(GenerationNotice),
    /// A new outcome replaced the previous one
    ConceptReady(ConceptId),
}

/// Main entry point for DreamForge
pub struct DreamEngine {
    config: EngineConfig,
    delay: Arc<dyn Delay>,
    /// Optional image generation capability
    image_generator: Option<Arc<dyn ImageGenerator>>,
    state: GenerationState,
    /// Latest outcome; replaced by every successful generation
    outcome: Option<GenerationOutcome>,
    event_tx: broadcast::Sender<GenerationEvent>,
}

impl DreamEngine {
    /// Create an engine that waits on the real clock and uses static images
    pub fn new(config: EngineConfig) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            config,
            delay: Arc::new(TokioDelay),
            image_generator: None,
            state: GenerationState::Idle,
            outcome: None,
            event_tx,
        }
    }

    /// Replace the delay used for simulated latency
    pub fn with_delay(mut self, delay: impl Delay + 'static) -> Self {
        self.delay = Arc::new(delay);
        self
    }

    /// Enable image generation
    pub fn with_image_generator(mut self, generator: Arc<dyn ImageGenerator>) -> Self {
        self.image_generator = Some(generator);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// Latest outcome, if any
    pub fn outcome(&self) -> Option<&GenerationOutcome> {
        self.outcome.as_ref()
    }

    pub fn has_image_generator(&self) -> bool {
        self.image_generator.is_some()
    }

    /// Subscribe to generation events
    pub fn subscribe(&self) -> broadcast::Receiver<GenerationEvent> {
        self.event_tx.subscribe()
    }

    /// Whether the generate trigger is enabled for this idea
    pub fn can_generate(&self, idea: &GameIdea) -> bool {
        !idea.is_blank() && !self.state.is_generating()
    }

    /// Generate a concept for `idea`.
    ///
    /// # Errors
    ///
    /// Returns `DreamError::EmptyIdea` for a blank idea; the engine state
    /// and previous outcome are left untouched in that case.
    pub async fn generate(&mut self, idea: &GameIdea) -> DreamResult<&GenerationOutcome> {
        if idea.is_blank() {
            debug!("Ignoring generate request for blank idea");
            return Err(DreamError::EmptyIdea);
        }

        let id = ConceptId::new();
        info!(%id, idea_len = idea.as_str().len(), "Starting generation");

        // Image step
        self.set_state(GenerationState::Generating(GenerationStep::Images));
        self.delay.sleep(self.config.image_delay()).await;

        let mut images = select_inspiration_images(idea.as_str());
        let mut notices = Vec::new();
        if let Some(generator) = &self.image_generator {
            let (generated, failures) = generate_gallery(
                generator,
                images,
                self.config.image_width,
                self.config.image_height,
                &self.config.prompt_suffix,
            )
            .await;
            images = generated;
            notices = failures;
        }
        for notice in &notices {
            let _ = self.event_tx.send(GenerationEvent::ImageFallback(notice.clone()));
        }
        if !notices.is_empty() {
            warn!(count = notices.len(), "Some inspiration images fell back to static assets");
        }

        // Content step
        self.set_state(GenerationState::Generating(GenerationStep::Content));
        self.delay.sleep(self.config.content_delay()).await;

        let flags = classify(idea.as_str());
        let world_map_variant = select_world_map(&flags);
        let art_style_variant = select_art_style(&flags);
        debug!(
            themes = ?flags.detected(),
            world_map = %world_map_variant,
            art_style = %art_style_variant,
            "Selected content variants"
        );

        let concept = GeneratedConcept {
            plotline: content::PLOTLINE.to_string(),
            world_map: world_map_variant.text().to_string(),
            art_style: art_style_variant.text().to_string(),
            game_loop: content::GAME_LOOP.to_string(),
            ui_sketches: content::UI_SKETCHES.to_string(),
        };

        let outcome = self.outcome.insert(GenerationOutcome {
            id,
            idea: idea.clone(),
            flags,
            world_map_variant,
            art_style_variant,
            concept,
            images,
            notices,
        });

        self.state = GenerationState::Ready;
        let _ = self
            .event_tx
            .send(GenerationEvent::StateChanged(GenerationState::Ready));
        let _ = self.event_tx.send(GenerationEvent::ConceptReady(id));
        info!(%id, "Generation complete");

        Ok(outcome)
    }

    fn set_state(&mut self, state: GenerationState) {
        debug!(from = %self.state, to = %state, "Generation state change");
        self.state = state;
        let _ = self.event_tx.send(GenerationEvent::StateChanged(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::InstantDelay;
    use crate::inspiration::ImageAsset;
    use crate::selector::{ArtStyleVariant, WorldMapVariant};

    fn instant_engine() -> DreamEngine {
        DreamEngine::new(EngineConfig::default()).with_delay(InstantDelay::new())
    }

    #[tokio::test]
    async fn test_blank_idea_is_rejected() {
        let mut engine = instant_engine();
        let result = engine.generate(&GameIdea::new("   ")).await;
        assert!(matches!(result, Err(DreamError::EmptyIdea)));
        assert_eq!(engine.state(), GenerationState::Idle);
        assert!(engine.outcome().is_none());
    }

    #[tokio::test]
    async fn test_generate_horror_time_dream() {
        let mut engine = instant_engine();
        let idea = GameIdea::new("A horror game where you can control time and solve puzzles in dreams");
        let outcome = engine.generate(&idea).await.unwrap();

        assert!(outcome.flags.horror && outcome.flags.time && outcome.flags.puzzle && outcome.flags.dream);
        assert_eq!(outcome.world_map_variant, WorldMapVariant::Horror);
        assert_eq!(outcome.art_style_variant, ArtStyleVariant::Horror);
        assert_eq!(outcome.concept.world_map, content::WORLD_MAP_HORROR);
        assert_eq!(outcome.concept.art_style, content::ART_STYLE_HORROR);
        assert_eq!(outcome.concept.plotline, content::PLOTLINE);
        assert_eq!(outcome.images.len(), 3);
        assert!(outcome.notices.is_empty());
        assert_eq!(engine.state(), GenerationState::Ready);
    }

    #[tokio::test]
    async fn test_next_generation_replaces_outcome() {
        let mut engine = instant_engine();
        let first = engine.generate(&GameIdea::new("a scary house")).await.unwrap().id;
        let second = engine
            .generate(&GameIdea::new("a quiet walk in the park"))
            .await
            .unwrap()
            .id;

        assert_ne!(first, second);
        let outcome = engine.outcome().unwrap();
        assert_eq!(outcome.id, second);
        assert_eq!(outcome.world_map_variant, WorldMapVariant::Default);
        assert_eq!(outcome.images[0].asset, ImageAsset::Dream);
    }

    #[tokio::test]
    async fn test_delays_awaited_once_per_step() {
        let delay = InstantDelay::new();
        let mut engine = DreamEngine::new(EngineConfig::default()).with_delay(delay.clone());
        engine.generate(&GameIdea::new("space")).await.unwrap();
        assert_eq!(delay.calls(), 2);
    }

    #[tokio::test]
    async fn test_state_events_in_order() {
        let mut engine = instant_engine();
        let mut rx = engine.subscribe();
        engine.generate(&GameIdea::new("ocean")).await.unwrap();

        let mut states = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let GenerationEvent::StateChanged(state) = event {
                states.push(state);
            }
        }
        assert_eq!(
            states,
            vec![
                GenerationState::Generating(GenerationStep::Images),
                GenerationState::Generating(GenerationStep::Content),
                GenerationState::Ready,
            ]
        );
    }

    #[test]
    fn test_can_generate() {
        let engine = instant_engine();
        assert!(engine.can_generate(&GameIdea::new("a game")));
        assert!(!engine.can_generate(&GameIdea::new("")));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(GenerationState::Idle.to_string(), "Idle");
        assert_eq!(
            GenerationState::Generating(GenerationStep::Images).to_string(),
            "Generating (images)"
        );
    }
}

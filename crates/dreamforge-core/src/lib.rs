//! DreamForge Core Library
//!
//! Keyword-driven game design documents from a free-text game idea.
//!
//! ## Overview
//!
//! A game idea (typed freely or assembled from a [`GameTemplate`]) is
//! classified into theme flags by case-insensitive keyword matching. Ordered
//! rule tables then pick one pre-authored variant per themed section, and a
//! second keyword pass picks three inspiration images. There is no
//! language model involved: identical ideas always produce identical
//! documents.
//!
//! - **Classification**: [`classify`] → [`ThemeFlags`]
//! - **Selection**: [`select_world_map`], [`select_art_style`],
//!   [`select_inspiration_images`]
//! - **Generation**: [`DreamEngine`] runs one request through
//!   `Idle → Generating → Ready`, awaiting an injectable [`Delay`] and an
//!   optional [`ImageGenerator`]
//! - **Export**: Markdown, HTML, JSON and PDF via [`ExportFormat`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use dreamforge_core::{DreamEngine, EngineConfig, ExportDocument, ExportFormat, GameIdea};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = DreamEngine::new(EngineConfig::default());
//!     let outcome = engine
//!         .generate(&GameIdea::new("A horror game where you rewind time"))
//!         .await?;
//!
//!     println!("{}", outcome.concept.world_map);
//!     dreamforge_core::export_to_file(&outcome.into(), ExportFormat::Pdf, "concept.pdf")?;
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod export;
pub mod images;
pub mod inspiration;
pub mod selector;
pub mod theme;
pub mod types;

// Re-exports
pub use clock::{Delay, InstantDelay, TokioDelay};
pub use config::EngineConfig;
pub use engine::{DreamEngine, GenerationEvent, GenerationState, GenerationStep};
pub use error::{DreamError, DreamResult};
pub use export::{
    export_to_file, DocumentExporter, ExportDocument, ExportFormat, HtmlExporter, JsonExporter,
    MarkdownExporter, PdfExporter,
};
pub use images::{ImageGenerator, ImageRequest};
pub use inspiration::{
    select_inspiration_images, ImageAsset, ImageRef, ImageSource, InspirationImage,
};
pub use selector::{select_art_style, select_world_map, ArtStyleVariant, WorldMapVariant};
pub use theme::{classify, Theme, ThemeFlags};
pub use types::*;

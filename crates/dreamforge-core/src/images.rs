//! Optional image generation
//!
//! Image generation is an external capability. When an [`ImageGenerator`] is
//! configured, the engine asks it for one image per inspiration theme; every
//! call is independent and a failed call falls back to the theme's static
//! asset. Without a generator the static gallery is used as-is.

use std::sync::Arc;

use futures::future::{join_all, BoxFuture};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DreamResult;
use crate::inspiration::{ImageRef, ImageSource, InspirationImage};
use crate::types::GenerationNotice;

/// A single image generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
}

/// External image generation capability
pub trait ImageGenerator: Send + Sync {
    fn generate<'a>(&'a self, request: &'a ImageRequest) -> BoxFuture<'a, DreamResult<ImageRef>>;
}

/// Prompt sent to the generator for one theme description
pub fn build_prompt(description: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        description.to_string()
    } else {
        format!("{}, {}", description, suffix)
    }
}

/// Ask the generator for an image per gallery entry, concurrently.
///
/// All calls complete (or fall back) before this returns. Entries keep their
/// order; a failed entry keeps its static source and yields a notice.
pub async fn generate_gallery(
    generator: &Arc<dyn ImageGenerator>,
    gallery: Vec<InspirationImage>,
    width: u32,
    height: u32,
    prompt_suffix: &str,
) -> (Vec<InspirationImage>, Vec<GenerationNotice>) {
    let requests: Vec<ImageRequest> = gallery
        .iter()
        .map(|image| ImageRequest {
            prompt: build_prompt(&image.description, prompt_suffix),
            width,
            height,
        })
        .collect();

    let results = join_all(requests.iter().map(|request| generator.generate(request))).await;

    let mut notices = Vec::new();
    let images = gallery
        .into_iter()
        .zip(results)
        .enumerate()
        .map(|(index, (mut image, result))| {
            match result {
                Ok(generated) => {
                    debug!(index, reference = %generated, "Generated inspiration image");
                    image.source = ImageSource::Generated(generated);
                }
                Err(e) => {
                    warn!(index, error = %e, asset = %image.asset, "Image generation failed, using static asset");
                    notices.push(GenerationNotice::ImageFallback {
                        index,
                        description: image.description.clone(),
                        reason: e.to_string(),
                    });
                }
            }
            image
        })
        .collect();

    (images, notices)
}

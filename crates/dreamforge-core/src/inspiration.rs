//! Inspiration images
//!
//! A second keyword pass, independent of [`crate::theme`], turns the game idea
//! into up to three descriptive image themes. The keyword sets overlap with
//! the content themes but are not the same (forest/nature/jungle only exist
//! here, time/puzzle only exist there), so the two passes are kept apart.
//!
//! Each description then maps onto one asset of a small static pool.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of inspiration images shown per concept
pub const INSPIRATION_COUNT: usize = 3;

/// Description used to pad the list when fewer than three themes matched
pub const FILLER_DESCRIPTION: &str = "abstract game concept art with vibrant colors";

/// Image themes in scan order: (keywords, description)
pub const IMAGE_THEMES: [(&[&str], &str); 6] = [
    (
        &["horror", "scary", "nightmare"],
        "dark horror atmosphere with shadows and eerie lighting",
    ),
    (
        &["fantasy", "magic", "medieval"],
        "mystical fantasy realm with magical elements",
    ),
    (
        &["sci-fi", "space", "futuristic"],
        "futuristic sci-fi environment with advanced technology",
    ),
    (
        &["dream", "surreal", "lucid"],
        "surreal dreamscape with floating elements and soft light",
    ),
    (
        &["ocean", "underwater", "sea"],
        "underwater ocean world with bioluminescent life",
    ),
    (
        &["forest", "nature", "jungle"],
        "lush forest environment with ancient trees",
    ),
];

/// Static image assets bundled with the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageAsset {
    Dream,
    Horror,
    Fantasy,
}

impl ImageAsset {
    /// Round-robin pool, in fallback order
    pub const POOL: [ImageAsset; 3] = [ImageAsset::Dream, ImageAsset::Horror, ImageAsset::Fantasy];

    /// Asset path relative to the bundled assets directory
    pub fn path(self) -> &'static str {
        match self {
            ImageAsset::Dream => "assets/inspiration/dream-concept.jpg",
            ImageAsset::Horror => "assets/inspiration/horror-concept.jpg",
            ImageAsset::Fantasy => "assets/inspiration/fantasy-concept.jpg",
        }
    }

    /// Pick the asset for a description at output position `index`
    pub fn for_description(description: &str, index: usize) -> Self {
        fn has(text: &str, words: &[&str]) -> bool {
            words.iter().any(|w| text.contains(w))
        }

        let lowered = description.to_lowercase();
        if has(&lowered, &["horror", "nightmare"]) {
            ImageAsset::Horror
        } else if has(&lowered, &["fantasy", "mystical"]) {
            ImageAsset::Fantasy
        } else if has(&lowered, &["dream", "surreal"]) {
            ImageAsset::Dream
        } else {
            Self::POOL[index % Self::POOL.len()]
        }
    }
}

impl fmt::Display for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Reference to an image produced by an external generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an inspiration image comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum ImageSource {
    /// A bundled static asset
    Static(ImageAsset),
    /// An image returned by the image generator
    Generated(ImageRef),
}

/// One entry of the inspiration gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspirationImage {
    /// Theme description the image illustrates
    pub description: String,
    /// Static asset used when no generated image is available
    pub asset: ImageAsset,
    pub source: ImageSource,
}

impl InspirationImage {
    /// Reference to display: the generated image if any, else the asset path
    pub fn reference(&self) -> String {
        match &self.source {
            ImageSource::Static(asset) => asset.path().to_string(),
            ImageSource::Generated(image) => image.0.clone(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.source, ImageSource::Generated(_))
    }
}

/// Derive exactly three theme descriptions from the idea text.
pub fn image_themes(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    let mut themes: Vec<&'static str> = IMAGE_THEMES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(_, description)| *description)
        .collect();

    while themes.len() < INSPIRATION_COUNT {
        themes.push(FILLER_DESCRIPTION);
    }
    themes.truncate(INSPIRATION_COUNT);
    themes
}

/// Select the three static inspiration images for an idea.
pub fn select_inspiration_images(text: &str) -> Vec<InspirationImage> {
    image_themes(text)
        .into_iter()
        .enumerate()
        .map(|(index, description)| {
            let asset = ImageAsset::for_description(description, index);
            InspirationImage {
                description: description.to_string(),
                asset,
                source: ImageSource::Static(asset),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_pads_with_filler() {
        let images = select_inspiration_images("a quiet walk in the park");
        assert_eq!(images.len(), INSPIRATION_COUNT);
        for (i, image) in images.iter().enumerate() {
            assert_eq!(image.description, FILLER_DESCRIPTION);
            assert_eq!(image.asset, ImageAsset::POOL[i]);
        }
    }

    #[test]
    fn test_one_match_then_filler() {
        let themes = image_themes("a scary house");
        assert_eq!(themes.len(), 3);
        assert!(themes[0].contains("horror"));
        assert_eq!(themes[1], FILLER_DESCRIPTION);
        assert_eq!(themes[2], FILLER_DESCRIPTION);
    }

    #[test]
    fn test_truncates_to_three_in_scan_order() {
        let themes = image_themes("a horror fantasy space dream under the sea in a jungle");
        assert_eq!(themes.len(), 3);
        assert!(themes[0].contains("horror"));
        assert!(themes[1].contains("fantasy"));
        assert!(themes[2].contains("sci-fi"));
    }

    #[test]
    fn test_forest_only_in_image_pass() {
        let themes = image_themes("explore the jungle");
        assert!(themes[0].contains("forest"));
        assert!(crate::theme::classify("explore the jungle").none());
    }

    #[test]
    fn test_asset_mapping() {
        assert_eq!(ImageAsset::for_description("dark horror atmosphere", 2), ImageAsset::Horror);
        assert_eq!(ImageAsset::for_description("a nightmare", 0), ImageAsset::Horror);
        assert_eq!(ImageAsset::for_description("mystical realm", 0), ImageAsset::Fantasy);
        assert_eq!(ImageAsset::for_description("surreal sky", 1), ImageAsset::Dream);
        // No match: round-robin by index
        assert_eq!(ImageAsset::for_description("ocean", 0), ImageAsset::Dream);
        assert_eq!(ImageAsset::for_description("ocean", 1), ImageAsset::Horror);
        assert_eq!(ImageAsset::for_description("ocean", 2), ImageAsset::Fantasy);
        assert_eq!(ImageAsset::for_description("ocean", 3), ImageAsset::Dream);
    }

    #[test]
    fn test_sci_fi_description_uses_round_robin() {
        let images = select_inspiration_images("space");
        assert!(images[0].description.contains("sci-fi"));
        assert_eq!(images[0].asset, ImageAsset::Dream);
    }

    #[test]
    fn test_static_reference() {
        let images = select_inspiration_images("nightmare");
        assert_eq!(images[0].reference(), ImageAsset::Horror.path());
        assert!(!images[0].is_generated());
    }
}

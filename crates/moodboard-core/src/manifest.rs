//! Image manifest loading
//!
//! A manifest is a small JSON file that swaps out the built-in gallery:
//!
//! ```json
//! { "images": ["https://example.com/a.jpg", "assets/b.png"] }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::catalog::TRAVEL_IMAGES;
use crate::error::BoardResult;
use crate::types::ImageList;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageManifest {
    pub images: ImageList,
}

impl ImageManifest {
    pub fn from_json(json: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let manifest = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            images = manifest.images.len(),
            "Loaded image manifest"
        );
        Ok(manifest)
    }

    pub fn into_images(self) -> ImageList {
        self.images
    }
}

impl Default for ImageManifest {
    fn default() -> Self {
        Self {
            images: ImageList::new(TRAVEL_IMAGES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_default_is_travel_gallery() {
        let manifest = ImageManifest::default();
        assert_eq!(manifest.images.len(), 6);
        assert_eq!(manifest.images, ImageList::new(TRAVEL_IMAGES));
    }

    #[test]
    fn test_from_json() {
        let manifest = ImageManifest::from_json(r#"{"images": ["a.jpg", "b.jpg"]}"#).unwrap();
        assert_eq!(manifest.into_images(), ImageList::new(["a.jpg", "b.jpg"]));
    }

    #[test]
    fn test_empty_images_is_allowed() {
        let manifest = ImageManifest::from_json(r#"{"images": []}"#).unwrap();
        assert!(manifest.images.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        for bad in [
            r#"["a.jpg"]"#,
            r#"{"images": "a.jpg"}"#,
            r#"{"images": [1, 2]}"#,
            r#"{"images": [], "extra": true}"#,
            r#"{}"#,
        ] {
            let err = ImageManifest::from_json(bad).unwrap_err();
            assert!(matches!(err, BoardError::Manifest(_)), "{bad}");
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = ImageManifest::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, BoardError::Io(_)));
    }
}

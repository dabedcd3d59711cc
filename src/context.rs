//! Launch settings shared with the component tree.
//!
//! `main` fills these in once from the command line before the window
//! opens; components only read them.

use std::sync::OnceLock;

use moodboard_core::{ImageList, ImageManifest};

static IMAGES: OnceLock<ImageList> = OnceLock::new();

/// Fix the gallery images for this run. Only the first call has an effect.
pub fn set_images(images: ImageList) {
    if IMAGES.set(images).is_err() {
        tracing::warn!("Gallery images already set, ignoring");
    }
}

/// Gallery images for this run, or the built-in travel set
pub fn get_images() -> ImageList {
    IMAGES
        .get()
        .cloned()
        .unwrap_or_else(|| ImageManifest::default().into_images())
}

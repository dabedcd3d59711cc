//! Image references for the gallery
//!
//! Locators are opaque strings. Reachability and format are the image
//! widget's business, not ours.

use serde::Deserialize;

/// A single gallery image and its position in the input sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    /// Zero-based position in the input sequence
    pub index: usize,
    /// Where to load the pixels from (URL, data URI, asset path)
    pub locator: String,
}

impl ImageReference {
    /// Accessible label, numbered from 1
    pub fn alt_text(&self) -> String {
        format!("Travel inspiration {}", self.index + 1)
    }

    /// Render key. Locators may repeat, positions cannot.
    pub fn key(&self) -> usize {
        self.index
    }
}

/// Ordered sequence of image locators, the board's only input
///
/// Order is display order and is never changed after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ImageList(Vec<String>);

impl ImageList {
    pub fn new<I, S>(locators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(locators.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pair every locator with its position
    pub fn references(&self) -> impl Iterator<Item = ImageReference> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(index, locator)| ImageReference {
                index,
                locator: locator.clone(),
            })
    }
}

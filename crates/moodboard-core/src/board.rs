//! Board view model
//!
//! A [`Board`] is everything the page shows, already laid out in section
//! order. Building one is a pure function of the image list and a
//! [`Catalog`]; the UI layer only maps it onto elements.

use crate::catalog::Catalog;
use crate::types::{ColorSwatch, DesignPrinciple, ImageList, ImageReference, TypeSample};

/// The six page sections, in the order they are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Intro,
    MoodTags,
    Gallery,
    Palette,
    Typography,
    Principles,
}

/// Glyph shown in a section's badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionIcon {
    Palette,
    Type,
    Image,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 6] = [
        SectionKind::Intro,
        SectionKind::MoodTags,
        SectionKind::Gallery,
        SectionKind::Palette,
        SectionKind::Typography,
        SectionKind::Principles,
    ];

    /// Element id, usable as an in-page anchor
    pub fn id(&self) -> &'static str {
        match self {
            SectionKind::Intro => "intro",
            SectionKind::MoodTags => "mood",
            SectionKind::Gallery => "gallery",
            SectionKind::Palette => "palette",
            SectionKind::Typography => "typography",
            SectionKind::Principles => "principles",
        }
    }

    /// Badge label and glyph. Intro and principles have their own headings.
    pub fn badge(&self) -> Option<(&'static str, SectionIcon)> {
        match self {
            SectionKind::MoodTags => Some(("Mood & Theme", SectionIcon::Palette)),
            SectionKind::Gallery => Some(("Visual Inspiration", SectionIcon::Image)),
            SectionKind::Palette => Some(("Color Palette", SectionIcon::Palette)),
            SectionKind::Typography => Some(("Typography", SectionIcon::Type)),
            SectionKind::Intro | SectionKind::Principles => None,
        }
    }
}

/// One card in the image gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCard {
    /// Zero-based position, also the render key
    pub key: usize,
    pub src: String,
    pub alt: String,
}

impl From<ImageReference> for GalleryCard {
    fn from(image: ImageReference) -> Self {
        Self {
            key: image.key(),
            alt: image.alt_text(),
            src: image.locator,
        }
    }
}

/// One of the two typography cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCard<'a> {
    /// Small uppercase label at the top of the card
    pub label: &'a str,
    pub samples: &'a [TypeSample],
    /// Caption under the samples describing the intent
    pub note: &'a str,
}

/// Fully composed mood board
#[derive(Debug, Clone, PartialEq)]
pub struct Board<'a> {
    gallery: Vec<GalleryCard>,
    catalog: Catalog<'a>,
}

impl Board<'static> {
    /// Build the shipped board around the given images
    pub fn new(images: &ImageList) -> Self {
        Self::with_catalog(images, Catalog::TRAVEL)
    }
}

impl<'a> Board<'a> {
    pub fn with_catalog(images: &ImageList, catalog: Catalog<'a>) -> Self {
        let gallery: Vec<GalleryCard> = images.references().map(GalleryCard::from).collect();

        tracing::debug!(
            moods = catalog.moods.len(),
            images = gallery.len(),
            swatches = catalog.palette.len(),
            "Composed mood board"
        );

        Self { gallery, catalog }
    }

    /// Sections in render order. Every section is always present.
    pub fn sections(&self) -> [SectionKind; 6] {
        SectionKind::ORDER
    }

    pub fn title(&self) -> &'a str {
        self.catalog.title
    }

    pub fn intro(&self) -> &'a str {
        self.catalog.intro
    }

    pub fn moods(&self) -> &'a [&'a str] {
        self.catalog.moods
    }

    pub fn gallery(&self) -> &[GalleryCard] {
        &self.gallery
    }

    pub fn palette(&self) -> &'a [ColorSwatch] {
        self.catalog.palette
    }

    /// Headings card then body card, shown side by side
    pub fn typography(&self) -> [TypeCard<'a>; 2] {
        [
            TypeCard {
                label: self.catalog.headings_label,
                samples: self.catalog.heading_samples,
                note: self.catalog.headings_note,
            },
            TypeCard {
                label: self.catalog.body_label,
                samples: self.catalog.body_samples,
                note: self.catalog.body_note,
            },
        ]
    }

    pub fn principles_title(&self) -> &'a str {
        self.catalog.principles_title
    }

    pub fn principles(&self) -> &'a [DesignPrinciple] {
        self.catalog.principles
    }
}

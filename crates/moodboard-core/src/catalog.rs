//! Content tables for the travel mood board
//!
//! Every table is a `const` built at compile time and never written to.
//! Hex literals go through [`HexColor::from_literal`], so a typo in the
//! palette is a build error.

use std::collections::HashSet;

use crate::error::{BoardError, BoardResult};
use crate::types::{ColorSwatch, DesignPrinciple, TypeRole, TypeSample};

pub const BOARD_TITLE: &str = "Travel App Mood Board";

pub const BOARD_INTRO: &str = "A curated collection of visual elements that capture the essence of \
adventure, exploration, and wanderlust. This mood board defines the emotional direction for our \
travel application.";

/// Mood keywords, in display order. Each keyword is its own render key.
pub const MOODS: [&str; 8] = [
    "Adventure",
    "Exploration",
    "Freedom",
    "Discovery",
    "Wanderlust",
    "Serenity",
    "Cultural",
    "Authentic",
];

pub const PALETTE: [ColorSwatch; 6] = [
    ColorSwatch::new("Ocean Blue", "#0EA5E9", "Adventure & Freedom"),
    ColorSwatch::new("Sunset Orange", "#F97316", "Warmth & Energy"),
    ColorSwatch::new("Forest Green", "#10B981", "Nature & Growth"),
    ColorSwatch::new("Sandy Beige", "#D4A574", "Comfort & Relaxation"),
    ColorSwatch::new("Deep Navy", "#1E3A8A", "Trust & Depth"),
    ColorSwatch::new("Coral Pink", "#FB7185", "Joy & Discovery"),
];

pub const HEADINGS_LABEL: &str = "Headings";

pub const HEADING_SAMPLES: [TypeSample; 3] = [
    TypeSample {
        role: TypeRole::Heading1,
        text: "Discover the World",
    },
    TypeSample {
        role: TypeRole::Heading2,
        text: "Your Next Adventure Awaits",
    },
    TypeSample {
        role: TypeRole::Heading3,
        text: "Explore New Horizons",
    },
];

pub const HEADINGS_NOTE: &str =
    "Clean, modern sans-serif typography that conveys trust and clarity";

pub const BODY_LABEL: &str = "Body & UI Text";

pub const BODY_SAMPLES: [TypeSample; 3] = [
    TypeSample {
        role: TypeRole::BodyPrimary,
        text: "Embark on unforgettable journeys to breathtaking destinations around the globe.",
    },
    TypeSample {
        role: TypeRole::BodySecondary,
        text: "From pristine beaches to mountain peaks, discover experiences that will last a lifetime.",
    },
    TypeSample {
        role: TypeRole::Small,
        text: "Book your adventure today and create memories that matter.",
    },
];

pub const BODY_NOTE: &str = "Readable, accessible body text for comfortable long-form reading";

pub const PRINCIPLES_TITLE: &str = "Design Principles";

pub const PRINCIPLES: [DesignPrinciple; 3] = [
    DesignPrinciple {
        title: "Visual Harmony",
        description: "Balance between vibrant imagery and calming negative space creates a peaceful browsing experience.",
    },
    DesignPrinciple {
        title: "Emotional Connection",
        description: "Colors and imagery evoke feelings of excitement, wonder, and the joy of discovery.",
    },
    DesignPrinciple {
        title: "Authenticity",
        description: "Real photography and natural colors build trust and showcase genuine travel experiences.",
    },
];

/// Built-in gallery: mountain hike, tropical beach, plane window, city skyline,
/// vintage compass, road trip.
pub const TRAVEL_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1609373066983-cee8662ea93f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtb3VudGFpbiUyMGFkdmVudHVyZSUyMGhpa2luZ3xlbnwxfHx8fDE3NjE2MzQ4NDF8MA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
    "https://images.unsplash.com/photo-1702743599501-a821d0b38b66?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxiZWFjaCUyMHRyb3BpY2FsJTIwcGFyYWRpc2V8ZW58MXx8fHwxNzYxNjg2MDg0fDA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
    "https://images.unsplash.com/photo-1760229803660-fc5d996d9b79?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxhaXJwbGFuZSUyMHRyYXZlbCUyMGpvdXJuZXl8ZW58MXx8fHwxNzYxNjM2NDU4fDA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
    "https://images.unsplash.com/photo-1562351768-f68650f3ec54?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjaXR5JTIwc2t5bGluZSUyMHN1bnNldHxlbnwxfHx8fDE3NjE3MDY5Mzd8MA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
    "https://images.unsplash.com/photo-1759148413949-4fb5f0b03681?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxjb21wYXNzJTIwbmF2aWdhdGlvbiUyMHZpbnRhZ2V8ZW58MXx8fHwxNzYxNjg2NTA1fDA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
    "https://images.unsplash.com/photo-1497235332722-bc46e3a9d98a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxyb2FkJTIwdHJpcCUyMGxhbmRzY2FwZXxlbnwxfHx8fDE3NjE3MTcxMTh8MA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral",
];

/// All the text and tables a board is built from
///
/// [`Catalog::TRAVEL`] is what the app ships. Other catalogs exist so the
/// board can be exercised against reordered or broken tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catalog<'a> {
    pub title: &'a str,
    pub intro: &'a str,
    pub moods: &'a [&'a str],
    pub palette: &'a [ColorSwatch],
    pub headings_label: &'a str,
    pub heading_samples: &'a [TypeSample],
    pub headings_note: &'a str,
    pub body_label: &'a str,
    pub body_samples: &'a [TypeSample],
    pub body_note: &'a str,
    pub principles_title: &'a str,
    pub principles: &'a [DesignPrinciple],
}

impl Catalog<'static> {
    pub const TRAVEL: Catalog<'static> = Catalog {
        title: BOARD_TITLE,
        intro: BOARD_INTRO,
        moods: &MOODS,
        palette: &PALETTE,
        headings_label: HEADINGS_LABEL,
        heading_samples: &HEADING_SAMPLES,
        headings_note: HEADINGS_NOTE,
        body_label: BODY_LABEL,
        body_samples: &BODY_SAMPLES,
        body_note: BODY_NOTE,
        principles_title: PRINCIPLES_TITLE,
        principles: &PRINCIPLES,
    };
}

impl<'a> Catalog<'a> {
    /// Check that render keys are unique within their section.
    ///
    /// Moods are keyed by their text and swatches by their name, so a
    /// repeated entry would make two siblings share a key.
    pub fn validate(&self) -> BoardResult<()> {
        let mut seen = HashSet::new();
        for mood in self.moods {
            if !seen.insert(*mood) {
                return Err(BoardError::DuplicateKeyword((*mood).to_string()));
            }
        }

        let mut seen = HashSet::new();
        for swatch in self.palette {
            if !seen.insert(swatch.name) {
                return Err(BoardError::DuplicateSwatch(swatch.name.to_string()));
            }
        }

        Ok(())
    }
}

/// Validate the shipped catalog
pub fn validate() -> BoardResult<()> {
    Catalog::TRAVEL.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HexColor;

    #[test]
    fn test_shipped_catalog_is_valid() {
        validate().unwrap();
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(MOODS.len(), 8);
        assert_eq!(PALETTE.len(), 6);
        assert_eq!(HEADING_SAMPLES.len(), 3);
        assert_eq!(BODY_SAMPLES.len(), 3);
        assert_eq!(PRINCIPLES.len(), 3);
        assert_eq!(TRAVEL_IMAGES.len(), 6);
    }

    #[test]
    fn test_palette_hex_round_trips_through_display() {
        for swatch in &PALETTE {
            let shown = swatch.hex.to_string();
            assert_eq!(HexColor::parse(&shown).unwrap(), swatch.hex, "{}", swatch.name);
        }
        assert_eq!(PALETTE[0].hex.to_string(), "#0EA5E9");
        assert_eq!(PALETTE[3].hex.to_string(), "#D4A574");
    }

    #[test]
    fn test_heading_samples_are_headings() {
        let is_heading = |s: &TypeSample| {
            matches!(s.role, TypeRole::Heading1 | TypeRole::Heading2 | TypeRole::Heading3)
        };
        assert!(HEADING_SAMPLES.iter().all(is_heading));
        assert!(!BODY_SAMPLES.iter().any(is_heading));
    }

    #[test]
    fn test_duplicate_mood_is_rejected() {
        let moods = ["Adventure", "Freedom", "Adventure"];
        let catalog = Catalog {
            moods: &moods,
            ..Catalog::TRAVEL
        };
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, BoardError::DuplicateKeyword(ref k) if k == "Adventure"));
    }

    #[test]
    fn test_duplicate_swatch_is_rejected() {
        let palette = [PALETTE[0], PALETTE[1], PALETTE[0]];
        let catalog = Catalog {
            palette: &palette,
            ..Catalog::TRAVEL
        };
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, BoardError::DuplicateSwatch(ref n) if n == "Ocean Blue"));
    }

    #[test]
    fn test_images_are_https() {
        assert!(TRAVEL_IMAGES.iter().all(|url| url.starts_with("https://")));
    }
}

//! Property-based tests for board composition
//!
//! Uses proptest to check the gallery and section-independence guarantees
//! for arbitrary image lists.

use moodboard_core::catalog::{Catalog, MOODS, PALETTE, TRAVEL_IMAGES};
use moodboard_core::{Board, HexColor, ImageList, SectionKind};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Locator-ish strings, including empty and repeated ones
fn locator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "https://[a-z]{1,12}\\.com/[a-z0-9]{1,16}\\.jpg",
        1 => "[ -~]{0,40}",
        1 => Just("https://example.com/a.jpg".to_string()),
    ]
}

fn image_list_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(locator_strategy(), 0..max)
}

fn is_hex_code(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// N images in, N gallery cards out, same order, 1-based labels
    #[test]
    fn gallery_mirrors_input(locators in image_list_strategy(64)) {
        let board = Board::new(&ImageList::new(locators.clone()));
        let gallery = board.gallery();

        prop_assert_eq!(gallery.len(), locators.len());
        for (i, card) in gallery.iter().enumerate() {
            prop_assert_eq!(card.key, i);
            prop_assert_eq!(&card.src, &locators[i]);
            prop_assert_eq!(card.alt.clone(), format!("Travel inspiration {}", i + 1));
        }
    }

    /// Every non-gallery section ignores the image input
    #[test]
    fn static_sections_ignore_images(locators in image_list_strategy(32)) {
        let board = Board::new(&ImageList::new(locators));
        let reference = Board::new(&ImageList::default());

        prop_assert_eq!(board.sections(), SectionKind::ORDER);
        prop_assert_eq!(board.moods(), &MOODS[..]);
        prop_assert_eq!(board.palette(), reference.palette());
        prop_assert_eq!(board.typography(), reference.typography());
        prop_assert_eq!(board.principles(), reference.principles());
        prop_assert_eq!(board.title(), reference.title());
        prop_assert_eq!(board.intro(), reference.intro());
    }

    /// Swapping two swatches reorders only those two
    #[test]
    fn palette_swap_is_local(a in 0..6usize, b in 0..6usize) {
        let mut swapped = PALETTE;
        swapped.swap(a, b);
        let catalog = Catalog { palette: &swapped, ..Catalog::TRAVEL };

        let images = ImageList::new(TRAVEL_IMAGES);
        let original = Board::new(&images);
        let changed = Board::with_catalog(&images, catalog);

        for i in 0..6 {
            let expected = if i == a { b } else if i == b { a } else { i };
            prop_assert_eq!(changed.palette()[i], original.palette()[expected]);
        }
        prop_assert_eq!(changed.gallery(), original.gallery());
        prop_assert_eq!(changed.moods(), original.moods());
        prop_assert_eq!(changed.typography(), original.typography());
        prop_assert_eq!(changed.principles(), original.principles());
    }

    /// Displayed hex codes always parse back to the same color
    #[test]
    fn hex_display_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = HexColor::from_rgb(r, g, b);
        let shown = color.to_string();
        prop_assert!(is_hex_code(&shown));
        prop_assert_eq!(HexColor::parse(&shown).unwrap(), color);
    }
}

// ============================================================================
// Fixed Cases
// ============================================================================

#[test]
fn mood_tags_are_fixed() {
    let board = Board::new(&ImageList::default());
    assert_eq!(
        board.moods(),
        [
            "Adventure",
            "Exploration",
            "Freedom",
            "Discovery",
            "Wanderlust",
            "Serenity",
            "Cultural",
            "Authentic",
        ]
    );
}

#[test]
fn palette_has_six_well_formed_codes() {
    let board = Board::new(&ImageList::default());
    let codes: Vec<String> = board.palette().iter().map(|s| s.hex.to_string()).collect();

    assert_eq!(codes.len(), 6);
    assert!(codes.iter().all(|c| is_hex_code(c)), "{codes:?}");
    assert_eq!(
        codes,
        ["#0EA5E9", "#F97316", "#10B981", "#D4A574", "#1E3A8A", "#FB7185"]
    );
}

#[test]
fn empty_gallery_renders_without_error() {
    let board = Board::new(&ImageList::new(Vec::<String>::new()));
    assert!(board.gallery().is_empty());
    assert_eq!(board.sections().len(), 6);
}

#[test]
fn single_image_gallery() {
    let board = Board::new(&ImageList::new(["https://example.com/a.jpg"]));
    assert_eq!(board.gallery().len(), 1);
    assert_eq!(board.gallery()[0].alt, "Travel inspiration 1");
}

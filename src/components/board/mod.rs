//! Mood board sections
//!
//! [`MoodBoard`] turns an image list into a [`Board`] and lays out its six
//! sections top to bottom. Sections share no state and read nothing from
//! each other.

mod gallery;
mod intro;
mod moods;
mod palette;
mod principles;
mod typography;

use dioxus::prelude::*;
use moodboard_core::{Board, ImageList, SectionKind};
use moodboard_ui::{Badge, BadgeVariant, Icon};

pub use gallery::GallerySection;
pub use intro::IntroSection;
pub use moods::MoodTagsSection;
pub use palette::PaletteSection;
pub use principles::PrinciplesPanel;
pub use typography::TypographySection;

/// The whole mood board for a list of images
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MoodBoard { images: ImageList::new(["https://example.com/a.jpg"]) }
/// }
/// ```
#[component]
pub fn MoodBoard(images: ImageList) -> Element {
    let board = Board::new(&images);

    rsx! {
        div { class: "mood-board",
            for kind in board.sections() {
                {render_section(&board, kind)}
            }
        }
    }
}

fn render_section(board: &Board<'static>, kind: SectionKind) -> Element {
    match kind {
        SectionKind::Intro => rsx! {
            IntroSection { title: board.title(), intro: board.intro() }
        },
        SectionKind::MoodTags => rsx! {
            MoodTagsSection { moods: board.moods() }
        },
        SectionKind::Gallery => rsx! {
            GallerySection { cards: board.gallery().to_vec() }
        },
        SectionKind::Palette => rsx! {
            PaletteSection { swatches: board.palette() }
        },
        SectionKind::Typography => rsx! {
            TypographySection { cards: board.typography() }
        },
        SectionKind::Principles => rsx! {
            PrinciplesPanel {
                title: board.principles_title(),
                principles: board.principles(),
            }
        },
    }
}

/// Section wrapper with its badge header
#[component]
pub(crate) fn BadgedSection(kind: SectionKind, children: Element) -> Element {
    rsx! {
        section { id: kind.id(), class: "board-section",
            if let Some((label, glyph)) = kind.badge() {
                div { class: "board-section__header",
                    Badge { variant: BadgeVariant::Outline,
                        Icon { glyph: glyph }
                        "{label}"
                    }
                }
            }
            {children}
        }
    }
}

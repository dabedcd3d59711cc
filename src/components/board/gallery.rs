//! Image gallery grid
//!
//! Loading and fallback are left to [`ImageWithFallback`]; a broken image
//! never affects its neighbours.

use dioxus::prelude::*;
use moodboard_core::{GalleryCard, SectionKind};
use moodboard_ui::{Card, ImageWithFallback};

use super::BadgedSection;

/// Responsive 1/2/3-column grid, one card per image in input order
#[component]
pub fn GallerySection(cards: Vec<GalleryCard>) -> Element {
    rsx! {
        BadgedSection { kind: SectionKind::Gallery,
            div { class: "gallery",
                for card in cards.iter() {
                    div { key: "{card.key}", class: "gallery__cell",
                        Card { interactive: true, class: "gallery__card".to_string(),
                            div { class: "gallery__frame",
                                ImageWithFallback {
                                    src: card.src.clone(),
                                    alt: card.alt.clone(),
                                    class: "gallery__img".to_string(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

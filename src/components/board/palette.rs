//! Color palette swatches

use dioxus::prelude::*;
use moodboard_core::{ColorSwatch, SectionKind};
use moodboard_ui::Card;

use super::BadgedSection;

/// One swatch card per color, keyed by swatch name
#[component]
pub fn PaletteSection(swatches: &'static [ColorSwatch]) -> Element {
    rsx! {
        BadgedSection { kind: SectionKind::Palette,
            div { class: "palette",
                for swatch in swatches.iter() {
                    div { key: "{swatch.name}", class: "palette__cell",
                        Card { interactive: true, class: "swatch".to_string(),
                            div {
                                class: "swatch__block",
                                style: "background-color: {swatch.hex};",
                            }
                            div { class: "swatch__text",
                                p { class: "swatch__name", "{swatch.name}" }
                                p { class: "swatch__hex", "{swatch.hex}" }
                                p { class: "swatch__description", "{swatch.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

//! Typography sample cards

use dioxus::prelude::*;
use moodboard_core::{SectionKind, TypeCard, TypeRole, TypeSample};
use moodboard_ui::Card;

use super::BadgedSection;

/// Headings card and body-text card side by side
#[component]
pub fn TypographySection(cards: [TypeCard<'static>; 2]) -> Element {
    rsx! {
        BadgedSection { kind: SectionKind::Typography,
            div { class: "typography",
                for card in cards {
                    div { key: "{card.label}", class: "typography__cell",
                        Card { class: "type-card".to_string(),
                            p { class: "type-card__label", "{card.label}" }
                            for sample in card.samples.iter() {
                                div { class: "type-card__sample", {render_sample(sample)} }
                            }
                            p { class: "type-card__note", "{card.note}" }
                        }
                    }
                }
            }
        }
    }
}

fn render_sample(sample: &TypeSample) -> Element {
    let class = sample.role.class();
    let text = sample.text;
    match sample.role {
        TypeRole::Heading1 => rsx! { h1 { class: "{class}", "{text}" } },
        TypeRole::Heading2 => rsx! { h2 { class: "{class}", "{text}" } },
        TypeRole::Heading3 => rsx! { h3 { class: "{class}", "{text}" } },
        TypeRole::BodyPrimary | TypeRole::BodySecondary | TypeRole::Small => {
            rsx! { p { class: "{class}", "{text}" } }
        }
    }
}

use dioxus::prelude::*;
use moodboard_core::{DesignPrinciple, SectionKind};
use moodboard_ui::{Card, CardTone};

/// Highlighted panel with the three principles in a row
#[component]
pub fn PrinciplesPanel(title: &'static str, principles: &'static [DesignPrinciple]) -> Element {
    rsx! {
        section { id: SectionKind::Principles.id(), class: "board-section",
            Card { tone: CardTone::Highlight, class: "principles".to_string(),
                h3 { class: "principles__title", "{title}" }
                div { class: "principles__grid",
                    for principle in principles.iter() {
                        div { key: "{principle.title}", class: "principle",
                            h4 { class: "principle__title", "{principle.title}" }
                            p { class: "principle__text", "{principle.description}" }
                        }
                    }
                }
            }
        }
    }
}

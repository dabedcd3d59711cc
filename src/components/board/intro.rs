use dioxus::prelude::*;
use moodboard_core::SectionKind;

/// Hero heading and descriptive paragraph
#[component]
pub fn IntroSection(title: &'static str, intro: &'static str) -> Element {
    rsx! {
        header { id: SectionKind::Intro.id(), class: "board-intro",
            h1 { class: "board-intro__title", "{title}" }
            p { class: "board-intro__text", "{intro}" }
        }
    }
}

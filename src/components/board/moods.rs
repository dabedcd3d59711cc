//! Mood keyword tags

use dioxus::prelude::*;
use moodboard_core::SectionKind;

use super::BadgedSection;

/// One inline tag per keyword, keyed by the keyword itself
#[component]
pub fn MoodTagsSection(moods: &'static [&'static str]) -> Element {
    rsx! {
        BadgedSection { kind: SectionKind::MoodTags,
            div { class: "mood-tags",
                for mood in moods.iter() {
                    span { key: "{mood}", class: "mood-tag", "{mood}" }
                }
            }
        }
    }
}

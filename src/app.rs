use dioxus::prelude::*;

use crate::components::MoodBoard;
use crate::context::get_images;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Supplies the gallery images and the page container around the board.
#[component]
pub fn App() -> Element {
    let images = use_hook(get_images);

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page",
            main { class: "page__container",
                MoodBoard { images: images }
            }
        }
    }
}

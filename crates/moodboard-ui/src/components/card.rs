//! Card Primitive
//!
//! Rounded, bordered surface. Interactive cards lift their shadow on hover.

use dioxus::prelude::*;

use super::badge::join_classes;

/// Card surface treatment
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardTone {
    /// White surface, neutral border
    #[default]
    Plain,
    /// Sky gradient surface for callouts
    Highlight,
}

impl CardTone {
    pub fn class(&self) -> &'static str {
        match self {
            CardTone::Plain => "card",
            CardTone::Highlight => "card card--highlight",
        }
    }
}

/// Card container
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         interactive: true,
///         class: "swatch",
///         div { class: "swatch__block" }
///     }
/// }
/// ```
#[component]
pub fn Card(
    #[props(default)]
    tone: CardTone,
    /// Enable the hover shadow
    #[props(default = false)]
    interactive: bool,
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    let base = if interactive {
        format!("{} card--interactive", tone.class())
    } else {
        tone.class().to_string()
    };
    let full_class = join_classes(&base, class.as_deref());

    rsx! {
        div { class: "{full_class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_tone_classes() {
        assert_eq!(CardTone::Plain.class(), "card");
        assert_eq!(CardTone::Highlight.class(), "card card--highlight");
        assert_eq!(CardTone::default(), CardTone::Plain);
    }
}

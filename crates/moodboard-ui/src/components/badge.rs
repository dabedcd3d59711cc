//! Badge Component
//!
//! Small pill-shaped label used as a section header.

use dioxus::prelude::*;

/// Badge style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    /// Filled sky background
    #[default]
    Default,
    /// Neutral filled background
    Secondary,
    /// Transparent with a thin border
    Outline,
}

impl BadgeVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge--default",
            BadgeVariant::Secondary => "badge badge--secondary",
            BadgeVariant::Outline => "badge badge--outline",
        }
    }
}

/// Properties for the Badge component
#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    #[props(default)]
    pub variant: BadgeVariant,
    /// Badge content (icon and label)
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Inline label with an optional leading icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Badge {
///         variant: BadgeVariant::Outline,
///         Icon { glyph: SectionIcon::Palette }
///         "Mood & Theme"
///     }
/// }
/// ```
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        span { class: "{full_class}", {props.children} }
    }
}

/// Append optional extra classes to a base class list
pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.trim().is_empty() => format!("{} {}", base, extra.trim()),
        _ => base.to_string(),
    }
}

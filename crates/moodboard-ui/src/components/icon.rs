//! Section Icons
//!
//! Inline stroke icons on a 24x24 grid, drawn in the current text color.

use dioxus::prelude::*;
use moodboard_core::SectionIcon;

/// Properties for the Icon component
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub glyph: SectionIcon,
    /// Edge length in pixels (default: 16)
    #[props(default = 16)]
    pub size: u32,
}

/// Accessible name for a glyph, used as the SVG title
pub fn glyph_name(glyph: SectionIcon) -> &'static str {
    match glyph {
        SectionIcon::Palette => "palette",
        SectionIcon::Type => "type",
        SectionIcon::Image => "image",
    }
}

/// Renders a decorative icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { glyph: SectionIcon::Image, size: 16 }
/// }
/// ```
#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size;
    let name = glyph_name(props.glyph);

    rsx! {
        svg {
            class: "icon icon--{name}",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {match props.glyph {
                SectionIcon::Palette => rsx! {
                    circle { cx: "13.5", cy: "6.5", r: "0.5", fill: "currentColor" }
                    circle { cx: "17.5", cy: "10.5", r: "0.5", fill: "currentColor" }
                    circle { cx: "8.5", cy: "7.5", r: "0.5", fill: "currentColor" }
                    circle { cx: "6.5", cy: "12.5", r: "0.5", fill: "currentColor" }
                    path { d: "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.65-.75 1.65-1.69 0-.44-.18-.84-.44-1.13-.29-.29-.44-.65-.44-1.13a1.64 1.64 0 0 1 1.67-1.67h2c3.05 0 5.55-2.5 5.55-5.55C21.97 6.01 17.46 2 12 2z" }
                },
                SectionIcon::Type => rsx! {
                    polyline { points: "4 7 4 4 20 4 20 7" }
                    line { x1: "9", y1: "20", x2: "15", y2: "20" }
                    line { x1: "12", y1: "4", x2: "12", y2: "20" }
                },
                SectionIcon::Image => rsx! {
                    rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" }
                    circle { cx: "9", cy: "9", r: "2" }
                    path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }
                },
            }}
        }
    }
}

//! Image With Fallback
//!
//! Shows an image from any locator; if the webview fails to load it, a
//! fixed placeholder is swapped in. Failures stay local to the element.

use std::sync::OnceLock;

use base64::Engine;
use dioxus::prelude::*;

/// Neutral frame with a broken-image mark
const PLACEHOLDER_SVG: &str = r##"<svg width="88" height="88" xmlns="http://www.w3.org/2000/svg" stroke="#000" stroke-linejoin="round" opacity=".3" fill="none" stroke-width="3.7"><rect x="16" y="16" width="56" height="56" rx="6"/><path d="m16 58 16-18 32 32"/><circle cx="53" cy="35" r="7"/></svg>"##;

static PLACEHOLDER_URI: OnceLock<String> = OnceLock::new();

/// Data URI of the placeholder image, encoded once
pub fn placeholder_src() -> &'static str {
    PLACEHOLDER_URI.get_or_init(|| {
        let encoded = base64::engine::general_purpose::STANDARD.encode(PLACEHOLDER_SVG);
        format!("data:image/svg+xml;base64,{}", encoded)
    })
}

/// Image element that falls back to a placeholder on load error
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ImageWithFallback {
///         src: "https://example.com/a.jpg".to_string(),
///         alt: "Travel inspiration 1".to_string(),
///         class: "gallery__img".to_string(),
///     }
/// }
/// ```
#[component]
pub fn ImageWithFallback(
    /// URL, data URI or asset path
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    // Remember which locator failed so a new `src` gets a fresh attempt
    let mut failed_src = use_signal(|| Option::<String>::None);
    let css_class = class.unwrap_or_default();

    if failed_src.read().as_deref() == Some(src.as_str()) {
        return rsx! {
            div {
                class: "image-fallback {css_class}",
                div { class: "image-fallback__frame",
                    img {
                        src: placeholder_src(),
                        alt: "Error loading image",
                        "data-original-url": "{src}",
                    }
                }
            }
        };
    }

    let failing_src = src.clone();

    rsx! {
        img {
            class: "{css_class}",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| {
                tracing::warn!(src = %failing_src, "Image failed to load, using placeholder");
                failed_src.set(Some(failing_src.clone()));
            },
        }
    }
}

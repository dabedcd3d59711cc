//! Reusable UI components
//!
//! Class names map onto the rules in the app's global stylesheet.

mod badge;
mod card;
mod icon;
mod image_with_fallback;

pub use badge::*;
pub use card::*;
pub use icon::*;
pub use image_with_fallback::*;

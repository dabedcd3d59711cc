//! Travel Mood Board UI Components
//!
//! Presentational Dioxus primitives the board is composed from. None of
//! them hold application state; the image widget keeps only its own
//! loaded/failed flag.
//!
//! ## Palette
//!
//! - **Sky (#0ea5e9 family)**: tags, highlighted panels, accents
//! - **Neutral (#fafafa to #171717)**: page background, body text, borders

pub mod components;

pub use components::*;

//! Core types for the mood board
//!
//! Everything here is an immutable value. Nothing is created or mutated
//! after the board is built.

mod color;
mod image;
mod text;

pub use color::{ColorSwatch, HexColor};
pub use image::{ImageList, ImageReference};
pub use text::{DesignPrinciple, TypeRole, TypeSample};

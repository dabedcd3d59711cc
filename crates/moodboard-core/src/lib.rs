//! Travel Mood Board Core Library
//!
//! Content catalog and view model for a static travel mood board: a hero
//! heading, mood keyword tags, an image gallery, a color palette, typography
//! samples and a design-principles panel.
//!
//! ## Quick Start
//!
//! ```
//! use moodboard_core::{Board, ImageList};
//!
//! let board = Board::new(&ImageList::new(["https://example.com/a.jpg"]));
//!
//! assert_eq!(board.gallery()[0].alt, "Travel inspiration 1");
//! assert_eq!(board.moods().len(), 8);
//! assert_eq!(board.palette().len(), 6);
//! ```

pub mod board;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod types;

// Re-exports
pub use board::{Board, GalleryCard, SectionIcon, SectionKind, TypeCard};
pub use catalog::Catalog;
pub use error::{BoardError, BoardResult};
pub use manifest::ImageManifest;
pub use types::*;

//! Visual theme for the mood board.

mod styles;

pub use styles::GLOBAL_STYLES;

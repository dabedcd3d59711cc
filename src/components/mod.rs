//! UI Components for the Travel Mood Board.

pub mod board;

pub use board::MoodBoard;

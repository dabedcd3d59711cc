//! Image manifest loading from disk

use std::fs;

use moodboard_core::{Board, BoardError, ImageManifest};
use tempfile::TempDir;

fn write_manifest(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("images.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_manifest_into_board() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        r#"{ "images": ["https://example.com/a.jpg", "https://example.com/b.jpg"] }"#,
    );

    let images = ImageManifest::load(&path).unwrap().into_images();
    let board = Board::new(&images);

    assert_eq!(board.gallery().len(), 2);
    assert_eq!(board.gallery()[1].src, "https://example.com/b.jpg");
    assert_eq!(board.gallery()[1].alt, "Travel inspiration 2");
}

#[test]
fn test_load_malformed_manifest() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, r#"{ "images": ["a.jpg", 42] }"#);

    let err = ImageManifest::load(&path).unwrap_err();
    assert!(matches!(err, BoardError::Manifest(_)));
}

#[test]
fn test_load_empty_manifest() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(&dir, r#"{ "images": [] }"#);

    let board = Board::new(&ImageManifest::load(&path).unwrap().into_images());
    assert!(board.gallery().is_empty());
}

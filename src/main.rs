#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use moodboard_core::{catalog, ImageManifest};

/// Travel Mood Board - visual direction for a travel app
#[derive(Parser, Debug)]
#[command(name = "moodboard-desktop")]
#[command(about = "Travel Mood Board - palette, imagery and typography in one window")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON manifest replacing the built-in gallery: {"images": [...]}
    #[arg(long)]
    images: Option<PathBuf>,

    /// Window title
    #[arg(long, default_value = catalog::BOARD_TITLE)]
    title: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    moodboard_core::logging::init(args.verbose);

    if let Err(e) = catalog::validate() {
        tracing::warn!("Catalog check failed: {}", e);
    }

    let manifest = match &args.images {
        Some(path) => ImageManifest::load(path)
            .with_context(|| format!("Failed to load image manifest {}", path.display()))?,
        None => ImageManifest::default(),
    };
    let images = manifest.into_images();

    tracing::info!(
        "Starting '{}' with {} gallery images (manifest: {:?})",
        args.title,
        images.len(),
        args.images
    );

    context::set_images(images);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults() {
        let args = Args::try_parse_from(["moodboard-desktop"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert_eq!(args.title, "Travel App Mood Board");
        assert!(args.images.is_none());
        assert_eq!(args.width, 1200.0);
        assert_eq!(args.height, 900.0);
    }

    #[test]
    fn args_overrides() {
        let args = Args::try_parse_from([
            "moodboard-desktop",
            "-vv",
            "--images",
            "gallery.json",
            "--title",
            "Board",
            "--width",
            "800",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.images, Some(PathBuf::from("gallery.json")));
        assert_eq!(args.title, "Board");
        assert_eq!(args.width, 800.0);
    }
}

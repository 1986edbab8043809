#![allow(non_snake_case)]

mod app;
mod context;
mod export;
mod theme;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Learning Cards - feature highlights for the study platform
#[derive(Parser, Debug)]
#[command(name = "learning-cards-desktop")]
#[command(about = "Learning Cards - AI study feature highlights")]
struct Args {
    /// JSON string catalog merged over the built-in text
    #[arg(short, long)]
    strings: Option<PathBuf>,

    /// Write the section as a standalone HTML page and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let catalog = context::load_catalog(args.strings.as_deref())?;
    context::init_card_theme(catalog);

    if let Some(path) = args.export {
        let html = export::render_document(&context::card_theme());
        std::fs::write(&path, html)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("Exported learning cards to {}", path.display());
        return Ok(());
    }

    tracing::info!("Starting window at {}x{}", args.width, args.height);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Learning Cards")
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
    fn args_default_window_size() {
        let args = Args::try_parse_from(["learning-cards-desktop"]).unwrap();
        assert_eq!(args.width, 1280.0);
        assert_eq!(args.height, 900.0);
        assert!(args.strings.is_none());
        assert!(args.export.is_none());
    }

    #[test]
    fn args_accept_paths() {
        let args = Args::try_parse_from([
            "learning-cards-desktop",
            "--strings",
            "nl.json",
            "-e",
            "out.html",
        ])
        .unwrap();
        assert_eq!(args.strings, Some(PathBuf::from("nl.json")));
        assert_eq!(args.export, Some(PathBuf::from("out.html")));
    }
}

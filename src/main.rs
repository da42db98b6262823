#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_content::{Page, SiteContent};

/// Personal portfolio - single-window view switcher
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio desktop app")]
struct Args {
    /// Replace the built-in content table with a TOML file
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Panel to show on launch (main, experience, hobbies, gallery);
    /// unknown names fall back to the profile panel
    #[arg(short, long)]
    page: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let content = match &args.content {
        Some(path) => {
            tracing::info!("Loading content table from {:?}", path);
            SiteContent::load(path)?
        }
        None => SiteContent::builtin()?,
    };
    tracing::info!(
        experiences = content.experiences.len(),
        profiles = content.profiles.len(),
        "Content table loaded"
    );

    let initial_page = args
        .page
        .as_deref()
        .map(Page::from_name)
        .unwrap_or_default();

    context::init(content, initial_page);

    // Narrow column layout, like a resume page
    let window_width = 900.0;
    let window_height = 820.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

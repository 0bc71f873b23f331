#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod export;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::context::{init_settings, Settings};

/// Studio Form - Melbourne architecture studio site
#[derive(Parser, Debug)]
#[command(name = "studioform-desktop")]
#[command(about = "Studio Form - single-page architecture studio site")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Show section headers immediately and skip hover springs
    #[arg(long)]
    reduce_motion: bool,

    /// Write the page as static HTML to this path and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(path) = args.export {
        return export::export_to(&path);
    }

    init_settings(Settings {
        reduce_motion: args.reduce_motion,
    });

    tracing::info!(
        "Starting Studio Form ({}x{}, reduce motion: {})",
        args.width,
        args.height,
        args.reduce_motion
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Studio Form")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

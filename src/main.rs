use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod icon_render;

#[derive(Debug, Parser)]
#[clap(
    name = "focus-iconset",
    about = "Render the Focus app icon into a macOS iconset directory"
)]
struct Args {
    /// Output iconset directory.
    #[clap(short, long, value_name = "DIR", default_value = "Focus.iconset")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_render::render_all(&icon_render::ICON_SIZES, &args.output)
}

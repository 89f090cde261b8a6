use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use hearth::infra::config::Config;
use hearth::ui::app::UiApp;

#[derive(Parser)]
#[command(
    name = "hearth",
    version,
    about = "Terminal client for the Hearth property marketplace",
    long_about = None
)]
struct Cli {
    /// Use an explicit config file instead of the layered lookup.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the backend project URL.
    #[arg(long)]
    backend_url: Option<String>,
}

fn main() -> Result<()> {
    hearth::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_at(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.backend_url {
        config.backend.url = url;
    }

    let mut app = UiApp::new(config);
    app.run()
}

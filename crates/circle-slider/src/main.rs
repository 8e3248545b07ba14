use circle_slider::gui::app::AppModel;
use circle_slider::gui::theme::SliderColors;
use circle_slider::sys::runtime;
use clap::Parser;
use relm4::prelude::*;
use slider_core::CircleSlider;
use slider_core::config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "circle-slider", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write the default config (unless one exists), print its path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if cli.write_default_config {
        config::write_default_config(&config_path)?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);
    let slider = CircleSlider::new(config.geometry()?);
    let colors = SliderColors::from(&config.colors);

    let (tx, rx) = async_channel::bounded(32);
    runtime::start_background_services(tx, config_path.clone());

    // clap already consumed argv; keep GTK from parsing it again
    let app = RelmApp::new("org.circleslider.CircleSlider").with_args(Vec::new());
    app.run::<AppModel>((slider, colors, config_path, rx));

    Ok(())
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;

use skycast_core::{Config, WeatherApiProvider, WeatherWidget};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com credential.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, free-form (e.g. "London" or "New York").
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    let path = Config::config_file_path()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

async fn show(city: String) -> anyhow::Result<()> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?;

    let provider = WeatherApiProvider::new(api_key.to_owned());
    let mut widget = WeatherWidget::new(Box::new(provider));

    widget.set_location(city);
    widget.search().await;

    output::render(&widget);

    Ok(())
}

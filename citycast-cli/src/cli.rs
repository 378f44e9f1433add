use std::sync::Arc;

use anyhow::Context;
use citycast_core::{
    ClickTarget, Config, DisplayState, IconStyle, MemoryView, OpenWeatherClient, WeatherForm,
    WeatherView,
    view::lock,
};
use clap::{Parser, Subcommand};
use inquire::{Password, Select};
use tracing::debug;

use crate::render::render_card;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "citycast", version, about = "Current weather for any city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and display preferences.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, optionally followed by a country code ("Paris, FR").
        city: String,

        /// Icon style: "emoji" or "image".
        #[arg(long)]
        icons: Option<String>,
    },

    /// Look up matching places, pick one, then show its weather.
    Search {
        /// Partial city name, at least two characters.
        query: String,

        /// Icon style: "emoji" or "image".
        #[arg(long)]
        icons: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, icons } => {
                let mut form = build_form(icons.as_deref())?;
                lock(form.view()).set_input(&city);
                finish(&mut form).await
            }
            Command::Search { query, icons } => {
                let mut form = build_form(icons.as_deref())?;
                form.input_changed(&query);
                form.settle_suggestions().await;

                let candidates = form.suggestions();
                if candidates.is_empty() {
                    println!("No places match '{}'.", query.trim());
                    return Ok(());
                }

                let labels: Vec<String> = candidates.iter().map(|c| c.label()).collect();
                let choice = Select::new("Pick a location:", labels)
                    .raw_prompt()
                    .context("No location selected")?;

                form.click(ClickTarget::Suggestion(choice.index));
                finish(&mut form).await
            }
        }
    }
}

fn build_form(icons: Option<&str>) -> anyhow::Result<WeatherForm<MemoryView>> {
    let mut config = Config::load()?;
    if let Some(style) = icons {
        config.icon_style = IconStyle::try_from(style)?;
    }
    debug!(icon_style = %config.icon_style, base_url = config.base_url(), "configuration loaded");

    let api = Arc::new(OpenWeatherClient::from_config(&config)?);
    Ok(WeatherForm::new(MemoryView::default(), api, &config))
}

async fn finish(form: &mut WeatherForm<MemoryView>) -> anyhow::Result<()> {
    let state = form.submit().await.clone();
    println!("{}", render_card(&lock(form.view())));

    if let DisplayState::Result(reading) = state {
        if let Some(at) = reading.observed_at {
            let local = at.with_timezone(&chrono::Local);
            println!("Observed: {}", local.format("%Y-%m-%d %H:%M"));
        }
    }
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("API key prompt aborted")?;
    let api_key = api_key.trim();
    if !api_key.is_empty() {
        config.api_key = Some(api_key.to_string());
    }

    let styles = IconStyle::all().to_vec();
    let start = styles.iter().position(|s| *s == config.icon_style).unwrap_or_default();
    config.icon_style = Select::new("Icon style:", styles)
        .with_starting_cursor(start)
        .prompt()
        .context("Icon style prompt aborted")?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

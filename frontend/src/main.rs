use anyhow::Context;
use rsp_common::config::GameConfig;

mod logging;
mod table;

const CONFIG: &str = include_str!("../config.json");

fn load_config() -> anyhow::Result<GameConfig> {
    GameConfig::from_json(CONFIG).context("Failed to load embedded config.json")
}

fn main() {
    let config = load_config().unwrap_or_else(|err| {
        gloo::console::error!(format!("{:#}. Using default config", err));
        GameConfig::default()
    });
    if let Err(err) = logging::init(&config) {
        gloo::console::error!(format!("{:#}", err));
    }
    tracing::info!("Starting with log level {}", config.log_level);

    yew::Renderer::<table::Table>::with_props(table::TableProps {
        labels: config.labels,
    })
    .render();
}

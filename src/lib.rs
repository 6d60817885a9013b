pub mod config;
pub mod converter;
pub mod currency;
pub mod document;
pub mod log;
pub mod providers;
pub mod rate_provider;
pub mod store;
pub mod ui;

use anyhow::Result;
use tracing::{debug, info};

use crate::converter::CurrencyConverter;
use crate::document::Document;
use crate::providers::exchange_rate_api::ExchangeRateApiProvider;
use crate::store::PreferenceStore;

pub enum AppCommand {
    Show,
    Set(String),
    Toggle,
    Rate,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency toggle starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let base_url = config
        .providers
        .exchange_rate
        .as_ref()
        .map_or("https://api.exchangerate-api.com", |p| &p.base_url);
    let provider = ExchangeRateApiProvider::new(base_url);

    let store = PreferenceStore::open(&config.data_path()?)?;
    let mut documents: Vec<Document> = config.documents.iter().map(Document::from_config).collect();

    // Fetch the rate before applying the preference so the first render
    // already uses the live multiplier.
    let mut converter = CurrencyConverter::new(store);
    converter.fetch_exchange_rate(&provider).await;
    converter.apply_currency_preference(&mut documents);

    match command {
        AppCommand::Show => {}
        AppCommand::Set(code) => converter.set_currency(&code, &mut documents),
        AppCommand::Toggle => converter.toggle(&mut documents),
        AppCommand::Rate => {
            println!(
                "{}",
                ui::rate_line(converter.exchange_rate(), converter.rate_source())
            );
            return Ok(());
        }
    }

    println!("{}", ui::toggle_bar(converter.controls()));
    println!(
        "{}",
        ui::rate_line(converter.exchange_rate(), converter.rate_source())
    );
    for document in &documents {
        println!("\n{}", document.display_as_text());
    }

    Ok(())
}

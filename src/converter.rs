use tracing::{info, warn};

use crate::currency::Currency;
use crate::document::Document;
use crate::rate_provider::ExchangeRateProvider;
use crate::store::PreferenceStore;

/// Rate substituted when the live fetch fails.
pub const FALLBACK_RATE: f64 = 0.052;

/// Neutral multiplier before any fetch has completed.
const DEFAULT_RATE: f64 = 1.0;

/// Where the current ZAR→USD rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    Default,
    Live,
    Fallback,
}

/// One of the two currency toggle controls. Exactly one is active at any
/// time, matching the persisted preference.
#[derive(Debug, Clone)]
pub struct ToggleControl {
    pub currency: Currency,
    pub label: String,
    pub active: bool,
}

/// Toggles a set of documents between ZAR and USD display.
///
/// Holds the active preference and the ZAR→USD rate; every re-render
/// recomputes displayed text from each node's static ZAR source, so repeated
/// toggling never accumulates drift.
pub struct CurrencyConverter {
    currency: Currency,
    rate: f64,
    rate_source: RateSource,
    controls: Vec<ToggleControl>,
    store: PreferenceStore,
}

impl CurrencyConverter {
    pub fn new(store: PreferenceStore) -> Self {
        let currency = store.currency();
        let controls = vec![
            ToggleControl {
                currency: Currency::Zar,
                label: "R - Rand".to_string(),
                active: false,
            },
            ToggleControl {
                currency: Currency::Usd,
                label: "$ - USD".to_string(),
                active: false,
            },
        ];

        let mut converter = CurrencyConverter {
            currency,
            rate: DEFAULT_RATE,
            rate_source: RateSource::Default,
            controls,
            store,
        };
        converter.update_controls();
        converter
    }

    /// Single best-effort fetch of the ZAR→USD rate. Failures substitute the
    /// fallback rate and are logged, never surfaced; there is no retry.
    pub async fn fetch_exchange_rate(&mut self, provider: &dyn ExchangeRateProvider) {
        match provider.get_rate("ZAR", "USD").await {
            Ok(rate) => {
                info!("Exchange rate (ZAR/USD): 1 ZAR = {rate:.4} USD");
                self.rate = rate;
                self.rate_source = RateSource::Live;
            }
            Err(e) => {
                warn!("Could not fetch exchange rate: {e}");
                self.rate = FALLBACK_RATE;
                self.rate_source = RateSource::Fallback;
            }
        }
    }

    /// Re-reads the persisted preference, refreshes the toggle controls and
    /// re-renders every tagged value.
    pub fn apply_currency_preference(&mut self, documents: &mut [Document]) {
        self.currency = self.store.currency();
        self.update_controls();
        self.convert_all_values(documents);
    }

    /// Sets the display currency. Unknown codes are ignored with a warning;
    /// nothing changes and no error reaches the caller.
    pub fn set_currency(&mut self, code: &str, documents: &mut [Document]) {
        let Some(currency) = Currency::from_code(code) else {
            warn!("Invalid currency: {code}");
            return;
        };

        self.currency = currency;
        self.store.set_currency(currency);
        self.update_controls();
        self.convert_all_values(documents);
    }

    /// Switches to the other currency.
    pub fn toggle(&mut self, documents: &mut [Document]) {
        self.set_currency(self.currency.other().code(), documents);
    }

    /// Rewrites the displayed text of every tagged node in every document.
    pub fn convert_all_values(&self, documents: &mut [Document]) {
        for document in documents.iter_mut() {
            document.render(self.currency, self.rate);
        }
    }

    /// Converts a single ZAR amount into the active display currency without
    /// touching any document.
    pub fn convert_value(&self, zar_amount: f64) -> f64 {
        match self.currency {
            Currency::Usd => zar_amount * self.rate,
            Currency::Zar => zar_amount,
        }
    }

    pub fn current_currency(&self) -> Currency {
        self.currency
    }

    pub fn exchange_rate(&self) -> f64 {
        self.rate
    }

    pub fn rate_source(&self) -> RateSource {
        self.rate_source
    }

    pub fn controls(&self) -> &[ToggleControl] {
        &self.controls
    }

    fn update_controls(&mut self) {
        for control in &mut self.controls {
            control.active = control.currency == self.currency;
        }
    }
}

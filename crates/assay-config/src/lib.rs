use std::path::PathBuf;

use assay_core::{
    instrument::Instrument,
    pricing::{LiveQuote, PricePoint},
};
use assay_primitives::{Currency, CurrencyCode};
use clap::Parser;

/// Startup configuration for `assay-cli`.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Interactive price history for one instrument")]
pub struct AppConfig {
    /// Name of the instrument whose prices are maintained.
    #[arg(long, env = "ASSAY_INSTRUMENT", default_value = "Unnamed")]
    pub instrument: String,

    /// Seed a historical price, as DATE=PRICE (e.g. 2020-01-02=100.5).
    /// May be repeated.
    #[arg(long = "price", value_name = "DATE=PRICE")]
    pub prices: Vec<PricePoint>,

    /// Seed the live quote, as DATE=PRICE.
    #[arg(long, value_name = "DATE=PRICE")]
    pub live: Option<PricePoint>,

    /// Currency positions are valued in (ISO code, e.g. EUR, JPY).
    #[arg(long, env = "ASSAY_CURRENCY", default_value = "EUR")]
    pub currency: CurrencyCode,

    /// File the REPL history is loaded from and saved to.
    #[arg(long, env = "ASSAY_HISTORY", default_value = ".assay_history")]
    pub history_file: PathBuf,

    /// Enable verbose logging output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Load configuration from CLI args and environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    /// The configured instrument, seeded with the configured prices.
    /// Later `--price` values for the same date win.
    pub fn instrument(&self) -> Instrument {
        let mut instrument = Instrument::new(self.instrument.as_str());
        for point in &self.prices {
            instrument.add_price(*point);
        }
        instrument.set_latest(self.live.map(LiveQuote::from));
        instrument
    }

    /// Valuation currency, with its minor-unit precision.
    pub fn currency(&self) -> Currency {
        Currency::from_code(self.currency)
    }

    /// Default log filter when `RUST_LOG` is unset or invalid.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "assay_cli=debug,assay_core=debug"
        } else {
            "assay_cli=info,assay_core=info"
        }
    }
}

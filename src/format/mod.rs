//! Currency and date formatting shared by every report surface

pub mod currency;
pub mod date;

pub use currency::CurrencyFormatter;
pub use date::{DateFormatter, NOT_SET, NO_DATE};

use crate::config::Settings;

/// The pair of formatters a report needs
#[derive(Debug, Clone, Default)]
pub struct Formatters {
    pub currency: CurrencyFormatter,
    pub dates: DateFormatter,
}

impl Formatters {
    /// Build formatters for a budget currency using configured date patterns
    pub fn new(currency_code: &str, settings: &Settings) -> Self {
        Self {
            currency: CurrencyFormatter::new(currency_code),
            dates: DateFormatter::new(&settings.date_format, &settings.timestamp_format),
        }
    }
}

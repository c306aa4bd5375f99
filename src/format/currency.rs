//! Currency formatting
//!
//! Renders amounts the way an en-US locale displays them: symbol first,
//! comma thousands separators, and the currency's usual number of decimal
//! places (`$1,234.50`, `€980.00`, `¥12,500`). Unknown codes fall back to
//! `XYZ 1,234.50`.

use crate::models::Money;

/// Formats money for one currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    code: String,
    symbol: Option<&'static str>,
    decimals: u32,
}

impl CurrencyFormatter {
    /// Create a formatter for an ISO 4217 code (case-insensitive)
    pub fn new(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        let code = if code.is_empty() { "USD".to_string() } else { code };
        let symbol = symbol_for(&code);
        let decimals = decimals_for(&code);
        Self {
            code,
            symbol,
            decimals,
        }
    }

    /// The normalized currency code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Format an amount
    pub fn format(&self, amount: Money) -> String {
        let negative = amount.is_negative();
        let cents = amount.cents().unsigned_abs();

        let number = if self.decimals == 0 {
            // Round half up to whole units
            group_thousands((cents + 50) / 100)
        } else {
            format!("{}.{:02}", group_thousands(cents / 100), cents % 100)
        };

        let sign = if negative { "-" } else { "" };
        match self.symbol {
            Some(symbol) => format!("{}{}{}", sign, symbol, number),
            None => format!("{}{} {}", sign, self.code, number),
        }
    }

    /// Format a major-unit value (chart axis labels)
    pub fn format_major(&self, value: f64) -> String {
        self.format(Money::from_major(value))
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("USD")
    }
}

fn symbol_for(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "KRW" => "₩",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "MXN" => "MX$",
        "BRL" => "R$",
        "CHF" => "CHF ",
        "THB" => "฿",
        "ILS" => "₪",
        "VND" => "₫",
        _ => return None,
    };
    Some(symbol)
}

fn decimals_for(code: &str) -> u32 {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        _ => 2,
    }
}

/// Insert comma separators every three digits
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

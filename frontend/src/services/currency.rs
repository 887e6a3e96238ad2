//! Currency display settings.
//!
//! A single [`CurrencyFormat`] is chosen at startup and handed to components
//! through a Yew context. Nothing mutates it afterwards.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    Before,
    After,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    pub code: &'static str,
    pub symbol: &'static str,
    pub decimals: usize,
    pub placement: SymbolPlacement,
    pub grouping: char,
    pub decimal_point: char,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported currency code '{}'", self.0)
    }
}

impl std::error::Error for UnknownCurrency {}

const fn before(code: &'static str, symbol: &'static str, decimals: usize) -> CurrencyFormat {
    CurrencyFormat {
        code,
        symbol,
        decimals,
        placement: SymbolPlacement::Before,
        grouping: ',',
        decimal_point: '.',
    }
}

const fn after(code: &'static str, symbol: &'static str) -> CurrencyFormat {
    CurrencyFormat {
        code,
        symbol,
        decimals: 2,
        placement: SymbolPlacement::After,
        grouping: '.',
        decimal_point: ',',
    }
}

const SUPPORTED: &[CurrencyFormat] = &[
    before("USD", "$", 2),
    before("CAD", "CA$", 2),
    before("GBP", "£", 2),
    before("JPY", "¥", 0),
    before("CHF", "CHF ", 2),
    after("EUR", "€"),
    after("SEK", "kr"),
];

impl CurrencyFormat {
    pub fn from_code(code: &str) -> Result<Self, UnknownCurrency> {
        let wanted = code.trim();
        SUPPORTED
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| UnknownCurrency(wanted.to_string()))
    }

    /// `1234.5` -> `$1,234.50`, `-12` -> `-12,00 €`
    pub fn format(&self, amount: f64) -> String {
        let negative = amount < 0.0;
        let fixed = format!("{:.*}", self.decimals, amount.abs());
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut number = group_digits(whole, self.grouping);
        if let Some(fraction) = fraction {
            number.push(self.decimal_point);
            number.push_str(fraction);
        }

        // Rounding can turn a tiny negative into zero; never print "-0.00"
        let sign = if negative && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };

        match self.placement {
            SymbolPlacement::Before => format!("{}{}{}", sign, self.symbol, number),
            SymbolPlacement::After => format!("{}{} {}", sign, number, self.symbol),
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        before("USD", "$", 2)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

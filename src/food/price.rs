// SPDX-License-Identifier: MPL-2.0
//! Currency formatting for prices shown on every screen.
//!
//! Prices arrive from the backend as plain numbers; they are rounded to
//! cents and rendered with the separators and symbol placement of the
//! configured currency (`R$ 1.234,50`, `$1,234.50`, `1.234,50 €`).

use serde::{Deserialize, Serialize};

const NBSP: char = '\u{a0}';

/// Currencies the client knows how to format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Brazilian real, `pt-BR` conventions.
    #[default]
    Brl,
    /// US dollar, `en-US` conventions.
    Usd,
    /// Euro, continental conventions with a trailing symbol.
    Eur,
}

impl Currency {
    fn symbol(self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Currency::Brl | Currency::Eur => ',',
            Currency::Usd => '.',
        }
    }

    fn group_separator(self) -> char {
        match self {
            Currency::Brl | Currency::Eur => '.',
            Currency::Usd => ',',
        }
    }

    /// Formats `value` as a price in this currency.
    ///
    /// Non-finite values are rendered as zero.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let cents = (value.abs() * 100.0).round() as u64;
        let negative = value < 0.0 && cents > 0;

        let amount = format!(
            "{}{}{:02}",
            group_digits(cents / 100, self.group_separator()),
            self.decimal_separator(),
            cents % 100
        );

        let body = match self {
            Currency::Brl => format!("{}{NBSP}{amount}", self.symbol()),
            Currency::Usd => format!("{}{amount}", self.symbol()),
            Currency::Eur => format!("{amount}{NBSP}{}", self.symbol()),
        };

        if negative {
            format!("-{body}")
        } else {
            body
        }
    }
}

fn group_digits(mut integer: u64, separator: char) -> String {
    if integer == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while integer > 0 {
        groups.push(integer % 1000);
        integer /= 1000;
    }
    let mut out = String::new();
    for (index, group) in groups.iter().rev().enumerate() {
        if index == 0 {
            out.push_str(&group.to_string());
        } else {
            out.push(separator);
            out.push_str(&format!("{group:03}"));
        }
    }
    out
}

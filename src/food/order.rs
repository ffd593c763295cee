// SPDX-License-Identifier: MPL-2.0
//! Order composition on the details screen: extra counters, food quantity
//! and the resulting total.

use super::model::{Extra, ExtraId};
use super::price::Currency;

/// The smallest number of portions an order can hold.
pub const MIN_FOOD_QUANTITY: u32 = 1;

/// Local, never persisted, order being composed for one food.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    unit_price: f64,
    quantity: u32,
    extras: Vec<Extra>,
}

impl Default for Order {
    fn default() -> Self {
        Self::new(0.0, Vec::new())
    }
}

impl Order {
    /// Starts an order of one portion with every extra at zero.
    pub fn new(unit_price: f64, extras: Vec<Extra>) -> Self {
        Self {
            unit_price,
            quantity: MIN_FOOD_QUANTITY,
            extras: extras
                .into_iter()
                .map(|extra| Extra {
                    quantity: 0,
                    ..extra
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    /// Returns `false` when no extra has this id.
    pub fn increment_extra(&mut self, id: ExtraId) -> bool {
        match self.extras.iter_mut().find(|extra| extra.id == id) {
            Some(extra) => {
                extra.quantity = extra.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Returns `false` when the extra is unknown or already at zero.
    pub fn decrement_extra(&mut self, id: ExtraId) -> bool {
        match self.extras.iter_mut().find(|extra| extra.id == id) {
            Some(extra) if extra.quantity > 0 => {
                extra.quantity -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn increment_food(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Returns `false` when the order is already at one portion.
    pub fn decrement_food(&mut self) -> bool {
        if self.quantity <= MIN_FOOD_QUANTITY {
            return false;
        }
        self.quantity -= 1;
        true
    }

    /// `(Σ extra.value × extra.quantity + unit price) × quantity`
    #[must_use]
    pub fn total(&self) -> f64 {
        let extras_total: f64 = self
            .extras
            .iter()
            .map(|extra| extra.value * f64::from(extra.quantity))
            .sum();
        (extras_total + self.unit_price) * f64::from(self.quantity)
    }

    #[must_use]
    pub fn formatted_total(&self, currency: Currency) -> String {
        currency.format(self.total())
    }
}

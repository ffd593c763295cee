// SPDX-License-Identifier: MPL-2.0
//! Display records built from API responses.
//!
//! Each record carries its formatted price, computed once when the response
//! is mapped and never re-derived afterwards.

use super::price::Currency;
use crate::api::models::{CategoryRecord, ExtraRecord, FoodDetailsRecord, FoodRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Identifier of a food, also used as the navigation parameter of the
    /// details screen.
    FoodId
);
id_newtype!(
    /// Identifier of a category.
    CategoryId
);
id_newtype!(
    /// Identifier of an extra, unique within its food.
    ExtraId
);

/// A food as listed on the dashboard and favorites screens.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub thumbnail_url: String,
    pub formatted_price: String,
}

impl Food {
    pub fn from_record(record: FoodRecord, currency: Currency) -> Self {
        Self {
            formatted_price: currency.format(record.price),
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            thumbnail_url: record.thumbnail_url,
        }
    }
}

/// Maps a list response, keeping the backend order.
pub fn foods_from_records(records: Vec<FoodRecord>, currency: Currency) -> Vec<Food> {
    records
        .into_iter()
        .map(|record| Food::from_record(record, currency))
        .collect()
}

/// A dashboard filter category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub image_url: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            image_url: record.image_url,
        }
    }
}

/// An optional add-on with a client-side quantity counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Extra {
    pub id: ExtraId,
    pub name: String,
    pub value: f64,
    pub quantity: u32,
}

impl From<ExtraRecord> for Extra {
    fn from(record: ExtraRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            value: record.value,
            quantity: 0,
        }
    }
}

/// The food shown on the details screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodDetails {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub formatted_price: String,
}

impl FoodDetails {
    /// Splits a details payload into the food and its extras, every extra
    /// starting at quantity zero.
    pub fn from_record(record: FoodDetailsRecord, currency: Currency) -> (Self, Vec<Extra>) {
        let extras = record.extras.into_iter().map(Extra::from).collect();
        let image_url = if record.image_url.is_empty() {
            record.thumbnail_url
        } else {
            record.image_url
        };
        let details = Self {
            formatted_price: currency.format(record.price),
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            image_url,
        };
        (details, extras)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, price: f64) -> FoodRecord {
        FoodRecord {
            id: FoodId(id),
            name: format!("Food {id}"),
            description: String::new(),
            price,
            thumbnail_url: String::new(),
            category: None,
        }
    }

    #[test]
    fn food_mapping_formats_price_once() {
        let food = Food::from_record(record(1, 19.9), Currency::Brl);
        assert_eq!(food.formatted_price, "R$\u{a0}19,90");
        assert_eq!(food.price, 19.9);
    }

    #[test]
    fn list_mapping_keeps_one_entry_per_record_in_order() {
        let foods = foods_from_records(vec![record(3, 1.0), record(1, 2.0)], Currency::Usd);
        let ids: Vec<_> = foods.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![FoodId(3), FoodId(1)]);
    }

    #[test]
    fn extras_start_at_zero() {
        let details = FoodDetailsRecord {
            id: FoodId(1),
            name: "Ao molho".into(),
            description: String::new(),
            price: 10.0,
            image_url: "full.png".into(),
            thumbnail_url: "thumb.png".into(),
            category: None,
            extras: vec![ExtraRecord {
                id: ExtraId(4),
                name: "Bacon".into(),
                value: 1.5,
            }],
        };
        let (food, extras) = FoodDetails::from_record(details, Currency::Usd);
        assert_eq!(food.image_url, "full.png");
        assert_eq!(food.formatted_price, "$10.00");
        assert_eq!(extras[0].quantity, 0);
    }

    #[test]
    fn details_image_falls_back_to_thumbnail() {
        let details = FoodDetailsRecord {
            id: FoodId(1),
            name: "Ao molho".into(),
            description: String::new(),
            price: 10.0,
            image_url: String::new(),
            thumbnail_url: "thumb.png".into(),
            category: None,
            extras: Vec::new(),
        };
        let (food, _) = FoodDetails::from_record(details, Currency::Usd);
        assert_eq!(food.image_url, "thumb.png");
    }

    #[test]
    fn ids_display_as_plain_numbers() {
        assert_eq!(FoodId(42).to_string(), "42");
    }
}

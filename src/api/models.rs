// SPDX-License-Identifier: MPL-2.0
//! Wire shapes of the backend's JSON payloads.
//!
//! These mirror the responses verbatim; derived, display-only fields live in
//! [`crate::food::model`].

use crate::food::model::{CategoryId, ExtraId, FoodId};
use serde::{Deserialize, Serialize};

/// A row of `GET /foods` or `GET /favorites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
}

/// A row of `GET /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
}

/// An extra as returned inside `GET /foods/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraRecord {
    pub id: ExtraId,
    pub name: String,
    pub value: f64,
}

/// Payload of `GET /foods/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDetailsRecord {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub extras: Vec<ExtraRecord>,
}

/// Body of `POST /favorites`: the food as shown on the details screen,
/// without its extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritePayload {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
}

impl From<&FoodDetailsRecord> for FavoritePayload {
    fn from(record: &FoodDetailsRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price,
            image_url: record.image_url.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            category: record.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAILS_JSON: &str = r#"{
        "id": 1,
        "name": "Ao molho",
        "description": "Macarrão ao molho branco, fughi e cheiro verde das montanhas.",
        "price": 19.9,
        "category": 1,
        "image_url": "https://example.test/ao_molho.png",
        "thumbnail_url": "https://example.test/ao_molho_thumb.png",
        "extras": [
            { "id": 1, "name": "Bacon", "value": 1.5 },
            { "id": 2, "name": "Frango", "value": 2 }
        ]
    }"#;

    #[test]
    fn details_payload_decodes_with_extras() {
        let record: FoodDetailsRecord = serde_json::from_str(DETAILS_JSON).unwrap();
        assert_eq!(record.id, FoodId(1));
        assert_eq!(record.extras.len(), 2);
        assert_eq!(record.extras[1].value, 2.0);
    }

    #[test]
    fn food_row_tolerates_missing_optional_fields() {
        let record: FoodRecord =
            serde_json::from_str(r#"{ "id": 7, "name": "Veggie", "price": 21 }"#).unwrap();
        assert_eq!(record.description, "");
        assert_eq!(record.thumbnail_url, "");
        assert_eq!(record.category, None);
    }

    #[test]
    fn favorite_payload_drops_extras() {
        let record: FoodDetailsRecord = serde_json::from_str(DETAILS_JSON).unwrap();
        let payload = FavoritePayload::from(&record);
        let json = serde_json::to_value(&payload).unwrap();

        assert!(json.get("extras").is_none());
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], 1);
        assert_eq!(json["image_url"], "https://example.test/ao_molho.png");
    }
}

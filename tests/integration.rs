// SPDX-License-Identifier: MPL-2.0
use iced_food::api::models::{FavoritePayload, FoodDetailsRecord};
use iced_food::api::{ApiClient, FoodFilter};
use iced_food::config::{self, Config, GeneralConfig};
use iced_food::food::{CategoryId, Currency, ExtraId, FoodDetails, FoodId, Order};
use iced_food::i18n::fluent::I18n;
use reqwest::Method;
use std::time::Duration;
use tempfile::tempdir;

const DETAILS_JSON: &str = r#"{
    "id": 1,
    "name": "Ao molho",
    "description": "Macarrão ao molho branco, fughi e cheiro verde das montanhas.",
    "price": 19.9,
    "category": 1,
    "image_url": "https://storage.test/ao_molho.png",
    "thumbnail_url": "https://storage.test/ao_molho_thumb.png",
    "extras": [
        { "id": 1, "name": "Bacon", "value": 1.5 },
        { "id": 2, "name": "Frango", "value": 2 }
    ]
}"#;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("Failed to write english config");
    let loaded = config::load_from_path(&path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("details-confirm-order"), "Confirm order");

    let portuguese = Config {
        general: GeneralConfig {
            language: Some("pt-BR".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&portuguese, &path).expect("Failed to write portuguese config");
    let loaded = config::load_from_path(&path).expect("Failed to load portuguese config");
    let i18n_pt = I18n::new(None, &loaded);
    assert_eq!(i18n_pt.current_locale().to_string(), "pt-BR");
    assert_eq!(i18n_pt.tr("details-confirm-order"), "Confirmar pedido");
}

#[test]
fn test_config_sections_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.api.base_url = "http://192.168.0.12:3333".to_string();
    config.api.timeout_secs = 30;
    config.display.currency = Currency::Usd;
    config.display.thumbnail_cache_size = 128;
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[api\nbase_url = ")
        .expect("Failed to write broken config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_every_endpoint_targets_the_configured_backend() {
    let client = ApiClient::with_base_url("http://localhost:3333/api", Duration::from_secs(5))
        .expect("valid base url");

    let foods = client
        .foods_request(&FoodFilter {
            category: Some(CategoryId(2)),
            search: "molho".to_string(),
        })
        .expect("foods request");
    assert_eq!(foods.method(), &Method::GET);
    assert_eq!(
        foods.url().as_str(),
        "http://localhost:3333/api/foods?category_like=2&name_like=molho"
    );

    let details = client.food_details_request(FoodId(1)).expect("details request");
    assert_eq!(details.url().as_str(), "http://localhost:3333/api/foods/1");

    let categories = client.categories_request().expect("categories request");
    assert_eq!(categories.url().as_str(), "http://localhost:3333/api/categories");

    let remove = client.remove_favorite_request(FoodId(1)).expect("remove request");
    assert_eq!(remove.method(), &Method::DELETE);
    assert_eq!(remove.url().as_str(), "http://localhost:3333/api/favorites/1");
}

#[test]
fn test_details_payload_drives_order_and_favorite_body() {
    let record: FoodDetailsRecord = serde_json::from_str(DETAILS_JSON).expect("valid details json");
    let payload = FavoritePayload::from(&record);
    let (details, extras) = FoodDetails::from_record(record, Currency::Brl);
    assert_eq!(details.formatted_price, "R$\u{a0}19,90");

    let mut order = Order::new(details.price, extras);
    order.increment_extra(ExtraId(2));
    order.increment_food();
    order.increment_food();
    // (2.0 + 19.9) * 3
    assert_eq!(order.formatted_total(Currency::Brl), "R$\u{a0}65,70");

    let client = ApiClient::with_base_url("http://localhost:3333", Duration::from_secs(5))
        .expect("valid base url");
    let request = client.add_favorite_request(&payload).expect("add favorite request");
    assert_eq!(request.method(), &Method::POST);
    let body = request
        .body()
        .and_then(|body| body.as_bytes())
        .expect("json body");
    let json: serde_json::Value = serde_json::from_slice(body).expect("body is json");
    assert_eq!(json["id"], 1);
    assert!(json.get("extras").is_none());
}

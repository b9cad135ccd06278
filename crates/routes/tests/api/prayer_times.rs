use crate::helpers::{provider_body, spawn_app_testing};
use axum::http::StatusCode;
use std::time::Duration;
use wiremock::ResponseTemplate;

const FALLBACK: &str = "Unable to load prayer times at this moment.";

#[tokio::test]
async fn prayer_times_renders_the_table() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    app.mock_provider(ResponseTemplate::new(200).set_body_json(provider_body()))
        .await;

    let response = app.get_prayer_times().await;

    assert_eq!(StatusCode::OK, response.status());
    let html = response.text().await.unwrap();

    let names = [
        "Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha", "Jummah 1", "Jummah 2",
    ];
    let positions: Vec<_> = names
        .iter()
        .map(|name| {
            html.find(&format!(r#"data-prayer="{name}""#))
                .unwrap_or_else(|| panic!("{name} is missing"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches("data-prayer=").count(), names.len());
    assert!(html.contains("Updated: "));
}

#[tokio::test]
async fn prayer_times_hide_meridiem_and_pin_jummah_iqama() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    app.mock_provider(ResponseTemplate::new(200).set_body_json(provider_body()))
        .await;

    let html = app.get_prayer_times().await.text().await.unwrap();

    assert!(!html.contains(" AM") && !html.contains(" PM"));
    assert!(html.contains("12:48"));
    // provider says 1:20 / 2:20, the masjid runs 1:30 / 2:30
    assert!(html.contains("1:30") && html.contains("2:30"));
    assert!(!html.contains("1:20") && !html.contains("2:20"));
}

#[tokio::test]
async fn prayer_times_fall_back_when_provider_fails() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    app.mock_provider(ResponseTemplate::new(500)).await;

    let response = app.get_prayer_times().await;

    assert_eq!(StatusCode::OK, response.status());
    assert!(response.text().await.unwrap().contains(FALLBACK));
}

#[tokio::test]
async fn prayer_times_fall_back_when_provider_is_slow() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");
    app.mock_provider(
        ResponseTemplate::new(200)
            .set_body_json(provider_body())
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let response = app.get_prayer_times().await;

    assert_eq!(StatusCode::OK, response.status());
    assert!(response.text().await.unwrap().contains(FALLBACK));
}

#[tokio::test]
async fn prayer_times_fall_back_on_malformed_payloads() {
    let app = spawn_app_testing().await.expect("Failed to spawn app");

    let test_cases = [
        ResponseTemplate::new(200).set_body_string("not json"),
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": null })),
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({ "data": { "salah": [], "iqamah": [] } })),
    ];

    for template in test_cases {
        app.provider_server.reset().await;
        app.mock_provider(template).await;

        let response = app.get_prayer_times().await;

        assert_eq!(StatusCode::OK, response.status());
        assert!(response.text().await.unwrap().contains(FALLBACK));
    }
}

use anyhow::Context;
use axum_extra::routing::TypedPath;
use reqwest::Url;
use routes::{ApplicationBuilder, routes_path};
use serde::Serialize;
use settings::get_configuration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Only for integration tests.
#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub provider_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub(crate) fn typed_path(&self, path: impl TypedPath) -> Url {
        let base_url = Url::parse(&self.address)
            .unwrap_or_else(|err| panic!("Failed to parse base address: {}\n{err}", self.address));

        let path_string = path.to_uri().to_string();

        base_url.join(&path_string).expect("Failed to join path")
    }

    pub(crate) async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{path}", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub(crate) async fn get_prayer_times(&self) -> reqwest::Response {
        self.api_client
            .get(self.typed_path(routes_path::PrayerTimes))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub(crate) async fn get_carousel(&self, offset: Option<&str>) -> reqwest::Response {
        let mut url = self.typed_path(routes_path::Carousel);
        if let Some(offset) = offset {
            url.query_pairs_mut().append_pair("offset", offset);
        }

        self.api_client
            .get(url)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Steps the carousel and returns the index it reports.
    pub(crate) async fn step_carousel(&self, offset: i64) -> usize {
        let html = self
            .get_carousel(Some(&offset.to_string()))
            .await
            .text()
            .await
            .unwrap();
        carousel_index(&html)
    }

    pub(crate) async fn post_form<Body>(&self, path: impl TypedPath, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.api_client
            .post(self.typed_path(path))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub(crate) async fn post_raw(&self, path: impl TypedPath, body: String) -> reqwest::Response {
        self.api_client
            .post(self.typed_path(path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub(crate) async fn mock_provider(&self, response: ResponseTemplate) {
        Mock::given(path("/api/v1/time/range"))
            .and(method("GET"))
            .respond_with(response)
            .mount(&self.provider_server)
            .await
    }
}

pub(crate) fn provider_body() -> serde_json::Value {
    serde_json::json!({
        "status": "success",
        "data": {
            "salah": [{
                "fajr": "5:42 AM",
                "sunrise": "7:01 AM",
                "zuhr": "12:48 PM",
                "asr": "3:55 PM",
                "maghrib": "6:33 PM",
                "isha": "7:50 PM",
                "jummah1": "1:00 PM",
                "jummah2": "2:00 PM"
            }],
            "iqamah": [{
                "fajr": "6:15 AM",
                "zuhr": "1:15 PM",
                "asr": "4:30 PM",
                "maghrib": "6:40 PM",
                "isha": "8:15 PM",
                "jummah1": "1:20 PM",
                "jummah2": "2:20 PM"
            }]
        }
    })
}

pub(crate) fn carousel_index(html: &str) -> usize {
    let start = html.find(r#"data-index=""#).expect("fragment has no index") + 12;
    let end = start + html[start..].find('"').unwrap();
    html[start..end].parse().unwrap()
}

pub(crate) fn carousel_items(html: &str) -> Vec<usize> {
    html.match_indices(r#"data-item=""#)
        .map(|(i, m)| {
            let start = i + m.len();
            let end = start + html[start..].find('"').unwrap();
            html[start..end].parse().unwrap()
        })
        .collect()
}

/// It does the following:
/// 1. Tracing
/// 1. Mock prayer time provider
/// 1. Mutates configuration for test needs
/// 1. Spawns a tokio task running the axum server
pub async fn spawn_app_testing() -> anyhow::Result<TestApp> {
    telemetry::init_tracing().context("Failed to initialize tracing.")?;

    let provider_server = MockServer::start().await;

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let config = {
        let mut c = get_configuration().expect("Failed to read Configuration");
        c.prayer_provider.base_url =
            url::Url::parse(&provider_server.uri()).context("Invalid mock provider url")?;
        c.prayer_provider.timeout_ms = 200;
        c.application.host = "127.0.0.1".to_owned();
        // randomized OS port
        c.application.port = 0;
        c
    };

    let app = ApplicationBuilder::new(&config).build().await?;

    let test_app = TestApp {
        address: app.address().to_owned(),
        provider_server,
        api_client,
    };

    tokio::spawn(async move { app.run().await.unwrap() });

    Ok(test_app)
}

use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub fn get_configuration() -> Result<Configuration, ConfigError> {
    dotenvy::dotenv().ok();

    // this can be compile time because we are providing from the .cargo/config.toml
    let configuration_dir = PathBuf::from(concat!(env!("CARGO_WORKSPACE_DIR"), "/configuration"));

    // this can't be as it can be changed in runtime
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or("local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    // this would set APP_{Configuration}__{Field}
    let settings = Config::builder()
        .add_source(File::from(configuration_dir.join("base.json")))
        .add_source(File::from(
            configuration_dir.join(format!("{}.json", environment.as_str())),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Configuration>()
}

pub type Port = u16;

#[derive(Deserialize, Debug, Clone)]
pub struct Configuration {
    pub application: ApplicationConfiguration,
    pub site: SiteConfiguration,
    pub prayer_provider: PrayerProviderConfiguration,
    pub carousel: CarouselConfiguration,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationConfiguration {
    pub port: Port,
    pub host: String,
    /// Mirrors the request origin and allows credentials. Development only.
    #[serde(default)]
    pub cors_permissive: bool,
}

/// Copy shown in the page shell.
#[derive(Deserialize, Debug, Clone)]
pub struct SiteConfiguration {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub contact_email: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PrayerProviderConfiguration {
    pub base_url: url::Url,
    pub masjid_id: String,
    pub timeout_ms: u64,
}

impl PrayerProviderConfiguration {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CarouselConfiguration {
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    pub items: Vec<CarouselItem>,
}

fn default_window_size() -> usize {
    3
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarouselItem {
    pub title: String,
    pub description: String,
    pub image: String,
    pub href: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

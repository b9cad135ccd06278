use domain::{DailyTimes, PrayerDay};
use reqwest::Client;
use serde::Deserialize;
use settings::PrayerProviderConfiguration;
use site_macros::DebugChain;
use std::time::Duration;
use url::Url;

const TIME_RANGE_PATH: &str = "api/v1/time/range";

/// Client for the masjid's prayer time provider.
#[derive(Debug, Clone)]
pub struct PrayerClient {
    http_client: Client,
    base_url: Url,
    masjid_id: String,
}

#[derive(thiserror::Error, DebugChain)]
pub enum ProviderError {
    #[error("Prayer time provider is unreachable.")]
    Unavailable(#[from] reqwest::Error),
    #[error("Prayer time provider sent a malformed response.")]
    Malformed(#[from] serde_json::Error),
    #[error("Prayer time provider sent no schedule for today.")]
    MissingSchedule,
    #[error("Prayer time provider url is invalid.")]
    InvalidUrl(#[from] url::ParseError),
}

impl PrayerClient {
    pub fn new(
        mut base_url: Url,
        masjid_id: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        // `join` replaces the last segment unless the path ends in a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            http_client: Client::builder().timeout(timeout).build()?,
            base_url,
            masjid_id,
        })
    }

    pub fn from_config(config: &PrayerProviderConfiguration) -> Result<Self, reqwest::Error> {
        Self::new(
            config.base_url.clone(),
            config.masjid_id.clone(),
            config.timeout(),
        )
    }

    /// Today's adhan and iqama times.
    #[tracing::instrument(name = "Fetching prayer times", skip(self), fields(masjid_id = %self.masjid_id))]
    pub async fn fetch_today(&self) -> Result<PrayerDay, ProviderError> {
        let url = self.base_url.join(TIME_RANGE_PATH)?;

        let body = self
            .http_client
            .get(url)
            .query(&[("masjid_id", &self.masjid_id)])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let response: TimeRangeResponse = serde_json::from_slice(&body)?;
        response.into_prayer_day()
    }
}

#[derive(Deserialize)]
struct TimeRangeResponse {
    data: TimeRangeData,
}

#[derive(Deserialize)]
struct TimeRangeData {
    salah: Vec<ProviderTimes>,
    iqamah: Vec<ProviderTimes>,
}

/// One day as the provider spells it. Unknown keys (dates, hijri, ...) are ignored.
#[derive(Deserialize, Default)]
struct ProviderTimes {
    fajr: Option<String>,
    sunrise: Option<String>,
    zuhr: Option<String>,
    asr: Option<String>,
    maghrib: Option<String>,
    isha: Option<String>,
    jummah1: Option<String>,
    jummah2: Option<String>,
}

impl From<ProviderTimes> for DailyTimes {
    fn from(times: ProviderTimes) -> Self {
        DailyTimes {
            fajr: times.fajr,
            sunrise: times.sunrise,
            dhuhr: times.zuhr,
            asr: times.asr,
            maghrib: times.maghrib,
            isha: times.isha,
            jummah: [times.jummah1, times.jummah2],
        }
    }
}

impl TimeRangeResponse {
    fn into_prayer_day(self) -> Result<PrayerDay, ProviderError> {
        let TimeRangeData { salah, iqamah } = self.data;

        let adhan: DailyTimes = salah
            .into_iter()
            .next()
            .ok_or(ProviderError::MissingSchedule)?
            .into();
        let iqama: DailyTimes = iqamah
            .into_iter()
            .next()
            .ok_or(ProviderError::MissingSchedule)?
            .into();

        Ok(PrayerDay::new(&adhan, &iqama))
    }
}

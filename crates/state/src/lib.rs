use anyhow::Context;
use axum::extract::FromRef;
use domain::Carousel;
use prayer_client::PrayerClient;
use settings::{CarouselItem, Configuration, SiteConfiguration};
use std::sync::Arc;

/// Carousel position together with the items it rotates over.
#[derive(Debug)]
pub struct Showcase {
    pub carousel: Carousel,
    pub items: Vec<CarouselItem>,
}

impl Showcase {
    pub fn new(items: Vec<CarouselItem>, window_size: usize) -> anyhow::Result<Self> {
        let carousel =
            Carousel::new(items.len(), window_size).context("Invalid carousel configuration")?;
        Ok(Self { carousel, items })
    }

    /// Looks up a 1-based item number as produced by [`Carousel::window_at`].
    pub fn item(&self, number: usize) -> Option<&CarouselItem> {
        number.checked_sub(1).and_then(|i| self.items.get(i))
    }
}

/// State shared by every handler. Cheap to clone.
#[derive(Debug, Clone, FromRef)]
pub struct AppState {
    pub prayer_client: PrayerClient,
    pub showcase: Arc<Showcase>,
    pub site: Arc<SiteConfiguration>,
}

impl AppState {
    pub fn from_config(config: &Configuration) -> anyhow::Result<Self> {
        let prayer_client = PrayerClient::from_config(&config.prayer_provider)
            .context("Failed to build the prayer time client")?;
        Self::with_prayer_client(config, prayer_client)
    }

    pub fn with_prayer_client(
        config: &Configuration,
        prayer_client: PrayerClient,
    ) -> anyhow::Result<Self> {
        let showcase = Showcase::new(config.carousel.items.clone(), config.carousel.window_size)?;

        Ok(Self {
            prayer_client,
            showcase: Arc::new(showcase),
            site: Arc::new(config.site.clone()),
        })
    }
}

use anyhow::Context;
use axum::Router;
use prayer_client::PrayerClient;
use settings::Configuration;
use state::AppState;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::routes::get_router;

pub struct Application {
    router: Router,
    listener: TcpListener,
    address: String,
}

impl Application {
    pub async fn build(config: &Configuration) -> anyhow::Result<Self> {
        ApplicationBuilder::new(config).build().await
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub async fn run(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.address);
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Failed to serve application using axum")
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Gracefully shutting down from SIGINT"),
        Err(e) => error!("Failed to listen for ctrl_c signal: {}", e),
    }
}

pub struct ApplicationBuilder<'a> {
    config: &'a Configuration,
    prayer_client: Option<PrayerClient>,
}

impl<'a> ApplicationBuilder<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            prayer_client: None,
        }
    }

    pub fn with_prayer_client(mut self, client: PrayerClient) -> Self {
        self.prayer_client = Some(client);
        self
    }

    pub async fn build(self) -> anyhow::Result<Application> {
        let app_state = match self.prayer_client {
            Some(client) => AppState::with_prayer_client(self.config, client)?,
            None => AppState::from_config(self.config)?,
        };

        let bind_addr = format!(
            "{}:{}",
            self.config.application.host, self.config.application.port
        );
        let listener = TcpListener::bind(&bind_addr)
            .await
            .context(format!("Failed to bind to address: {bind_addr}"))?;

        // local_addr resolves port 0 to the one the OS picked.
        let address = format!(
            "http://{}",
            listener
                .local_addr()
                .context("Failed to read the bound address")?
        );

        let router = get_router(app_state, self.config.application.cors_permissive);

        Ok(Application {
            router,
            listener,
            address,
        })
    }
}

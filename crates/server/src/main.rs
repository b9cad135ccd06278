use anyhow::{Context, Result};
use routes::Application;
use settings::get_configuration;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing().context("Failed to initialize tracing.")?;
    let config = get_configuration().context("Failed to read Configuration.")?;

    let app = Application::build(&config)
        .await
        .context("Failed to build the application.")?;

    app.run().await
}

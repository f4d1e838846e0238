use clap::Parser;

use schemapdf::infrastructure::observability::{TracingConfig, init_tracing};
use schemapdf::presentation::{Cli, Environment, Settings, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    let tracing_config = TracingConfig {
        environment: environment.to_string(),
        json_format: settings.logging.json || TracingConfig::default().json_format,
        ..TracingConfig::default()
    };
    init_tracing(tracing_config);

    run(cli, settings.extractor).await
}

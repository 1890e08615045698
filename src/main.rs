use clap::Parser;
use memorymap::prelude::*;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("memorymap=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::resolve(Cli::parse())?;
    info!(
        model = %config.model.model,
        memory_file = %config.memory_file.display(),
        "Configuration loaded"
    );

    let llm = Arc::new(OpenAiClient::new(Arc::new(Client::new()), config.model));
    let store = Arc::new(FileMemoryStore::new(&config.memory_file));
    let input = Arc::new(ConsoleHumanLoopProvider::new());

    let session = Session::new(llm, store, input);
    session.run(&mut std::io::stdout()).await
}

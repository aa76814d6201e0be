use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use caravel_ops::aws::{ClientFactory, ResolvedConnection};
use caravel_ops::input::TerminalPrompt;
use caravel_ops::store::{FileConfigStore, FileSecretStore};
use caravel_ops::{HostServices, OpsRoot, Result};

fn state_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".caravel")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("caravel_ops=warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    caravel_ops::init();

    let dir = state_dir();
    let config = Arc::new(FileConfigStore::load(dir.join("config.json")).await?);
    let secrets = Arc::new(FileSecretStore::load(dir.join("secrets.json")).await?);
    let connection = ResolvedConnection::resolve(config.as_ref()).await;
    let services = HostServices::new(
        config,
        secrets,
        Arc::new(TerminalPrompt::new()),
        Arc::new(ClientFactory::new(connection)),
    );

    let root = OpsRoot::from_registry(&services)?;
    let matches = root
        .definition()
        .name("caravel-ops")
        .bin_name("caravel-ops")
        .version(env!("CARGO_PKG_VERSION"))
        .get_matches();
    root.dispatch(&matches).await
}

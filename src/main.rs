use anyhow::Context;
use clap::Parser;
use ratings_api::AppState;
use ratings_core::config::Config;
use ratings_feeds::DatasetLoader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ratings", about = "Company rating lookup service", version)]
struct Cli {
    /// TOML file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind. Overrides `server.host`.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on. Overrides `server.port` and `PORT`.
    #[arg(long)]
    port: Option<u16>,

    /// Upstream dataset URL. Overrides `dataset.url`.
    #[arg(long)]
    dataset_url: Option<String>,

    /// Read the compressed dataset from a local file instead of the URL.
    #[arg(long)]
    dataset_path: Option<PathBuf>,

    /// Default the log filter to `debug` (RUST_LOG still wins).
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn apply(self, cfg: &mut Config) {
        if let Some(host) = self.host {
            cfg.server.host = host;
        }
        if let Some(port) = self.port {
            cfg.server.port = port;
        }
        if let Some(url) = self.dataset_url {
            cfg.dataset.url = url;
        }
        if let Some(path) = self.dataset_path {
            cfg.dataset.path = Some(path);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut cfg = Config::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply(&mut cfg);

    // The dataset must be in memory before the listener exists; any failure
    // here ends the process.
    let loader = DatasetLoader::from_config(&cfg.dataset).context("building dataset feed")?;
    let dataset = match loader.load().await {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::error!(error = %err, "failed to load dataset");
            return Err(err).context("loading dataset");
        }
    };

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr())
        .await
        .with_context(|| format!("binding {}", cfg.server.bind_addr()))?;

    ratings_api::serve(listener, AppState::new(dataset)).await?;
    Ok(())
}

use clap::{Parser, Subcommand};
use scraper_exporter::config::ConfigLoader;
use scraper_exporter::metrics::{exporter, ScraperMetrics};
use scraper_exporter::runner::ScrapeRunner;
use scraper_exporter::scraper::PageScraper;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "scraper-exporter")]
#[command(version = "0.1.0")]
#[command(about = "Instrumented web scraper with a Prometheus metrics endpoint", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scrape loop from a config file
    Run {
        /// Path to the configuration file (JSON/YAML/TOML)
        #[arg(short, long)]
        config: PathBuf,

        /// Override the metrics endpoint port from the config
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Validate a configuration file
    Check {
        /// Path to the configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, port } => {
            log::info!("Loading config from {:?}", config);
            let config = ConfigLoader::load(&config)?;
            log::info!(
                "Loaded scraper: {} ({} targets)",
                config.name,
                config.targets.len()
            );

            // Bind the exposition endpoint before the first pass. A taken
            // port is fatal here, not something to work around.
            let port = port.unwrap_or(config.metrics_port);
            exporter::start(port).await?;

            let metrics = ScraperMetrics::register();
            let scraper = PageScraper::new(
                metrics,
                Duration::from_secs(config.request_timeout_secs),
                config.min_delay_ms..=config.max_delay_ms,
            );
            let runner = ScrapeRunner::new(
                scraper,
                config.targets.clone(),
                Duration::from_secs(config.pass_interval_secs),
            );

            log::info!("Starting scrape loop...");
            tokio::select! {
                _ = runner.run() => {}
                _ = tokio::signal::ctrl_c() => {
                    log::info!("Shutting down...");
                }
            }
        }
        Commands::Check { config } => match ConfigLoader::load(&config) {
            Ok(cfg) => {
                println!("✅ Config is valid:");
                println!("   Name: {}", cfg.name);
                println!("   Targets: {:?}", cfg.targets);
                println!("   Metrics port: {}", cfg.metrics_port);
                println!("   Pass interval: {}s", cfg.pass_interval_secs);
            }
            Err(e) => {
                eprintln!("❌ Config error: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

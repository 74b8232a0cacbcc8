pub mod config;
pub mod error;
pub mod metrics;
pub mod runner;
pub mod scraper;

pub use config::{ConfigLoader, ScraperConfig};
pub use error::{Error, Result};
pub use metrics::ScraperMetrics;
pub use runner::{PassStats, ScrapeRunner};
pub use scraper::PageScraper;

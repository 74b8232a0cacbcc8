pub mod exporter;
pub mod registry;

pub use registry::ScraperMetrics;

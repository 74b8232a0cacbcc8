use metrics::{
    counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Counter,
    Gauge, Histogram, Unit,
};
use std::time::Duration;

pub const PAGES_SCRAPED_TOTAL: &str = "scraper_pages_scraped_total";
pub const ERRORS_TOTAL: &str = "scraper_errors_total";
pub const SCRAPE_DURATION_SECONDS: &str = "scraper_scrape_duration_seconds";
pub const ACTIVE_SCRAPERS: &str = "scraper_active_scrapers";

/// Handles for the four scraper metrics, registered once against whatever
/// recorder is installed and then passed by reference to the scrape path.
#[derive(Clone)]
pub struct ScraperMetrics {
    pages_scraped: Counter,
    errors: Counter,
    scrape_duration: Histogram,
    active_scrapers: Gauge,
}

impl ScraperMetrics {
    pub fn register() -> Self {
        describe_counter!(PAGES_SCRAPED_TOTAL, "Total number of pages scraped");
        describe_counter!(ERRORS_TOTAL, "Total number of scraping errors");
        describe_histogram!(
            SCRAPE_DURATION_SECONDS,
            Unit::Seconds,
            "Time spent scraping pages"
        );
        describe_gauge!(ACTIVE_SCRAPERS, "Number of active scrapers");

        Self {
            pages_scraped: counter!(PAGES_SCRAPED_TOTAL),
            errors: counter!(ERRORS_TOTAL),
            scrape_duration: histogram!(SCRAPE_DURATION_SECONDS),
            active_scrapers: gauge!(ACTIVE_SCRAPERS),
        }
    }

    pub fn inc_pages_scraped(&self) {
        self.pages_scraped.increment(1);
    }

    pub fn inc_errors(&self) {
        self.errors.increment(1);
    }

    pub fn observe_scrape_duration(&self, duration: Duration) {
        self.scrape_duration.record(duration.as_secs_f64());
    }

    /// Marks one scrape as in flight. The gauge is decremented exactly once
    /// when the returned guard drops, whichever way the attempt concludes.
    pub fn track_active(&self) -> ActiveGuard {
        self.active_scrapers.increment(1.0);
        ActiveGuard {
            gauge: self.active_scrapers.clone(),
        }
    }
}

pub struct ActiveGuard {
    gauge: Gauge,
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.gauge.decrement(1.0);
    }
}

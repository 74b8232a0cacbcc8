use crate::scraper::PageScraper;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub scraped: u64,
    pub failed: u64,
}

pub struct ScrapeRunner {
    scraper: PageScraper,
    targets: Vec<String>,
    pass_interval: Duration,
}

impl ScrapeRunner {
    pub fn new(scraper: PageScraper, targets: Vec<String>, pass_interval: Duration) -> Self {
        Self {
            scraper,
            targets,
            pass_interval,
        }
    }

    /// One sequential pass over the target list. A failed target is counted
    /// and the pass moves on to the next one.
    pub async fn run_pass(&self) -> PassStats {
        let mut stats = PassStats::default();
        for url in &self.targets {
            if self.scraper.scrape_page(url).await {
                stats.scraped += 1;
            } else {
                stats.failed += 1;
            }
        }
        stats
    }

    /// Pass, sleep, repeat. Runs until the process is terminated.
    pub async fn run(&self) {
        loop {
            let stats = self.run_pass().await;
            log::info!(
                "Pass complete: {} scraped, {} failed. Next pass in {:?}",
                stats.scraped,
                stats.failed,
                self.pass_interval
            );
            sleep(self.pass_interval).await;
        }
    }
}

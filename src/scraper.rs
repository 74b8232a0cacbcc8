use crate::error::{Error, Result};
use crate::metrics::ScraperMetrics;
use rand::Rng;
use reqwest::Client;
use select::document::Document;
use select::predicate::Name;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// What a successful fetch+parse yields. Only logged; the collector scrapes
/// the metrics side.
#[derive(Debug)]
pub struct PageSummary {
    pub title: Option<String>,
    pub links: usize,
    pub bytes: usize,
}

pub struct PageScraper {
    client: Client,
    metrics: ScraperMetrics,
    delay_ms: RangeInclusive<u64>,
}

impl PageScraper {
    pub fn new(metrics: ScraperMetrics, timeout: Duration, delay_ms: RangeInclusive<u64>) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("scraper-exporter/0.1")
            .build()
            .expect("Building HTTP client");

        Self {
            client,
            metrics,
            delay_ms,
        }
    }

    /// Scrape a single target. Records success or failure on the counters and
    /// the elapsed time of the fetch+parse region either way; the active
    /// gauge is restored on every exit path. Failures never propagate past
    /// this function so one bad target cannot abort a pass.
    pub async fn scrape_page(&self, url: &str) -> bool {
        let _active = self.metrics.track_active();

        let start = Instant::now();
        let result = self.fetch_and_parse(url).await;
        self.metrics.observe_scrape_duration(start.elapsed());

        match result {
            Ok(page) => {
                self.metrics.inc_pages_scraped();
                log::info!(
                    "Scraped {} ({} links, {} bytes, title: {:?})",
                    url,
                    page.links,
                    page.bytes,
                    page.title
                );
                true
            }
            Err(e) => {
                self.metrics.inc_errors();
                log::error!("Error scraping {}: {}", url, e);
                false
            }
        }
    }

    async fn fetch_and_parse(&self, url: &str) -> Result<PageSummary> {
        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("HTTP error: {}", status)));
        }

        let html = res.text().await?;
        let summary = parse_page(&html);

        // Variable page-processing cost, inside the timed region like the
        // fetch itself. Also spaces requests out against the target server.
        let delay = {
            let mut rng = rand::thread_rng();
            rng.gen_range(self.delay_ms.clone())
        };
        if delay > 0 {
            sleep(Duration::from_millis(delay)).await;
        }

        Ok(summary)
    }
}

fn parse_page(html: &str) -> PageSummary {
    let doc = Document::from(html);
    PageSummary {
        title: doc.find(Name("title")).next().map(|n| n.text()),
        links: doc.find(Name("a")).count(),
        bytes: html.len(),
    }
}

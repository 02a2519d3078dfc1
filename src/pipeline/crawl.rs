// src/pipeline/crawl.rs

//! Card crawling pipeline.

use std::time::Duration;

use chrono::Utc;
use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::models::{CardRecord, Config, CrawlOutcome, CrawlStats, CrawlerConfig, UrlFixes};
use crate::services::{CardExtractor, CardService, LinkCollector};
use crate::storage::CardStorage;
use crate::utils::http::Fetcher;
use crate::utils::report;

/// Run the full crawl: discover links, scrape every card, write the dataset.
pub async fn run_crawler(config: &Config, storage: &dyn CardStorage) -> Result<CrawlStats> {
    let start_time = Utc::now();
    report::header("I-Chu card crawler");

    let fetcher = Fetcher::from_config(&config.crawler)?;
    let collector = LinkCollector::new(
        fetcher.clone(),
        &config.wiki,
        UrlFixes::new(&config.url_fixes),
    )?;
    let service = CardService::new(fetcher, CardExtractor::new()?);

    report::step(1, 3, "Collecting card links");
    let links = collector.discover().await;

    report::step(2, 3, &format!("Scraping {} card pages", links.len()));
    let mut outcome = scrape_all(&service, links, &config.crawler).await;
    sort_by_name(&mut outcome.cards);

    report::step(3, 3, "Writing dataset");
    let written = storage.write_cards(&outcome.cards).await?;

    let stats = CrawlStats::new(start_time, &outcome);
    report::separator();
    report::summary(
        "Crawl",
        &[
            ("Links", stats.link_count.to_string()),
            ("Cards", stats.card_count.to_string()),
            ("Failed", stats.failure_count.to_string()),
            ("Success rate", format!("{:.1}%", stats.success_rate() * 100.0)),
            ("Elapsed", format!("{}s", stats.elapsed_secs())),
            ("Output", written.location.display().to_string()),
        ],
    );
    log::info!(
        "Done. Saved {} cards to {}",
        written.card_count,
        written.location.display()
    );

    Ok(stats)
}

/// Scrape all card pages with at most `max_concurrent` requests in flight.
///
/// Results arrive in completion order.
pub async fn scrape_all(
    service: &CardService,
    links: Vec<String>,
    crawler: &CrawlerConfig,
) -> CrawlOutcome {
    let delay = Duration::from_millis(crawler.request_delay_ms);
    let concurrency = crawler.max_concurrent.max(1);
    let interval = crawler.progress_interval.max(1);

    let mut outcome = CrawlOutcome {
        link_total: links.len(),
        ..CrawlOutcome::default()
    };

    let mut card_stream = stream::iter(links)
        .map(|url| async move {
            let card = service.scrape(&url).await;
            (url, card)
        })
        .buffer_unordered(concurrency);

    let mut completed = 0;
    while let Some((url, card)) = card_stream.next().await {
        match card {
            Some(card) => outcome.cards.push(card),
            None => {
                outcome.failures += 1;
                log::debug!("Skipped card page {}", url);
            }
        }

        completed += 1;
        if completed % interval == 0 {
            log::info!(
                "Progress: {}/{} cards processed.",
                completed,
                outcome.link_total
            );
        }

        if delay.as_millis() > 0 {
            tokio::time::sleep(delay).await;
        }
    }

    outcome
}

/// Stable sort by card name.
pub fn sort_by_name(cards: &mut [CardRecord]) {
    cards.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PAGE_DELAY: Duration = Duration::from_millis(200);

    fn card_page(name: &str) -> String {
        format!(r#"<html><body><h1 class="page-header__title">{name}</h1></body></html>"#)
    }

    #[test]
    fn test_sort_by_name_is_stable() {
        let mut cards = vec![
            CardRecord::new("u1", "Kokoro GR"),
            CardRecord::new("u2", "Akio LE"),
            CardRecord::new("u3", "Kokoro GR"),
            CardRecord::new("u4", "Unknown"),
        ];
        sort_by_name(&mut cards);

        let order: Vec<_> = cards.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(order, vec!["u2", "u1", "u3", "u4"]);
    }

    #[tokio::test]
    async fn test_scrape_all_without_links() {
        let service = CardService::new(
            Fetcher::from_config(&CrawlerConfig::default()).unwrap(),
            CardExtractor::new().unwrap(),
        );
        let outcome = scrape_all(&service, Vec::new(), &CrawlerConfig::default()).await;
        assert_eq!(outcome.link_total, 0);
        assert_eq!(outcome.failures, 0);
        assert!(outcome.cards.is_empty());
    }

    #[tokio::test]
    async fn test_scrape_all_bounds_requests_and_survives_failures() {
        let server = MockServer::start().await;
        for name in ["A_GR", "B_GR", "C_LE"] {
            Mock::given(method("GET"))
                .and(path(format!("/wiki/{name}")))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_string(card_page(name))
                        .set_delay(PAGE_DELAY),
                )
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/wiki/Broken_GR"))
            .respond_with(ResponseTemplate::new(500).set_delay(PAGE_DELAY))
            .mount(&server)
            .await;

        let crawler = CrawlerConfig {
            timeout_secs: 5,
            max_concurrent: 2,
            progress_interval: 1,
            ..CrawlerConfig::default()
        };
        let service = CardService::new(
            Fetcher::from_config(&crawler).unwrap(),
            CardExtractor::new().unwrap(),
        );
        let links: Vec<String> = ["A_GR", "Broken_GR", "B_GR", "C_LE"]
            .iter()
            .map(|name| format!("{}/wiki/{name}", server.uri()))
            .collect();

        let started = Instant::now();
        let mut outcome = scrape_all(&service, links, &crawler).await;
        let elapsed = started.elapsed();

        // Four delayed pages through two slots take at least two rounds
        assert!(elapsed >= PAGE_DELAY * 2, "finished in {elapsed:?}");
        assert_eq!(server.received_requests().await.unwrap().len(), 4);

        assert_eq!(outcome.link_total, 4);
        assert_eq!(outcome.failures, 1);
        sort_by_name(&mut outcome.cards);
        let names: Vec<_> = outcome.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A_GR", "B_GR", "C_LE"]);
    }
}

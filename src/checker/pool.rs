// src/checker/pool.rs
// =============================================================================
// This module fans the candidate links out over a fixed pool of workers.
//
// How it works:
// 1. All links go into one shared WorkQueue; each job is tagged with its index
// 2. `workers` tokio tasks pull jobs until the queue is empty
// 3. Every worker owns a clone of the results sender. The coordinator drops
//    its own sender right after spawning, so the results channel closes
//    exactly when the last worker is done (the completion barrier)
// 4. Results are slotted back by index, so output order == input order
// 5. Any slot still empty after the barrier (a worker panicked mid-job) gets
//    a synthetic failure result, so no link is ever silently dropped
//
// The pool size never depends on the number of links: 10 000 links with a
// pool of 50 still means at most 50 requests in flight.
// =============================================================================

use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error};

use super::http::{verify_link, LinkCheckResult};

/// Message used for a link whose worker died before reporting back.
pub const ABORTED_MESSAGE: &str = "verification aborted";

// Shared queue of links still to check
//
// Popping is a single atomic increment, so workers never block each other
// and no lock is held across an .await.
struct WorkQueue {
    links: Arc<[String]>,
    next: AtomicUsize,
}

impl WorkQueue {
    fn new(links: Arc<[String]>) -> Self {
        Self {
            links,
            next: AtomicUsize::new(0),
        }
    }

    // Hands out each index exactly once, then None forever
    fn next_job(&self) -> Option<(usize, String)> {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        self.links.get(index).map(|link| (index, link.clone()))
    }
}

// How many workers to spawn for `total` links
//
// Never more than asked for, never more than there is work, at least one when
// there is any work at all.
fn worker_count(concurrency: usize, total: usize) -> usize {
    concurrency.max(1).min(total)
}

// Checks all links with at most `concurrency` requests in flight
//
// Returns exactly one result per input link, in input order.
pub async fn check_links(client: &Client, links: Vec<String>, concurrency: usize) -> Vec<LinkCheckResult> {
    let total = links.len();
    if total == 0 {
        return Vec::new();
    }

    let links: Arc<[String]> = links.into();
    let queue = Arc::new(WorkQueue::new(Arc::clone(&links)));
    let (results_tx, mut results_rx) = mpsc::unbounded_channel();

    let workers = worker_count(concurrency, total);
    debug!(workers, total, "starting link checks");

    let mut tasks = JoinSet::new();
    for worker_id in 0..workers {
        tasks.spawn(run_worker(
            worker_id,
            client.clone(),
            Arc::clone(&queue),
            results_tx.clone(),
        ));
    }
    // Only the workers hold senders from here on
    drop(results_tx);

    let mut slots: Vec<Option<LinkCheckResult>> = vec![None; total];
    while let Some((index, result)) = results_rx.recv().await {
        slots[index] = Some(result);
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            error!(error = %e, "link check worker stopped unexpectedly");
        }
    }

    fill_gaps(slots, &links)
}

async fn run_worker(
    worker_id: usize,
    client: Client,
    queue: Arc<WorkQueue>,
    results: mpsc::UnboundedSender<(usize, LinkCheckResult)>,
) {
    let mut checked = 0usize;
    while let Some((index, link)) = queue.next_job() {
        let result = verify_link(&client, link).await;
        checked += 1;
        if results.send((index, result)).is_err() {
            // Receiver is gone, nobody is listening any more
            break;
        }
    }
    debug!(worker_id, checked, "worker finished");
}

// Turns index slots into the final result list
fn fill_gaps(slots: Vec<Option<LinkCheckResult>>, links: &[String]) -> Vec<LinkCheckResult> {
    slots
        .into_iter()
        .zip(links)
        .map(|(slot, link)| {
            slot.unwrap_or_else(|| {
                error!(link = %link, "no result recorded for link");
                LinkCheckResult::failure(link.clone(), ABORTED_MESSAGE)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::http::{build_client, SENTINEL_STATUS};
    use crate::config::CheckerConfig;
    use httpmock::prelude::*;
    use httpmock::Method::HEAD;
    use std::time::Duration;

    fn test_client() -> Client {
        let config = CheckerConfig {
            timeout: Duration::from_secs(5),
            ..CheckerConfig::default()
        };
        build_client(&config).unwrap()
    }

    #[test]
    fn test_worker_count_is_bounded() {
        assert_eq!(worker_count(50, 3), 3);
        assert_eq!(worker_count(4, 1000), 4);
        assert_eq!(worker_count(0, 10), 1);
        assert_eq!(worker_count(8, 0), 0);
    }

    #[test]
    fn test_queue_hands_out_each_job_once() {
        let queue = WorkQueue::new(vec!["a".to_string(), "b".to_string()].into());
        assert_eq!(queue.next_job(), Some((0, "a".to_string())));
        assert_eq!(queue.next_job(), Some((1, "b".to_string())));
        assert_eq!(queue.next_job(), None);
        assert_eq!(queue.next_job(), None);
    }

    #[test]
    fn test_fill_gaps_never_drops_a_link() {
        let links = vec!["https://a.dev".to_string(), "https://b.dev".to_string()];
        let slots = vec![
            Some(LinkCheckResult::failure("https://a.dev".to_string(), "x")),
            None,
        ];
        let results = fill_gaps(slots, &links);
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].link, "https://b.dev");
        assert!(!results[1].is_valid);
        assert_eq!(results[1].status_code, SENTINEL_STATUS);
        assert_eq!(results[1].message.as_deref(), Some(ABORTED_MESSAGE));
    }

    #[tokio::test]
    async fn test_no_links_no_results() {
        let results = check_links(&test_client(), Vec::new(), 10).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_every_link_checked_once_in_input_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(HEAD).path_contains("/page/");
                then.status(200).delay(Duration::from_millis(20));
            })
            .await;

        let links: Vec<String> = (0..25).map(|i| server.url(format!("/page/{i}"))).collect();
        let results = check_links(&test_client(), links.clone(), 4).await;

        assert_eq!(mock.hits_async().await, 25);
        assert_eq!(results.len(), 25);
        let returned: Vec<String> = results.iter().map(|r| r.link.clone()).collect();
        assert_eq!(returned, links);
        assert!(results.iter().all(|r| r.is_valid && r.status_code == 200));
    }

    #[tokio::test]
    async fn test_pool_never_exceeds_concurrency() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(HEAD).path_contains("/slow/");
                then.status(200).delay(Duration::from_millis(200));
            })
            .await;

        // 8 links through 2 workers means at least 4 back-to-back rounds
        let links: Vec<String> = (0..8).map(|i| server.url(format!("/slow/{i}"))).collect();
        let started = std::time::Instant::now();
        let results = check_links(&test_client(), links, 2).await;
        let elapsed = started.elapsed();

        assert_eq!(results.len(), 8);
        assert_eq!(mock.hits_async().await, 8);
        assert!(
            elapsed >= Duration::from_millis(4 * 200),
            "8 links with 2 workers finished in {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn test_mixed_outcomes_do_not_affect_each_other() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(HEAD).path("/ok");
                then.status(200);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(HEAD).path("/404");
                then.status(404);
            })
            .await;

        let links = vec![
            server.url("/ok"),
            "http://127.0.0.1:1/unreachable".to_string(),
            server.url("/404"),
            "::not-a-url::".to_string(),
        ];
        let results = check_links(&test_client(), links, 2).await;

        let classified: Vec<(bool, u16)> = results.iter().map(|r| (r.is_valid, r.status_code)).collect();
        assert_eq!(
            classified,
            vec![
                (true, 200),
                (false, SENTINEL_STATUS),
                (false, 404),
                (false, SENTINEL_STATUS),
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicates_are_checked_independently() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(HEAD).path("/same");
                then.status(200);
            })
            .await;

        let link = server.url("/same");
        let results = check_links(&test_client(), vec![link.clone(), link.clone(), link], 8).await;

        assert_eq!(results.len(), 3);
        assert_eq!(mock.hits_async().await, 3);
    }
}

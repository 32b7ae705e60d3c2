//! Fan-out scheduler for detail-page fetches
//!
//! This module handles:
//! - Truncating the harvested entries to the work set
//! - Spawning one fetch+extract task per work-set entry
//! - Optional global concurrency limiting via a semaphore
//! - Joining every task before results are folded
//! - Restoring chart order from entry positions
//!
//! All synchronization state lives inside a single `fan_out` call, so
//! concurrent batches never share a barrier or channel.

use crate::model::{LinkEntry, Record};
use crate::scrape::extractor::assemble_record;
use crate::scrape::fetcher::PageAccessor;
use crate::scrape::selectors::PageSelectors;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

/// A finished job: the entry position and the record extracted for it
type Completion = (usize, Record);

/// Fetches and extracts the first `limit` entries concurrently
///
/// # Arguments
///
/// * `accessor` - Page accessor shared by every task
/// * `selectors` - Compiled field selectors
/// * `entries` - Harvested entries in chart order
/// * `limit` - Maximum number of entries to process
/// * `max_concurrent` - Optional cap on in-flight fetches; `None` spawns
///   every fetch at once
///
/// # Returns
///
/// The records of every successfully fetched work-set entry, in chart order.
/// Failed entries are omitted; if every entry fails the list is empty.
pub async fn fan_out<A>(
    accessor: Arc<A>,
    selectors: Arc<PageSelectors>,
    entries: &[LinkEntry],
    limit: usize,
    max_concurrent: Option<usize>,
) -> Vec<Record>
where
    A: PageAccessor + 'static,
{
    let work_set = &entries[..limit.min(entries.len())];
    if work_set.is_empty() {
        return Vec::new();
    }

    tracing::info!(
        "Fetching {} of {} chart entries{}",
        work_set.len(),
        entries.len(),
        max_concurrent
            .map(|n| format!(" (at most {} at once)", n))
            .unwrap_or_default()
    );

    // Sized to the work set so a finishing task never waits on the channel
    let (tx, mut rx) = mpsc::channel::<Completion>(work_set.len());
    let semaphore = max_concurrent.map(|n| Arc::new(Semaphore::new(n.max(1))));
    let mut tasks = JoinSet::new();

    for entry in work_set.iter().cloned() {
        let accessor = Arc::clone(&accessor);
        let selectors = Arc::clone(&selectors);
        let semaphore = semaphore.clone();
        let tx = tx.clone();

        tasks.spawn(async move {
            let _permit = match semaphore {
                Some(semaphore) => match semaphore.acquire_owned().await {
                    Ok(permit) => Some(permit),
                    Err(_) => return,
                },
                None => None,
            };

            if let Some(record) = fetch_entry(accessor.as_ref(), &selectors, &entry).await {
                // Capacity covers the whole work set, so this never waits
                let _ = tx.send((entry.position, record)).await;
            }
        });
    }
    // Only task-owned senders remain; the channel closes when the last task ends
    drop(tx);

    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            tracing::error!("Fetch task aborted: {}", e);
        }
    }

    let mut results: HashMap<usize, Record> = HashMap::with_capacity(work_set.len());
    while let Some((position, record)) = rx.recv().await {
        results.insert(position, record);
    }

    let records: Vec<Record> = entries
        .iter()
        .take(limit)
        .filter_map(|entry| results.remove(&entry.position))
        .collect();

    tracing::info!(
        "Extracted {} records ({} entries dropped)",
        records.len(),
        work_set.len() - records.len()
    );

    records
}

/// Runs one job: fetch the entry's page and extract its record
///
/// Returns `None` when the fetch fails; the failure is logged and never
/// propagated.
async fn fetch_entry<A>(accessor: &A, selectors: &PageSelectors, entry: &LinkEntry) -> Option<Record>
where
    A: PageAccessor,
{
    tracing::debug!("Fetching {}", entry);

    match accessor.fetch(&entry.url).await {
        Ok(page) => Some(assemble_record(&page, selectors)),
        Err(e) => {
            tracing::warn!("Dropping {}: {}", entry, e);
            None
        }
    }
}

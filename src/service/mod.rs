//! Fetch-and-persist workflow.
//!
//! Drives repeated fetch-then-persist cycles against the random-image
//! endpoint and exposes the delete operations the frontend invokes. Store
//! mutation is serialized by a single-writer lock since API calls, unlike a
//! single-threaded UI event loop, can arrive concurrently.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::Repository;
use crate::errors::AppError;
use crate::http::{FetchError, HttpClient};
use crate::models::{Item, RandomImageResponse};

/// Workflow entry points for the gallery item collection.
pub struct ItemService {
    repo: Arc<Repository>,
    client: HttpClient,
    image_api_url: String,
    fetch_count: usize,
    write_lock: Mutex<()>,
}

impl ItemService {
    pub fn new(
        repo: Arc<Repository>,
        client: HttpClient,
        image_api_url: String,
        fetch_count: usize,
    ) -> Self {
        Self {
            repo,
            client,
            image_api_url,
            fetch_count,
            write_lock: Mutex::new(()),
        }
    }

    /// The ordered item list the frontend displays.
    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        self.repo.list_items().await
    }

    /// Run the configured number of fetch cycles strictly in sequence.
    ///
    /// A failed fetch is logged and skipped; the remaining cycles still run.
    /// A failed store write aborts the batch and is returned to the caller.
    /// Returns the items created.
    pub async fn add_new_items(&self) -> Result<Vec<Item>, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut created = Vec::new();
        for cycle in 1..=self.fetch_count {
            match self.fetch_image_url().await {
                Ok(url) => {
                    let item = self.repo.insert_item(url.as_deref()).await?;
                    created.push(item);
                }
                Err(e) => {
                    tracing::warn!("Fetch cycle {}/{} failed: {}", cycle, self.fetch_count, e);
                }
            }
        }

        Ok(created)
    }

    /// One fetch cycle: GET the endpoint and extract the image URL.
    ///
    /// The URL may be absent when the 200 body carries no `message` field;
    /// that is accepted, not an error.
    async fn fetch_image_url(&self) -> Result<Option<String>, FetchError> {
        let response: RandomImageResponse = self
            .client
            .request(&self.image_api_url, "GET", None, None)
            .await?;
        Ok(response.message)
    }

    /// Delete the items at the given positions of the ascending-timestamp
    /// list as it stands at call time.
    ///
    /// Any out-of-range offset rejects the whole call before anything is
    /// deleted, so a stale frontend snapshot cannot remove the wrong item.
    pub async fn delete_items(&self, offsets: &[usize]) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let items = self.repo.list_items().await?;
        let offsets: BTreeSet<usize> = offsets.iter().copied().collect();

        if let Some(&bad) = offsets.iter().find(|&&o| o >= items.len()) {
            return Err(AppError::Validation(format!(
                "Offset {} out of range for {} items",
                bad,
                items.len()
            )));
        }

        for offset in offsets {
            self.repo.delete_item(&items[offset].id).await?;
        }

        Ok(())
    }

    /// Delete every stored item and return how many were removed.
    pub async fn delete_all_items(&self) -> Result<u64, AppError> {
        let _guard = self.write_lock.lock().await;
        self.repo.delete_all_items().await
    }
}

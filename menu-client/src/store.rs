//! Catalog cache
//!
//! [`MenuStore`] mirrors the server's menu items in memory. Reads are served
//! from the mirror while it is fresh; writes go through [`MenuApi`] and the
//! returned record is reconciled into the mirror without a re-fetch.
//!
//! The lock is never held across an `.await`. A fetch marks the store as
//! loading before its first suspension point, so at most one fetch-all is in
//! flight at a time. The flag is cleared on drop, so a fetch whose future is
//! cancelled does not wedge later fetches.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::RwLock;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::{ClientResult, MenuApi};

/// Age in seconds after which the mirror is considered stale
pub const CACHE_DURATION_SECS: i64 = 5 * 60;

#[derive(Debug, Default)]
struct StoreState {
    items: Vec<MenuItem>,
    loading: bool,
    error: Option<String>,
    last_fetched: Option<DateTime<Utc>>,
}

impl StoreState {
    fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        match self.last_fetched {
            None => true,
            Some(fetched) => now - fetched > TimeDelta::seconds(CACHE_DURATION_SECS),
        }
    }

    fn replace(&mut self, item: MenuItem) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.item_id == item.item_id) {
            *slot = item;
        }
    }
}

/// Clears `loading` when the in-flight fetch finishes or is dropped
struct LoadingGuard<'a>(&'a RwLock<StoreState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.write().loading = false;
    }
}

/// In-memory catalog mirror
pub struct MenuStore<A: MenuApi> {
    api: Arc<A>,
    state: Arc<RwLock<StoreState>>,
}

impl<A: MenuApi> Clone for MenuStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: MenuApi> MenuStore<A> {
    pub fn new(api: A) -> Self {
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<A>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ========== Fetch ==========

    /// Refresh the mirror from the server.
    ///
    /// Returns immediately when another fetch is in flight, or when the mirror
    /// is fresh and non-empty and `force` is false. Failures are recorded in
    /// [`error`](Self::error) rather than returned.
    pub async fn fetch_all(&self, force: bool) {
        {
            let mut state = self.state.write();
            if state.loading {
                tracing::debug!("Menu items fetch already in flight");
                return;
            }
            if !force && !state.needs_refresh(Utc::now()) && !state.items.is_empty() {
                tracing::debug!("Using cached data");
                return;
            }
            state.loading = true;
            state.error = None;
        }
        let _loading = LoadingGuard(&self.state);

        tracing::info!("Fetching menu items from API");
        let result = self.api.get_menu_items().await;

        let mut state = self.state.write();
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Menu items fetched");
                state.items = items;
                state.last_fetched = Some(Utc::now());
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch menu items");
                state.error = Some(e.to_string());
            }
        }
    }

    // ========== Mutations ==========

    /// Create through the API and append the returned record
    pub async fn create(&self, item: &MenuItemCreate) -> ClientResult<MenuItem> {
        let created = self.api.create_menu_item(item).await.inspect_err(|e| {
            tracing::error!(error = %e, "Error creating menu item");
        })?;
        self.state.write().items.push(created.clone());
        Ok(created)
    }

    /// Update through the API and replace the local record in place
    pub async fn update(&self, item: &MenuItemUpdate) -> ClientResult<MenuItem> {
        let updated = self.api.update_menu_item(item).await.inspect_err(|e| {
            tracing::error!(id = item.item_id, error = %e, "Error updating menu item");
        })?;
        self.state.write().replace(updated.clone());
        Ok(updated)
    }

    /// Toggle the active flag through the API and replace the local record
    pub async fn update_status(&self, id: i64, is_active: bool) -> ClientResult<MenuItem> {
        let updated = self
            .api
            .update_menu_item_status(id, is_active)
            .await
            .inspect_err(|e| {
                tracing::error!(id, error = %e, "Error updating menu item status");
            })?;
        self.state.write().replace(updated.clone());
        Ok(updated)
    }

    /// Delete through the API and drop the local record
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.api.delete_menu_item(id).await.inspect_err(|e| {
            tracing::error!(id, error = %e, "Error deleting menu item");
        })?;
        self.state.write().items.retain(|i| i.item_id != id);
        Ok(())
    }

    // ========== Views ==========

    pub fn items(&self) -> Vec<MenuItem> {
        self.state.read().items.clone()
    }

    pub fn active_items(&self) -> Vec<MenuItem> {
        self.state
            .read()
            .items
            .iter()
            .filter(|i| i.is_active)
            .cloned()
            .collect()
    }

    /// Sorted distinct categories across all items
    pub fn categories(&self) -> Vec<String> {
        let state = self.state.read();
        collect_categories(state.items.iter())
    }

    /// Sorted distinct categories across active items
    pub fn active_categories(&self) -> Vec<String> {
        let state = self.state.read();
        collect_categories(state.items.iter().filter(|i| i.is_active))
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        self.state.read().last_fetched
    }

    pub fn needs_refresh(&self) -> bool {
        self.state.read().needs_refresh(Utc::now())
    }
}

fn collect_categories<'a>(items: impl Iterator<Item = &'a MenuItem>) -> Vec<String> {
    items
        .map(|i| i.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

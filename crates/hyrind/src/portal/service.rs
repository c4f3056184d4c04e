use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{NaiveDate, Utc};

use super::store::PortalStore;

/// Shares one [`PortalStore`] between request handlers. Each closure passed to
/// [`read`](Self::read) or [`write`](Self::write) runs under the store lock.
pub struct PortalService {
    store: Mutex<PortalStore>,
    pinned_today: Option<NaiveDate>,
}

impl PortalService {
    pub fn new(store: PortalStore) -> Self {
        Self {
            store: Mutex::new(store),
            pinned_today: None,
        }
    }

    /// Fix the calendar date used for billing stamps.
    pub fn pinned_to(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn read<T>(&self, f: impl FnOnce(&PortalStore) -> T) -> T {
        f(&self.lock())
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut PortalStore) -> T) -> T {
        f(&mut self.lock())
    }

    // Store commands never leave a record half-written, so a poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, PortalStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PortalService {
    fn default() -> Self {
        Self::new(PortalStore::seeded())
    }
}

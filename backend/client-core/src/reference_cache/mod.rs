//! Memoization of the two reference lists (centuries, classifications).
//!
//! A list is fetched once and kept verbatim as JSON text in a
//! [`KeyValueStore`] under a fixed key. There is no expiry: the stored
//! value is used until someone removes it from the store.
//!
//! Population of one key is serialized, so two concurrent first-time
//! requests for the same list share a single fetch. Different lists still
//! populate concurrently.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::catalog_client::CatalogClient;
use crate::error::cache::CacheError;
use crate::error::catalog_client::CatalogClientError;

use common::ErrorLocation;
use models::ReferenceEntry;

use std::collections::HashMap;
use std::future::Future;
use std::panic::Location;
use std::sync::{Arc, Mutex};

use log::{debug, info, warn};

/// The reference lists used to populate the filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceList {
    Centuries,
    Classifications,
}

impl ReferenceList {
    pub const ALL: [ReferenceList; 2] = [ReferenceList::Classifications, ReferenceList::Centuries];

    /// Key the list is stored under.
    pub fn storage_key(&self) -> &'static str {
        match self {
            ReferenceList::Centuries => "centuries",
            ReferenceList::Classifications => "classification",
        }
    }

    async fn fetch(
        self,
        client: &CatalogClient,
    ) -> Result<Vec<ReferenceEntry>, CatalogClientError> {
        match self {
            ReferenceList::Centuries => client.fetch_centuries().await,
            ReferenceList::Classifications => client.fetch_classifications().await,
        }
    }
}

pub struct ReferenceCache<S> {
    store: S,
    population_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl<S: KeyValueStore> ReferenceCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            population_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Return the list stored under `name`, or load, store and return it.
    ///
    /// `loader` runs only when the store has no decodable value for `name`.
    /// A value that no longer decodes is replaced by a fresh load. Failing
    /// to write the loaded list back is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Load`] if `loader` fails, or a store error if
    /// reading the store fails.
    pub async fn get_reference_list<F, Fut>(
        &self,
        name: &str,
        loader: F,
    ) -> Result<Vec<ReferenceEntry>, CacheError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<ReferenceEntry>, CatalogClientError>>,
    {
        let key_lock = self.population_lock(name);
        let _population = key_lock.lock().await;

        if let Some(stored) = self.store.get(name)? {
            match serde_json::from_str::<Vec<ReferenceEntry>>(&stored) {
                Ok(entries) => {
                    debug!(
                        "Reference list {name} served from store ({} entries)",
                        entries.len()
                    );
                    return Ok(entries);
                }
                Err(e) => warn!("Discarding undecodable stored reference list {name}: {e}"),
            }
        }

        let entries = loader().await.map_err(|e| CacheError::Load {
            location: ErrorLocation::from(Location::caller()),
            list: name.to_string(),
            source: e,
        })?;

        match serde_json::to_string(&entries) {
            Ok(serialized) => {
                if let Err(e) = self.store.set(name, &serialized) {
                    warn!("Failed to store reference list {name}: {e}");
                }
            }
            Err(e) => warn!("Failed to serialize reference list {name}: {e}"),
        }

        info!("Reference list {name} loaded ({} entries)", entries.len());
        Ok(entries)
    }

    /// [`Self::get_reference_list`] for one of the known lists.
    pub async fn reference_list(
        &self,
        list: ReferenceList,
        client: &CatalogClient,
    ) -> Result<Vec<ReferenceEntry>, CacheError> {
        self.get_reference_list(list.storage_key(), move || list.fetch(client))
            .await
    }

    /// Drop every known list from the store.
    pub fn clear(&self) -> Result<(), CacheError> {
        for list in ReferenceList::ALL {
            self.store.remove(list.storage_key())?;
        }
        info!("Reference cache cleared");
        Ok(())
    }

    fn population_lock(&self, name: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self
            .population_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(locks.entry(name.to_string()).or_default())
    }
}

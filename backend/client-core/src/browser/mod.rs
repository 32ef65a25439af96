//! Search-and-browse state machine.
//!
//! The [`Browser`] owns the current [`View`] and moves it between idle,
//! list and detail states in response to user operations. Every
//! operation that fetches takes a ticket from a generation counter; when
//! its response arrives it is applied only if no newer operation has
//! started since, so overlapping searches resolve to the most recent one
//! rather than to whichever response happened to arrive last.

pub mod view;

pub use view::{FilterOptions, Filters, Outcome, PageDirection, SelectControl, View};

use crate::busy::BusyIndicator;
use crate::catalog_client::{CatalogClient, SearchQuery};
use crate::error::cache::CacheError;
use crate::reference_cache::{KeyValueStore, ReferenceCache, ReferenceList};
use crate::render::{render_detail, render_list};

use models::ReferenceEntry;

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, error, info, warn};
use tokio::sync::RwLock;
use url::Url;

/// Whether an empty result should replace the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Search,
    Pagination,
    DrillDown,
}

pub struct Browser<S> {
    client: CatalogClient,
    cache: ReferenceCache<S>,
    busy: BusyIndicator,
    generation: AtomicU64,
    view: RwLock<View>,
    filter_options: RwLock<FilterOptions>,
    page_size: Option<u32>,
}

impl<S: KeyValueStore> Browser<S> {
    pub fn new(client: CatalogClient, cache: ReferenceCache<S>) -> Self {
        Self {
            client,
            cache,
            busy: BusyIndicator::new(),
            generation: AtomicU64::new(0),
            view: RwLock::new(View::Idle),
            filter_options: RwLock::new(FilterOptions::default()),
            page_size: None,
        }
    }

    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn cache(&self) -> &ReferenceCache<S> {
        &self.cache
    }

    pub fn busy(&self) -> &BusyIndicator {
        &self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub async fn view(&self) -> View {
        self.view.read().await.clone()
    }

    pub async fn filter_options(&self) -> FilterOptions {
        self.filter_options.read().await.clone()
    }

    /// Populate both filter controls from the reference cache.
    ///
    /// The two lists load concurrently and independently: a failed list is
    /// logged and leaves its control empty without affecting the other.
    pub async fn startup(&self) -> FilterOptions {
        let _busy = self.busy.acquire();

        let (classifications, centuries) = tokio::join!(
            self.cache
                .reference_list(ReferenceList::Classifications, &self.client),
            self.cache
                .reference_list(ReferenceList::Centuries, &self.client),
        );

        let options = FilterOptions {
            classifications: select_control(ReferenceList::Classifications, classifications),
            centuries: select_control(ReferenceList::Centuries, centuries),
        };

        info!(
            "Filters ready: {} classifications, {} centuries",
            options.classifications.options.len(),
            options.centuries.options.len()
        );

        *self.filter_options.write().await = options.clone();
        options
    }

    /// Run a search built from the filters and show the first page.
    pub async fn search(&self, filters: &Filters) -> Outcome {
        let query = SearchQuery {
            classification: filters.classification.clone(),
            century: filters.century.clone(),
            keyword: filters.keyword.clone(),
            size: self.page_size,
        };

        let url = match self.client.search_url(&query) {
            Ok(url) => url,
            Err(e) => {
                error!("Failed to build search URL: {e}");
                return Outcome::Failed;
            }
        };

        self.load_list(url, Origin::Search).await
    }

    /// Follow the current list's next or previous link.
    pub async fn paginate(&self, direction: PageDirection) -> Outcome {
        let link = {
            let view = self.view.read().await;
            let Some(list) = view.list() else {
                debug!("Pagination requested with no list shown");
                return Outcome::Ignored;
            };
            let control = match direction {
                PageDirection::Next => &list.next,
                PageDirection::Previous => &list.previous,
            };
            match control.url() {
                Some(link) => link.to_string(),
                None => {
                    debug!("Pagination control {direction:?} is disabled");
                    return Outcome::Ignored;
                }
            }
        };

        let url = match self.client.parse_link(&link) {
            Ok(url) => url,
            Err(e) => {
                error!("Server supplied an invalid {direction:?} link: {e}");
                return Outcome::Failed;
            }
        };

        self.load_list(url, Origin::Pagination).await
    }

    /// Switch from the list to the detail view of one preview.
    pub async fn select_preview(&self, index: usize) -> Outcome {
        let mut view = self.view.write().await;

        let Some(list) = view.list().cloned() else {
            return Outcome::Ignored;
        };
        let Some(preview) = list.preview(index) else {
            debug!("No preview at index {index}");
            return Outcome::Ignored;
        };

        let detail = render_detail(&preview.record);
        self.generation.fetch_add(1, Ordering::SeqCst);
        debug!("Showing detail for {}", detail.title);
        *view = View::Detail {
            list: Some(list),
            detail,
        };
        Outcome::Rendered
    }

    /// Re-query the catalog by the index-th search link of the detail view.
    ///
    /// A query that matches nothing leaves the view as it is and reports
    /// [`Outcome::NothingFound`].
    pub async fn follow_link(&self, index: usize) -> Outcome {
        let link = {
            let view = self.view.read().await;
            view.detail()
                .and_then(|detail| detail.link(index))
                .map(|(attribute, value)| (attribute, value.to_string()))
        };

        let Some((attribute, value)) = link else {
            debug!("No search link at index {index}");
            return Outcome::Ignored;
        };

        let url = match self.client.attribute_url(attribute, &value) {
            Ok(url) => url,
            Err(e) => {
                error!("Failed to build {} link URL: {e}", attribute.query_key());
                return Outcome::Failed;
            }
        };

        self.load_list(url, Origin::DrillDown).await
    }

    /// Return from the detail view to the list it was opened from.
    pub async fn back(&self) -> Outcome {
        let mut view = self.view.write().await;

        let list = match &*view {
            View::Detail {
                list: Some(list), ..
            } => list.clone(),
            _ => return Outcome::Ignored,
        };

        self.generation.fetch_add(1, Ordering::SeqCst);
        *view = View::List(list);
        Outcome::Rendered
    }

    async fn load_list(&self, url: Url, origin: Origin) -> Outcome {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _busy = self.busy.acquire();

        let page = match self.client.fetch_objects(&url).await {
            Ok(page) => page,
            Err(e) => {
                error!("{origin:?} fetch failed: {e}");
                return Outcome::Failed;
            }
        };

        // Hold the write lock across the check so no newer result lands in between.
        let mut view = self.view.write().await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!("{origin:?} result #{ticket} superseded by a newer operation");
            return Outcome::Superseded;
        }

        if origin == Origin::DrillDown && page.is_empty() {
            info!("Drill-down query returned no records");
            return Outcome::NothingFound;
        }

        *view = View::List(render_list(&page));
        Outcome::Rendered
    }
}

fn select_control(
    list: ReferenceList,
    entries: Result<Vec<ReferenceEntry>, CacheError>,
) -> SelectControl {
    match entries {
        Ok(entries) => SelectControl::from_entries(&entries),
        Err(e) => {
            warn!("Reference list {} unavailable: {e}", list.storage_key());
            SelectControl::from_entries(&[])
        }
    }
}

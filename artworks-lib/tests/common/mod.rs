//! Shared test fixtures.

#![allow(dead_code)]

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use artworks_lib::api::ListingSource;
use artworks_lib::error::FetchError;
use artworks_lib::model::Artwork;
use artworks_lib::model::ListingPage;
use artworks_lib::model::Page;
use artworks_lib::model::PaginationMeta;
use artworks_lib::session::SessionHandle;
use artworks_lib::session::ViewModel;
use async_trait::async_trait;
use tokio::sync::Notify;

/// Holds back one fetch until released, and reports when it was served.
#[derive(Default)]
pub struct PageGate {
    release: Notify,
    served: Notify,
}

impl PageGate {
    /// Let the held fetch return.
    pub fn release(&self) {
        self.release.notify_one();
    }

    /// Wait until the held fetch has returned its result.
    pub async fn served(&self) {
        self.served.notified().await;
    }
}

/// In-memory listing with artworks numbered `1..=total`.
pub struct MemorySource {
    items: Vec<Artwork>,
    page_size: usize,
    gates: Mutex<HashMap<u32, Arc<PageGate>>>,
    failures: Mutex<HashSet<u32>>,
}

impl MemorySource {
    pub fn new(total: u64, page_size: usize) -> Arc<Self> {
        Arc::new(Self {
            items: (1..=total)
                .map(|id| Artwork::new(id, format!("Artwork {id}")))
                .collect(),
            page_size,
            gates: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashSet::new()),
        })
    }

    /// Hold the next fetch of `page` until the returned gate is released.
    pub fn gate(&self, page: u32) -> Arc<PageGate> {
        let gate = Arc::new(PageGate::default());
        self.gates.lock().unwrap().insert(page, Arc::clone(&gate));
        gate
    }

    /// Make the next fetch of `page` fail with HTTP 500.
    pub fn fail_once(&self, page: u32) {
        self.failures.lock().unwrap().insert(page);
    }
}

#[async_trait]
impl ListingSource for MemorySource {
    fn page_size(&self) -> usize {
        self.page_size
    }

    async fn fetch(&self, page: u32) -> Result<ListingPage, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidPage(page));
        }

        let gate = self.gates.lock().unwrap().remove(&page);
        if let Some(gate) = &gate {
            gate.release.notified().await;
        }

        let result = if self.failures.lock().unwrap().remove(&page) {
            Err(FetchError::http(500, "Internal Server Error"))
        } else {
            let start = (page as usize - 1) * self.page_size;
            let end = (start + self.page_size).min(self.items.len());
            let items = self.items.get(start..end).unwrap_or_default().to_vec();
            let total = self.items.len() as u64;
            Ok(ListingPage {
                page: Page::new(page, items),
                pagination: PaginationMeta {
                    total,
                    limit: self.page_size as u64,
                    offset: start as u64,
                    total_pages: total.div_ceil(self.page_size as u64),
                    current_page: u64::from(page),
                },
            })
        };

        if let Some(gate) = gate {
            gate.served.notify_one();
        }
        result
    }
}

/// Wait until `page` is loaded and no request is outstanding.
pub async fn wait_for_page(handle: &SessionHandle, page: u64) -> ViewModel {
    wait_until(handle, |view| {
        !view.is_loading && view.pagination.is_some_and(|p| p.current_page == page)
    })
    .await
}

/// Wait until a published snapshot satisfies `condition`.
pub async fn wait_until(
    handle: &SessionHandle,
    condition: impl FnMut(&ViewModel) -> bool,
) -> ViewModel {
    let mut views = handle.subscribe();
    let view = tokio::time::timeout(Duration::from_secs(5), views.wait_for(condition))
        .await
        .expect("timed out waiting for session state")
        .expect("session loop stopped");
    view.clone()
}

pub fn ids(items: &[Artwork]) -> Vec<u64> {
    items.iter().map(|artwork| artwork.id).collect()
}

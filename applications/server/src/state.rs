/// Shared application state
use crate::config::ViewSettings;
use std::sync::Arc;
use tubelist_storage::LocalStore;

/// Application state shared across all handlers
///
/// Holds only the connection pool and read-only settings; every request
/// borrows its own connection from the pool.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LocalStore>,
    pub views: Arc<ViewSettings>,
}

impl AppState {
    pub fn new(store: Arc<LocalStore>, views: ViewSettings) -> Self {
        Self {
            store,
            views: Arc::new(views),
        }
    }

    pub fn page_size(&self) -> usize {
        self.views.page_size
    }
}

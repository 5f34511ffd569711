use std::sync::Arc;

use service::directory::DirectoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DirectoryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }
}

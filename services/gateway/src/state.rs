use crate::store::RecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// State backed by a store holding the startup seed data
    pub fn seeded() -> Self {
        Self::new(RecordStore::seeded())
    }
}

use std::sync::{Arc, Mutex};

use crate::domain::CatalogState;

use super::{events::CatalogEvent, reducer::reduce};

/// Cloneable handle to the catalog state. Every `apply` folds one event
/// through the pure reducer under the lock, so no reader ever observes a
/// half-applied update.
#[derive(Clone, Default)]
pub struct CatalogStore {
    inner: Arc<Mutex<CatalogState>>,
}

impl CatalogStore {
    pub fn new(state: CatalogState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> CatalogState {
        self.inner.lock().unwrap().clone()
    }

    pub fn apply(&self, ev: CatalogEvent) {
        let mut guard = self.inner.lock().unwrap();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }
}

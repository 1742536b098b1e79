use std::sync::Arc;

use crate::{photos::PhotoListProvider, store::KvStore};

/// Shared handles injected into every handler. The store is opened once
/// at startup and never swapped; tests build the same state around an
/// in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
    pub photos: PhotoListProvider,
}

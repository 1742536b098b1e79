use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One micro-journal entry. Immutable once stored; only removed when the
/// capped collection evicts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiiEntry {
    pub id: String,
    pub content: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

use chrono::Utc;

use crate::{errors::ApiError, models::TiiEntry, store::KvStore};

/// KV key for the single document holding the whole journal.
pub const ENTRIES_KEY: &str = "tii-entries";

pub const MAX_CONTENT_CHARS: usize = 500;
pub const MAX_AUTHOR_CHARS: usize = 20;
pub const MAX_ENTRIES: usize = 100;
pub const DEFAULT_LIST_LIMIT: usize = 50;
pub const ANONYMOUS_AUTHOR: &str = "anonymous";

async fn load_entries(store: &dyn KvStore) -> Result<Vec<TiiEntry>, ApiError> {
    match store.get(ENTRIES_KEY).await? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Returns up to `limit` entries, newest first. The stored document is
/// already newest-first (entries are pushed to the front on append), so
/// no sorting happens here. Side-effect free.
pub async fn list_entries(
    store: &dyn KvStore,
    limit: usize,
) -> Result<Vec<TiiEntry>, ApiError> {
    let mut entries = load_entries(store).await?;
    entries.truncate(limit);
    Ok(entries)
}

/// Appends a journal entry and returns it together with the stored
/// collection size after capping.
///
/// Content and author are trimmed, then truncated to their limits rather
/// than rejected; only content that trims to nothing is an error. A
/// missing or empty author becomes [`ANONYMOUS_AUTHOR`]. Once the
/// collection exceeds [`MAX_ENTRIES`] the oldest entries are dropped.
pub async fn append_entry(
    store: &dyn KvStore,
    content: &str,
    author: Option<&str>,
) -> Result<(TiiEntry, usize), ApiError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ApiError::InvalidArgument(
            "Content must not be empty".to_string(),
        ));
    }

    let author = author
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .unwrap_or(ANONYMOUS_AUTHOR);

    let now = Utc::now();
    let entry = TiiEntry {
        id: now.timestamp_millis().to_string(),
        content: truncate_chars(content, MAX_CONTENT_CHARS),
        author: truncate_chars(author, MAX_AUTHOR_CHARS),
        timestamp: now,
    };

    // Same single-document read-modify-write as the vote store.
    let mut entries = load_entries(store).await?;
    entries.insert(0, entry.clone());
    entries.truncate(MAX_ENTRIES);

    store
        .put(ENTRIES_KEY, serde_json::to_string(&entries)?)
        .await?;

    Ok((entry, entries.len()))
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

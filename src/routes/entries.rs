use axum::extract::State;
use tracing::info;
use validator::Validate;

use crate::{
    dto::{EntriesResponse, ListEntriesParams, NewEntryRequest, NewEntryResponse},
    entries,
    errors::ApiError,
    extract::{Json, Query},
    state::AppState,
};

/// GET /entries?limit=N
pub async fn get_entries(
    State(state): State<AppState>,
    Query(params): Query<ListEntriesParams>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let entries = entries::list_entries(state.store.as_ref(), params.limit).await?;

    Ok(Json(EntriesResponse {
        success: true,
        entries,
    }))
}

/// POST /entries
/// Body: { "content": "...", "author": "..." (optional) }
pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<Json<NewEntryResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

    let (entry, total_entries) =
        entries::append_entry(state.store.as_ref(), &payload.content, payload.author.as_deref())
            .await?;

    info!("New TII entry added by {}", entry.author);

    Ok(Json(NewEntryResponse {
        success: true,
        entry,
        total_entries,
    }))
}

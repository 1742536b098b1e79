use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{dto::PhotosResponse, errors::ApiError, state::AppState};

/// GET /photos
pub async fn get_photos(State(state): State<AppState>) -> Result<Response, ApiError> {
    let photos = state.photos.list_photos().await?;
    let total_count = photos.len();

    Ok((
        [(header::CACHE_CONTROL, "public, max-age=3600")],
        Json(PhotosResponse {
            success: true,
            photos,
            total_count,
        }),
    )
        .into_response())
}

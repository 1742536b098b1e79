use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;
use validator::Validate;

use crate::{
    dto::{CastVoteRequest, CastVoteResponse, VotesResponse},
    errors::ApiError,
    extract::Json,
    state::AppState,
    votes,
};

/// GET /votes
pub async fn get_votes(State(state): State<AppState>) -> Result<Response, ApiError> {
    let votes = votes::get_all_votes(state.store.as_ref()).await?;

    Ok((
        [(header::CACHE_CONTROL, "public, max-age=60")],
        Json(VotesResponse {
            success: true,
            votes,
        }),
    )
        .into_response())
}

/// POST /votes
/// Body: { "pollId": "...", "voteType": "like" | "dislike" }
pub async fn cast_vote(
    State(state): State<AppState>,
    Json(payload): Json<CastVoteRequest>,
) -> Result<Json<CastVoteResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

    let current_votes =
        votes::cast_vote(state.store.as_ref(), &payload.poll_id, &payload.vote_type).await?;

    info!(
        "Poll {} voted: {} (likes: {}, dislikes: {})",
        payload.poll_id, payload.vote_type, current_votes.likes, current_votes.dislikes
    );

    Ok(Json(CastVoteResponse {
        success: true,
        poll_id: payload.poll_id,
        vote_type: payload.vote_type,
        current_votes,
    }))
}

use serde::Deserialize;
use validator::Validate;

// Missing fields default to empty so the length checks report them with
// the usual error envelope instead of a body-deserialization rejection.

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "pollId is required"))]
    pub poll_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "voteType is required"))]
    pub vote_type: String,
}

#[derive(Debug, Validate, Deserialize)]
pub struct NewEntryRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub author: Option<String>,
}

/// Query parameters for GET /entries
#[derive(Debug, Deserialize)]
pub struct ListEntriesParams {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    crate::entries::DEFAULT_LIST_LIMIT
}

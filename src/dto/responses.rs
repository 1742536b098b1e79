use std::collections::HashMap;

use serde::Serialize;

use crate::models::{PhotoDescriptor, TiiEntry, VoteCounts};

#[derive(Debug, Serialize)]
pub struct VotesResponse {
    pub success: bool,
    pub votes: HashMap<String, VoteCounts>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteResponse {
    pub success: bool,
    pub poll_id: String,
    pub vote_type: String,
    pub current_votes: VoteCounts,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub success: bool,
    pub entries: Vec<TiiEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntryResponse {
    pub success: bool,
    pub entry: TiiEntry,
    pub total_entries: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotosResponse {
    pub success: bool,
    pub photos: Vec<PhotoDescriptor>,
    pub total_count: usize,
}

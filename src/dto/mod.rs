mod requests;
mod responses;

pub use requests::{CastVoteRequest, ListEntriesParams, NewEntryRequest};
pub use responses::{
    CastVoteResponse, EntriesResponse, NewEntryResponse, PhotosResponse, VotesResponse,
};

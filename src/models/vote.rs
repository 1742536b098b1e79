use serde::{Deserialize, Serialize};

/// Like/dislike counters for one poll. Created implicitly at zero on the
/// first vote; counters only ever move up by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCounts {
    pub likes: u64,
    pub dislikes: u64,
}

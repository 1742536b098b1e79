use std::collections::HashMap;

use crate::{errors::ApiError, models::VoteCounts, store::KvStore};

/// KV key for the single document holding every poll's counters.
pub const VOTES_KEY: &str = "tanka-votes";

pub const VOTE_LIKE: &str = "like";
pub const VOTE_DISLIKE: &str = "dislike";

/// Returns the counters for every poll, empty when nothing has been
/// voted on yet. Side-effect free.
pub async fn get_all_votes(
    store: &dyn KvStore,
) -> Result<HashMap<String, VoteCounts>, ApiError> {
    match store.get(VOTES_KEY).await? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(HashMap::new()),
    }
}

/// Increments one counter for `poll_id` and returns the post-increment
/// pair. The record is created at zero on first vote.
///
/// Read-modify-write over one shared document: two concurrent casts can
/// read the same snapshot and the later put wins, losing one increment.
pub async fn cast_vote(
    store: &dyn KvStore,
    poll_id: &str,
    vote_type: &str,
) -> Result<VoteCounts, ApiError> {
    if poll_id.is_empty() {
        return Err(ApiError::InvalidArgument("pollId is required".to_string()));
    }
    if vote_type != VOTE_LIKE && vote_type != VOTE_DISLIKE {
        return Err(ApiError::InvalidArgument(format!(
            "Unknown voteType: {}",
            vote_type
        )));
    }

    let mut votes = get_all_votes(store).await?;
    let counts = votes.entry(poll_id.to_string()).or_default();
    if vote_type == VOTE_LIKE {
        counts.likes += 1;
    } else {
        counts.dislikes += 1;
    }
    let updated = counts.clone();

    store.put(VOTES_KEY, serde_json::to_string(&votes)?).await?;

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn empty_backend_yields_empty_mapping() {
        let store = MemoryStore::new();
        let votes = get_all_votes(&store).await.unwrap();
        assert!(votes.is_empty());
    }

    #[tokio::test]
    async fn sequential_likes_count_exactly() {
        let store = MemoryStore::new();
        for _ in 0..7 {
            cast_vote(&store, "tanka-001", VOTE_LIKE).await.unwrap();
        }

        let votes = get_all_votes(&store).await.unwrap();
        let counts = &votes["tanka-001"];
        assert_eq!(counts.likes, 7);
        assert_eq!(counts.dislikes, 0);
    }

    #[tokio::test]
    async fn first_vote_creates_record_from_zero() {
        let store = MemoryStore::new();
        let counts = cast_vote(&store, "tanka-002", VOTE_DISLIKE).await.unwrap();
        assert_eq!(counts, VoteCounts { likes: 0, dislikes: 1 });
    }

    #[tokio::test]
    async fn polls_are_counted_independently() {
        let store = MemoryStore::new();
        cast_vote(&store, "a", VOTE_LIKE).await.unwrap();
        cast_vote(&store, "b", VOTE_DISLIKE).await.unwrap();
        cast_vote(&store, "b", VOTE_DISLIKE).await.unwrap();

        let votes = get_all_votes(&store).await.unwrap();
        assert_eq!(votes["a"], VoteCounts { likes: 1, dislikes: 0 });
        assert_eq!(votes["b"], VoteCounts { likes: 0, dislikes: 2 });
    }

    #[tokio::test]
    async fn bogus_vote_type_leaves_mapping_unchanged() {
        let store = MemoryStore::new();
        cast_vote(&store, "p1", VOTE_LIKE).await.unwrap();

        let err = cast_vote(&store, "p1", "bogus").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));

        let votes = get_all_votes(&store).await.unwrap();
        assert_eq!(votes["p1"], VoteCounts { likes: 1, dislikes: 0 });
    }

    #[tokio::test]
    async fn empty_poll_id_is_rejected() {
        let store = MemoryStore::new();
        let err = cast_vote(&store, "", VOTE_LIKE).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        assert!(get_all_votes(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_stored_document_is_internal() {
        let store = MemoryStore::new();
        store.put(VOTES_KEY, "not json".to_string()).await.unwrap();

        let err = get_all_votes(&store).await.unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoSource {
    Local,
    Curated,
}

/// Recomputed per request from the photo directory and the curated URL
/// list; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoDescriptor {
    pub id: String,
    pub url: String,
    pub title: String,
    pub source: PhotoSource,
}

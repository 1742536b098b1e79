use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{
    errors::ApiError,
    models::{PhotoDescriptor, PhotoSource},
};

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Lists photo descriptors from a local image directory plus a curated
/// set of configured URLs. Nothing here is persisted; every request
/// recomputes the listing.
#[derive(Debug, Clone)]
pub struct PhotoListProvider {
    photos_dir: PathBuf,
    curated_urls: Vec<String>,
}

impl PhotoListProvider {
    pub fn new(photos_dir: impl Into<PathBuf>, curated_urls: Vec<String>) -> Self {
        Self {
            photos_dir: photos_dir.into(),
            curated_urls,
        }
    }

    /// Curated URLs first, in configured order, then local files sorted
    /// by filename. Deduplicated by URL, first occurrence wins.
    pub async fn list_photos(&self) -> Result<Vec<PhotoDescriptor>, ApiError> {
        let mut photos: Vec<PhotoDescriptor> = self
            .curated_urls
            .iter()
            .map(|url| curated_descriptor(url))
            .collect();

        let mut files = self.scan_directory().await?;
        files.sort();
        photos.extend(files.iter().map(|file| local_descriptor(file)));

        let mut seen = HashSet::new();
        photos.retain(|photo| seen.insert(photo.url.clone()));

        Ok(photos)
    }

    async fn scan_directory(&self) -> Result<Vec<String>, ApiError> {
        // A missing or unreadable directory is an empty listing, not an
        // error; the curated list still renders.
        let mut dir = match tokio::fs::read_dir(&self.photos_dir).await {
            Ok(dir) => dir,
            Err(err) => {
                warn!(
                    "Photo directory {} not readable: {}",
                    self.photos_dir.display(),
                    err
                );
                return Ok(Vec::new());
            }
        };

        let mut files = Vec::new();
        loop {
            let item = dir
                .next_entry()
                .await
                .map_err(|e| ApiError::Internal(format!("Photo directory scan failed: {}", e)))?;
            let Some(item) = item else { break };

            let file_type = item
                .file_type()
                .await
                .map_err(|e| ApiError::Internal(format!("Photo directory scan failed: {}", e)))?;
            if !file_type.is_file() {
                continue;
            }

            let name = item.file_name().to_string_lossy().into_owned();
            if is_image(&name) {
                files.push(name);
            }
        }

        Ok(files)
    }
}

fn is_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn local_descriptor(filename: &str) -> PhotoDescriptor {
    let id = Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());

    PhotoDescriptor {
        title: id.clone(),
        id,
        url: format!("/photos/{}", filename),
        source: PhotoSource::Local,
    }
}

fn curated_descriptor(url: &str) -> PhotoDescriptor {
    let name = url
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(url);
    let id = name.split('.').next().unwrap_or(name).to_string();

    PhotoDescriptor {
        title: format!("sogoods photo {}", id),
        id,
        url: url.to_string(),
        source: PhotoSource::Curated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_photo_dir(files: &[&str]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "sogoods-photos-{}-{}",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        for file in files {
            tokio::fs::write(dir.join(file), b"img").await.unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn missing_directory_yields_curated_list_only() {
        let provider = PhotoListProvider::new(
            "/nonexistent/sogoods-photos",
            vec!["https://example.com/photos/1234.jpg".to_string()],
        );

        let photos = provider.list_photos().await.unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id, "1234");
        assert_eq!(photos[0].source, PhotoSource::Curated);
        assert_eq!(photos[0].title, "sogoods photo 1234");
    }

    #[tokio::test]
    async fn scan_filters_extensions_and_sorts_by_filename() {
        let dir = temp_photo_dir(&["b.jpg", "a.PNG", "notes.txt", "c.webp"]).await;
        let provider = PhotoListProvider::new(&dir, Vec::new());

        let photos = provider.list_photos().await.unwrap();
        let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert!(photos.iter().all(|p| p.source == PhotoSource::Local));
        assert_eq!(photos[0].url, "/photos/a.PNG");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn curated_comes_first_and_urls_are_deduplicated() {
        let dir = temp_photo_dir(&["z.jpg"]).await;
        let provider = PhotoListProvider::new(
            &dir,
            vec![
                "https://example.com/p/1.jpg".to_string(),
                "https://example.com/p/1.jpg".to_string(),
                "https://example.com/p/2.jpg".to_string(),
            ],
        );

        let photos = provider.list_photos().await.unwrap();
        let urls: Vec<&str> = photos.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://example.com/p/1.jpg",
                "https://example.com/p/2.jpg",
                "/photos/z.jpg"
            ]
        );

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}

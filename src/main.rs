use std::{env, sync::Arc};

use sogoods_api::{app, photos::PhotoListProvider, state::AppState, store::MemoryStore};
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let photos_dir = env::var("PHOTOS_DIR").unwrap_or_else(|_| "photos".to_string());
    let curated_urls: Vec<String> = env::var("CURATED_PHOTO_URLS")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    // One store handle per process, opened at startup and never swapped.
    let state = AppState {
        store: Arc::new(MemoryStore::new()),
        photos: PhotoListProvider::new(photos_dir, curated_urls),
    };

    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();

    info!("Server running on http://{}", bind_addr);
    info!("API Endpoints:");
    info!("  GET    /health   - Health check");
    info!("  GET    /votes    - All vote counts");
    info!("  POST   /votes    - Cast a like/dislike vote");
    info!("  GET    /entries  - Recent journal entries");
    info!("  POST   /entries  - Add a journal entry");
    info!("  GET    /photos   - Photo listing");

    axum::serve(listener, app).await.unwrap();
}

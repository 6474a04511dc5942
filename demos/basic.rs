//! Basic example demonstrating the Pexels API client.
//!
//! Run with:
//! ```
//! PEXELS_API_KEY=your-key cargo run --example basic
//! ```

use pexkit::{
    ApiResult, Collection, CollectionMediaQuery, CollectionQuery, Get, List, MediaItem,
    PaginationParams, PexKit, Photo, PhotoQuery,
};

#[tokio::main]
async fn main() -> pexkit::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Pexels client...");
    let client = PexKit::from_env()?;
    println!("Photos endpoint: {}", client.config().photos_base_url());

    // Search the first page of photos
    println!("\n--- Searching Photos ---");
    let query = PhotoQuery::search("nature")?;
    let photos = match Photo::list_page(&client, &query, PaginationParams::new(1, 10)?).await {
        ApiResult::Success { data, rate_limit } => {
            println!(
                "Found {} photos ({} requests left this window)",
                data.total_results, rate_limit.remaining
            );
            data
        }
        ApiResult::Failure(err) => {
            eprintln!("Search failed: {err}");
            client.shutdown().await;
            return Ok(());
        }
    };

    for photo in &photos {
        println!("  - {} by {}", photo.id, photo.photographer);
    }

    // Get a specific photo (using the first one from the list)
    if let Some(first) = photos.items.first() {
        println!("\n--- Photo Details ---");
        let photo = Photo::get(&client, first.id).await.into_result()?;
        println!("Photo: {}", photo.url);
        println!("  Size: {}x{}", photo.width, photo.height);
        println!("  Alt: {}", photo.alt);
        println!("  Original: {}", photo.src.original);
    }

    // Follow the next page link
    if let Some(next) = Photo::next_page(&client, &photos).await {
        let next = next.unwrap_or_else(|err| {
            eprintln!("Next page failed: {err}");
            photos.clone()
        });
        println!("\nPage {} has {} more photos", next.page, next.len());
    }

    // Walk the first featured collection, including media kinds we don't model
    println!("\n--- Featured Collections ---");
    let collections = Collection::list_page(
        &client,
        &CollectionQuery::Featured,
        PaginationParams::new(1, 5)?,
    )
    .await
    .into_result()?;

    if let Some(collection) = collections.items.first() {
        println!("Collection: {} ({} items)", collection.title, collection.media_count);
        let media = MediaItem::list_page(
            &client,
            &CollectionMediaQuery::new(collection.id.clone())?,
            PaginationParams::default(),
        )
        .await
        .into_result()?;

        for item in &media {
            println!("  - {} {} {}", item.type_tag(), item.id(), item.url());
        }
    }

    client.shutdown().await;
    println!("\nDone!");
    Ok(())
}

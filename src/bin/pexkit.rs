//! Pexels API CLI binary.
//!
//! A command-line interface for searching the Pexels API.

use clap::Parser;
use pexkit::cli::{Cli, CollectionScope, Command, Entity, FilterArgs, SearchTarget};
use pexkit::{
    ApiResult, Collection, CollectionMediaQuery, CollectionQuery, Color, Config, Get, List,
    LogLevel, MediaItem, Page, PaginationParams, PexKit, Photo, PhotoFilters, PhotoQuery,
    PrettyPrint, Video, VideoFilters, VideoQuery,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = match build_client(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set PEXELS_API_KEY environment variable or pass --api-key");
            return ExitCode::FAILURE;
        }
    };

    let outcome = run(&client, cli).await;
    client.shutdown().await;

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();
}

fn build_client(cli: &Cli) -> pexkit::Result<PexKit> {
    let api_key = cli.api_key.clone().ok_or_else(|| {
        pexkit::Error::ConfigMissing("PEXELS_API_KEY environment variable not set".to_string())
    })?;
    let log_level = match cli.verbose {
        0 => LogLevel::None,
        1 => LogLevel::Headers,
        _ => LogLevel::Body,
    };
    PexKit::new(Config::builder(api_key).log_level(log_level).build()?)
}

async fn run(client: &PexKit, cli: Cli) -> pexkit::Result<()> {
    let pagination = pagination(cli.page, cli.per_page)?;

    match cli.command {
        Command::Search {
            target,
            query,
            color,
            filters,
        } => {
            let color = color.as_deref();
            handle_search(client, target, query, color, filters, pagination, cli.json).await
        }
        Command::Curated => {
            let query = PhotoQuery::curated();
            let page = checked(Photo::list_page(client, &query, pagination).await)?;
            output_page(&page, cli.json, |p| PhotoRow::from(p))
        }
        Command::Popular { filters } => {
            filters.reject_search_only()?;
            let query = VideoQuery::popular(VideoFilters::from(filters))?;
            let page = checked(Video::list_page(client, &query, pagination).await)?;
            output_page(&page, cli.json, |v| VideoRow::from(v))
        }
        Command::Get { entity, id } => handle_get(client, entity, id, cli.json).await,
        Command::Collections { scope } => {
            let query = match scope {
                CollectionScope::Featured => CollectionQuery::Featured,
                CollectionScope::Mine => CollectionQuery::Mine,
            };
            let page = checked(Collection::list_page(client, &query, pagination).await)?;
            output_page(&page, cli.json, |c| CollectionRow::from(c))
        }
        Command::Collection { id, media_type } => {
            let mut query = CollectionMediaQuery::new(id)?;
            if let Some(media_type) = media_type {
                query = query.media_type(media_type);
            }
            let page = checked(MediaItem::list_page(client, &query, pagination).await)?;
            output_page(&page, cli.json, |m| MediaRow::from(m))
        }
    }
}

async fn handle_search(
    client: &PexKit,
    target: SearchTarget,
    query: String,
    color: Option<&str>,
    filters: FilterArgs,
    pagination: PaginationParams,
    json: bool,
) -> pexkit::Result<()> {
    match target {
        SearchTarget::Photos => {
            filters.reject_video_only()?;
            let query = PhotoQuery::search_with(query, photo_filters(color, &filters)?)?;
            let page = checked(Photo::list_page(client, &query, pagination).await)?;
            output_page(&page, json, |p| PhotoRow::from(p))
        }
        SearchTarget::Videos => {
            if color.is_some() {
                return Err(pexkit::Error::InvalidArgument(
                    "--color applies to photo search only".to_string(),
                ));
            }
            let query = VideoQuery::search(query, VideoFilters::from(filters))?;
            let page = checked(Video::list_page(client, &query, pagination).await)?;
            output_page(&page, json, |v| VideoRow::from(v))
        }
    }
}

async fn handle_get(client: &PexKit, entity: Entity, id: u64, json: bool) -> pexkit::Result<()> {
    match entity {
        Entity::Photo => {
            let photo = checked(Photo::get(client, id).await)?;
            output_single(&photo, json)
        }
        Entity::Video => {
            let video = checked(Video::get(client, id).await)?;
            output_single(&video, json)
        }
    }
}

fn pagination(page: Option<u32>, per_page: Option<u32>) -> pexkit::Result<PaginationParams> {
    let params = PaginationParams::page(page.unwrap_or(1))?;
    match per_page {
        Some(per_page) => params.with_per_page(per_page),
        None => Ok(params),
    }
}

fn photo_filters(color: Option<&str>, args: &FilterArgs) -> pexkit::Result<PhotoFilters> {
    let mut filters = match color {
        None => PhotoFilters::default(),
        Some(value) => match value.parse::<Color>() {
            Ok(color) => PhotoFilters::with_color(color),
            Err(_) => PhotoFilters::with_hex_color(value.trim_start_matches('#'))?,
        },
    };
    filters.orientation = args.orientation;
    filters.size = args.size;
    filters.locale = args.locale;
    Ok(filters)
}

/// Log the response metadata, then switch to `?` propagation.
fn checked<T>(result: ApiResult<T>) -> pexkit::Result<T> {
    if let Some(rate_limit) = result.rate_limit() {
        tracing::debug!("{}", rate_limit.pretty_print());
    }
    let result = result.on_failure(|err| {
        tracing::debug!(status = ?err.status_code(), error = %err, "request failed");
    });
    Ok(result.into_result()?)
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> pexkit::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_page<T, R, F>(page: &Page<T>, json: bool, to_row: F) -> pexkit::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        let rows: Vec<R> = page.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        if page.has_next() {
            println!(
                "\nPage {}/{} ({} total items)",
                page.page,
                page.total_pages(),
                page.total_results
            );
        } else {
            println!("\nPage {} (end, {} total items)", page.page, page.total_results);
        }
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct PhotoRow {
    id: u64,
    photographer: String,
    size: String,
    url: String,
}

impl From<&Photo> for PhotoRow {
    fn from(p: &Photo) -> Self {
        Self {
            id: p.id,
            photographer: p.photographer.clone(),
            size: format!("{}x{}", p.width, p.height),
            url: p.url.clone(),
        }
    }
}

#[derive(Tabled)]
struct VideoRow {
    id: u64,
    duration: String,
    uploader: String,
    size: String,
    url: String,
}

impl From<&Video> for VideoRow {
    fn from(v: &Video) -> Self {
        Self {
            id: v.id,
            duration: format!("{}s", v.duration),
            uploader: v.user.name.clone(),
            size: format!("{}x{}", v.width, v.height),
            url: v.url.clone(),
        }
    }
}

#[derive(Tabled)]
struct CollectionRow {
    id: String,
    title: String,
    photos: u32,
    videos: u32,
}

impl From<&Collection> for CollectionRow {
    fn from(c: &Collection) -> Self {
        Self {
            id: c.id.clone(),
            title: c.title.clone(),
            photos: c.photos_count,
            videos: c.videos_count,
        }
    }
}

#[derive(Tabled)]
struct MediaRow {
    #[tabled(rename = "type")]
    media_type: String,
    id: u64,
    size: String,
    url: String,
}

impl From<&MediaItem> for MediaRow {
    fn from(m: &MediaItem) -> Self {
        Self {
            media_type: m.type_tag().to_string(),
            id: m.id(),
            size: format!("{}x{}", m.width(), m.height()),
            url: m.url().to_string(),
        }
    }
}

//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the pexkit binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{Error, Locale, MediaType, Orientation, Result, Size, VideoFilters};

/// Pexels API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "pexkit", about = "Pexels API CLI", version)]
pub struct Cli {
    /// Pexels API key.
    #[arg(long, global = true, env = "PEXELS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Page number (1-indexed).
    #[arg(long, global = true)]
    pub page: Option<u32>,

    /// Number of items per page (1-80).
    #[arg(long, global = true)]
    pub per_page: Option<u32>,

    /// Log HTTP traffic to stderr (-v for headers, -vv for bodies).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search photos or videos.
    Search {
        /// What to search.
        target: SearchTarget,

        /// The search term.
        query: String,

        /// Predefined color name or 6-digit hex code (photos only).
        #[arg(long)]
        color: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List curated photos.
    Curated,

    /// List popular videos.
    Popular {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Get a single photo or video by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The numeric ID.
        id: u64,
    },

    /// List collections.
    Collections {
        /// Which collections to list.
        #[arg(default_value = "featured")]
        scope: CollectionScope,
    },

    /// List the media of one collection.
    Collection {
        /// The collection ID.
        id: String,

        /// Only photos or only videos.
        #[arg(long = "type")]
        media_type: Option<MediaType>,
    },
}

/// Search and dimension filters shared by the listing commands.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterArgs {
    /// landscape, portrait or square.
    #[arg(long)]
    pub orientation: Option<Orientation>,

    /// large, medium or small.
    #[arg(long)]
    pub size: Option<Size>,

    /// Locale such as en-US or de-DE.
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Minimum video width in pixels.
    #[arg(long)]
    pub min_width: Option<u32>,

    /// Minimum video height in pixels.
    #[arg(long)]
    pub min_height: Option<u32>,

    /// Minimum video duration in seconds.
    #[arg(long)]
    pub min_duration: Option<u32>,

    /// Maximum video duration in seconds.
    #[arg(long)]
    pub max_duration: Option<u32>,
}

impl FilterArgs {
    /// Fail if any dimension or duration flag is set; photo search has none.
    pub fn reject_video_only(&self) -> Result<()> {
        let set = [
            ("--min-width", self.min_width.is_some()),
            ("--min-height", self.min_height.is_some()),
            ("--min-duration", self.min_duration.is_some()),
            ("--max-duration", self.max_duration.is_some()),
        ];
        reject(&set, "video listings")
    }

    /// Fail if any search-only flag is set; popular videos take none.
    pub fn reject_search_only(&self) -> Result<()> {
        let set = [
            ("--orientation", self.orientation.is_some()),
            ("--size", self.size.is_some()),
            ("--locale", self.locale.is_some()),
        ];
        reject(&set, "search")
    }
}

fn reject(flags: &[(&str, bool)], applies_to: &str) -> Result<()> {
    match flags.iter().find(|(_, set)| *set) {
        Some((flag, _)) => Err(Error::InvalidArgument(format!(
            "{flag} applies to {applies_to} only"
        ))),
        None => Ok(()),
    }
}

impl From<FilterArgs> for VideoFilters {
    fn from(args: FilterArgs) -> Self {
        Self {
            orientation: args.orientation,
            size: args.size,
            locale: args.locale,
            min_width: args.min_width,
            min_height: args.min_height,
            min_duration: args.min_duration,
            max_duration: args.max_duration,
        }
    }
}

/// Searchable media.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchTarget {
    #[value(alias = "photo")]
    Photos,
    #[value(alias = "video")]
    Videos,
}

/// Entity types that can be fetched by ID.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A photo.
    #[value(alias = "photos")]
    Photo,
    /// A video.
    #[value(alias = "videos")]
    Video,
}

/// Collection listings.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionScope {
    /// Collections featured by Pexels.
    Featured,
    /// Your own collections.
    Mine,
}

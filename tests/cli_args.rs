//! CLI argument parsing tests.

use clap::Parser;
use pexkit::cli::{Cli, CollectionScope, Command, Entity, SearchTarget};
use pexkit::{Locale, MediaType, Orientation, Size, VideoFilters};

#[test]
fn test_cli_parses_search_subcommand() {
    let cli = Cli::parse_from(["pexkit", "search", "photos", "mountain lake"]);

    assert!(!cli.json);
    match cli.command {
        Command::Search {
            target,
            query,
            color,
            filters,
        } => {
            assert_eq!(target, SearchTarget::Photos);
            assert_eq!(query, "mountain lake");
            assert_eq!(color, None);
            assert_eq!(filters, Default::default());
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_search_filters() {
    let cli = Cli::parse_from([
        "pexkit",
        "search",
        "video",
        "waves",
        "--orientation",
        "Portrait",
        "--size",
        "large",
        "--locale",
        "pt-BR",
        "--min-duration",
        "5",
        "--max-duration",
        "30",
    ]);

    match cli.command {
        Command::Search {
            target, filters, ..
        } => {
            assert_eq!(target, SearchTarget::Videos);
            let filters = VideoFilters::from(filters);
            assert_eq!(filters.orientation, Some(Orientation::Portrait));
            assert_eq!(filters.size, Some(Size::Large));
            assert_eq!(filters.locale, Some(Locale::PtBr));
            assert_eq!(filters.min_duration, Some(5));
            assert_eq!(filters.max_duration, Some(30));
            assert!(filters.validate().is_ok());
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_unknown_filter_value_rejected() {
    let result = Cli::try_parse_from([
        "pexkit",
        "search",
        "photos",
        "cats",
        "--orientation",
        "diagonal",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["pexkit", "get", "photo", "2014422"]);

    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::Photo);
            assert_eq!(id, 2014422);
        }
        _ => panic!("Expected Get command"),
    }

    let cli = Cli::parse_from(["pexkit", "get", "videos", "857251"]);
    assert!(matches!(
        cli.command,
        Command::Get {
            entity: Entity::Video,
            id: 857251
        }
    ));
}

#[test]
fn test_get_rejects_non_numeric_id() {
    assert!(Cli::try_parse_from(["pexkit", "get", "photo", "abc"]).is_err());
}

#[test]
fn test_collections_default_to_featured() {
    let cli = Cli::parse_from(["pexkit", "collections"]);
    assert!(matches!(
        cli.command,
        Command::Collections {
            scope: CollectionScope::Featured
        }
    ));

    let cli = Cli::parse_from(["pexkit", "collections", "mine"]);
    assert!(matches!(
        cli.command,
        Command::Collections {
            scope: CollectionScope::Mine
        }
    ));
}

#[test]
fn test_collection_media_type() {
    let cli = Cli::parse_from(["pexkit", "collection", "9mp14cx", "--type", "videos"]);

    match cli.command {
        Command::Collection { id, media_type } => {
            assert_eq!(id, "9mp14cx");
            assert_eq!(media_type, Some(MediaType::Videos));
        }
        _ => panic!("Expected Collection command"),
    }
}

#[test]
fn test_global_flags() {
    // before the subcommand
    let cli = Cli::parse_from(["pexkit", "--json", "--page", "2", "curated"]);
    assert!(cli.json);
    assert_eq!(cli.page, Some(2));

    // after the subcommand
    let cli = Cli::parse_from(["pexkit", "popular", "--json", "--per-page", "80", "-vv"]);
    assert!(cli.json);
    assert_eq!(cli.per_page, Some(80));
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_api_key_flag() {
    let cli = Cli::parse_from(["pexkit", "--api-key", "abc123", "curated"]);
    assert_eq!(cli.api_key.as_deref(), Some("abc123"));
}

#[test]
fn test_photo_search_rejects_video_only_filters() {
    let cli = Cli::parse_from(["pexkit", "search", "photos", "cats", "--min-width", "1920"]);
    match cli.command {
        Command::Search { filters, .. } => {
            let err = filters.reject_video_only().unwrap_err();
            assert!(matches!(err, pexkit::Error::InvalidArgument(_)));
            assert!(err.to_string().contains("--min-width"));
            assert!(filters.reject_search_only().is_ok());
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_popular_rejects_search_only_filters() {
    let cli = Cli::parse_from(["pexkit", "popular", "--locale", "de-DE", "--min-duration", "5"]);
    match cli.command {
        Command::Popular { filters } => {
            let err = filters.reject_search_only().unwrap_err();
            assert!(err.to_string().contains("--locale"));
            assert!(filters.reject_video_only().is_err());
        }
        _ => panic!("Expected Popular command"),
    }

    let cli = Cli::parse_from(["pexkit", "popular", "--min-width", "1280"]);
    match cli.command {
        Command::Popular { filters } => assert!(filters.reject_search_only().is_ok()),
        _ => panic!("Expected Popular command"),
    }
}

//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Collection, MediaItem, Photo, RateLimitInfo, Video};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn header(title: String) -> Vec<String> {
    let divider = "─".repeat(title.chars().count().max(30));
    vec![title, divider]
}

impl PrettyPrint for Photo {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Photo: {}", self.id));
        lines.push(format!("URL:            {}", self.url));
        lines.push(format!("Size:           {}x{}", self.width, self.height));
        lines.push(format!(
            "Photographer:   {} ({})",
            self.photographer, self.photographer_url
        ));
        lines.push(format!("Avg Color:      {}", self.avg_color));

        if !self.alt.is_empty() {
            lines.push(format!("Alt:            {}", self.alt));
        }

        lines.push(format!("Original:       {}", self.src.original));

        if self.liked {
            lines.push("Liked:          yes".to_string());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Video {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Video: {}", self.id));
        lines.push(format!("URL:            {}", self.url));
        lines.push(format!("Size:           {}x{}", self.width, self.height));
        lines.push(format!("Duration:       {}s", self.duration));
        lines.push(format!("Uploader:       {} ({})", self.user.name, self.user.url));

        if !self.tags.is_empty() {
            lines.push(format!("Tags:           {}", self.tags.join(", ")));
        }

        if let Some(file) = self.best_file("hd").or_else(|| self.video_files.first()) {
            lines.push(format!("Download:       {}", file.link));
        }

        lines.push(format!("Files:          {}", self.video_files.len()));

        lines.join("\n")
    }
}

impl PrettyPrint for Collection {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("Collection: {}", self.id));
        lines.push(format!("Title:          {}", self.title));

        if let Some(ref description) = self.description {
            lines.push(format!("Description:    {}", description));
        }

        lines.push(format!(
            "Media:          {} ({} photos, {} videos)",
            self.media_count, self.photos_count, self.videos_count
        ));

        if self.private {
            lines.push("Visibility:     private".to_string());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for MediaItem {
    fn pretty_print(&self) -> String {
        let mut lines = header(format!("{}: {}", self.type_tag(), self.id()));
        lines.push(format!("URL:            {}", self.url()));
        lines.push(format!("Size:           {}x{}", self.width(), self.height()));

        match self {
            MediaItem::Photo(photo) => {
                lines.push(format!("Photographer:   {}", photo.photographer));
            }
            MediaItem::Video(video) => {
                lines.push(format!("Duration:       {}s", video.duration_seconds));
                lines.push(format!("Uploader:       {}", video.uploader.name));
            }
            MediaItem::Unknown(_) => {
                lines.push("Kind:           not supported by this client".to_string());
            }
        }

        lines.join("\n")
    }
}

impl PrettyPrint for RateLimitInfo {
    fn pretty_print(&self) -> String {
        let reset = self
            .reset_at()
            .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        format!(
            "Rate limit: {}/{} remaining (resets {})",
            self.remaining, self.limit, reset
        )
    }
}

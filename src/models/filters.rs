//! Search filter values shared by the photo, video and collection endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{require, Error, Result};

/// Image or video orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    /// The wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        }
    }
}

/// Minimum media size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// 24MP photos, 4K videos.
    Large,
    /// 12MP photos, Full HD videos.
    Medium,
    /// 4MP photos, HD videos.
    Small,
}

impl Size {
    /// The wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Large => "large",
            Size::Medium => "medium",
            Size::Small => "small",
        }
    }
}

/// Predefined photo colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Turquoise,
    Blue,
    Violet,
    Pink,
    Brown,
    Black,
    Gray,
    White,
}

impl Color {
    /// The wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Turquoise => "turquoise",
            Color::Blue => "blue",
            Color::Violet => "violet",
            Color::Pink => "pink",
            Color::Brown => "brown",
            Color::Black => "black",
            Color::Gray => "gray",
            Color::White => "white",
        }
    }
}

/// Locales supported for search query interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    EnUs,
    PtBr,
    EsEs,
    CaEs,
    DeDe,
    ItIt,
    FrFr,
    SvSe,
    IdId,
    PlPl,
    JaJp,
    ZhTw,
    ZhCn,
    KoKr,
    ThTh,
    NlNl,
    HuHu,
    ViVn,
    CsCz,
    DaDk,
    FiFi,
    UkUa,
    ElGr,
    RoRo,
    NbNo,
    SkSk,
    TrTr,
    RuRu,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Locale; 28] = [
        Locale::EnUs,
        Locale::PtBr,
        Locale::EsEs,
        Locale::CaEs,
        Locale::DeDe,
        Locale::ItIt,
        Locale::FrFr,
        Locale::SvSe,
        Locale::IdId,
        Locale::PlPl,
        Locale::JaJp,
        Locale::ZhTw,
        Locale::ZhCn,
        Locale::KoKr,
        Locale::ThTh,
        Locale::NlNl,
        Locale::HuHu,
        Locale::ViVn,
        Locale::CsCz,
        Locale::DaDk,
        Locale::FiFi,
        Locale::UkUa,
        Locale::ElGr,
        Locale::RoRo,
        Locale::NbNo,
        Locale::SkSk,
        Locale::TrTr,
        Locale::RuRu,
    ];

    /// The wire value, e.g. `en-US`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::PtBr => "pt-BR",
            Locale::EsEs => "es-ES",
            Locale::CaEs => "ca-ES",
            Locale::DeDe => "de-DE",
            Locale::ItIt => "it-IT",
            Locale::FrFr => "fr-FR",
            Locale::SvSe => "sv-SE",
            Locale::IdId => "id-ID",
            Locale::PlPl => "pl-PL",
            Locale::JaJp => "ja-JP",
            Locale::ZhTw => "zh-TW",
            Locale::ZhCn => "zh-CN",
            Locale::KoKr => "ko-KR",
            Locale::ThTh => "th-TH",
            Locale::NlNl => "nl-NL",
            Locale::HuHu => "hu-HU",
            Locale::ViVn => "vi-VN",
            Locale::CsCz => "cs-CZ",
            Locale::DaDk => "da-DK",
            Locale::FiFi => "fi-FI",
            Locale::UkUa => "uk-UA",
            Locale::ElGr => "el-GR",
            Locale::RoRo => "ro-RO",
            Locale::NbNo => "nb-NO",
            Locale::SkSk => "sk-SK",
            Locale::TrTr => "tr-TR",
            Locale::RuRu => "ru-RU",
        }
    }
}

/// Media type filter for collection media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photos,
    Videos,
}

impl MediaType {
    /// The wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Photos => "photos",
            MediaType::Videos => "videos",
        }
    }
}

// Parsing from the wire value (case-insensitive), used by the CLI.

fn parse_wire<T: Copy>(kind: &str, s: &str, values: &[T], as_str: fn(&T) -> &'static str) -> Result<T> {
    values
        .iter()
        .find(|v| as_str(*v).eq_ignore_ascii_case(s.trim()))
        .copied()
        .ok_or_else(|| Error::InvalidArgument(format!("unknown {kind} '{s}'")))
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        use Orientation::*;
        parse_wire("orientation", s, &[Landscape, Portrait, Square], Self::as_str)
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        use Size::*;
        parse_wire("size", s, &[Large, Medium, Small], Self::as_str)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        use Color::*;
        parse_wire(
            "color",
            s,
            &[
                Red, Orange, Yellow, Green, Turquoise, Blue, Violet, Pink, Brown, Black, Gray,
                White,
            ],
            Self::as_str,
        )
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_wire("locale", s, &Locale::ALL, Self::as_str)
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        use MediaType::*;
        parse_wire("media type", s, &[Photos, Videos], Self::as_str)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for photo search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoFilters {
    /// Filter by orientation.
    pub orientation: Option<Orientation>,
    /// Filter by minimum size.
    pub size: Option<Size>,
    color: Option<String>,
    /// Locale for query interpretation.
    pub locale: Option<Locale>,
}

impl PhotoFilters {
    /// Filters with a predefined color.
    pub fn with_color(color: Color) -> Self {
        Self {
            color: Some(color.as_str().to_string()),
            ..Self::default()
        }
    }

    /// Filters with a hex color code, given without the `#` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless `hex` is exactly six
    /// hexadecimal digits.
    pub fn with_hex_color(hex: &str) -> Result<Self> {
        require(
            hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
            || "hexColor must be a valid 6-digit hexadecimal string".to_string(),
        )?;
        Ok(Self {
            color: Some(hex.to_string()),
            ..Self::default()
        })
    }

    /// Restrict to one orientation.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Restrict to a minimum size.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Interpret the query in `locale`.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// The color filter as sent to the API.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub(crate) fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(orientation) = self.orientation {
            query.push(("orientation", orientation.as_str().to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.as_str().to_string()));
        }
        if let Some(color) = &self.color {
            query.push(("color", color.clone()));
        }
        if let Some(locale) = self.locale {
            query.push(("locale", locale.as_str().to_string()));
        }
    }
}

/// Filters for video search and popular videos.
///
/// Validated by the query constructors that accept them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoFilters {
    /// Filter by orientation (search only).
    pub orientation: Option<Orientation>,
    /// Filter by minimum size (search only).
    pub size: Option<Size>,
    /// Locale for query interpretation (search only).
    pub locale: Option<Locale>,
    /// Minimum width in pixels.
    pub min_width: Option<u32>,
    /// Minimum height in pixels.
    pub min_height: Option<u32>,
    /// Minimum duration in seconds.
    pub min_duration: Option<u32>,
    /// Maximum duration in seconds.
    pub max_duration: Option<u32>,
}

impl VideoFilters {
    /// Check the numeric bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a bound is zero or
    /// `min_duration` exceeds `max_duration`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("minWidth", self.min_width),
            ("minHeight", self.min_height),
            ("minDuration", self.min_duration),
            ("maxDuration", self.max_duration),
        ] {
            if let Some(value) = value {
                require(value > 0, || format!("{name} must be positive"))?;
            }
        }
        if let (Some(min), Some(max)) = (self.min_duration, self.max_duration) {
            require(min <= max, || "minDuration must be <= maxDuration".to_string())?;
        }
        Ok(())
    }

    pub(crate) fn push_dimension_query(&self, query: &mut Vec<(&'static str, String)>) {
        for (name, value) in [
            ("min_width", self.min_width),
            ("min_height", self.min_height),
            ("min_duration", self.min_duration),
            ("max_duration", self.max_duration),
        ] {
            if let Some(value) = value {
                query.push((name, value.to_string()));
            }
        }
    }

    pub(crate) fn push_search_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(orientation) = self.orientation {
            query.push(("orientation", orientation.as_str().to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.as_str().to_string()));
        }
        if let Some(locale) = self.locale {
            query.push(("locale", locale.as_str().to_string()));
        }
        self.push_dimension_query(query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_validation() {
        assert_eq!(
            PhotoFilters::with_hex_color("FF5733").unwrap().color(),
            Some("FF5733")
        );
        assert!(PhotoFilters::with_hex_color("#FF5733").is_err());
        assert!(PhotoFilters::with_hex_color("FF573").is_err());
        assert!(PhotoFilters::with_hex_color("GG5733").is_err());
    }

    #[test]
    fn test_photo_filter_query() {
        let filters = PhotoFilters::with_color(Color::Turquoise)
            .orientation(Orientation::Portrait)
            .locale(Locale::PtBr);

        let mut query = Vec::new();
        filters.push_query(&mut query);
        assert_eq!(
            query,
            vec![
                ("orientation", "portrait".to_string()),
                ("color", "turquoise".to_string()),
                ("locale", "pt-BR".to_string()),
            ]
        );
    }

    #[test]
    fn test_video_filter_validation() {
        assert!(VideoFilters::default().validate().is_ok());

        let zero_width = VideoFilters {
            min_width: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            zero_width.validate(),
            Err(Error::InvalidArgument(ref m)) if m == "minWidth must be positive"
        ));

        let inverted = VideoFilters {
            min_duration: Some(30),
            max_duration: Some(10),
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let ok = VideoFilters {
            min_duration: Some(10),
            max_duration: Some(10),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_video_search_query_order() {
        let filters = VideoFilters {
            size: Some(Size::Large),
            min_height: Some(720),
            ..Default::default()
        };
        let mut query = Vec::new();
        filters.push_search_query(&mut query);
        assert_eq!(
            query,
            vec![("size", "large".to_string()), ("min_height", "720".to_string())]
        );
    }

    #[test]
    fn test_parse_wire_values() {
        assert_eq!("LANDSCAPE".parse::<Orientation>().unwrap(), Orientation::Landscape);
        assert_eq!("zh-cn".parse::<Locale>().unwrap(), Locale::ZhCn);
        assert_eq!("videos".parse::<MediaType>().unwrap(), MediaType::Videos);
        assert!("huge".parse::<Size>().is_err());
        assert!(Locale::ALL.iter().all(|l| l.as_str().parse::<Locale>().unwrap() == *l));
    }
}

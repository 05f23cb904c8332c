use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder shown for the year or country when the owner doesn't know it.
pub const UNKNOWN: &str = "???";

/// Image used when a record is added without a photo.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300?text=No+Image";

/// Release year. Snapshots carry either a JSON number or a string (usually
/// the `"???"` placeholder), and whichever was stored is written back as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl Year {
    pub fn unknown() -> Self {
        Year::Text(UNKNOWN.to_string())
    }

    /// Input in canonical integer form becomes a number. Anything else,
    /// including `02020` or `+2020`, is kept as typed.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(n) if n.to_string() == trimmed => Year::Number(n),
            _ => Year::Text(trimmed.to_string()),
        }
    }

    /// String form used for filter comparison, so `2020` and `"2020"` are equal.
    pub fn normalized(&self) -> String {
        match self {
            Year::Number(n) => n.to_string(),
            Year::Text(s) => s.trim().to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Year::Text(s) if s == UNKNOWN)
    }
}

impl Default for Year {
    fn default() -> Self {
        Year::unknown()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{n}"),
            Year::Text(s) => f.write_str(s),
        }
    }
}

fn default_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

/// One cataloged pair. Field names match the snapshot format exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SneakerRecord {
    pub id: u64,
    #[serde(default)]
    pub article: String,
    pub brand: String,
    #[serde(default)]
    pub collaboration: String,
    pub model: String,
    #[serde(default)]
    pub model2: String,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub collection: String,
    #[serde(default)]
    pub pack: String,
    #[serde(default)]
    pub year: Year,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub main_color: String,
    #[serde(default)]
    pub main_color2: String,
    #[serde(default)]
    pub detail_color: String,
    #[serde(default)]
    pub detail_color2: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_image")]
    pub image: String,
}

impl SneakerRecord {
    /// Lowercased text that free-text search runs against.
    pub(crate) fn search_text(&self) -> String {
        [
            self.article.as_str(),
            self.brand.as_str(),
            self.model.as_str(),
            self.model2.as_str(),
            self.collection.as_str(),
            self.description.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }

    /// "Air Jordan 1 Retro High OG", or just the model when there is no second line.
    pub fn display_name(&self) -> String {
        if self.model2.is_empty() {
            self.model.clone()
        } else {
            format!("{} {}", self.model, self.model2)
        }
    }
}

/// Input to `Catalog::add`: a record without an id. `None` fields get
/// their defaults when the record is created.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewSneaker {
    pub article: Option<String>,
    pub brand: String,
    pub collaboration: String,
    pub model: String,
    pub model2: String,
    pub series: String,
    pub collection: String,
    pub pack: String,
    pub year: Option<Year>,
    pub country: Option<String>,
    pub details: Option<Vec<String>>,
    pub main_color: String,
    pub main_color2: String,
    pub detail_color: String,
    pub detail_color2: String,
    pub description: String,
    pub image: Option<String>,
}

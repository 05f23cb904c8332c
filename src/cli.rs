use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{NewSneaker, SearchFilters, Year};
use crate::photo::PhotoSource;

#[derive(Parser)]
#[command(name = "kicks")]
#[command(about = "A catalog for your sneaker collection")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot database, overrides the config file
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Show debug logging and detailed diagnostics
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the whole collection grouped by brand
    List(ListArgs),

    /// List every brand in the collection
    Brands,

    /// Search by text, brand or year
    Search(SearchArgs),

    /// Show the most recently added pairs
    Recent(RecentArgs),

    /// Group pairs by collaboration
    Collabs(ListArgs),

    /// Add a pair to the collection
    Add(AddArgs),

    /// Show where the collection is stored
    Info,
}

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON instead of table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text matched against article, brand, model, collection and description
    #[arg(default_value = "")]
    pub query: String,

    /// Only this brand ("all" for any)
    #[arg(long)]
    pub brand: Option<String>,

    /// Only this release year ("???" for unknown)
    #[arg(long)]
    pub year: Option<String>,

    /// Output as JSON instead of table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl SearchArgs {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            brand: self.brand.clone(),
            year: self.year.as_deref().map(Year::parse),
        }
    }
}

#[derive(Args)]
pub struct RecentArgs {
    /// How many pairs to show (defaults to recent_limit from config)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub brand: String,

    #[arg(long, default_value = "")]
    pub model: String,

    #[arg(long, default_value = "")]
    pub main_color: String,

    /// Leave empty to get a generated unknown<N> article
    #[arg(long)]
    pub article: Option<String>,

    #[arg(long, default_value = "")]
    pub model2: String,

    #[arg(long, default_value = "")]
    pub series: String,

    #[arg(long, default_value = "")]
    pub collection: String,

    #[arg(long, default_value = "")]
    pub pack: String,

    #[arg(long, default_value = "")]
    pub collaboration: String,

    #[arg(long)]
    pub year: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long, default_value = "")]
    pub main_color2: String,

    #[arg(long, default_value = "")]
    pub detail_color: String,

    #[arg(long, default_value = "")]
    pub detail_color2: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Material or construction note, repeatable
    #[arg(long = "detail")]
    pub details: Vec<String>,

    /// Photo from a local file, stored inline
    #[arg(long, group = "photo")]
    pub image_file: Option<PathBuf>,

    /// Photo from a link
    #[arg(long, group = "photo")]
    pub image_url: Option<String>,

    /// Take a photo with the host camera
    #[arg(long, group = "photo", default_value_t = false)]
    pub camera: bool,

    /// Output the added pair as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl AddArgs {
    pub fn photo_source(&self) -> Option<PhotoSource<'_>> {
        if let Some(path) = &self.image_file {
            Some(PhotoSource::File(path.as_path()))
        } else if let Some(url) = &self.image_url {
            Some(PhotoSource::Url(url.as_str()))
        } else if self.camera {
            Some(PhotoSource::Camera)
        } else {
            None
        }
    }

    /// Form fields without the photo, which is acquired separately.
    pub fn to_new_sneaker(&self) -> NewSneaker {
        NewSneaker {
            article: self.article.clone(),
            brand: self.brand.trim().to_string(),
            collaboration: self.collaboration.trim().to_string(),
            model: self.model.trim().to_string(),
            model2: self.model2.trim().to_string(),
            series: self.series.trim().to_string(),
            collection: self.collection.trim().to_string(),
            pack: self.pack.trim().to_string(),
            year: self.year.as_deref().map(Year::parse),
            country: self.country.clone(),
            details: Some(
                self.details
                    .iter()
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty())
                    .collect(),
            ),
            main_color: self.main_color.trim().to_string(),
            main_color2: self.main_color2.trim().to_string(),
            detail_color: self.detail_color.trim().to_string(),
            detail_color2: self.detail_color2.trim().to_string(),
            description: self.description.trim().to_string(),
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_args_parse_into_new_sneaker() {
        let cli = Cli::parse_from([
            "kicks", "add", "--brand", "Puma", "--model", "Suede", "--main-color", "Blue",
            "--year", "1968", "--detail", "Suede upper", "--detail", " ",
        ]);
        let Command::Add(args) = cli.command else {
            panic!("expected add");
        };

        let new = args.to_new_sneaker();
        assert_eq!(new.brand, "Puma");
        assert_eq!(new.year, Some(Year::Number(1968)));
        assert_eq!(new.details, Some(vec!["Suede upper".to_string()]));
        assert!(new.article.is_none());
        assert!(new.country.is_none());
        assert!(args.photo_source().is_none());
    }

    #[test]
    fn camera_flag_selects_camera_source() {
        let cli = Cli::parse_from(["kicks", "add", "--camera"]);
        let Command::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.photo_source(), Some(PhotoSource::Camera));
    }

    #[test]
    fn photo_sources_are_exclusive() {
        let result = Cli::try_parse_from([
            "kicks", "add", "--camera", "--image-url", "https://example.com/a.jpg",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn search_filters_from_flags() {
        let cli = Cli::parse_from(["kicks", "search", "--brand", "Adidas", "--year", "???"]);
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };

        let filters = args.filters();
        assert_eq!(filters.brand.as_deref(), Some("Adidas"));
        assert_eq!(filters.year, Some(Year::unknown()));
        assert_eq!(args.query, "");
    }
}

//! Built-in starting collection, used until a snapshot has been saved.

use super::record::{SneakerRecord, Year};

const AIR_JORDAN_1_IMAGE: &str =
    "https://images.unsplash.com/photo-1600269452121-4f2416e55c28?w=400&h=300&fit=crop";
const SUPERSTAR_IMAGE: &str =
    "https://images.unsplash.com/photo-1595950653106-6c9ebd614d3a?w=400&h=300&fit=crop";

pub fn seed_records() -> Vec<SneakerRecord> {
    vec![
        SneakerRecord {
            id: 1,
            article: "BQ6817-100".to_string(),
            brand: "Nike".to_string(),
            collaboration: String::new(),
            model: "Air Jordan 1".to_string(),
            model2: "Retro High OG".to_string(),
            series: "Air Jordan".to_string(),
            collection: "Chicago".to_string(),
            pack: String::new(),
            year: Year::Number(1985),
            country: "USA".to_string(),
            details: vec!["Leather upper".to_string(), "Rubber sole".to_string()],
            main_color: "White".to_string(),
            main_color2: "Red".to_string(),
            detail_color: "Black".to_string(),
            detail_color2: String::new(),
            description: "The 1985 icon".to_string(),
            image: AIR_JORDAN_1_IMAGE.to_string(),
        },
        SneakerRecord {
            id: 2,
            article: "EG4958".to_string(),
            brand: "Adidas".to_string(),
            collaboration: String::new(),
            model: "Superstar".to_string(),
            model2: String::new(),
            series: String::new(),
            collection: String::new(),
            pack: String::new(),
            year: Year::unknown(),
            country: "Germany".to_string(),
            details: vec!["Shell toe".to_string(), "3 stripes".to_string()],
            main_color: "White".to_string(),
            main_color2: String::new(),
            detail_color: "Black".to_string(),
            detail_color2: String::new(),
            description: "Classic shell-toe sneakers".to_string(),
            image: SUPERSTAR_IMAGE.to_string(),
        },
    ]
}

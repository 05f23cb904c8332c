//! Terminal tables for catalog views.
//!
//! - Record grids are grouped by brand, brands sorted, insertion order within
//! - Collaborations are listed one section per partner

use std::collections::BTreeMap;

use crate::catalog::SneakerRecord;

const NAME_WIDTH: usize = 32;

pub fn render<'a>(records: impl IntoIterator<Item = &'a SneakerRecord>) -> String {
    let mut by_brand: BTreeMap<&str, Vec<&SneakerRecord>> = BTreeMap::new();
    for record in records {
        by_brand.entry(record.brand.as_str()).or_default().push(record);
    }

    if by_brand.is_empty() {
        return String::from("No sneakers found.\n");
    }

    let mut output = String::new();
    let mut total = 0;

    for (brand, records) in &by_brand {
        total += records.len();

        output.push_str(&format!("\n{brand}\n"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for record in records {
            output.push_str(&row(record));
        }
    }

    output.push_str(&format!("\n{total} pair(s)\n"));
    output
}

/// Compact strip of recently added pairs, newest first.
pub fn render_recent(records: &[&SneakerRecord]) -> String {
    if records.is_empty() {
        return String::from("Nothing added yet.\n");
    }

    let mut output = String::from("Recently added:\n");
    for record in records {
        output.push_str(&format!(
            "  #{:<4} {} {}\n",
            record.id,
            record.brand,
            truncate(&record.display_name(), NAME_WIDTH)
        ));
    }
    output
}

pub fn render_collaborations(groups: &BTreeMap<String, Vec<&SneakerRecord>>) -> String {
    if groups.is_empty() {
        return String::from("No collaborations in the collection.\n");
    }

    let mut output = String::new();
    for (name, records) in groups {
        output.push_str(&format!("\n{name} ({})\n", records.len()));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for record in records {
            output.push_str(&row(record));
        }
    }
    output
}

pub fn render_brands(brands: &[String]) -> String {
    if brands.is_empty() {
        return String::from("No brands yet.\n");
    }

    let mut output = String::new();
    for brand in brands {
        output.push_str(brand);
        output.push('\n');
    }
    output
}

fn row(record: &SneakerRecord) -> String {
    let colors = if record.main_color2.is_empty() {
        record.main_color.clone()
    } else {
        format!("{}/{}", record.main_color, record.main_color2)
    };

    format!(
        "  #{:<4} {:<14} {:name_width$} {:>5}  {}\n",
        record.id,
        truncate(&record.article, 14),
        truncate(&record.display_name(), NAME_WIDTH),
        record.year.to_string(),
        colors,
        name_width = NAME_WIDTH,
    )
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}

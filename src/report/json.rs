//! JSON output for catalog views.
//!
//! Same record shape as the snapshot, for scripting and piping.

use std::collections::BTreeMap;

use crate::catalog::SneakerRecord;

pub fn render<'a>(
    records: impl IntoIterator<Item = &'a SneakerRecord>,
) -> Result<String, serde_json::Error> {
    let records: Vec<&SneakerRecord> = records.into_iter().collect();
    serde_json::to_string_pretty(&records)
}

pub fn render_groups(
    groups: &BTreeMap<String, Vec<&SneakerRecord>>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(groups)
}

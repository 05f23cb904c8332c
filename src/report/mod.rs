pub mod json;
pub mod table;

use crate::catalog::SneakerRecord;

/// Print a record grid, as a table or as JSON.
pub fn print_records<'a>(
    records: impl IntoIterator<Item = &'a SneakerRecord>,
    json_output: bool,
) -> Result<(), serde_json::Error> {
    if json_output {
        println!("{}", json::render(records)?);
    } else {
        print!("{}", table::render(records));
    }
    Ok(())
}

/// Surface non-fatal problems (e.g. a snapshot that could not be saved).
pub fn print_diagnostics(diagnostics: &[String], verbose: bool) {
    if diagnostics.is_empty() {
        return;
    }

    eprintln!();
    if verbose {
        eprintln!("Diagnostics:");
        eprintln!("{}", "-".repeat(40));
        for diagnostic in diagnostics {
            eprintln!("  {diagnostic}");
        }
    } else {
        for diagnostic in diagnostics {
            eprintln!("[diagnostic] {diagnostic}");
        }
    }
}

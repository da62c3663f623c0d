use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::{PollError, Result};
use crate::voting::PollResults;

pub fn csv_summary(results: &PollResults) -> String {
    let mut out = String::new();
    out.push_str(&format!("Poll Title: {}\n", results.title));
    out.push_str(&format!("Description: {}\n", results.description));
    out.push_str(&format!("Total Votes: {}\n\n", results.total_votes));
    out.push_str("Option,Votes,Percentage\n");

    for tally in &results.tallies {
        out.push_str(&format!(
            "{},{},{}%\n",
            escape_csv_field(&tally.option_text),
            tally.votes,
            tally.percentage_label()
        ));
    }

    out
}

/// Quotes a field containing a comma or a double quote, doubling inner quotes.
pub fn escape_csv_field(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('"') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Writes the CSV summary to `path`.
pub fn write_csv(results: &PollResults, path: &Path) -> Result<()> {
    write_file(path, &csv_summary(results))?;
    info!("Exported poll '{}' to {} as CSV", results.title, path.display());
    Ok(())
}

/// Writes the structured results as pretty-printed JSON to `path`.
pub fn write_json(results: &PollResults, path: &Path) -> Result<()> {
    let body = serde_json::to_string_pretty(results)?;
    write_file(path, &body)?;
    info!("Exported poll '{}' to {} as JSON", results.title, path.display());
    Ok(())
}

fn write_file(path: &Path, body: &str) -> Result<()> {
    let io_error = |source: std::io::Error| PollError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(body.as_bytes()).map_err(io_error)
}

//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Print API records in the requested format.
///
/// JSON output carries the records as returned by the API; table output
/// converts each record into its display row first.
pub fn print_records<T, R>(records: Vec<T>, format: OutputFormat) -> Result<()>
where
    T: Serialize,
    R: Tabled + From<T>,
{
    let output = match format {
        OutputFormat::Json => json::format_json(&records)?,
        OutputFormat::Table => {
            let rows: Vec<R> = records.into_iter().map(R::from).collect();
            table::format_table(&rows)
        }
    };
    println!("{}", output);
    Ok(())
}

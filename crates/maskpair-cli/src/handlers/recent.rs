//! Recent command handler.
//!
//! Lists the most recently uploaded pairs in a formatted table.

use maskpair_core::ImagePair;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_pair_row, pair_table_header, print_separator};

/// Execute the recent command.
///
/// `limit` goes to the database unchanged.
pub async fn execute(ctx: &CliContext, limit: i64, json: bool) -> Result<Vec<ImagePair>, CliError> {
    let pairs = ctx.service().recent(limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
        return Ok(pairs);
    }

    if pairs.is_empty() {
        println!("No image pairs found in the database.");
        println!("Use 'maskpair add --original <file> --mask <file>' to store one.");
        return Ok(pairs);
    }

    println!("Showing {} most recent pair(s):\n", pairs.len());
    let header = pair_table_header();
    println!("{header}");
    print_separator(header.len());
    for pair in &pairs {
        println!("{}", format_pair_row(pair));
    }

    Ok(pairs)
}

//! Show command handler.

use maskpair_core::{ImagePair, PairLookup};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_pair;

/// Execute the show command.
///
/// A missing pair and a failed lookup are reported as different errors.
pub async fn execute(ctx: &CliContext, id: i64, json: bool) -> Result<ImagePair, CliError> {
    let pair = match ctx.service().lookup(id).await {
        PairLookup::Found(pair) => pair,
        PairLookup::NotFound => return Err(CliError::NotFound(id)),
        PairLookup::Failed(reason) => return Err(CliError::Database(reason)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&pair)?);
    } else {
        display_pair(&pair);
    }

    Ok(pair)
}

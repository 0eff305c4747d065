use kith_core::exclusion::ExclusionStore;

use crate::commands::common::{open_store, Context};
use crate::error::CliError;

pub async fn run_excluded(as_json: bool, ctx: &Context) -> Result<(), CliError> {
    let store = open_store(ctx.config.backend, &ctx.db_path).await?;
    let excluded = ExclusionStore::new(&store).list().await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&excluded)?);
    } else if excluded.is_empty() {
        println!("No one is excluded.");
    } else {
        for id in excluded.ids() {
            println!("{id}");
        }
    }
    Ok(())
}

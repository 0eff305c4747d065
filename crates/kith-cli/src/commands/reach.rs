use chrono::Local;
use kith_core::{AppEvent, Effect, View};

use crate::cli::ReachAction;
use crate::commands::common::{build_app, print_view, Context};
use crate::error::CliError;

pub async fn run_reach(action: ReachAction, dry_run: bool, ctx: &Context) -> Result<(), CliError> {
    let mut app = build_app(ctx, dry_run, false).await?;
    app.handle(AppEvent::Activate { now: Local::now() })
        .await?;

    if !matches!(app.view(), View::Showing(_)) {
        print_view(app.view(), false)?;
        return Err(CliError::NothingToReach);
    }

    let effects = app
        .handle(AppEvent::<Local>::Reach(action.into()))
        .await?;
    for effect in effects {
        if let Effect::Opened(uri) = effect {
            println!("{uri}");
        }
    }
    Ok(())
}

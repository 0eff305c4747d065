use chrono::Local;
use kith_core::{AppEvent, Effect, View};

use crate::commands::common::{build_app, print_view, Context};
use crate::error::CliError;

pub async fn run_exclude(as_json: bool, ctx: &Context) -> Result<(), CliError> {
    let mut app = build_app(ctx, false, as_json).await?;
    app.handle(AppEvent::Activate { now: Local::now() })
        .await?;

    if !matches!(app.view(), View::Showing(_)) {
        return print_view(app.view(), as_json);
    }

    let effects = app
        .handle(AppEvent::ExcludeCurrent { now: Local::now() })
        .await?;
    if !as_json {
        for effect in &effects {
            if let Effect::Excluded(id) = effect {
                println!("Excluded {id}");
            }
        }
    }
    print_view(app.view(), as_json)
}

use chrono::Local;
use kith_core::AppEvent;

use crate::commands::common::{build_app, print_view, Context};
use crate::error::CliError;

pub async fn run_today(as_json: bool, ctx: &Context) -> Result<(), CliError> {
    let mut app = build_app(ctx, false, as_json).await?;
    app.handle(AppEvent::Activate { now: Local::now() })
        .await?;
    print_view(app.view(), as_json)
}

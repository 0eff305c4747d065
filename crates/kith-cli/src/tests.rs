use std::path::PathBuf;

use chrono::Local;
use clap::CommandFactory;
use kith_core::actions::ContactAction;
use kith_core::config::{KithConfig, StoreBackend};
use kith_core::exclusion::ExclusionStore;
use kith_core::notify::Notification;
use kith_core::storage::KeyValueStore;
use kith_core::{AppEvent, Contact, ContactId, View};
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, CompletionShell, ReachAction};
use crate::commands::common::{
    build_app, format_view_lines, open_store, resolve_contacts_path, view_to_item, Context,
};
use crate::commands::completions::render_completions;
use crate::commands::config::run_config_init;
use crate::error::CliError;
use crate::keyring_store::KeyringStore;
use crate::opener::opener_command;
use crate::scheduler::reminder_line;

const BOOK: &str = r#"[
    { "id": "1", "name": "Ada Lovelace", "phoneNumbers": [{ "number": "555-0100" }] },
    { "id": "2", "name": "Grace Hopper", "email": "grace@example.com" }
]"#;

fn context_in(dir: &std::path::Path) -> Context {
    Context {
        config: KithConfig::default(),
        config_path: dir.join("config.json"),
        db_path: dir.join("data").join("kith.db"),
        contacts_path: dir.join("contacts.json"),
    }
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn reach_action_maps_to_contact_action() {
    assert_eq!(ContactAction::from(ReachAction::Call), ContactAction::Call);
    assert_eq!(
        ContactAction::from(ReachAction::Contact),
        ContactAction::ViewContact
    );
}

#[test]
fn explicit_contacts_path_wins_over_config() {
    let config = KithConfig {
        contacts_path: Some(PathBuf::from("/from/config.json")),
        ..KithConfig::default()
    };
    let resolved = resolve_contacts_path(Some(PathBuf::from("/from/cli.json")), &config);
    assert_eq!(resolved, PathBuf::from("/from/cli.json"));
}

#[test]
fn opener_command_passes_uri() {
    let (program, args) = opener_command("tel:555");
    assert!(!program.is_empty());
    assert_eq!(args.last().map(String::as_str), Some("tel:555"));
}

#[test]
fn completions_mention_binary_name() {
    let rendered = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(rendered.contains("kith"));
}

#[test]
fn showing_view_lists_available_actions() {
    let view = View::Showing(Contact::new("1", "Ada").with_phone("555"));
    let lines = format_view_lines(&view);
    assert_eq!(lines[0], "Ada");
    assert!(lines.iter().any(|line| line.contains("call | sms | contact")));

    let item = view_to_item(&view);
    assert_eq!(item.status, "showing");
    let contact = item.contact.unwrap();
    assert_eq!(contact.phone.as_deref(), Some("555"));
    assert_eq!(contact.actions, vec!["call", "sms", "contact"]);
}

#[test]
fn empty_views_explain_themselves() {
    let item = view_to_item(&View::NoOneLeft);
    assert_eq!(item.status, "no_one_left");
    assert!(item.contact.is_none());
    assert!(item.message.is_some());

    let json = serde_json::to_value(view_to_item(&View::PermissionDenied)).unwrap();
    assert_eq!(json["status"], "permission_denied");
    assert!(json.get("contact").is_none());
}

#[test]
fn config_init_refuses_to_overwrite() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("kith").join("config.json");

    run_config_init(false, &path).unwrap();
    assert_eq!(
        KithConfig::load_from_path(&path).unwrap(),
        KithConfig::default()
    );

    let error = run_config_init(false, &path).unwrap_err();
    assert!(matches!(error, CliError::Config(_)));
    run_config_init(true, &path).unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_contacts_file_shows_permission_view() {
    let tmp = tempdir().unwrap();
    let ctx = context_in(tmp.path());

    let mut app = build_app(&ctx, true, true).await.unwrap();
    app.handle(AppEvent::Activate { now: Local::now() })
        .await
        .unwrap();
    assert_eq!(app.view(), &View::PermissionDenied);
}

#[tokio::test(flavor = "multi_thread")]
async fn database_backed_app_keeps_pick_and_exclusions() {
    let tmp = tempdir().unwrap();
    let ctx = context_in(tmp.path());
    std::fs::write(&ctx.contacts_path, BOOK).unwrap();
    let now = Local::now();

    let first = {
        let mut app = build_app(&ctx, true, true).await.unwrap();
        app.handle(AppEvent::Activate { now }).await.unwrap();
        app.view().contact().cloned().unwrap()
    };

    // A second process on the same day sees the same contact.
    {
        let mut app = build_app(&ctx, true, true).await.unwrap();
        app.handle(AppEvent::Activate { now }).await.unwrap();
        assert_eq!(app.view().contact(), Some(&first));

        app.handle(AppEvent::ExcludeCurrent { now }).await.unwrap();
        let second = app.view().contact().cloned().unwrap();
        assert_ne!(second.id, first.id);

        app.handle(AppEvent::ExcludeCurrent { now }).await.unwrap();
        assert_eq!(app.view(), &View::NoOneLeft);
    }

    let store = open_store(StoreBackend::Database, &ctx.db_path)
        .await
        .unwrap();
    let excluded = ExclusionStore::new(&store).list().await.unwrap();
    assert_eq!(excluded.len(), 2);
    assert!(excluded.contains(&first.id));
    assert!(!excluded.contains(&ContactId::new("3")));
}

#[test]
fn default_log_filter_covers_binary_and_core() {
    let rendered = crate::with_default_directives(EnvFilter::new("warn")).to_string();
    assert!(rendered.contains("kith=info"));
    assert!(rendered.contains("kith_core=info"));
}

#[test]
fn reminder_line_names_title() {
    let notification = Notification {
        title: "Write a friend".to_string(),
        body: "Someone is waiting".to_string(),
    };
    let line = reminder_line(chrono::Utc::now(), &notification);
    assert!(line.starts_with("Reminder \"Write a friend\" scheduled for "));
}

#[tokio::test]
async fn keyring_backend_persists_or_is_rejected() {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("unused.db");

    match open_store(StoreBackend::Keyring, &db_path).await {
        Ok(store) => {
            store.set("keychainRoundTrip", "[\"a\"]").await.unwrap();
            let reopened = open_store(StoreBackend::Keyring, &db_path).await.unwrap();
            assert_eq!(
                reopened.get("keychainRoundTrip").await.unwrap().as_deref(),
                Some("[\"a\"]")
            );
        }
        Err(error) => assert!(matches!(error, CliError::Core(kith_core::Error::Config(_)))),
    }
    assert!(!db_path.exists());

    // keyring's fallback mock keeps values per entry only.
    keyring::set_default_credential_builder(keyring::mock::default_credential_builder());
    let result = KeyringStore::new().ensure_persistent().await;
    assert!(matches!(result, Err(kith_core::Error::Config(_))));
}

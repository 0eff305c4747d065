use std::env;
use std::path::{Path, PathBuf};

use kith_core::actions::ContactAction;
use kith_core::config::{KithConfig, StoreBackend};
use kith_core::contacts::JsonFileContactSource;
use kith_core::db::{Database, LibSqlKeyValueStore};
use kith_core::selector::{Picker, RandomPicker};
use kith_core::storage::KeyValueStore;
use kith_core::util::compact_text;
use kith_core::{App, View};
use serde::Serialize;

use crate::error::CliError;
use crate::keyring_store::KeyringStore;
use crate::opener::SystemOpener;
use crate::scheduler::LogScheduler;

const CONFIG_FILE_NAME: &str = "config.json";
const DB_FILE_NAME: &str = "kith.db";
const CONTACTS_FILE_NAME: &str = "contacts.json";
const NAME_WIDTH: usize = 40;

/// Resolved locations and configuration for one invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub config: KithConfig,
    pub config_path: PathBuf,
    pub db_path: PathBuf,
    pub contacts_path: PathBuf,
}

impl Context {
    pub fn resolve(
        cli_config: Option<PathBuf>,
        cli_db_path: Option<PathBuf>,
        cli_contacts: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        let config_path = resolve_config_path(cli_config);
        let config = KithConfig::load_from_path(&config_path)
            .map_err(|error| CliError::Config(error.to_string()))?;
        let db_path = resolve_db_path(cli_db_path);
        let contacts_path = resolve_contacts_path(cli_contacts, &config);

        Ok(Self {
            config,
            config_path,
            db_path,
            contacts_path,
        })
    }
}

pub fn resolve_config_path(cli_config: Option<PathBuf>) -> PathBuf {
    cli_config
        .or_else(|| env::var_os("KITH_CONFIG").map(PathBuf::from))
        .unwrap_or_else(|| kith_dir(dirs::config_dir()).join(CONFIG_FILE_NAME))
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> PathBuf {
    cli_db_path
        .or_else(|| env::var_os("KITH_DB_PATH").map(PathBuf::from))
        .unwrap_or_else(|| kith_dir(dirs::data_dir()).join(DB_FILE_NAME))
}

pub fn resolve_contacts_path(cli_contacts: Option<PathBuf>, config: &KithConfig) -> PathBuf {
    cli_contacts
        .or_else(|| env::var_os("KITH_CONTACTS").map(PathBuf::from))
        .or_else(|| config.contacts_path.clone())
        .unwrap_or_else(|| kith_dir(dirs::data_dir()).join(CONTACTS_FILE_NAME))
}

fn kith_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join("kith")
}

/// Key-value store selected by the `backend` config field
pub enum CliStore {
    Database(Database),
    Keyring(KeyringStore),
}

impl KeyValueStore for CliStore {
    async fn get(&self, key: &str) -> kith_core::Result<Option<String>> {
        match self {
            Self::Database(db) => LibSqlKeyValueStore::new(db.connection()).get(key).await,
            Self::Keyring(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> kith_core::Result<()> {
        match self {
            Self::Database(db) => {
                LibSqlKeyValueStore::new(db.connection())
                    .set(key, value)
                    .await
            }
            Self::Keyring(store) => store.set(key, value).await,
        }
    }
}

pub async fn open_store(backend: StoreBackend, db_path: &Path) -> Result<CliStore, CliError> {
    match backend {
        StoreBackend::Database => {
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            tracing::debug!("Opening database at {}", db_path.display());
            Ok(CliStore::Database(Database::open(db_path).await?))
        }
        StoreBackend::Keyring => {
            let store = KeyringStore::new();
            store.ensure_persistent().await?;
            Ok(CliStore::Keyring(store))
        }
    }
}

/// Wire the CLI collaborators into an [`App`]; `as_json` silences the
/// reminder line on stdout
pub async fn build_app(
    ctx: &Context,
    dry_run: bool,
    as_json: bool,
) -> Result<App<CliStore, JsonFileContactSource, LogScheduler, SystemOpener, impl Picker>, CliError>
{
    let store = open_store(ctx.config.backend, &ctx.db_path).await?;
    Ok(App::new(
        store,
        JsonFileContactSource::new(&ctx.contacts_path),
        LogScheduler::new(as_json),
        SystemOpener::new(dry_run),
        RandomPicker::from_entropy(),
        &ctx.config,
    )?)
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ContactItem {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ViewItem {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn view_to_item(view: &View) -> ViewItem {
    let (status, message) = match view {
        View::Idle => ("idle", None),
        View::Showing(_) => ("showing", None),
        View::PermissionDenied => ("permission_denied", Some(permission_hint())),
        View::NoOneLeft => ("no_one_left", Some(no_one_left_hint())),
        View::StorageUnavailable(reason) => ("storage_unavailable", Some(reason.clone())),
    };

    ViewItem {
        status,
        contact: view.contact().map(|contact| ContactItem {
            id: contact.id.to_string(),
            name: contact.name.clone(),
            phone: contact.primary_phone().map(str::to_string),
            email: contact.email.clone(),
            actions: ContactAction::available_for(contact)
                .into_iter()
                .map(|action| action.to_string())
                .collect(),
        }),
        message,
    }
}

pub fn format_view_lines(view: &View) -> Vec<String> {
    match view {
        View::Idle => Vec::new(),
        View::Showing(contact) => {
            let mut lines = vec![compact_text(&contact.name, NAME_WIDTH)];
            if let Some(phone) = contact.primary_phone() {
                lines.push(format!("  phone  {phone}"));
            }
            if let Some(email) = contact.email.as_deref() {
                lines.push(format!("  email  {email}"));
            }
            let actions = ContactAction::available_for(contact)
                .into_iter()
                .map(|action| action.to_string())
                .collect::<Vec<_>>()
                .join(" | ");
            lines.push(format!("  reach  kith reach <{actions}>"));
            lines
        }
        View::PermissionDenied => vec![permission_hint()],
        View::NoOneLeft => vec![no_one_left_hint()],
        View::StorageUnavailable(reason) => vec![format!("Storage is unavailable: {reason}")],
    }
}

pub fn print_view(view: &View, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&view_to_item(view))?);
    } else {
        for line in format_view_lines(view) {
            println!("{line}");
        }
    }
    Ok(())
}

fn permission_hint() -> String {
    "Contacts are not accessible. Export your address book to JSON and pass --contacts <PATH> (or set contacts_path in the config).".to_string()
}

fn no_one_left_hint() -> String {
    "No one left to pick: every contact has been excluded or the address book is empty.".to_string()
}

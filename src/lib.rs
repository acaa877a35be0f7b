pub mod aggregation;
pub mod commands;
pub mod db;
pub mod selection;
pub mod settings;
pub mod shell;
pub mod utils;

use std::io;

use anyhow::Result;
use log::{error, info};

use aggregation::AggregationConfig;
use db::{Catalog, Database, NameIndex};
use selection::SelectionController;
use settings::{DiarySettings, SettingsStore};

/// Everything a running diary session holds.
pub struct AppState {
    pub(crate) db: Database,
    pub(crate) catalog: Catalog,
    pub(crate) names: NameIndex,
    pub(crate) selection: SelectionController,
    pub(crate) aggregation: AggregationConfig,
    pub(crate) completion_limit: usize,
}

impl AppState {
    /// Load the catalog named in `settings`. Returns `None` when the catalog
    /// file does not exist; the diary cannot run without it.
    pub fn open(settings: &DiarySettings) -> Result<Option<Self>> {
        let db = Database::new(&settings.catalog_path, &settings.records_path);
        let Some(catalog) = commands::load_catalog(&db)? else {
            return Ok(None);
        };
        let names = NameIndex::build(&catalog);

        Ok(Some(Self {
            db,
            catalog,
            names,
            selection: SelectionController::new(),
            aggregation: AggregationConfig::default(),
            completion_limit: settings.completion_limit,
        }))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

pub fn run() -> Result<()> {
    // RUST_LOG overrides the default level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Food diary starting up...");

    let mut settings_store = SettingsStore::new(SettingsStore::default_path())?;
    if !settings_store.path().exists() {
        let defaults = settings_store.settings().clone();
        settings_store.update(defaults)?;
        info!("Wrote default settings to {}", settings_store.path().display());
    }

    let Some(mut state) = AppState::open(settings_store.settings())? else {
        error!(
            "Catalog {} not found; shutting down",
            settings_store.settings().catalog_path.display()
        );
        println!("No source file found");
        return Ok(());
    };

    let stdin = io::stdin();
    shell::run_shell(&mut state, stdin.lock(), io::stdout())
}

//! Planner session
//!
//! A [`Session`] is the single owner of an expense store for one user. The
//! menu drives it interactively; tests and the `summary` command drive it
//! directly. Sessions share nothing, so several can live side by side.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{PlannerPaths, Settings};
use crate::error::PlannerResult;
use crate::input::parse_budget;
use crate::models::Money;
use crate::storage;
use crate::store::ExpenseStore;

/// One user's working state
#[derive(Debug)]
pub struct Session {
    store: ExpenseStore,
    paths: PlannerPaths,
    settings: Settings,
    /// Last file saved to or loaded from
    current_file: Option<PathBuf>,
}

impl Session {
    pub fn new(paths: PlannerPaths, settings: Settings) -> Self {
        Self {
            store: ExpenseStore::new(),
            paths,
            settings,
            current_file: None,
        }
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ExpenseStore {
        &mut self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Set the budget from user text such as "$500"
    ///
    /// On rejection the previous budget is kept.
    pub fn set_budget(&mut self, input: &str) -> PlannerResult<Money> {
        let budget = parse_budget(input)?;
        self.store.set_budget(budget)?;
        Ok(budget)
    }

    /// Resolve a filename typed by the user
    ///
    /// A blank answer means the file last saved or loaded, or the configured
    /// default file when there is none yet. The default directory is created
    /// on demand.
    pub fn resolve_file(&self, input: &str) -> PlannerResult<PathBuf> {
        let input = input.trim();
        if !input.is_empty() {
            return Ok(PathBuf::from(input));
        }
        if let Some(current) = &self.current_file {
            return Ok(current.clone());
        }

        let path = self.settings.data_file(&self.paths);
        if path == self.paths.default_data_file() {
            self.paths.ensure_directories()?;
        }
        Ok(path)
    }

    /// Save the store to `path`
    pub fn save(&mut self, path: &Path) -> PlannerResult<()> {
        storage::save_store(path, &self.store)?;
        self.current_file = Some(path.to_path_buf());
        Ok(())
    }

    /// Replace the store with the contents of `path`
    ///
    /// The file is parsed completely before anything is replaced; on any
    /// error the current budget and expenses are left exactly as they were.
    pub fn load(&mut self, path: &Path) -> PlannerResult<()> {
        let loaded = storage::load_store(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "load rejected; keeping current data");
            e
        })?;

        debug!(
            replaced = self.store.len(),
            loaded = loaded.len(),
            "replacing session store"
        );
        self.store = loaded;
        self.current_file = Some(path.to_path_buf());
        Ok(())
    }
}

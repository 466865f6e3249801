//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::SymbolCatalog;
use crate::map::TubeMap;
use crate::validate::ValidatorConfig;

/// Shared application state.
///
/// The map and catalog are loaded once at startup and never change, so
/// handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// The tube map grid
    pub map: Arc<TubeMap>,

    /// Station and line listings
    pub catalog: Arc<SymbolCatalog>,

    /// Route validation configuration
    pub config: Arc<ValidatorConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(map: TubeMap, catalog: SymbolCatalog, config: ValidatorConfig) -> Self {
        Self {
            map: Arc::new(map),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}

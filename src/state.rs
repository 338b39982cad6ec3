use std::sync::Arc;

use crate::formation::FormationService;
use crate::generators::Clock;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub formation: FormationService,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            formation: FormationService::with_system_clock(),
        }
    }

    /// State whose documents are dated by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            formation: FormationService::new(clock),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

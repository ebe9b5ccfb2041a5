use std::sync::Mutex;

use crate::data_types::Route;

/// Client-side route transitions. Fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Blocking yes/no prompt shown before destructive actions.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Remembers where the last transition went instead of switching pages; the
/// console front end takes it to decide what to show next.
#[derive(Default)]
pub struct CurrentRouteNavigator {
    current: Mutex<Option<Route>>,
}

impl CurrentRouteNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        match self.current.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the pending route and clears it.
    pub fn take(&self) -> Option<Route> {
        match self.current.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

impl Navigator for CurrentRouteNavigator {
    fn navigate(&self, route: Route) {
        log::debug!("Navigating to {}", route);
        match self.current.lock() {
            Ok(mut guard) => *guard = Some(route),
            Err(poisoned) => *poisoned.into_inner() = Some(route),
        }
    }
}

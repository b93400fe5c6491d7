//! Shared state handed to every request.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use torus_life_rendering::PageTemplate;
use torus_life_world::World;

use crate::routes::RouteTable;

/// Cheaply clonable handle to the single board and its collaborators.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    world: Mutex<World>,
    page: PageTemplate,
    static_dir: PathBuf,
    routes: RouteTable,
}

impl AppState {
    /// Wraps the world with the page template and static asset root.
    #[must_use]
    pub fn new(world: World, page: PageTemplate, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(Shared {
                world: Mutex::new(world),
                page,
                static_dir: static_dir.into(),
                routes: RouteTable::standard(),
            }),
        }
    }

    /// Runs `f` with exclusive access to the world.
    ///
    /// Commands never leave the world half-updated, so a poisoned lock is
    /// recovered rather than propagated.
    pub fn with_world<T>(&self, f: impl FnOnce(&mut World) -> T) -> T {
        let mut world = self
            .inner
            .world
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut world)
    }

    /// Page template rendered for `GET /`.
    #[must_use]
    pub fn page(&self) -> &PageTemplate {
        &self.inner.page
    }

    /// Directory served under the static prefix.
    #[must_use]
    pub fn static_dir(&self) -> &Path {
        &self.inner.static_dir
    }

    /// Route table consulted by the dispatcher.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.inner.routes
    }
}

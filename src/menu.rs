//! Menu projection: the visible navigation derived from routes and session.
//!
//! Projection is pure and order-preserving: the declared route order filtered
//! in place, nothing reordered. [`MenuProjector`] adds the reactive part by
//! watching the session channel so consumers know when to recompute.

use tokio::sync::watch;

use crate::routes::{RouteDescriptor, RouteTable};
use crate::session::{Session, SessionHandle};

/// Routes eligible for the menu under `session`.
///
/// A route is included iff it is visible, titled, its auth requirement is met,
/// and (when an allow-list is present) the session's role is listed.
#[must_use]
pub fn project<'a>(table: &'a RouteTable, session: &Session) -> Vec<&'a RouteDescriptor> {
    table
        .routes()
        .iter()
        .filter(|route| {
            if route.hidden || route.title.is_none() {
                return false;
            }
            if route.requires_auth && !session.is_authenticated() {
                return false;
            }
            if let Some(allowed) = route.allowed_roles {
                if !allowed.contains(&session.current_role()) {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Reactive, read-only consumer of the route table and session.
pub struct MenuProjector {
    table: RouteTable,
    session: SessionHandle,
    changes: watch::Receiver<Session>,
}

impl MenuProjector {
    #[must_use]
    pub fn new(table: RouteTable, session: SessionHandle) -> Self {
        let changes = session.subscribe();
        Self { table, session, changes }
    }

    /// Current menu items, recomputed from the latest session snapshot.
    #[must_use]
    pub fn items(&self) -> Vec<RouteDescriptor> {
        project(&self.table, &self.session.snapshot()).into_iter().copied().collect()
    }

    /// Wait until the session changes (login, logout, restore).
    pub async fn changed(&mut self) {
        // The sender lives inside the session store; an error here means the
        // store itself is gone and there is nothing left to project.
        let _ = self.changes.changed().await;
    }
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;

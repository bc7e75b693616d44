//! Navigation guard: admits or redirects a route transition.
//!
//! DESIGN
//! ======
//! Evaluation is synchronous and pure apart from the one-time storage restore:
//! the guard returns a decision plus the resolved document title, and the
//! embedding shell performs the actual navigation and title update. Ordering
//! is load-bearing: the login-bounce check runs before the auth check so an
//! authenticated user is never shown the login form, and the role check only
//! applies once authentication is confirmed.

use crate::config::GateConfig;
use crate::routes::RouteTable;
use crate::session::SessionHandle;

/// What the shell should do with a requested transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Commit the transition.
    Admit,
    /// Send the user to the login route, remembering where they wanted to go.
    RedirectToLogin {
        /// The login route path.
        login: String,
        /// Originally requested path, forwarded after a successful login.
        redirect: String,
    },
    /// Silent redirect (login bounce or role mismatch).
    Redirect { to: String },
}

impl GuardDecision {
    /// Concrete target for redirect decisions, `None` when admitted.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Admit => None,
            Self::RedirectToLogin { login, redirect } => Some(format!("{login}?redirect={redirect}")),
            Self::Redirect { to } => Some(to.clone()),
        }
    }
}

/// Decision plus the document title to apply for this transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardOutcome {
    pub decision: GuardDecision,
    /// `"{route title} - {app title}"`, or the app title alone.
    pub document_title: String,
}

/// Runs before every route transition.
pub struct NavigationGuard {
    session: SessionHandle,
    table: RouteTable,
    login_path: String,
    landing_path: String,
    app_title: String,
}

impl NavigationGuard {
    #[must_use]
    pub fn new(session: SessionHandle, table: RouteTable, config: &GateConfig) -> Self {
        Self {
            session,
            table,
            login_path: config.login_path.clone(),
            landing_path: config.landing_path.clone(),
            app_title: config.app_title.clone(),
        }
    }

    /// Evaluate a transition to `path`.
    #[must_use]
    pub fn evaluate(&self, path: &str) -> GuardOutcome {
        // One-time restore from durable storage, never repeated per transition.
        self.session.ensure_initialized();

        let target = self.table.resolve(path);
        let document_title = match target.title {
            Some(title) => format!("{title} - {}", self.app_title),
            None => self.app_title.clone(),
        };
        let session = self.session.snapshot();

        let decision = if target.path == self.login_path {
            if session.is_authenticated() {
                GuardDecision::Redirect { to: self.landing_path.clone() }
            } else {
                GuardDecision::Admit
            }
        } else if target.requires_auth && !session.is_authenticated() {
            GuardDecision::RedirectToLogin {
                login: self.login_path.clone(),
                redirect: path.to_owned(),
            }
        } else if target.requires_auth
            && target
                .allowed_roles
                .is_some_and(|allowed| !allowed.contains(&session.current_role()))
        {
            tracing::warn!(
                role = %session.current_role(),
                path = target.path,
                "role not permitted for route, redirecting to landing"
            );
            GuardDecision::Redirect { to: self.landing_path.clone() }
        } else {
            GuardDecision::Admit
        };

        GuardOutcome { decision, document_title }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

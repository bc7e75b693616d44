//! Static route table with access-control metadata.
//!
//! Routes are declared once at startup and immutable afterwards. Each entry
//! carries the flags the navigation guard and menu projection consume:
//! auth requirement, role allow-list, visibility, and display title.

use crate::role::Role;

/// One navigable unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path as matched by the shell router, e.g. `/users`.
    pub path: &'static str,
    /// Unique route name.
    pub name: &'static str,
    /// Display title; required for menu eligibility on visible routes.
    pub title: Option<&'static str>,
    /// Menu icon hint for the rendering layer.
    pub icon: Option<&'static str>,
    /// Whether an authenticated session is required to enter.
    pub requires_auth: bool,
    /// Role allow-list; `None` means every role is allowed.
    pub allowed_roles: Option<&'static [Role]>,
    /// Hidden routes never appear in the menu.
    pub hidden: bool,
}

impl RouteDescriptor {
    #[must_use]
    pub const fn new(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            title: None,
            icon: None,
            requires_auth: false,
            allowed_roles: None,
            hidden: false,
        }
    }

    #[must_use]
    pub const fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub const fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    #[must_use]
    pub const fn roles(mut self, roles: &'static [Role]) -> Self {
        self.allowed_roles = Some(roles);
        self
    }

    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Catch-all for paths with no declared route.
pub const NOT_FOUND: RouteDescriptor =
    RouteDescriptor::new("/404", "not-found").title("404 Not Found").hidden();

// =============================================================================
// TABLE
// =============================================================================

/// Ordered, immutable list of route descriptors.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    #[must_use]
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    /// Declared order, unfiltered.
    #[must_use]
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Exact path lookup, ignoring any query string on `path`.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        let bare = path.split('?').next().unwrap_or(path);
        self.routes.iter().find(|route| route.path == bare)
    }

    /// Path lookup falling back to the not-found descriptor.
    #[must_use]
    pub fn resolve(&self, path: &str) -> &RouteDescriptor {
        self.find(path).unwrap_or(&NOT_FOUND)
    }

    /// Report invariant violations: visible routes without a title, and
    /// duplicate names or paths.
    ///
    /// # Errors
    ///
    /// One message per violation.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        for route in &self.routes {
            if !route.hidden && route.title.is_none() {
                problems.push(format!("visible route '{}' has no title", route.name));
            }
        }
        for (i, route) in self.routes.iter().enumerate() {
            for other in &self.routes[i + 1..] {
                if route.name == other.name {
                    problems.push(format!("duplicate route name '{}'", route.name));
                }
                if route.path == other.path {
                    problems.push(format!("duplicate route path '{}'", route.path));
                }
            }
        }
        if problems.is_empty() { Ok(()) } else { Err(problems) }
    }
}

/// The console's static route table.
///
/// The login route is hidden, unauthenticated, and guest-only; the landing
/// route is the dashboard at `/`.
#[must_use]
pub fn console_routes() -> RouteTable {
    RouteTable::new(vec![
        RouteDescriptor::new("/login", "login")
            .title("Sign In")
            .roles(&[Role::Guest])
            .hidden(),
        RouteDescriptor::new("/", "dashboard")
            .title("Dashboard")
            .icon("odometer")
            .requires_auth()
            .roles(&[Role::Admin, Role::User]),
        RouteDescriptor::new("/users", "users")
            .title("User Management")
            .icon("user")
            .requires_auth()
            .roles(&[Role::Admin]),
        RouteDescriptor::new("/roles", "roles")
            .title("Role Management")
            .icon("user")
            .requires_auth()
            .roles(&[Role::Admin]),
        RouteDescriptor::new("/products", "products")
            .title("Product Management")
            .icon("shopping-cart")
            .requires_auth()
            .roles(&[Role::Admin, Role::User]),
        RouteDescriptor::new("/orders", "orders")
            .title("Order Management")
            .icon("shopping-cart")
            .requires_auth()
            .roles(&[Role::Admin, Role::User]),
        RouteDescriptor::new("/about", "about")
            .title("About")
            .icon("question")
            .roles(&[Role::Admin, Role::User, Role::Guest]),
        NOT_FOUND,
    ])
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

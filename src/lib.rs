//! Headless session/authorization gate for an administrative console client.
//!
//! ARCHITECTURE
//! ============
//! [`session::SessionHandle`] is the single source of truth for identity,
//! persisted through a [`storage::KeyValueStore`]. Three consumers hang off
//! it: [`guard::NavigationGuard`] decides route transitions,
//! [`gate::RequestGate`] stamps outbound HTTP calls and reacts to 401s, and
//! [`menu::MenuProjector`] derives the visible navigation. The guard and menu
//! only read; the gate additionally triggers teardown when the backend says
//! the session is gone.
//!
//! The rendering layer is out of scope: guard outcomes and menu items are
//! plain data for whatever shell embeds this crate.

pub mod api;
pub mod config;
pub mod error;
pub mod gate;
pub mod guard;
pub mod menu;
pub mod role;
pub mod routes;
pub mod session;
pub mod storage;
pub mod validate;

pub use config::GateConfig;
pub use error::GateError;
pub use gate::{Navigator, RequestGate};
pub use guard::{GuardDecision, GuardOutcome, NavigationGuard};
pub use menu::MenuProjector;
pub use role::Role;
pub use routes::{RouteDescriptor, RouteTable, console_routes};
pub use session::{AuthProvider, Credentials, LoginResponse, Session, SessionHandle, SessionStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

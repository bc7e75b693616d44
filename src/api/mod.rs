//! Typed REST wrappers over the request gate.
//!
//! Thin by design: every function is one gated call plus a serde model.
//! Authorization, trace ids, and failure mapping all live in the gate;
//! nothing here re-implements them.

pub mod auth;
pub mod orders;
pub mod products;
pub mod users;

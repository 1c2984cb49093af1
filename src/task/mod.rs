//! Task lifecycle and query engine.
//!
//! Users own tasks, tag them with their own tags, comment on them, and query
//! them by status and deadline. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

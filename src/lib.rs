//! Orchestra: personal task management core.
//!
//! This crate provides the task lifecycle and query engine behind a
//! personal task manager: owner-scoped tasks with a three-state status,
//! deadline-range queries with pagination, tagging and comments.
//!
//! # Architecture
//!
//! Orchestra follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, tagging and comments
//! - [`config`]: Connection settings for the `PostgreSQL` adapters

pub mod config;
pub mod task;

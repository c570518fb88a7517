//! Todo Keeper: validated to-do item management.
//!
//! This crate provides the business core of a small to-do service: item
//! validation, lifecycle rules, and incoming-item queries by named range or
//! explicit interval. Transports such as HTTP call into
//! [`todo::services::ToDoManager`]; storage is supplied through the
//! [`todo::ports::ToDoStore`] port.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`todo`]: To-do items, their store port, adapters and manager
//! - [`config`]: Environment-driven settings
//! - [`telemetry`]: Tracing subscriber installation

pub mod config;
pub mod telemetry;
pub mod todo;

//! To-do item management.
//!
//! Validates and stores to-do items, enforces their lifecycle invariants and
//! answers incoming-item queries by named range or explicit interval. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

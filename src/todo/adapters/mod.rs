//! Store adapters for to-do persistence.

pub mod memory;
pub mod postgres;

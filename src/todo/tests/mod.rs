//! Unit tests for the to-do module.

mod support;

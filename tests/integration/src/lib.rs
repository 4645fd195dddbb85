//! Integration test utilities for the presence endpoint
//!
//! This crate provides helpers for running end-to-end tests against
//! a real server backed by an in-memory store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

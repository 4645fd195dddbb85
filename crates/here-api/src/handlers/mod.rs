//! Route handlers

pub mod presence;

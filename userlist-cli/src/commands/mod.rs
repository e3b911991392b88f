//! Command implementations

pub mod serve;

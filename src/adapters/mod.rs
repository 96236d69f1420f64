//! Adapters implementing the port traits.

pub mod mock;

//! Domain models for the backend bootstrap.
//!
//! - [`BackendParams`] - every name/location threaded through the steps
//! - [`NetworkParams`] - names for the optional private-networking variant

mod params;

// Re-export public types
pub use params::{BackendParams, NetworkParams};

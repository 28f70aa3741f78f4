//! Console output formatting.
//!
//! - [`backend`] - the Terraform `backend "azurerm"` block
//! - [`auth`] - authentication environment-variable hints

mod auth;
mod backend;

// Re-export public functions
pub use auth::render_auth_hints;
pub use backend::{print_summary, render_backend_block};

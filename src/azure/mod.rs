//! Azure CLI interaction.
//!
//! This module handles everything that talks to the `az` binary:
//! - [`cli`] - command execution behind the [`Runner`] seam
//! - [`preflight`] - CLI presence and login/session checks
//! - [`naming`] - globally-unique storage account name allocation
//! - [`keys`] - access key retrieval for the opt-in env hint

mod cli;
mod keys;
mod naming;
mod preflight;

// Re-export public types and functions
pub use cli::{AzCli, Runner};
pub use keys::fetch_access_key;
pub use naming::{allocate_account_name, verify_account_name};
pub use preflight::preflight;

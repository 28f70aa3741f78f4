//! Sequential resource provisioning.
//!
//! One fixed, fail-fast order of `az` calls:
//! - [`group`] - resource group (the only create-if-absent step)
//! - [`network`] - vnet, subnet, private endpoint, private DNS (extended variant)
//! - [`storage`] - storage account, container, versioning, soft-delete retention
//! - [`sequence`] - the ordering itself

mod group;
mod network;
mod sequence;
mod storage;

// Re-export public functions
pub use sequence::run_sequence;

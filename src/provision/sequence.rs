//! The fixed provisioning order.
//!
//! group → (vnet, subnet, private endpoint, DNS zone, zone/vnet link,
//! DNS record)? → storage account → container → versioning → retention.
//!
//! The first failing call aborts the whole run. Nothing created so far is
//! rolled back; the operator deletes the resource group by hand after a
//! partial failure.

use super::{group, network, storage};
use crate::azure::Runner;
use crate::models::BackendParams;
use std::error::Error;

/// Run every provisioning call in order, stopping at the first failure.
pub fn run_sequence(az: &dyn Runner, params: &BackendParams) -> Result<(), Box<dyn Error>> {
    group::ensure_resource_group(az, params)?;

    if let Some(net) = &params.network {
        network::create_private_network(az, params, net)?;
    }

    storage::create_storage_account(az, params)?;
    storage::create_container(az, params)?;
    storage::enable_versioning(az, params)?;
    storage::enable_delete_retention(az, params)?;

    log::info!("All provisioning steps completed");
    Ok(())
}

//! Storage account, container and blob-service-properties steps.

use crate::azure::Runner;
use crate::config::RETENTION_DAYS;
use crate::models::BackendParams;
use colored::Colorize;
use std::error::Error;

/// Create the storage account with the fixed security flags.
///
/// Always HTTPS-only, minimum TLS 1.2, no anonymous blob access. Public
/// network access is shut off only in the private-networking variant, where
/// the private endpoint takes over.
pub fn create_storage_account(
    az: &dyn Runner,
    params: &BackendParams,
) -> Result<(), Box<dyn Error>> {
    log::info!(
        "Creating storage account {account}",
        account = params.storage_account.green()
    );
    az.run(&account_cmd(params))?;
    Ok(())
}

/// Create the blob container holding the state file.
pub fn create_container(az: &dyn Runner, params: &BackendParams) -> Result<(), Box<dyn Error>> {
    log::info!(
        "Creating container {container}",
        container = params.container.green()
    );
    az.run(&container_cmd(params))?;
    Ok(())
}

/// Turn on blob versioning.
pub fn enable_versioning(az: &dyn Runner, params: &BackendParams) -> Result<(), Box<dyn Error>> {
    log::info!("Enabling blob versioning");
    az.run(&versioning_cmd(params))?;
    Ok(())
}

/// Turn on soft-delete with the fixed retention window.
pub fn enable_delete_retention(
    az: &dyn Runner,
    params: &BackendParams,
) -> Result<(), Box<dyn Error>> {
    log::info!("Enabling {RETENTION_DAYS}-day soft-delete retention");
    az.run(&retention_cmd(params))?;
    Ok(())
}

fn account_cmd(params: &BackendParams) -> String {
    let mut cmd = format!(
        "az storage account create --name {account} --resource-group {rg} --location '{loc}' --sku Standard_LRS --kind StorageV2 --https-only true --min-tls-version TLS1_2 --allow-blob-public-access false --output none",
        account = params.storage_account,
        rg = params.resource_group,
        loc = params.location
    );
    if params.network.is_some() {
        cmd.push_str(" --public-network-access Disabled");
    }
    cmd
}

fn container_cmd(params: &BackendParams) -> String {
    format!(
        "az storage container create --name {container} --account-name {account} --auth-mode login --output none",
        container = params.container,
        account = params.storage_account
    )
}

fn versioning_cmd(params: &BackendParams) -> String {
    format!(
        "az storage account blob-service-properties update --account-name {account} --resource-group {rg} --enable-versioning true --output none",
        account = params.storage_account,
        rg = params.resource_group
    )
}

fn retention_cmd(params: &BackendParams) -> String {
    format!(
        "az storage account blob-service-properties update --account-name {account} --resource-group {rg} --enable-delete-retention true --delete-retention-days {days} --output none",
        account = params.storage_account,
        rg = params.resource_group,
        days = RETENTION_DAYS
    )
}

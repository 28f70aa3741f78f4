//! Resource group step.

use crate::azure::Runner;
use crate::models::BackendParams;
use colored::Colorize;
use std::error::Error;

/// Create the resource group unless it already exists.
///
/// This is the only create-if-absent check in the sequence; every later step
/// is issued unconditionally.
pub fn ensure_resource_group(az: &dyn Runner, params: &BackendParams) -> Result<(), Box<dyn Error>> {
    let exists = az.run(&exists_cmd(params))?;
    if exists.trim() == "true" {
        log::info!(
            "Resource group {rg} already exists, skipping create",
            rg = params.resource_group.green()
        );
        return Ok(());
    }

    log::info!(
        "Creating resource group {rg} in {loc}",
        rg = params.resource_group.green(),
        loc = params.location
    );
    az.run(&create_cmd(params))?;
    Ok(())
}

fn exists_cmd(params: &BackendParams) -> String {
    format!("az group exists --name {rg}", rg = params.resource_group)
}

fn create_cmd(params: &BackendParams) -> String {
    format!(
        "az group create --name {rg} --location '{loc}' --output none",
        rg = params.resource_group,
        loc = params.location
    )
}

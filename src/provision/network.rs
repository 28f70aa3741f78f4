//! Private networking steps (extended variant).
//!
//! Unconditional calls in fixed order: vnet, subnet, private endpoint,
//! private DNS zone, zone/vnet link, DNS record (via the endpoint's
//! dns-zone-group). Without the link the zone is never attached to the vnet
//! and resolvers inside it would not see the private record. The endpoint is
//! created before the storage account, so it references the account by its
//! constructed resource id.

use crate::azure::Runner;
use crate::config::{SUBNET_PREFIX, VNET_PREFIX};
use crate::models::{BackendParams, NetworkParams};
use colored::Colorize;
use std::error::Error;

/// Run the network calls. Fail-fast, no rollback.
pub fn create_private_network(
    az: &dyn Runner,
    params: &BackendParams,
    net: &NetworkParams,
) -> Result<(), Box<dyn Error>> {
    log::info!(
        "Wiring private network {vnet} for {account}",
        vnet = net.vnet.green(),
        account = params.storage_account.green()
    );

    az.run(&vnet_cmd(params, net))?;
    az.run(&subnet_cmd(params, net))?;
    az.run(&private_endpoint_cmd(params, net))?;
    az.run(&dns_zone_cmd(params, net))?;
    az.run(&dns_link_cmd(params, net))?;
    az.run(&dns_record_cmd(params, net))?;
    Ok(())
}

fn vnet_cmd(params: &BackendParams, net: &NetworkParams) -> String {
    format!(
        "az network vnet create --resource-group {rg} --name {vnet} --address-prefixes {prefix} --location '{loc}' --output none",
        rg = params.resource_group,
        vnet = net.vnet,
        prefix = VNET_PREFIX,
        loc = params.location
    )
}

fn subnet_cmd(params: &BackendParams, net: &NetworkParams) -> String {
    format!(
        "az network vnet subnet create --resource-group {rg} --vnet-name {vnet} --name {subnet} --address-prefixes {prefix} --disable-private-endpoint-network-policies true --output none",
        rg = params.resource_group,
        vnet = net.vnet,
        subnet = net.subnet,
        prefix = SUBNET_PREFIX
    )
}

fn private_endpoint_cmd(params: &BackendParams, net: &NetworkParams) -> String {
    format!(
        "az network private-endpoint create --resource-group {rg} --name {pe} --vnet-name {vnet} --subnet {subnet} --private-connection-resource-id {id} --group-id blob --connection-name {pe}-conn --location '{loc}' --output none",
        rg = params.resource_group,
        pe = net.private_endpoint,
        vnet = net.vnet,
        subnet = net.subnet,
        id = params.storage_account_id(),
        loc = params.location
    )
}

fn dns_zone_cmd(params: &BackendParams, net: &NetworkParams) -> String {
    format!(
        "az network private-dns zone create --resource-group {rg} --name {zone} --output none",
        rg = params.resource_group,
        zone = net.dns_zone
    )
}

fn dns_link_cmd(params: &BackendParams, net: &NetworkParams) -> String {
    format!(
        "az network private-dns link vnet create --resource-group {rg} --zone-name {zone} --name {link} --virtual-network {vnet} --registration-enabled false --output none",
        rg = params.resource_group,
        zone = net.dns_zone,
        link = net.dns_link,
        vnet = net.vnet
    )
}

fn dns_record_cmd(params: &BackendParams, net: &NetworkParams) -> String {
    format!(
        "az network private-endpoint dns-zone-group create --resource-group {rg} --endpoint-name {pe} --name {pe}-zone-group --private-dns-zone {zone} --zone-name blob --output none",
        rg = params.resource_group,
        pe = net.private_endpoint,
        zone = net.dns_zone
    )
}

//! Parameter structs threaded through every provisioning step.
//!
//! One explicit struct instead of ambient shell variables: each value is
//! assigned once before the sequence starts and only read afterwards.

use crate::config::BLOB_DNS_ZONE;

/// Everything the provisioning sequence and the emitted configuration need.
#[derive(Debug, Clone)]
pub struct BackendParams {
    /// Logical resource group holding all created resources.
    pub resource_group: String,
    /// Globally-unique storage account name (allocated or operator-supplied).
    pub storage_account: String,
    /// Blob container holding the state file.
    pub container: String,
    /// Azure region, e.g. `eastus` or `East US`.
    pub location: String,
    /// Subscription id resolved during preflight.
    pub subscription_id: String,
    /// Present only in the private-networking variant.
    pub network: Option<NetworkParams>,
}

/// Names for the extended variant: vnet, subnet, private endpoint and DNS.
#[derive(Debug, Clone)]
pub struct NetworkParams {
    pub vnet: String,
    pub subnet: String,
    pub private_endpoint: String,
    pub dns_zone: String,
    /// Name of the zone/vnet link making the zone resolvable inside the vnet.
    pub dns_link: String,
}

impl NetworkParams {
    /// Derive the network resource names from the storage account name.
    pub fn for_account(storage_account: &str) -> Self {
        NetworkParams {
            vnet: "vnet-tfstate".to_string(),
            subnet: "snet-tfstate".to_string(),
            private_endpoint: format!("pe-{storage_account}"),
            dns_zone: BLOB_DNS_ZONE.to_string(),
            dns_link: "tfstate-dns-link".to_string(),
        }
    }
}

impl BackendParams {
    /// Full ARM resource id of the storage account, needed by the private
    /// endpoint before the account itself exists.
    pub fn storage_account_id(&self) -> String {
        format!(
            "/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Storage/storageAccounts/{account}",
            sub = self.subscription_id,
            rg = self.resource_group,
            account = self.storage_account
        )
    }

    #[cfg(test)]
    pub fn fixture() -> Self {
        BackendParams {
            resource_group: "rg-tfstate".to_string(),
            storage_account: "tfstate2401010101".to_string(),
            container: "tfstate".to_string(),
            location: "eastus".to_string(),
            subscription_id: "sub-1234".to_string(),
            network: None,
        }
    }
}

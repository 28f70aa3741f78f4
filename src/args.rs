//! Command-line arguments.
//!
//! Every flag can also come from the environment (a local `.env` is loaded
//! first), defaulting to generated or fixed values when omitted.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "azure-tfstate-bootstrap",
    version,
    about = "Provision an Azure storage account as a Terraform remote state backend"
)]
pub struct Args {
    /// Resource group to create (or reuse) for the backend resources.
    #[arg(long, env = "AZ_RESOURCE_GROUP", default_value = "rg-tfstate")]
    pub resource_group: String,

    /// Explicit storage account name; allocated from the prefix when omitted.
    #[arg(long, env = "AZ_STORAGE_ACCOUNT")]
    pub storage_account: Option<String>,

    /// Base name used when allocating a storage account name.
    #[arg(long, env = "AZ_ACCOUNT_PREFIX", default_value = "tfstate")]
    pub account_prefix: String,

    /// Blob container holding the state file.
    #[arg(long, env = "AZ_CONTAINER", default_value = "tfstate")]
    pub container: String,

    /// Azure region for all created resources.
    #[arg(long, env = "AZ_LOCATION", default_value = "eastus")]
    pub location: String,

    /// Subscription id to provision into; the active one when omitted.
    #[arg(long, env = "AZ_SUBSCRIPTION")]
    pub subscription: Option<String>,

    /// Extended variant: vnet, subnet, private endpoint and private DNS.
    #[arg(long)]
    pub private_network: bool,

    /// Also fetch the first access key and print an ARM_ACCESS_KEY export.
    /// The key is printed in plaintext.
    #[arg(long)]
    pub show_access_key: bool,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["azure-tfstate-bootstrap"]);
        assert_eq!(args.resource_group, "rg-tfstate");
        assert_eq!(args.container, "tfstate");
        assert_eq!(args.location, "eastus");
        assert!(args.storage_account.is_none());
        assert!(!args.private_network);
        assert!(!args.yes);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "azure-tfstate-bootstrap",
            "--resource-group",
            "rg-test",
            "--location",
            "East US",
            "--private-network",
            "-y",
        ]);
        assert_eq!(args.resource_group, "rg-test");
        assert_eq!(args.location, "East US");
        assert!(args.private_network);
        assert!(args.yes);
    }
}

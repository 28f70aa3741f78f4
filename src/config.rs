//! Fixed limits and defaults shared across the provisioning steps.

/// Azure storage account names are 3-24 chars, lowercase alphanumeric.
pub const ACCOUNT_NAME_MAX_LEN: usize = 24;

/// Total attempts when allocating a globally-unique storage account name.
pub const NAME_ATTEMPTS_MAX: usize = 5;

/// Random suffix length used after a name collision.
pub const RANDOM_SUFFIX_LEN: usize = 6;

/// Soft-delete retention window for blobs, in days.
pub const RETENTION_DAYS: u32 = 7;

/// State file key written into the backend block.
pub const STATE_KEY: &str = "terraform.tfstate";

/// Private DNS zone for blob endpoints.
pub const BLOB_DNS_ZONE: &str = "privatelink.blob.core.windows.net";

/// Address space for the optional state-access virtual network.
pub const VNET_PREFIX: &str = "10.10.0.0/16";

/// Address prefix for the private-endpoint subnet.
pub const SUBNET_PREFIX: &str = "10.10.1.0/24";

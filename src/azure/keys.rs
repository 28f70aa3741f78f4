//! Storage account access key retrieval.
//!
//! Only used for the opt-in `ARM_ACCESS_KEY` hint. The key is printed in
//! plaintext, which the output warns about.

use super::cli::Runner;
use crate::models::BackendParams;
use serde::Deserialize;
use std::error::Error;

/// One entry of the `az storage account keys list` array.
#[derive(Deserialize, Debug)]
struct StorageKey {
    #[serde(rename = "keyName")]
    key_name: String,
    value: String,
}

/// Fetch the first access key of the provisioned storage account.
pub fn fetch_access_key(az: &dyn Runner, params: &BackendParams) -> Result<String, Box<dyn Error>> {
    let output = az.run(&format!(
        "az storage account keys list --account-name {account} --resource-group {rg} --output json",
        account = params.storage_account,
        rg = params.resource_group
    ))?;

    let mut deserializer = serde_json::Deserializer::from_str(&output);
    let keys: Vec<StorageKey> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing keys JSON: path={} error={}", e.path(), e))?;

    let first = keys
        .first()
        .ok_or_else(|| format!("No access keys returned for {}", params.storage_account))?;

    log::info!("Retrieved access key '{}'", first.key_name);
    Ok(first.value.clone())
}

//! Pre-provisioning checks: CLI present, session valid, subscription set.

use super::cli::{Runner, AZ_BIN};
use serde::Deserialize;
use std::error::Error;

/// Subset of `az account show` output the tool cares about.
#[derive(Deserialize, Debug)]
struct AzureAccount {
    /// Active subscription id.
    id: String,
    /// Subscription display name.
    name: String,
}

/// Verify the Azure CLI exists and a login session is active.
///
/// When `subscription` is given, also switches the active subscription with
/// `az account set`. Returns the subscription id every later step should use.
/// Any failure here is fatal; no provisioning call may be issued before this
/// function succeeds.
pub fn preflight(az: &dyn Runner, subscription: Option<&str>) -> Result<String, Box<dyn Error>> {
    if !az.is_available() {
        return Err(format!(
            "Azure CLI '{AZ_BIN}' not found on PATH. Install it and run 'az login' first."
        )
        .into());
    }

    let output = az
        .run("az account show --output json")
        .map_err(|e| format!("Not logged in to Azure, run 'az login' first: {e}"))?;

    let mut deserializer = serde_json::Deserializer::from_str(&output);
    let account: AzureAccount = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing account JSON: path={} error={}", e.path(), e))?;

    log::info!(
        "Logged in, active subscription '{}' ({})",
        account.name,
        account.id
    );

    match subscription {
        Some(sub) if sub != account.id => {
            az.run(&format!("az account set --subscription {sub}"))
                .map_err(|e| format!("Could not switch to subscription {sub}: {e}"))?;
            log::info!("Switched active subscription to {sub}");
            Ok(sub.to_string())
        }
        _ => Ok(account.id),
    }
}

// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod args;
pub mod azure;
mod config;
pub mod models;
pub mod output;
pub mod provision;

use args::Args;
use azure::Runner;
use colored::Colorize;
use models::{BackendParams, NetworkParams};
use std::error::Error;

/// How a run ended, mapped to exit codes in `main`.
#[derive(Debug)]
pub enum Outcome {
    /// Everything created; carries the names the emitted config used.
    Provisioned(BackendParams),
    /// Operator declined the confirmation prompt. Nothing was provisioned.
    Declined,
}

/// Full workflow: preflight → allocate name → confirm → provision → emit.
pub fn run(args: &Args, az: &dyn Runner) -> Result<Outcome, Box<dyn Error>> {
    let subscription_id = azure::preflight(az, args.subscription.as_deref())?;

    let storage_account = match &args.storage_account {
        Some(name) => {
            azure::verify_account_name(az, name)?;
            name.clone()
        }
        None => azure::allocate_account_name(az, &args.account_prefix)?,
    };

    let network = args
        .private_network
        .then(|| NetworkParams::for_account(&storage_account));

    let params = BackendParams {
        resource_group: args.resource_group.clone(),
        storage_account,
        container: args.container.clone(),
        location: args.location.clone(),
        subscription_id,
        network,
    };

    if !confirm_plan(args, &params)? {
        log::warn!("Declined by operator, nothing provisioned");
        return Ok(Outcome::Declined);
    }

    provision::run_sequence(az, &params)?;

    let access_key = if args.show_access_key {
        Some(azure::fetch_access_key(az, &params)?)
    } else {
        None
    };

    output::print_summary(&params, access_key.as_deref());

    Ok(Outcome::Provisioned(params))
}

/// Show the plan and ask before touching the subscription.
fn confirm_plan(args: &Args, params: &BackendParams) -> Result<bool, Box<dyn Error>> {
    log::info!(
        "Plan: group={rg} account={account} container={container} location={loc} private_network={private}",
        rg = params.resource_group.green(),
        account = params.storage_account.green(),
        container = params.container.green(),
        loc = params.location,
        private = params.network.is_some()
    );

    if args.yes {
        return Ok(true);
    }

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!(
            "Provision these resources in subscription {}?",
            params.subscription_id
        ))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

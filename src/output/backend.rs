//! Backend configuration block rendering.
//!
//! Pure formatting, no side effects beyond printing. The emitted names are
//! exactly the ones the provisioning calls used.

use super::auth::render_auth_hints;
use crate::config::STATE_KEY;
use crate::models::BackendParams;
use colored::Colorize;

/// Render the `backend "azurerm"` block for the downstream Terraform project.
pub fn render_backend_block(params: &BackendParams) -> String {
    format!(
        r#"terraform {{
  backend "azurerm" {{
    resource_group_name = "{rg}"
    storage_account_name = "{account}"
    container_name = "{container}"
    key = "{key}"
  }}
}}"#,
        rg = params.resource_group,
        account = params.storage_account,
        container = params.container,
        key = STATE_KEY
    )
}

/// Print the backend block, the auth hints and (optionally) the access key.
pub fn print_summary(params: &BackendParams, access_key: Option<&str>) {
    println!();
    println!(
        "{}",
        "Remote state backend provisioned. Add this to your Terraform configuration:".bold()
    );
    println!();
    println!("{}", render_backend_block(params));
    println!();
    println!("{}", render_auth_hints(params));

    if let Some(key) = access_key {
        println!();
        println!(
            "{warning} the access key below is a plaintext secret, do not commit it anywhere:",
            warning = "WARNING:".red().bold()
        );
        println!("export ARM_ACCESS_KEY={key}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_contains_exact_names() {
        let mut params = BackendParams::fixture();
        params.resource_group = "rg-test".to_string();
        params.container = "tfstate".to_string();
        let block = render_backend_block(&params);
        assert!(block.contains(r#"resource_group_name = "rg-test""#));
        assert!(block.contains(r#"container_name = "tfstate""#));
        assert!(block.contains(r#"storage_account_name = "tfstate2401010101""#));
        assert!(block.contains(r#"key = "terraform.tfstate""#));
    }
}

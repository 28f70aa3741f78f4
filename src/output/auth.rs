//! Authentication environment-variable hints.

use crate::models::BackendParams;

/// Render the three ways Terraform can authenticate against the backend.
pub fn render_auth_hints(params: &BackendParams) -> String {
    format!(
        r#"Authenticate with one of:

1. Storage access key:
   export ARM_ACCESS_KEY=$(az storage account keys list --account-name {account} --resource-group {rg} --query '[0].value' --output tsv)

2. Service principal:
   export ARM_CLIENT_ID=<app-id>
   export ARM_CLIENT_SECRET=<password>
   export ARM_TENANT_ID=<tenant-id>
   export ARM_SUBSCRIPTION_ID={sub}

3. Managed identity (on Azure compute):
   export ARM_USE_MSI=true
   export ARM_SUBSCRIPTION_ID={sub}
   export ARM_TENANT_ID=<tenant-id>"#,
        account = params.storage_account,
        rg = params.resource_group,
        sub = params.subscription_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_reference_created_resources() {
        let params = BackendParams::fixture();
        let hints = render_auth_hints(&params);
        assert!(hints.contains("--account-name tfstate2401010101"));
        assert!(hints.contains("--resource-group rg-tfstate"));
        assert!(hints.contains("ARM_SUBSCRIPTION_ID=sub-1234"));
        assert!(hints.contains("ARM_USE_MSI=true"));
    }
}

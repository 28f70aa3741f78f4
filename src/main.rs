use azure_tfstate_bootstrap::args::Args;
use azure_tfstate_bootstrap::azure::AzCli;
use azure_tfstate_bootstrap::{run, Outcome};
use clap::Parser;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();

    log::info!("#Start main()");
    let args = Args::parse();

    match run(&args, &AzCli) {
        Ok(Outcome::Provisioned(params)) => {
            log::info!(
                "Done, state backend ready in resource group {}",
                params.resource_group
            );
        }
        Ok(Outcome::Declined) => {}
        Err(e) => {
            log::error!("Aborted: {e}");
            std::process::exit(1);
        }
    }
}

use openstack_network_quickstart::config;
use openstack_network_quickstart::load_request;
use openstack_network_quickstart::output::{print_outcome, print_planned_commands};
use openstack_network_quickstart::processing::{prepare_plan, provision};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let dry_run = args.iter().any(|arg| arg == "--dry-run");
    let request_file = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .map(String::as_str);

    let request = load_request(request_file).expect("Error loading quickstart request");
    let plan =
        prepare_plan(&request, config::project_id()).expect("Error preparing provisioning plan");

    if dry_run {
        print_planned_commands(&plan);
        return Ok(());
    }

    let outcome = provision(&plan).expect("Error provisioning network");
    print_outcome(&outcome).await?;

    Ok(())
}

use clap::Parser;
use netmask_topology::cli::Cli;
use netmask_topology::config::Config;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env();
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!("Logging disabled, could not load {}: {e}", config.log_config);
    }
    colored::control::set_override(config.color);
    log::info!("#Start main()");

    let cli = Cli::parse();
    let output = netmask_topology::run(&cli, &config)?;
    print!("{output}");

    Ok(())
}

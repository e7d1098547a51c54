//! IPv4 network mask arithmetic and subnet topology.
//!
//! - [`models`] - [`NetworkMask`](models::NetworkMask), bit buffers and flags
//! - [`processing`] - Network prefix, host identifier and sibling queries
//! - [`output`] - Summary rendering for the command line tool

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Result, TopologyError};

use cli::Cli;
use config::Config;
use output::{render_summary, SubnetSummary};

/// Run every query for the parsed command line and render the result.
pub fn run(cli: &Cli, config: &Config) -> std::result::Result<String, Box<dyn std::error::Error>> {
    let subnet = cli.subnet()?;
    let limit = cli.limit.unwrap_or(config.sibling_limit);
    log::debug!("run({subnet}) options={} limit={limit}", cli.options());

    let summary = SubnetSummary::build(subnet, cli.options(), limit)?;
    if cli.json {
        Ok(serde_json::to_string_pretty(&summary)?)
    } else {
        Ok(render_summary(&summary))
    }
}

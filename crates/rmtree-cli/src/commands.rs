use super::args::Cli;
use super::handlers;
use crate::config::Config;
use crate::logging;
use anyhow::Result;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::from_cli(&cli);
    debug!(path = %config.path.display(), max_depth = config.max_depth, "resolved configuration");

    handlers::tree::handle(&config)
}

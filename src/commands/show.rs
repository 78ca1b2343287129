use crate::core::{LogReporter, NetworkInfoQuery, QueryConfig};
use crate::platform::{self, SystemCommandRunner};
use crate::ui;
use anyhow::{Context, Result};
use clap::ArgMatches;
use std::time::Duration;

/// Build the lookup settings from command-line flags
pub fn config_from_matches(matches: &ArgMatches) -> Result<QueryConfig> {
    let mut config = QueryConfig::default();

    if let Some(&secs) = matches.get_one::<u64>("timeout") {
        if secs == 0 {
            anyhow::bail!("Timeout must be at least one second");
        }
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(interface) = matches.get_one::<String>("interface") {
        config = config.with_interface(interface.as_str());
    }

    Ok(config)
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = config_from_matches(matches)?;
    let include_password = !matches.get_flag("name-only");
    let as_json = matches.get_flag("json");

    let reporter = LogReporter;
    let runner = SystemCommandRunner;
    let platform = platform::detect(&reporter);

    let mut query = NetworkInfoQuery::new(platform, config, &runner, &reporter);
    let info = query.run(include_password);

    if as_json {
        let json = serde_json::to_string_pretty(&info).context("Failed to serialize result")?;
        println!("{}", json);
    } else {
        ui::display_network_info(&info, query.state(), include_password);
    }

    Ok(())
}

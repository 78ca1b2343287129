use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use colored::Colorize;

use wifipass::commands;
use wifipass::ui::messages;

/// Flags shared by the bare invocation and the `show` subcommand
fn with_lookup_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Maximum time each system command may run")
                .value_parser(clap::value_parser!(u64))
                .default_value("15"),
        )
        .arg(
            Arg::new("interface")
                .short('i')
                .long("interface")
                .value_name("NAME")
                .help("Wi-Fi device to query on macOS")
                .default_value("en0"),
        )
        .arg(
            Arg::new("name-only")
                .short('n')
                .long("name-only")
                .help("Only show the network name, skip the password lookup")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result as JSON")
                .action(ArgAction::SetTrue),
        )
}

fn build_cli() -> Command {
    let root = Command::new("wifipass")
        .about("Show the connected Wi-Fi network and its stored password")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show debug diagnostics")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(with_lookup_args(
            Command::new("show").about("Look up the connected network (default)"),
        ))
        .subcommand(Command::new("version").about("Shows version information"));

    with_lookup_args(root)
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    wifipass::init_logging(matches.get_flag("verbose"));

    ctrlc::set_handler(|| {
        println!();
        println!("{}", messages::INTERRUPTED.yellow().bold());
        std::process::exit(130);
    })
    .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("show", sub_matches)) => commands::show(sub_matches),
        Some(("version", _)) => commands::version(),
        _ => commands::show(&matches),
    }
}

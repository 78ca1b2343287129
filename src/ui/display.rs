use super::formatters::{format_network_info, rule};
use super::messages;
use crate::core::{NetworkInfo, QueryState};
use colored::Colorize;

/// Print the framed report for one lookup
pub fn display_network_info(info: &NetworkInfo, state: QueryState, include_password: bool) {
    println!("{}", rule().cyan());
    println!("{}", messages::TITLE.white().bold());
    println!("{}", rule().cyan());

    for line in format_network_info(info, include_password) {
        if info.network_name.is_some() {
            println!("{}", line.green());
        } else {
            println!("{}", line.yellow());
        }
    }

    if state == QueryState::Complete {
        println!("{}", messages::SUCCESS.dimmed());
    }

    println!("{}", rule().cyan());
}

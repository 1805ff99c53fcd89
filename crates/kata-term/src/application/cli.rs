use anyhow::Result;
use clap::Arg;
use clap::ArgMatches;
use clap::Command;
use clap_complete::Shell;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::theme_catalog;

pub fn build() -> Command {
    let theme_ids = theme_catalog()
        .iter()
        .map(|e| return e.id.clone())
        .collect::<Vec<String>>();

    return Command::new("kata-term")
        .about("Terminal workbench for a remote code-running service")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .long(ConfigKey::ConfigFile.to_string())
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::Language.to_string())
                .long(ConfigKey::Language.to_string())
                .help(format!(
                    "Language the editor highlights for [default: {}]",
                    Config::default(ConfigKey::Language)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::RunnerURL.to_string())
                .long(ConfigKey::RunnerURL.to_string())
                .help(format!(
                    "Base URL of the code-running service [default: {}]",
                    Config::default(ConfigKey::RunnerURL)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::Theme.to_string())
                .long(ConfigKey::Theme.to_string())
                .help(format!(
                    "Editor color theme [default: {}]",
                    Config::default(ConfigKey::Theme)
                ))
                .num_args(1)
                .value_parser(clap::builder::PossibleValuesParser::new(theme_ids)),
        )
        .arg(
            Arg::new(ConfigKey::ThemeURL.to_string())
                .long(ConfigKey::ThemeURL.to_string())
                .help("Base URL theme definitions are fetched from")
                .num_args(1),
        )
        .subcommand(Command::new("config").about("Print the default configuration file"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .short('s')
                        .long("shell")
                        .help("Shell to generate completions for")
                        .num_args(1)
                        .required(true)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        );
}

/// Handle subcommands that short-circuit the UI. Returns true when the
/// caller should continue into the main loop.
pub fn handle_subcommands(matches: &ArgMatches) -> Result<bool> {
    match matches.subcommand() {
        Some(("config", _)) => {
            println!("{}", Config::serialize_default(build()));
            return Ok(false);
        }
        Some(("completions", sub_matches)) => {
            let shell = sub_matches.get_one::<Shell>("shell").copied().unwrap();
            clap_complete::generate(shell, &mut build(), "kata-term", &mut std::io::stdout());
            return Ok(false);
        }
        _ => return Ok(true),
    }
}

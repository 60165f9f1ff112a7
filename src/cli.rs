//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::ini_store::IniStore;
use crate::domain::accessor::{split_list, ConfigurationAccessor};
use crate::domain::error::ConfigurationError;
use crate::logging::init_logging;
use crate::ports::option_store::OptionStore;

#[derive(Parser, Debug)]
#[command(name = "cfgaccess", about = "Typed reads from INI configuration files")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one option, coerced to the requested type
    Get {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        section: String,
        #[arg(short, long)]
        option: String,
        #[arg(long = "as", value_enum, default_value_t = ValueKind::Raw)]
        kind: ValueKind,
        /// Value used when the option is absent
        #[arg(short, long)]
        default: Option<String>,
    },
    /// Check that a configuration file exists and parses, listing its sections
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Raw,
    Int,
    List,
    Set,
    Bool,
}

/// A `--default` already converted to the type of the requested getter.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    Raw(String),
    Int(i64),
    List(Vec<String>),
    Set(BTreeSet<String>),
    Bool(bool),
}

pub fn run(cli: Cli) -> ExitCode {
    init_logging(cli.verbose);
    match cli.command {
        Command::Get {
            config,
            section,
            option,
            kind,
            default,
        } => run_get(&config, &section, &option, kind, default.as_deref()),
        Command::Check { config } => run_check(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<ConfigurationAccessor<IniStore>, ExitCode> {
    ConfigurationAccessor::load(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

/// Converts the textual `--default` for `kind`. A missing default means the
/// empty value of that type (`""`, `0`, no items, `no`).
pub fn parse_fallback(kind: ValueKind, default: Option<&str>) -> Result<Fallback, String> {
    let items = |d: &str| -> Vec<String> {
        if d.is_empty() {
            Vec::new()
        } else {
            split_list(d)
        }
    };
    match (kind, default) {
        (ValueKind::Raw, d) => Ok(Fallback::Raw(d.unwrap_or_default().to_string())),
        (ValueKind::Int, None) => Ok(Fallback::Int(0)),
        (ValueKind::Int, Some(d)) => d
            .trim()
            .parse()
            .map(Fallback::Int)
            .map_err(|_| format!("default {d:?} is not an integer")),
        (ValueKind::List, d) => Ok(Fallback::List(items(d.unwrap_or_default()))),
        (ValueKind::Set, d) => Ok(Fallback::Set(
            items(d.unwrap_or_default()).into_iter().collect(),
        )),
        (ValueKind::Bool, None) => Ok(Fallback::Bool(false)),
        (ValueKind::Bool, Some(d)) => match d.to_lowercase().as_str() {
            "yes" => Ok(Fallback::Bool(true)),
            "no" => Ok(Fallback::Bool(false)),
            _ => Err(format!("default {d:?} is neither yes nor no")),
        },
    }
}

/// Reads `[section] option` with the getter matching `fallback` and renders
/// the result as output lines, one per list or set item.
pub fn render_value<S: OptionStore>(
    accessor: &ConfigurationAccessor<S>,
    section: &str,
    option: &str,
    fallback: Fallback,
) -> Result<Vec<String>, ConfigurationError> {
    let lines = match fallback {
        Fallback::Raw(d) => vec![accessor.get_option(section, option, &d)],
        Fallback::Int(d) => vec![accessor.get_option_as_int(section, option, d)?.to_string()],
        Fallback::List(d) => accessor.get_option_as_list(section, option, d),
        Fallback::Set(d) => accessor
            .get_option_as_set(section, option, d)
            .into_iter()
            .collect(),
        Fallback::Bool(d) => {
            let value = accessor.get_option_as_yes_or_no_boolean(section, option, d)?;
            vec![if value { "yes" } else { "no" }.to_string()]
        }
    };
    Ok(lines)
}

pub fn run_get(
    config_path: &PathBuf,
    section: &str,
    option: &str,
    kind: ValueKind,
    default: Option<&str>,
) -> ExitCode {
    let fallback = match parse_fallback(kind, default) {
        Ok(f) => f,
        Err(reason) => {
            eprintln!("error: {reason}");
            return ExitCode::from(2);
        }
    };

    let accessor = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    match render_value(&accessor, section, option, fallback) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn run_check(config_path: &PathBuf) -> ExitCode {
    let accessor = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    eprintln!("{} is valid", config_path.display());
    for section in accessor.store().sections() {
        println!("{section}");
    }
    ExitCode::SUCCESS
}

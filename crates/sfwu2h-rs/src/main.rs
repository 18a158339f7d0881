use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::*;

use std::io::Write;

use crate::convert::convert;

mod convert;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None, author = "Jonathan Nilsson")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Input .sfwu firmware file
    #[clap(value_parser = path_parser)]
    input: String,

    /// Output header file (defaults to PN5180Firmware_<major>_<minor>.h
    /// in the current directory)
    #[clap(value_parser = path_parser)]
    output: Option<String>,

    /// Set the logging verbosity
    #[clap(short, long, value_enum, default_value_t = LogLevel::Info)]
    verbose: LogLevel,
}

fn path_parser(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("Empty file argument provided".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Off => LevelFilter::Off,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default())
        .filter_level(cli.verbose.into())
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let level = record.level();
            if level == Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "{}: {}", record.level(), record.args())
            }
        })
        .init();

    convert(&cli.input, cli.output.as_ref())
}

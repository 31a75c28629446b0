use super::VERSION;
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the benchmark results.
/// The csv path is the only argument and has no default:
/// the caller decides what to do when it is missing.
pub fn parse_cli() -> Option<PathBuf> {
    let arg_csvin = Arg::new("input_csvfile")
        .help("path to the csv file with the benchmark results")
        .num_args(1)
        .value_parser(value_parser!(PathBuf));
    let cli_args = Command::new("bench_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot benchmark execution times")
        .arg(arg_csvin)
        .get_matches();
    let csvin = cli_args
        .get_one::<PathBuf>("input_csvfile")
        .map(|p| p.to_owned());
    return csvin;
}

mod analyze_cmd;
mod cli;
mod logging;
mod report;
mod shared;

use std::io;

use clap::Parser;
use cli::{Cli, ReportFormat};
use report::{JsonReport, TextReport};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => std::process::exit(cli::report_parse_error(&err)),
    };

    logging::init(cli.verbose);

    let result = match cli.format {
        ReportFormat::Text => analyze_cmd::run(&cli, &mut TextReport::new(io::stdout().lock())),
        ReportFormat::Json => analyze_cmd::run(
            &cli,
            &mut JsonReport::new(io::stdout().lock(), io::stderr()),
        ),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

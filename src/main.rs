use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use ytr_cli::cli::Args;
use ytr_cli::cli::commands::{self, Mode};
use ytr_cli::output::{self, OutputConfig};
use ytr_cli::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });
    output::init_logging(args.verbose);

    if Mode::select(&args).needs_text() && !args.has_text() {
        eprintln!("{}", Args::command().render_usage());
        eprintln!(
            "{}",
            Style::hint("Pass the text to translate, or --ls to list directions.")
        );
        return ExitCode::from(exit_status(exitcode::USAGE));
    }

    match commands::run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", Style::error("error:"));
            ExitCode::FAILURE
        }
    }
}

fn exit_status(code: exitcode::ExitCode) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

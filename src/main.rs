use log::Level;
use mst_cohort::cli::Cli;
use mst_cohort::driver;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let level = if cli.verbose {
        Level::Debug
    } else {
        Level::Info
    };
    simple_logger::init_with_level(level).unwrap();

    match driver::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

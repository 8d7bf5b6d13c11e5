use clap::Parser;
use pack_filter::args::Args;
use pack_filter::config::{FilterOptions, WalkOptions};
use pack_filter::error::Result;
use pack_filter::presentation;
use pack_filter_engine::PrunerCache;
use std::process::ExitCode;

fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(args: &Args) -> Result<()> {
    let options = FilterOptions::try_from(args)?;
    let walk = WalkOptions::from(args);
    let pruners = PrunerCache::permissive();

    let result = pack_filter_engine::run(&options, &walk, &pruners)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    presentation::write_results(&mut out, &result, args.format)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

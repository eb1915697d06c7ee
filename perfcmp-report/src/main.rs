use clap::{ArgAction, Parser};
use perfcmp_report::config::DEFAULT_RESULTS_DIR;
use perfcmp_report::{logging, report};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;

#[derive(Parser)]
#[command(name = "perfcmp", about = "Compare benchmark results across experiment configurations")]
struct Args {
    /// Directory holding one `<configuration key>.txt` log per run
    #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
    results_dir: PathBuf,

    /// Print the configuration catalog and exit
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if args.list {
        report::write_catalog(&mut out)
    } else {
        perfcmp_report::run(&args.results_dir, &mut out).map(|status| {
            debug!(?status, "run finished");
        })
    };

    if let Err(e) = result.and_then(|_| out.flush()) {
        eprintln!("Failed to write report: {e}");
        process::exit(1);
    }
}

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, error};

use fixed_run_timsort::{harness, patterns, timsort, SortError, TimSort, RUN};

#[derive(Debug, Parser)]
#[command(name = "timsort", version, about = "Fixed run timsort demo and timing harness")]
struct Cli {
    /// Length of the blocks sorted with insertion sort before merging.
    #[arg(long, global = true, default_value_t = RUN)]
    run: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sort the built-in demo datasets and print them.
    Demo,
    /// Sort `size` random values in `0..size` and report the elapsed time.
    Experiment { size: usize },
}

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter("TIMSORT_LOG")
        .write_style("TIMSORT_LOG_STYLE");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    debug!("{cli:?}");

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool, SortError> {
    let sorter = TimSort::with_run(cli.run)?;

    match cli.command {
        Command::Demo => {
            for sorted in harness::sort_demo_datasets(&sorter)? {
                print!("{}", harness::format_sequence(&sorted));
            }
            Ok(true)
        }
        Command::Experiment { size } => {
            let mut v = patterns::random_modulo(size);
            debug!("{} on {size} elements", timsort::name());

            let elapsed = harness::time_sort(&sorter, &mut v)?;
            println!("Total time = {:.6} seconds", elapsed.as_secs_f64());

            if !harness::is_sorted(&v) {
                error!("output of {size} elements is not sorted");
                return Ok(false);
            }
            Ok(true)
        }
    }
}

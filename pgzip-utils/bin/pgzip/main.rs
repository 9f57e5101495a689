//! Parallel gzip stream filter
//!
//! Compresses (or, with `-d`, decompresses) a gzip stream from standard
//! input to standard output, spreading compression across all cores.

use std::process;

mod opts;

use opts::{PgzipOpts, Resolution};

use pgzip_utils::{run_stream, EXIT_USAGE};

const PROGRAM_NAME: &str = "pgzip";

fn main() {
    let config = match PgzipOpts::resolve(std::env::args_os()) {
        Ok(Resolution::Run(config)) => config,
        Ok(Resolution::Help(help)) => {
            // clap routes help and version text to stdout.
            let _ = help.print();
            return;
        }
        Err(err) => {
            // Parse errors carry their own usage text and go to stderr.
            let _ = err.print();
            process::exit(EXIT_USAGE);
        }
    };

    if let Err(err) = run_stream(&config) {
        eprintln!("{PROGRAM_NAME}: {err}");
        process::exit(err.exit_code());
    }
}

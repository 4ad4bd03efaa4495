#![forbid(unsafe_code)]

use std::process;

use slate_demo::cli::{Command, HELP_TEXT, Opts, VERSION};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("SLATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let opts = match Opts::parse() {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            println!("{HELP_TEXT}");
            return;
        }
        Ok(Command::Version) => {
            println!("slate-demo {VERSION}");
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    match slate_demo::run(&opts) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            tracing::error!(error = %err, "demo failed");
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

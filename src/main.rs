use std::fs;

use clap::Parser;
use stacalc::evaluate;

/// stacalc is a two-stack calculator for arithmetic expressions with
/// trigonometric functions and exponentiation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stacalc to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Traces every sub-expression evaluation through the logger.
    #[arg(short, long)]
    debug: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match evaluate(&expression, args.debug) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

//! # Calcify CLI
//!
//! Command-line driver for the calculation engine. Plays the role of the
//! HTTP collaborator for manual testing: it collects raw `key=value`
//! parameters, hands them to the engine, and prints the JSON envelope
//! unchanged.
//!
//! ```text
//! calcify emi principal=100000 rate=10 months=12
//! calcify unit category=length from=Kilometer to=Meter value=1
//! ```

use std::env;
use std::process::ExitCode;

use calcify_core::{calculations, Operation, Params};

fn usage() {
    eprintln!("Calcify - stateless calculator engine");
    eprintln!();
    eprintln!("Usage: calcify <operation> [key=value]...");
    eprintln!();
    eprintln!("Operations:");
    for op in Operation::ALL {
        eprintln!("  {}", op.name());
    }
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);

    let Some(operation) = args.next() else {
        usage();
        return ExitCode::FAILURE;
    };

    let mut params = Params::new();
    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) => params.insert(key, value),
            None => {
                eprintln!("Ignoring malformed argument (expected key=value): {arg}");
            }
        }
    }

    let envelope = calculations::evaluate(&operation, &params);

    match serde_json::to_string_pretty(&envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize response: {e}");
            return ExitCode::FAILURE;
        }
    }

    if envelope.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

//! Shellwords command-line entry point.

use shellwords::audit::AuditLogger;
use shellwords::config::Config;
use shellwords::dispatch::run;
use shellwords::input::Request;
use shellwords::output::format_response;

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut input_str = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_str) {
        eprintln!("failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    let request = match Request::parse(&input_str) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("invalid request: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Fall back to defaults on a broken config
    let cwd = std::env::current_dir().ok();
    let config = match Config::load(cwd.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            Config::default()
        }
    };

    let outcome = run(&request);

    if let Some(path) = config.audit.log_path() {
        match AuditLogger::open(Path::new(path)) {
            Ok(mut logger) => {
                if let Err(e) = logger.log_outcome(&request, &outcome) {
                    eprintln!("audit log error: {}", e);
                }
            }
            Err(e) => eprintln!("audit log error: {}", e),
        }
    }

    let response = format_response(&outcome, config.output.is_pretty());
    if outcome.is_rejected() {
        eprintln!("{}", response);
        ExitCode::from(2)
    } else {
        println!("{}", response);
        ExitCode::SUCCESS
    }
}

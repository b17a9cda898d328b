//! Sigbench CLI

use clap::{value_parser, Arg, Command};
use rand::rngs::OsRng;
use sigbench_cryptography::suite;
use tracing::{error, info};

/// Returns the version of the crate.
pub const fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Subcommand that prints every registered scheme
const LIST_CMD: &str = "list";

/// Subcommand that provisions and repeatedly verifies cases
const CHECK_CMD: &str = "check";

/// Verifications per scheme when `--rounds` is omitted
const DEFAULT_ROUNDS: &str = "1000";

/// Entrypoint for the Sigbench CLI
fn main() -> std::process::ExitCode {
    // Define application
    let matches = Command::new("sigbench")
        .version(crate_version())
        .about("Check signature verification across elliptic-curve and EdDSA libraries.")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("info")
                .help("Maximum level of log output")
                .value_parser(value_parser!(tracing::Level)),
        )
        .subcommand(Command::new(LIST_CMD).about("Print the name of every scheme."))
        .subcommand(
            Command::new(CHECK_CMD)
                .about("Sign the fixed message once per scheme and verify it repeatedly.")
                .arg(
                    Arg::new("scheme")
                        .long("scheme")
                        .value_delimiter(',')
                        .help("Schemes to check (all when omitted)")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("rounds")
                        .long("rounds")
                        .default_value(DEFAULT_ROUNDS)
                        .help("Verifications per scheme")
                        .value_parser(value_parser!(usize)),
                ),
        )
        .get_matches();

    // Create logger
    let level = matches
        .get_one::<tracing::Level>("log-level")
        .copied()
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    // Parse subcommands
    match matches.subcommand() {
        Some((LIST_CMD, _)) => {
            for name in suite::NAMES {
                println!("{name}");
            }
            std::process::ExitCode::SUCCESS
        }
        Some((CHECK_CMD, matches)) => {
            let rounds = matches
                .get_one::<usize>("rounds")
                .copied()
                .unwrap_or_default();
            let schemes: Vec<String> = match matches.get_many::<String>("scheme") {
                Some(schemes) => schemes.cloned().collect(),
                None => suite::NAMES.iter().map(|name| name.to_string()).collect(),
            };
            let failed = check(&schemes, rounds);
            if failed > 0 {
                error!(failed, total = schemes.len(), "some schemes failed");
                return std::process::ExitCode::FAILURE;
            }
            std::process::ExitCode::SUCCESS
        }
        Some((cmd, _)) => {
            error!(cmd, "invalid subcommand");
            std::process::ExitCode::FAILURE
        }
        None => {
            error!("no subcommand provided");
            std::process::ExitCode::FAILURE
        }
    }
}

/// Check every scheme in `schemes`, continuing past failures.
///
/// Returns the number of schemes that failed.
fn check(schemes: &[String], rounds: usize) -> usize {
    let mut failed = 0;
    for scheme in schemes {
        let Some(name) = suite::resolve(scheme) else {
            error!(scheme = %scheme, "unknown scheme");
            failed += 1;
            continue;
        };
        match suite::check(name, rounds, &mut OsRng) {
            Ok(()) => info!(scheme = name, rounds, "verified"),
            Err(e) => {
                error!(scheme = name, error = %e, "check failed");
                failed += 1;
            }
        }
    }
    failed
}

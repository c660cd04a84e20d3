use clap::Parser;
use planet_crs_registry::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            // Without a handler there is nothing to wait for
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(planet_crs_registry::Error::processing_interrupted(
                    "Interrupted by user"
                ).into())
            }
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Planet CRS Registry - IAU Planetary Coordinate Reference Systems");
    println!("================================================================");
    println!();
    println!("Parse a corpus of WKT definitions for solar system bodies and query");
    println!("the resulting registry by IAU version, solar body or keyword.");
    println!();
    println!("USAGE:");
    println!("    planet-crs-registry <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse         Classify the corpus and report parse statistics");
    println!("    list          List registry rows, optionally filtered");
    println!("    get           Print a single WKT by identifier");
    println!("    bodies        List solar bodies with their WKT counts");
    println!("    versions      List IAU versions with their WKT counts");
    println!("    identifiers   List OGC identifiers");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Check that every definition in the corpus is recognised:");
    println!("    planet-crs-registry parse --corpus data/result.wkts --show-failures");
    println!();
    println!("    # List the Mars coordinate reference systems as JSON:");
    println!("    planet-crs-registry list --body Mars --format json");
    println!();
    println!("    # Print one WKT:");
    println!("    planet-crs-registry get IAU:2015:49900");
    println!();
    println!("    # OGC identifiers of the 2015 report:");
    println!("    planet-crs-registry identifiers 2015");
    println!();
    println!("For detailed help on any command, use:");
    println!("    planet-crs-registry <COMMAND> --help");
}

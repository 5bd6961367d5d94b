use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trains::Network;
use trains::report::{BANNER, QueryAnswer, loading_message, standard_queries};
use trains::trips::TripConfig;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut files: Vec<PathBuf> = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            files.push(PathBuf::from(arg));
        }
    }

    if files.is_empty() {
        eprintln!("usage: trains [--json] FILE..");
        eprintln!("\twhere the FILEs describe available routes for a trains network.");
        return ExitCode::from(2);
    }

    // Traversal policy from TRAINS_ALLOW_CYCLES / TRAINS_MAX_STOPS
    let config = match TripConfig::from_lookup(|key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    if !json {
        println!("{BANNER}");
    }

    let mut network = Network::new();
    for file in &files {
        info!(file = %file.display(), "loading route file");
        if !json {
            println!("{}", loading_message(file));
        }
        if let Err(e) = network.load_graph(file) {
            error!(file = %file.display(), "load failed");
            eprintln!("File {} was not loaded successfully:\n\t{}", file.display(), e);
            return ExitCode::FAILURE;
        }
    }

    if !json {
        println!("network has {} towns", network.towns_count());
        println!();
    }

    network.generate_trips(&config);

    let answers: Vec<QueryAnswer> = standard_queries()
        .iter()
        .map(|query| query.answer(&network))
        .collect();

    if json {
        match serde_json::to_string_pretty(&answers) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                error!(error = %e, "failed to serialize answers");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for (i, answer) in answers.iter().enumerate() {
            println!("Q{} {}", i + 1, answer);
            println!();
        }
        println!("done");
    }

    ExitCode::SUCCESS
}

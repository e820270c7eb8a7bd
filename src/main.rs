use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use welivehere::config::LocationConfig;
use welivehere::geo::Coordinate;
use welivehere::output::ScoredLocation;
use welivehere::reports::{Category, Report};
use welivehere::signals::transit::DOWNTOWN_HUB;

const EXIT_SUCCESS: i32 = 0;
#[allow(dead_code)]
const EXIT_AUTH: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank configured locations by livability (default if no subcommand)
    List {
        /// Print tab-separated values for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Score one coordinate and show the full factor breakdown
    Score {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open a ranked location on OpenStreetMap by its index number
    Open {
        /// Index number of the location to open (1-based, as shown in list)
        index: usize,
    },
    /// Save a named location to the config file
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// Manage neighborhood reports
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ReportCommands {
    /// Submit a new report
    Add {
        #[arg(long)]
        title: String,
        /// One of: disaster, infrastructure, safety
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: String,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long, default_value = "anonymous")]
        user: String,
        /// Link to an externally hosted photo
        #[arg(long)]
        image_link: Option<String>,
    },
    /// List reports, newest first
    List,
    /// Remove a report by its index number (1-based, as shown in list)
    Remove { index: usize },
}

#[derive(Parser, Debug)]
#[command(name = "welivehere")]
#[command(about = "Neighborhood livability scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/welivehere/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::List { tsv: false });
    let start_time = Instant::now();

    // Load config
    let config_path = cli
        .config
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(welivehere::config::get_config_path);
    let config = match welivehere::config::load_config(Some(config_path.clone())) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!("Loaded {} locations from config", config.locations.len());
        for (i, location) in config.locations.iter().enumerate() {
            eprintln!(
                "  Location {}: {} ({}, {})",
                i + 1,
                location.name,
                location.lat,
                location.lng
            );
        }
    }

    // Validate weights at startup, before anything is scored
    let weights = config.weights.clone().unwrap_or_default();
    if let Err(errors) = welivehere::scoring::validate_weights(&weights) {
        eprintln!("Weight config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let hub = config
        .hub
        .as_ref()
        .map(|h| h.coordinate())
        .unwrap_or(DOWNTOWN_HUB);

    match command {
        Commands::Report { command } => {
            run_report_command(command);
        }
        Commands::Add { name, lat, lng } => {
            let coord = Coordinate::new(lat, lng);
            if !coord.is_finite() {
                eprintln!("Invalid coordinates: latitude and longitude must be finite.");
                std::process::exit(EXIT_CONFIG);
            }

            let mut config = config;
            config.locations.push(LocationConfig { name: name.clone(), lat, lng });
            if let Err(e) = welivehere::config::save_config(&config_path, &config) {
                eprintln!("Failed to save config: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!(
                "Saved {} ({}, {}) to {}",
                name,
                lat,
                lng,
                config_path.display()
            );
        }
        Commands::Score { lat, lng, json } => {
            let coord = Coordinate::new(lat, lng);
            if !coord.is_finite() {
                eprintln!("Invalid coordinates: latitude and longitude must be finite.");
                std::process::exit(EXIT_CONFIG);
            }

            let client = setup_client(cli.verbose).await;
            let result =
                welivehere::scoring::score_coordinate(&client, &weights, hub, coord).await;

            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                }
            } else {
                let use_colors = welivehere::output::should_use_colors();
                let label = format!("{}", coord);
                println!(
                    "{}",
                    welivehere::output::format_score_card(&label, &result, use_colors)
                );
            }

            if cli.verbose {
                eprintln!();
                eprintln!("Scored in {:?}", start_time.elapsed());
            }
        }
        Commands::List { tsv } => {
            if config.locations.is_empty() {
                eprintln!("No locations configured in config file.");
                eprintln!("Add locations to ~/.config/welivehere/config.yaml:");
                eprintln!("  locations:");
                eprintln!("    - name: Downtown");
                eprintln!("      lat: 51.045");
                eprintln!("      lng: -114.075");
                eprintln!("Or run: welivehere add <NAME> <LAT> <LNG>");
                std::process::exit(EXIT_CONFIG);
            }

            let client = setup_client(cli.verbose).await;
            let scored = welivehere::fetch::score_all_locations(
                &client,
                &config,
                &weights,
                hub,
                cli.verbose,
            )
            .await;

            let scored_refs: Vec<ScoredLocation> = scored
                .iter()
                .map(|(location, result)| ScoredLocation { location, result })
                .collect();

            let use_colors = welivehere::output::should_use_colors();

            if tsv {
                println!("{}", welivehere::output::format_tsv(&scored_refs));
            } else if cli.verbose {
                // Verbose mode: detailed card per location
                for scored in &scored_refs {
                    let label = format!(
                        "{} ({}, {})",
                        scored.location.name, scored.location.lat, scored.location.lng
                    );
                    println!(
                        "{}",
                        welivehere::output::format_score_card(&label, scored.result, use_colors)
                    );
                    println!();
                }
            } else {
                println!(
                    "{}",
                    welivehere::output::format_scored_table(&scored_refs, use_colors)
                );
            }

            if cli.verbose {
                eprintln!(
                    "Total: {} locations in {:?}",
                    scored.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Open { index } => {
            if config.locations.is_empty() {
                eprintln!("No locations configured in config file.");
                std::process::exit(EXIT_CONFIG);
            }

            let client = setup_client(cli.verbose).await;
            let scored = welivehere::fetch::score_all_locations(
                &client,
                &config,
                &weights,
                hub,
                cli.verbose,
            )
            .await;

            // Validate index bounds (1-based)
            if index < 1 || index > scored.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    scored.len()
                );
                std::process::exit(EXIT_CONFIG);
            }

            let (location, _result) = &scored[index - 1];
            if let Err(e) = welivehere::browser::open_location(location.coordinate()) {
                eprintln!("Failed to open browser: {}", e);
                std::process::exit(EXIT_NETWORK);
            }

            println!("Opening {} on OpenStreetMap", location.name);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Resolve the API key and build the provider client. A missing key is
/// not fatal: the network-backed signals degrade to their defaults, so
/// the run continues with a warning.
async fn setup_client(verbose: bool) -> welivehere::meersens::MeersensClient {
    let api_key = match welivehere::credentials::setup_api_key().await {
        Ok(key) => {
            if verbose {
                eprintln!("API key resolved");
            }
            Some(key)
        }
        Err(e) => {
            eprintln!(
                "Warning: no API key available ({}). Air quality and weather will report defaults.",
                e
            );
            None
        }
    };

    match welivehere::meersens::create_client(api_key) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create provider client: {}", e);
            std::process::exit(EXIT_NETWORK);
        }
    }
}

fn run_report_command(command: ReportCommands) {
    let reports_path = welivehere::reports::get_reports_path();

    match command {
        ReportCommands::Add {
            title,
            category,
            description,
            lat,
            lng,
            user,
            image_link,
        } => {
            let category: Category = match category.parse() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Invalid report: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let report = Report::new(
                title,
                category,
                description,
                Coordinate::new(lat, lng),
                user,
                image_link,
            );
            if let Err(errors) = report.validate() {
                eprintln!("Invalid report:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }

            let mut log = match welivehere::reports::load_report_log(&reports_path) {
                Ok(log) => log,
                Err(e) => {
                    eprintln!("Failed to load report log: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            log.add(report);
            if let Err(e) = welivehere::reports::save_report_log(&reports_path, &log) {
                eprintln!("Failed to save report log: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Report saved ({} total)", log.reports.len());
        }
        ReportCommands::List => {
            let log = match welivehere::reports::load_report_log(&reports_path) {
                Ok(log) => log,
                Err(e) => {
                    eprintln!("Failed to load report log: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            let reports: Vec<&Report> = log.newest_first().collect();
            let use_colors = welivehere::output::should_use_colors();
            println!(
                "{}",
                welivehere::output::format_report_list(&reports, use_colors)
            );
        }
        ReportCommands::Remove { index } => {
            let mut log = match welivehere::reports::load_report_log(&reports_path) {
                Ok(log) => log,
                Err(e) => {
                    eprintln!("Failed to load report log: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            match log.remove(index) {
                Some(removed) => {
                    if let Err(e) = welivehere::reports::save_report_log(&reports_path, &log) {
                        eprintln!("Failed to save report log: {}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                    println!("Removed report: {}", removed.title);
                }
                None => {
                    eprintln!(
                        "Invalid index {}. Must be between 1 and {}.",
                        index,
                        log.reports.len()
                    );
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
    }
}

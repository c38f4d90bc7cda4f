use clap::Parser;
use std::path::PathBuf;

use peer_rank::output::OutputFormat;
use peer_rank::scoring::Strategy;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "peer-rank")]
#[command(about = "Rank peer-reviewed items by aggregate rating", long_about = None)]
#[command(version)]
struct Cli {
    /// Ratings file (YAML, or JSON with a .json extension)
    ratings_file: PathBuf,

    /// Aggregation strategy (defaults to the config value, then `standard`)
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Output format (defaults to the config value, then `table`)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to config file (defaults to ~/.config/peer-rank/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match peer_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Flags win over config values, config values over built-in defaults
    let strategy = cli.strategy.or(config.strategy).unwrap_or(Strategy::Standard);
    let format = cli.format.or(config.format).unwrap_or(OutputFormat::Table);

    // Load and validate the rating list
    let ratings = match peer_rank::input::load_ratings(&cli.ratings_file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if let Err(errors) = peer_rank::input::validate_ratings(&ratings) {
        eprintln!("Ratings file errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INPUT);
    }

    if cli.verbose {
        eprintln!(
            "Loaded {} ratings from {}",
            ratings.len(),
            cli.ratings_file.display()
        );
        eprintln!(
            "  {} distinct items, {} distinct authors",
            peer_rank::scoring::unique_items(&ratings).len(),
            peer_rank::scoring::unique_authors(&ratings).len()
        );
        eprintln!("Strategy: {}", strategy);
    }

    // Run the selected strategy
    match strategy.compute(&ratings) {
        None => {
            if cli.verbose {
                eprintln!("Compensation needs a non-empty rating list with at least two distinct authors");
            }
            println!("No aggregate ratings for this input.");
        }
        Some(summaries) => match format {
            OutputFormat::Table => {
                let use_colors = peer_rank::output::should_use_colors();
                println!(
                    "{}",
                    peer_rank::output::format_ranked_table(&summaries, use_colors)
                );
            }
            OutputFormat::Json => match peer_rank::output::format_json(&summaries) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Output error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            },
        },
    }

    std::process::exit(EXIT_SUCCESS);
}

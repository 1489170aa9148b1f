use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use yatra_common::{logger, AppConfig};
use yatra_recommend::{FilterSet, KeywordOutcome, PlaceOutcome, RecommendationEngine};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "yatra")]
#[command(about = "Yatra - tourist destination recommendations", long_about = None)]
struct Cli {
    /// Destination dataset (CSV)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8080")]
        port: u16,
    },

    /// Recommend places similar to a place
    Similar {
        /// Place name as it appears in the dataset
        name: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Recommend places matching keywords
    Keyword {
        /// Free-text keywords (e.g. "trekking in Kerala")
        #[arg(trailing_var_arg = true)]
        words: Vec<String>,
    },

    /// List the values available for filtering
    Options,
}

#[derive(Args)]
struct FilterArgs {
    /// Only places in this state
    #[arg(long)]
    state: Option<String>,

    /// Minimum review rating (0.0 - 5.0)
    #[arg(long)]
    min_rating: Option<f64>,

    /// Type label must contain this text
    #[arg(long = "type")]
    place_type: Option<String>,

    /// Best time to visit must contain this text
    #[arg(long)]
    season: Option<String>,
}

impl From<FilterArgs> for FilterSet {
    fn from(args: FilterArgs) -> Self {
        FilterSet {
            state: args.state,
            min_rating: args.min_rating,
            place_type: args.place_type,
            season: args.season,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    if let Some(dataset) = &cli.dataset {
        std::env::set_var("DATASET_PATH", dataset);
    }

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());
            serve().await?;
        }
        None => serve().await?,
        Some(Commands::Similar { name, filters }) => {
            let engine = one_shot_engine()?;
            print_place_outcome(&engine.recommend_similar_to_place(&name, &filters.into()));
        }
        Some(Commands::Keyword { words }) => {
            let engine = one_shot_engine()?;
            print_keyword_outcome(&engine.recommend_by_keyword(&words.join(" ")));
        }
        Some(Commands::Options) => {
            let engine = one_shot_engine()?;
            let options = engine.filter_options();
            print_section("States", &options.states);
            print_section("Types", &options.types);
            print_section("Best time to visit", &options.seasons);
        }
    }

    Ok(())
}

async fn serve() -> Result<()> {
    let config = AppConfig::from_env()?;
    config.ensure_directories()?;
    logger::setup_logging_from_config(&config)?;

    tracing::info!("Yatra starting...");
    tracing::info!("  Dataset: {}", config.dataset_path.display());
    tracing::info!("  Bind: {}", config.server_bind_address());

    println!("Server listening on http://{}", config.server_bind_address());

    yatra_server::start_server(config).await?;
    Ok(())
}

fn one_shot_engine() -> Result<RecommendationEngine> {
    let config = AppConfig::from_env()?;
    logger::setup_console_logging("warn")?;
    Ok(RecommendationEngine::from_config(&config)?)
}

fn print_place_outcome(outcome: &PlaceOutcome) {
    match outcome {
        PlaceOutcome::Ranked { recommendations } => {
            println!("You might also like:");
            for rec in recommendations {
                println!("- {}", rec.name);
            }
        }
        PlaceOutcome::NoMatches => println!("No matching places found with selected filters."),
        PlaceOutcome::NotFound { .. } => println!("Selected place not found."),
    }
}

fn print_keyword_outcome(outcome: &KeywordOutcome) {
    match outcome {
        KeywordOutcome::Ranked { recommendations } => {
            println!("Recommended places based on keyword:");
            for rec in recommendations {
                println!("- {}", rec.label());
            }
        }
        KeywordOutcome::NoMatches => println!("No matching places found for the keyword."),
        KeywordOutcome::EmptyQuery => println!("Please enter a keyword."),
    }
}

fn print_section(title: &str, values: &[String]) {
    println!("{}:", title);
    for value in values {
        println!("  {}", value);
    }
}

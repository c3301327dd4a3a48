use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use welf_core::StoryCategory;
use welf_core::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, GLOBE_RADIUS};

mod commands;

#[derive(Parser)]
#[command(name = "welf")]
#[command(about = "WELF animal-welfare site backend: stories, impact globe and prices", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print one page of stories
    Stories {
        #[arg(short, long)]
        category: Option<StoryCategory>,
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: usize,
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: usize,
    },
    /// Print impact markers
    Markers {
        /// rehabilitation, sanctuary, conservation, rescue or all
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Project a coordinate onto the globe and the flat map
    Project {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(short, long, default_value_t = GLOBE_RADIUS)]
        radius: f64,
    },
    /// Print educational resources
    Resources {
        /// article, video, course, guide or all
        #[arg(short = 't', long = "type")]
        resource_type: Option<String>,
        /// beginner, intermediate, advanced or all
        #[arg(short, long)]
        level: Option<String>,
    },
    /// Fetch current crypto prices once
    Prices,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Stories { category, page, limit } => {
            commands::query::stories(category, page, limit).await
        },
        Commands::Markers { category } => commands::query::markers(category.as_deref()).await,
        Commands::Project { lat, lon, radius } => commands::query::project(lat, lon, radius),
        Commands::Resources { resource_type, level } => {
            commands::query::resources(resource_type.as_deref(), level.as_deref()).await
        },
        Commands::Prices => commands::query::prices().await,
    }
}

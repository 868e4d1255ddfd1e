mod pages;
mod profile;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use triptide_client::TripTideClient;
use triptide_core::FilterCriteria;
use triptide_store::FileStore;
use triptide_web::BookingPage;

use crate::profile::ProfileCommands;

#[derive(Debug, Parser)]
#[command(name = "triptide")]
#[command(about = "TripTide travel discovery from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the India and international destination grids
    Home,
    /// Browse every stay, filtered and sorted
    Explore {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Render the full page for one destination
    Destination {
        /// Destination slug (e.g., goa)
        place: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show stays similar to those at a destination (booking page)
    Similar {
        destination: String,
        /// Count the visit as a "View Stay" click from the explore grid
        #[arg(long)]
        from_explore: bool,
    },
    /// Reserve a stay
    Reserve { destination: String, stay: String },
    /// Add a stay to the favorites list
    Favorite { destination: String, stay: String },
    /// List saved favorites
    Favorites,
    /// Inspect or update the anonymous usage profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Submit the UX survey; 0 marks an unanswered question
    Survey {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=5))]
        q1: u8,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=5))]
        q2: u8,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=5))]
        q3: u8,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=5))]
        q4: u8,
        #[arg(value_parser = clap::value_parser!(u8).range(0..=5))]
        q5: u8,
    },
    /// Show admin metric cards and chart series
    Admin,
    /// Play the onboarding slideshow
    Onboarding {
        /// Number of slides
        #[arg(long, default_value_t = 3)]
        slides: usize,
        /// Slide to show first (a dot click)
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Automatic advances to play before exiting
        #[arg(long, default_value_t = 0)]
        ticks: u32,
    },
    /// Generate a day-by-day itinerary
    Plan {
        destination: String,
        days: String,
        #[arg(long, default_value = "Solo")]
        traveler_type: String,
        #[arg(long, default_value = "")]
        interests: String,
    },
}

/// Listing filter controls, as the raw strings the page selects offer.
#[derive(Debug, Args)]
struct FilterArgs {
    /// Price range: all, <min>, <min>- or <min>-<max>
    #[arg(long, default_value = "all")]
    price: String,
    /// Minimum rating, or all
    #[arg(long, default_value = "all")]
    rating: String,
    /// Stay type (e.g., Hotel), or all
    #[arg(long = "type", default_value = "all")]
    stay_type: String,
    /// Required amenity (e.g., WiFi), or all
    #[arg(long, default_value = "all")]
    amenity: String,
    /// price_asc, price_desc or rating_desc
    #[arg(long, default_value = "")]
    sort: String,
}

impl FilterArgs {
    fn criteria(&self) -> anyhow::Result<FilterCriteria> {
        Ok(FilterCriteria::from_controls(
            &self.price,
            &self.rating,
            &self.stay_type,
            &self.amenity,
            &self.sort,
        )?)
    }
}

/// Everything a command handler may need.
pub(crate) struct Context {
    pub client: TripTideClient,
    pub storage: Arc<FileStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("triptide: run with --help to list commands");
        return Ok(());
    };

    // Reads `.env` before the process environment.
    let config = triptide_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = TripTideClient::from_config(&config)?;
    let storage = Arc::new(FileStore::new(config.storage_path.clone()));
    tracing::debug!(
        env = %config.env,
        base_url = %config.base_url,
        storage = %config.storage_path.display(),
        "triptide starting"
    );
    let ctx = Context { client, storage };

    match command {
        Commands::Home => pages::run_home(&ctx).await,
        Commands::Explore { filters } => pages::run_explore(&ctx, &filters.criteria()?).await,
        Commands::Destination { place, filters } => {
            pages::run_destination(&ctx, &place, &filters.criteria()?).await
        }
        Commands::Similar {
            destination,
            from_explore,
        } => pages::run_similar(&ctx, &destination, from_explore).await,
        Commands::Reserve { destination, stay } => {
            println!("{}", BookingPage::new(&destination, &stay).reserve());
            Ok(())
        }
        Commands::Favorite { destination, stay } => {
            profile::run_favorite(&ctx, &destination, &stay)
        }
        Commands::Favorites => profile::run_favorites(&ctx),
        Commands::Profile { command } => profile::run_profile(&ctx, command),
        Commands::Survey { q1, q2, q3, q4, q5 } => {
            pages::run_survey(&ctx, [q1, q2, q3, q4, q5]).await
        }
        Commands::Admin => pages::run_admin(&ctx).await,
        Commands::Onboarding {
            slides,
            start,
            ticks,
        } => pages::run_onboarding(slides, start, ticks).await,
        Commands::Plan {
            destination,
            days,
            traveler_type,
            interests,
        } => pages::run_plan(&ctx, destination, days, traveler_type, interests).await,
    }
}

#[cfg(test)]
mod tests;

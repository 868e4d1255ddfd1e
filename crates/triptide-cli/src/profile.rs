//! Local profile and favorites commands. These never touch the network.

use clap::Subcommand;
use triptide_store::{FavoritesStore, ProfileStore};
use triptide_web::BookingPage;

use crate::Context;

/// Sub-commands available under `profile`.
#[derive(Debug, Subcommand)]
pub enum ProfileCommands {
    /// Print the stored profile as JSON
    Show,
    /// Increment a usage counter (e.g., searches)
    Increment { name: String },
}

pub(crate) fn run_profile(ctx: &Context, command: ProfileCommands) -> anyhow::Result<()> {
    let store = ProfileStore::new(ctx.storage.clone());
    match command {
        ProfileCommands::Show => {
            let profile = store.load()?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileCommands::Increment { name } => {
            let count = store.increment_metric(&name)?;
            println!("{name} = {count}");
        }
    }
    Ok(())
}

pub(crate) fn run_favorite(ctx: &Context, destination: &str, stay: &str) -> anyhow::Result<()> {
    let favorites = FavoritesStore::new(ctx.storage.clone());
    let message = BookingPage::new(destination, stay).add_favorite(&favorites)?;
    println!("{message}");
    Ok(())
}

pub(crate) fn run_favorites(ctx: &Context) -> anyhow::Result<()> {
    let favorites = FavoritesStore::new(ctx.storage.clone()).list()?;
    if favorites.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }
    for fav in favorites {
        println!("{} / {}", fav.destination, fav.stay);
    }
    Ok(())
}


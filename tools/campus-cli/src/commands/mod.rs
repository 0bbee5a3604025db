//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod listings;
pub mod seller;
pub mod show;

use clap::{Args, Subcommand};

/// Arguments for the listings command.
#[derive(Args)]
pub struct ListingsArgs {
    /// Category (e.g. textbooks, dorm-gear) or "all".
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Condition (e.g. like-new, good) or "all".
    #[arg(long, default_value = "all")]
    pub condition: String,

    /// Minimum price in whole currency units.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum price in whole currency units.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Only listings on this campus.
    #[arg(long)]
    pub campus: Option<String>,

    /// Search text matched against title and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page number, starting at 1.
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub page: i64,

    /// Listings per page (default from config).
    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Listing ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents.
    Show,
    /// Add a listing to the cart.
    Add {
        /// Listing ID.
        id: String,
        /// Quantity to add.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a listing from the cart.
    Remove {
        /// Listing ID.
        id: String,
    },
    /// Set the quantity of a listing (0 removes it).
    Set {
        /// Listing ID.
        id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove everything from the cart.
    Clear,
}

/// Arguments for the seller command.
#[derive(Args)]
pub struct SellerArgs {
    /// Seller ID.
    pub id: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

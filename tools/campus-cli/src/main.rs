//! Campus CLI - Command line front end for the campus marketplace.
//!
//! Commands:
//! - `campus listings` - Browse and filter listings
//! - `campus show` - Show one listing and related items
//! - `campus cart` - Manage the shopping cart
//! - `campus seller` - Show a seller's dashboard
//! - `campus config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use campus_commerce::Currency;
use clap::{Parser, Subcommand};

use commands::{CartArgs, ConfigArgs, ListingsArgs, SellerArgs, ShowArgs};

/// Campus CLI - Browse listings and manage your cart
#[derive(Parser)]
#[command(name = "campus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Profile whose cart to use
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Cart currency code (NGN, USD, EUR, GBP, JPY)
    #[arg(long, global = true, value_parser = parse_currency)]
    currency: Option<Currency>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse listings with filters and paging
    Listings(ListingsArgs),

    /// Show a listing with related items
    Show(ShowArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Show a seller's dashboard
    Seller(SellerArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(
        cli.config.as_deref(),
        cli.profile.as_deref(),
        cli.currency,
        output,
    )?;

    // Execute command
    let result = match cli.command {
        Commands::Listings(args) => commands::listings::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Seller(args) => commands::seller::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn parse_currency(code: &str) -> Result<Currency, String> {
    Currency::from_code(code).ok_or_else(|| format!("unknown currency code '{}'", code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("USD").unwrap(), Currency::USD);
        assert_eq!(parse_currency("jpy").unwrap(), Currency::JPY);
        assert!(parse_currency("XYZ").is_err());
    }

    #[test]
    fn test_currency_flag() {
        let cli = Cli::try_parse_from(["campus", "--currency", "GBP", "cart", "show"]).unwrap();
        assert_eq!(cli.currency, Some(Currency::GBP));

        assert!(Cli::try_parse_from(["campus", "--currency", "XYZ", "cart", "show"]).is_err());
    }
}

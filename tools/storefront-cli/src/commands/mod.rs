//! CLI command implementations.

pub mod account;
pub mod checkout;
pub mod config;
pub mod products;
pub mod suggest;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Category bar value ("All" shows everything).
    #[arg(short = 'C', long, default_value = "All")]
    pub category: String,

    /// Sort key: featured, priceLowHigh, priceHighLow or rating.
    #[arg(short, long, default_value = "featured")]
    pub sort: String,

    /// Product ids to mark as wishlisted.
    #[arg(short, long, value_delimiter = ',')]
    pub wishlist: Vec<String>,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Show the product count per category.
    #[arg(long)]
    pub counts: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Discount code typed into the order summary.
    #[arg(long, default_value = "")]
    pub code: String,

    /// Mark the order as a gift.
    #[arg(long)]
    pub gift: bool,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Search term.
    #[arg(default_value = "")]
    pub term: String,

    /// Keys pressed after typing: down, up, enter.
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Vec<String>,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub password: String,
}

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub password: String,

    #[arg(long, default_value = "")]
    pub confirm_password: String,
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
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

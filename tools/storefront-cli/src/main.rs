//! Storefront CLI - drive the catalog, checkout and account forms from a terminal.
//!
//! Commands:
//! - `storefront products` - Filtered and sorted product listing
//! - `storefront categories` - Category bar values
//! - `storefront checkout` - Order summary for the demo cart
//! - `storefront suggest` - Header search suggestions
//! - `storefront login` / `storefront register` - Form validation
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CategoriesArgs, CheckoutArgs, ConfigArgs, LoginArgs, ProductsArgs, RegisterArgs, SuggestArgs,
};
use logging::LogFormat;

/// Storefront CLI - browse the demo catalog and check out the demo cart
#[derive(Parser)]
#[command(name = "storefront")]
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

    /// Log line format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products for a category and sort key
    Products(ProductsArgs),

    /// List the category bar
    Categories(CategoriesArgs),

    /// Show the order summary for the demo cart
    Checkout(CheckoutArgs),

    /// Run the header search box
    Suggest(SuggestArgs),

    /// Validate the login form
    Login(LoginArgs),

    /// Validate the registration form
    Register(RegisterArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    logging::init(&ctx.config.logging, cli.verbose, cli.log_format);

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Categories(args) => commands::products::run_categories(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Suggest(args) => commands::suggest::run(args, &ctx),
        Commands::Login(args) => commands::account::run_login(args, &ctx),
        Commands::Register(args) => commands::account::run_register(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        tracing::error!(error = %format!("{:#}", e), "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

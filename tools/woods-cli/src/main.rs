//! Woods CLI - Command line storefront for Artisan Woods.
//!
//! Commands:
//! - `woods products` - Browse and filter the catalog
//! - `woods categories` - List product categories
//! - `woods show` - Show one product
//! - `woods cart` - Manage the shopping cart
//! - `woods favorites` - Manage favorites
//! - `woods checkout` - Pay for the cart
//! - `woods config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CheckoutArgs, ConfigArgs, FavoritesArgs, ProductsArgs, ShowArgs};

/// Woods CLI - Browse furniture, fill a cart and check out
#[derive(Parser)]
#[command(name = "woods")]
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

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered
    Products(ProductsArgs),

    /// List product categories
    Categories,

    /// Show product details
    Show(ShowArgs),

    /// Manage the shopping cart
    Cart(CartArgs),

    /// Manage favorites
    Favorites(FavoritesArgs),

    /// Check out the cart
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Categories => commands::products::categories(&ctx).await,
        Commands::Show(args) => commands::products::show(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Favorites(args) => commands::favorites::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, or debug for our crates with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,woods=debug,woods_commerce=debug,woods_cache=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

//! Storefront CLI - browse the Boult.neu catalog from a terminal.
//!
//! Commands:
//! - `storefront home` - Home page: hero slides, categories, new arrivals, featured
//! - `storefront products` - Filtered and sorted product listing
//! - `storefront show <slug>` - Product detail with related products
//! - `storefront slugs` - Every product page path
//! - `storefront password <candidate>` - Score a password
//! - `storefront carousel` - Watch the hero carousel advance
//! - `storefront account` - Update profile or password (simulated service)
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AccountArgs, CarouselArgs, ConfigArgs, PasswordArgs, ProductsArgs, ShowArgs};

/// Storefront CLI - Browse the catalog and exercise storefront widgets
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

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home page
    Home,

    /// List products
    Products(ProductsArgs),

    /// Show a product by slug
    Show(ShowArgs),

    /// List product page paths
    Slugs,

    /// Score a candidate password
    Password(PasswordArgs),

    /// Watch the hero carousel auto-advance
    Carousel(CarouselArgs),

    /// Update account settings
    Account(AccountArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;
    if !matches!(cli.command, Commands::Config(_)) {
        if let Err(e) = ctx.ensure_valid() {
            ctx.output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Home => commands::home::run(&ctx).await,
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Slugs => commands::slugs::run(&ctx).await,
        Commands::Password(args) => commands::password::run(args, &ctx).await,
        Commands::Carousel(args) => commands::carousel::run(args, &ctx).await,
        Commands::Account(args) => commands::account::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

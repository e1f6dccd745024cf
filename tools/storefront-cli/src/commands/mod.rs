//! CLI command implementations.

pub mod account;
pub mod carousel;
pub mod config;
pub mod home;
pub mod password;
pub mod products;
pub mod show;
pub mod slugs;

use clap::{Args, Subcommand};
use storefront_catalog::views::SortOption;
use storefront_widgets::forms::Gender;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Sort order: featured, newest, price-asc, price-desc, rating-desc.
    #[arg(short, long, default_value = "featured")]
    pub sort: SortOption,

    /// Lowest price, in whole currency units.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Highest price, in whole currency units.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Category label to include (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Feature label to include (repeatable).
    #[arg(long = "feature")]
    pub features: Vec<String>,

    /// Minimum star rating (1-4).
    #[arg(long)]
    pub rating: Option<u8>,

    /// Search text matched against name and description.
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product slug.
    pub slug: String,
}

/// Arguments for the password command.
#[derive(Args)]
pub struct PasswordArgs {
    /// Candidate password to score.
    pub candidate: String,
}

/// Arguments for the carousel command.
#[derive(Args)]
pub struct CarouselArgs {
    /// Number of auto-advances to watch before stopping.
    #[arg(short, long, default_value = "3")]
    pub advances: usize,
}

/// Arguments for the account command.
#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Update profile details. Unset fields keep the saved values.
    Profile(ProfileArgs),
    /// Change the account password.
    Password(PasswordChangeArgs),
}

/// Arguments for `account profile`.
#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// male, female, other or prefer-not-to-say.
    #[arg(long, value_parser = account::parse_gender)]
    pub gender: Option<Gender>,

    /// Receive marketing emails (true/false).
    #[arg(long)]
    pub marketing_emails: Option<bool>,

    /// Make the simulated service reject the update.
    #[arg(long)]
    pub fail: bool,
}

/// Arguments for `account password`.
#[derive(Args)]
pub struct PasswordChangeArgs {
    /// Current password.
    #[arg(long)]
    pub current: String,

    /// New password.
    #[arg(long)]
    pub new: String,

    /// New password again.
    #[arg(long)]
    pub confirm: String,

    /// Keep two-factor authentication enabled.
    #[arg(long)]
    pub two_factor: bool,

    /// Make the simulated service reject the change.
    #[arg(long)]
    pub fail: bool,
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

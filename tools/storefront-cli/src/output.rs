//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use storefront_catalog::catalog::{Badge, Product, Star, StockStatus};
use storefront_widgets::password::StrengthLabel;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a product table.
    pub fn product_table(&self, products: &[Product]) {
        const WIDTHS: [usize; 5] = [28, 10, 6, 12, 14];
        self.table_row(&["SLUG", "PRICE", "RATING", "CATEGORY", "BADGES"], &WIDTHS);
        for product in products {
            let price = product.price.display();
            let rating = format!("{:.1}", product.rating);
            let badges = badges(product);
            self.table_row(
                &[
                    product.slug.as_str(),
                    price.as_str(),
                    rating.as_str(),
                    product.category_id.as_str(),
                    badges.as_str(),
                ],
                &WIDTHS,
            );
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Badges as a short comma-separated string.
pub fn badges(product: &Product) -> String {
    product
        .badges()
        .iter()
        .map(Badge::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Five-star rating rendered with glyphs.
pub fn stars(stars: &[Star]) -> String {
    stars
        .iter()
        .map(|star| match star {
            Star::Full => "★",
            Star::Half => "⯨",
            Star::Empty => "☆",
        })
        .collect()
}

/// Colored stock label.
pub fn stock_label(status: StockStatus) -> String {
    match status {
        StockStatus::InStock => style(status.label()).green().to_string(),
        StockStatus::OutOfStock => style(status.label()).red().to_string(),
    }
}

/// Strength meter, `width` cells wide.
pub fn strength_meter(label: StrengthLabel, ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width.saturating_sub(filled)));
    match label {
        StrengthLabel::VeryWeak | StrengthLabel::Weak => style(bar).red().to_string(),
        StrengthLabel::Medium => style(bar).yellow().to_string(),
        StrengthLabel::Strong | StrengthLabel::VeryStrong => style(bar).green().to_string(),
    }
}

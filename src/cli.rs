//! CLI interface for salestat
//!
//! This module defines the command-line interface using clap. Subcommands
//! map to the dashboard views: `revenue` and `sales` render the overview
//! tables ordered by the respective metric, `sellers` renders the top-N
//! seller rankings, and `export` writes the filtered records as CSV.
//!
//! # Example
//!
//! ```bash
//! # Revenue overview for the south region in 2022
//! salestat --endpoint https://sales.example.com/products --region sul --year 2022 revenue
//!
//! # Top 8 sellers, machine-readable
//! salestat --endpoint https://sales.example.com/products --json sellers --top 8
//!
//! # Filtered CSV export
//! salestat --endpoint https://sales.example.com/products \
//!     --price-min 100 --price-max 500 export --output mid_range
//! ```

use crate::aggregation::DEFAULT_TOP_SELLERS;
use crate::error::{Result, SalestatError};
use crate::export::Column;
use crate::filters::SaleFilter;
use crate::types::Region;
use clap::{Args, Parser, Subcommand};

/// Fetch, filter and aggregate product-sale records from a remote sales API
#[derive(Parser, Debug, Clone)]
#[command(name = "salestat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Sales API endpoint returning the JSON array of sale records
    #[arg(long, env = "SALES_API_URL")]
    pub endpoint: String,

    /// Server-side region filter (brasil, centro-oeste, nordeste, norte,
    /// sudeste, sul); brasil means no filtering
    #[arg(long)]
    pub region: Option<String>,

    /// Server-side year filter; omit for all years
    #[arg(long)]
    pub year: Option<i32>,

    /// Currency prefix for the revenue metric
    #[arg(long, default_value = "R$")]
    pub currency: String,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Only show warnings and errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Client-side record filters, applied after the fetch
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Subcommand to execute (defaults to the revenue overview)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Client-side filter options, mapped 1:1 to the filter dimensions
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep only these product names (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub products: Vec<String>,

    /// Keep only these categories (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Keep only these sellers (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub sellers: Vec<String>,

    /// Keep only these purchase locations (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub locations: Vec<String>,

    /// Keep only these payment types (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub payment_types: Vec<String>,

    /// Minimum unit price (inclusive)
    #[arg(long)]
    pub price_min: Option<f64>,

    /// Maximum unit price (inclusive)
    #[arg(long)]
    pub price_max: Option<f64>,

    /// Minimum freight cost (inclusive)
    #[arg(long)]
    pub freight_min: Option<f64>,

    /// Maximum freight cost (inclusive)
    #[arg(long)]
    pub freight_max: Option<f64>,

    /// Minimum buyer rating (inclusive, 1-5)
    #[arg(long)]
    pub rating_min: Option<u8>,

    /// Maximum buyer rating (inclusive, 1-5)
    #[arg(long)]
    pub rating_max: Option<u8>,

    /// Minimum installment count (inclusive)
    #[arg(long)]
    pub installments_min: Option<u32>,

    /// Maximum installment count (inclusive)
    #[arg(long)]
    pub installments_max: Option<u32>,

    /// Earliest purchase date (YYYY-MM-DD or YYYY-MM)
    #[arg(long)]
    pub since: Option<String>,

    /// Latest purchase date (YYYY-MM-DD or YYYY-MM)
    #[arg(long)]
    pub until: Option<String>,
}

impl FilterArgs {
    /// Build the record filter from the parsed options
    ///
    /// An unset dimension stays at "match all"; a half-open range fills the
    /// missing bound with the widest value for that dimension.
    pub fn to_filter(&self) -> Result<SaleFilter> {
        let mut filter = SaleFilter::new();

        if let Some((min, max)) = range(self.price_min, self.price_max, 0.0, f64::INFINITY) {
            filter = filter.with_price_range(min, max);
        }
        if let Some((min, max)) = range(self.freight_min, self.freight_max, 0.0, f64::INFINITY) {
            filter = filter.with_freight_range(min, max);
        }
        if let Some((min, max)) = range(self.rating_min, self.rating_max, 1, 5) {
            filter = filter.with_rating_range(min, max);
        }
        if let Some((min, max)) = range(self.installments_min, self.installments_max, 0, u32::MAX)
        {
            filter = filter.with_installments_range(min, max);
        }

        if let Some(since) = &self.since {
            filter = filter.with_since(parse_date_filter(since)?);
        }
        if let Some(until) = &self.until {
            filter = filter.with_until(parse_date_filter(until)?);
        }

        if !self.products.is_empty() {
            filter = filter.with_products(self.products.iter().cloned());
        }
        if !self.categories.is_empty() {
            filter = filter.with_categories(self.categories.iter().cloned());
        }
        if !self.sellers.is_empty() {
            filter = filter.with_sellers(self.sellers.iter().cloned());
        }
        if !self.locations.is_empty() {
            filter = filter.with_locations(self.locations.iter().cloned());
        }
        if !self.payment_types.is_empty() {
            filter = filter.with_payment_types(self.payment_types.iter().cloned());
        }

        Ok(filter)
    }
}

/// Merge optional bounds into an inclusive range; `None` when both are unset
fn range<T: Copy>(min: Option<T>, max: Option<T>, lo: T, hi: T) -> Option<(T, T)> {
    if min.is_none() && max.is_none() {
        None
    } else {
        Some((min.unwrap_or(lo), max.unwrap_or(hi)))
    }
}

/// Arguments for the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file name; the .csv suffix is appended when missing
    #[arg(long, short = 'o')]
    pub output: String,

    /// Columns to export (comma-separated kebab-case names, e.g.
    /// product,price,purchase-date); all columns when omitted
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
}

impl ExportArgs {
    /// Resolve the column selection, defaulting to every column
    pub fn resolve_columns(&self) -> Result<Vec<Column>> {
        if self.columns.is_empty() {
            Ok(Column::all())
        } else {
            self.columns.iter().map(|s| s.parse()).collect()
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the revenue overview (by location, monthly, by category)
    Revenue,
    /// Show the sale-count overview (by location, monthly, by category)
    Sales,
    /// Show the top-N sellers ranked by revenue and by sale count
    Sellers {
        /// How many sellers to rank (2-10)
        #[arg(long, default_value_t = DEFAULT_TOP_SELLERS)]
        top: usize,
    },
    /// Write the filtered records to a CSV file
    Export(ExportArgs),
}

/// Parse date filter from string
///
/// Accepts dates in YYYY-MM-DD or YYYY-MM format; YYYY-MM defaults to the
/// first day of the month.
///
/// # Example
///
/// ```
/// use salestat::cli::parse_date_filter;
/// use chrono::Datelike;
///
/// let date = parse_date_filter("2022-03-15").unwrap();
/// assert_eq!(date.day(), 15);
///
/// let date = parse_date_filter("2022-03").unwrap();
/// assert_eq!(date.day(), 1);
/// ```
pub fn parse_date_filter(date_str: &str) -> Result<chrono::NaiveDate> {
    if let Ok(date) = chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Ok(date);
    }

    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() == 2 {
        let year = parts[0]
            .parse::<i32>()
            .map_err(|_| SalestatError::InvalidDate(format!("Invalid year in '{date_str}'")))?;
        let month = parts[1]
            .parse::<u32>()
            .map_err(|_| SalestatError::InvalidDate(format!("Invalid month in '{date_str}'")))?;

        if !(1..=12).contains(&month) {
            return Err(SalestatError::InvalidDate(format!(
                "Month must be between 1-12, got {month}"
            )));
        }

        chrono::NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| SalestatError::InvalidDate(format!("Invalid date: {date_str}")))
    } else {
        Err(SalestatError::InvalidDate(format!(
            "Invalid date format '{date_str}', expected YYYY-MM-DD or YYYY-MM"
        )))
    }
}

/// Parse a region name from the CLI
pub fn parse_region(region_str: &str) -> Result<Region> {
    region_str
        .parse()
        .map_err(|_| SalestatError::InvalidRegion(region_str.to_string()))
}

//! salestat - Fetch, filter and aggregate product-sale records from a remote sales API
//!
//! This library provides functionality to:
//! - Fetch product-sale records as JSON from a remote HTTP endpoint,
//!   optionally narrowed server-side by region and year
//! - Filter records client-side across ten independent dimensions
//! - Derive revenue and sale-count tables by location, month, category and
//!   seller, plus top-N seller rankings
//! - Export the filtered records as CSV
//!
//! # Examples
//!
//! ```no_run
//! use salestat::{
//!     aggregation::{self, Metric, Totals},
//!     fetcher::SalesApi,
//!     filters::SaleFilter,
//! };
//!
//! #[tokio::main]
//! async fn main() -> salestat::Result<()> {
//!     let api = SalesApi::new("https://sales.example.com/products");
//!     let records = api.fetch(None, None).await?;
//!
//!     let filtered = SaleFilter::new()
//!         .with_price_range(100.0, 500.0)
//!         .apply(&records);
//!
//!     let totals = Totals::from_records(&filtered);
//!     let by_seller = aggregation::sales_by_seller(&filtered, Metric::Revenue);
//!     println!("{} records, top seller: {:?}", totals.sales, by_seller.first());
//!
//!     Ok(())
//! }
//! ```

pub mod aggregation;
pub mod cli;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod filters;
pub mod format;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SalestatError};
pub use types::{Category, Location, MonthKey, PurchaseDate, Region, SaleRecord, Seller};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Aggregation module for summarizing sale records
//!
//! This module derives the dashboard tables from filtered sale records:
//! revenue and sale counts grouped by purchase location, calendar month,
//! product category and seller, plus the top-N seller selection.
//!
//! Every grouped pass accumulates both metrics at once (summed price =
//! revenue, matching-record count = sales); the caller picks which metric
//! orders the table. Grouping uses a `BTreeMap`, so the pre-sort order is
//! the key order and the final descending sort is stable: ties keep a
//! deterministic order across runs.
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
//! # async fn example() -> salestat::Result<()> {
//! let api = SalesApi::new("https://sales.example.com/products");
//! let records = api.fetch(None, None).await?;
//!
//! let filtered = SaleFilter::new().with_price_range(100.0, 500.0).apply(&records);
//!
//! let totals = Totals::from_records(&filtered);
//! let by_location = aggregation::sales_by_location(&filtered, Metric::Revenue);
//! let monthly = aggregation::sales_by_month(&filtered);
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, SalestatError};
use crate::types::{Category, Location, MonthKey, SaleRecord, Seller};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Smallest accepted top-N seller selection
pub const MIN_TOP_SELLERS: usize = 2;
/// Largest accepted top-N seller selection
pub const MAX_TOP_SELLERS: usize = 10;
/// Default top-N seller selection
pub const DEFAULT_TOP_SELLERS: usize = 5;

/// Metric ordering an aggregate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Summed unit price of matching records (excludes freight)
    Revenue,
    /// Number of matching records
    Sales,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Revenue => write!(f, "revenue"),
            Self::Sales => write!(f, "sales"),
        }
    }
}

/// Revenue and sale count for one purchase location
///
/// Coordinates are carried through from one representative source row per
/// location; a location never yields more than one aggregate row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSales {
    /// Purchase location (state)
    pub location: Location,
    /// Location latitude
    pub latitude: f64,
    /// Location longitude
    pub longitude: f64,
    /// Summed unit price
    pub revenue: f64,
    /// Matching-record count
    pub sales: u64,
}

/// Revenue and sale count for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    /// Calendar month bucket (year + month)
    pub month: MonthKey,
    /// Summed unit price
    pub revenue: f64,
    /// Matching-record count
    pub sales: u64,
}

/// Revenue and sale count for one product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    /// Product category
    pub category: Category,
    /// Summed unit price
    pub revenue: f64,
    /// Matching-record count
    pub sales: u64,
}

/// Revenue and sale count for one seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSales {
    /// Seller name
    pub seller: Seller,
    /// Summed unit price
    pub revenue: f64,
    /// Matching-record count
    pub sales: u64,
}

/// Accumulator shared by all grouped passes
#[derive(Debug, Default, Clone, Copy)]
struct SalesAccumulator {
    revenue: f64,
    sales: u64,
}

impl SalesAccumulator {
    fn add(&mut self, price: f64) {
        self.revenue += price;
        self.sales += 1;
    }
}

/// Overall metrics for the summary display
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Summed unit price across all records
    pub revenue: f64,
    /// Record count
    pub sales: u64,
}

impl Totals {
    /// Compute totals over a record slice
    pub fn from_records(records: &[SaleRecord]) -> Self {
        let mut totals = Self::default();
        for record in records {
            totals.revenue += record.price;
            totals.sales += 1;
        }
        totals
    }
}

/// Aggregate records by purchase location, sorted descending by `metric`
///
/// The accumulator keeps the coordinates of the first row seen per
/// location, which realizes the dedup-then-join of the source tables:
/// exactly one coordinate pair per distinct location, and locations absent
/// from the input produce no row.
pub fn sales_by_location(records: &[SaleRecord], metric: Metric) -> Vec<LocationSales> {
    struct LocationAccumulator {
        latitude: f64,
        longitude: f64,
        totals: SalesAccumulator,
    }

    let mut groups: BTreeMap<Location, LocationAccumulator> = BTreeMap::new();

    for record in records {
        groups
            .entry(record.location.clone())
            .or_insert_with(|| LocationAccumulator {
                latitude: record.latitude,
                longitude: record.longitude,
                totals: SalesAccumulator::default(),
            })
            .totals
            .add(record.price);
    }

    let mut rows: Vec<LocationSales> = groups
        .into_iter()
        .map(|(location, acc)| LocationSales {
            location,
            latitude: acc.latitude,
            longitude: acc.longitude,
            revenue: acc.totals.revenue,
            sales: acc.totals.sales,
        })
        .collect();

    sort_descending(&mut rows, metric, |r| r.revenue, |r| r.sales);
    rows
}

/// Aggregate records by calendar month
///
/// The result is a chronological series (one row per distinct year/month
/// bucket present in the input); the year stays separate from the month so
/// multi-year data remains distinguishable when charted per year.
pub fn sales_by_month(records: &[SaleRecord]) -> Vec<MonthlySales> {
    let mut groups: BTreeMap<MonthKey, SalesAccumulator> = BTreeMap::new();

    for record in records {
        groups
            .entry(record.purchase_date.month_key())
            .or_default()
            .add(record.price);
    }

    groups
        .into_iter()
        .map(|(month, acc)| MonthlySales {
            month,
            revenue: acc.revenue,
            sales: acc.sales,
        })
        .collect()
}

/// Aggregate records by product category, sorted descending by `metric`
pub fn sales_by_category(records: &[SaleRecord], metric: Metric) -> Vec<CategorySales> {
    let mut groups: BTreeMap<Category, SalesAccumulator> = BTreeMap::new();

    for record in records {
        groups
            .entry(record.category.clone())
            .or_default()
            .add(record.price);
    }

    let mut rows: Vec<CategorySales> = groups
        .into_iter()
        .map(|(category, acc)| CategorySales {
            category,
            revenue: acc.revenue,
            sales: acc.sales,
        })
        .collect();

    sort_descending(&mut rows, metric, |r| r.revenue, |r| r.sales);
    rows
}

/// Aggregate records by seller, sorted descending by `metric`
pub fn sales_by_seller(records: &[SaleRecord], metric: Metric) -> Vec<SellerSales> {
    let mut groups: BTreeMap<Seller, SalesAccumulator> = BTreeMap::new();

    for record in records {
        groups
            .entry(record.seller.clone())
            .or_default()
            .add(record.price);
    }

    let mut rows: Vec<SellerSales> = groups
        .into_iter()
        .map(|(seller, acc)| SellerSales {
            seller,
            revenue: acc.revenue,
            sales: acc.sales,
        })
        .collect();

    sort_descending(&mut rows, metric, |r| r.revenue, |r| r.sales);
    rows
}

/// Take the N sellers with the largest value of `metric`
///
/// Revenue-ranked and count-ranked selections are computed independently,
/// so the two lists may contain different seller sets or orders. `n` must
/// lie within `[MIN_TOP_SELLERS, MAX_TOP_SELLERS]`.
pub fn top_sellers(rows: &[SellerSales], metric: Metric, n: usize) -> Result<Vec<SellerSales>> {
    if !(MIN_TOP_SELLERS..=MAX_TOP_SELLERS).contains(&n) {
        return Err(SalestatError::InvalidArgument(format!(
            "top seller count must be between {MIN_TOP_SELLERS} and {MAX_TOP_SELLERS}, got {n}"
        )));
    }

    let mut ranked = rows.to_vec();
    sort_descending(&mut ranked, metric, |r| r.revenue, |r| r.sales);
    ranked.truncate(n);
    Ok(ranked)
}

/// Stable descending sort by the chosen metric; ties keep the input order
fn sort_descending<T>(
    rows: &mut [T],
    metric: Metric,
    revenue: impl Fn(&T) -> f64,
    sales: impl Fn(&T) -> u64,
) {
    match metric {
        Metric::Revenue => rows.sort_by(|a, b| revenue(b).total_cmp(&revenue(a))),
        Metric::Sales => rows.sort_by(|a, b| sales(b).cmp(&sales(a))),
    }
}

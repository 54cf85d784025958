//! Filtering module for sale records
//!
//! This module provides the multi-predicate filter applied to fetched sale
//! records before aggregation and export. All ten predicates are optional
//! and combine with logical AND; an unconfigured filter matches everything,
//! so `SaleFilter::default()` is a no-op.
//!
//! # Examples
//!
//! ```
//! use salestat::filters::SaleFilter;
//! use chrono::NaiveDate;
//!
//! // Mid-range electronics sold in 2022
//! let filter = SaleFilter::new()
//!     .with_categories(["electronics".to_string()])
//!     .with_price_range(100.0, 500.0)
//!     .with_since(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
//!     .with_until(NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
//! ```

use crate::types::{Category, Location, SaleRecord, Seller};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Filter configuration for sale records
///
/// Set predicates pass when the row's value is an element of the configured
/// set; range predicates pass when the value lies within the inclusive
/// `[min, max]` bounds. `None` means "match all" for that dimension.
#[derive(Debug, Default, Clone)]
pub struct SaleFilter {
    /// Selected product names
    pub products: Option<HashSet<String>>,
    /// Selected product categories
    pub categories: Option<HashSet<Category>>,
    /// Unit price range (inclusive)
    pub price: Option<(f64, f64)>,
    /// Freight cost range (inclusive)
    pub freight: Option<(f64, f64)>,
    /// Start date filter (inclusive)
    pub since_date: Option<NaiveDate>,
    /// End date filter (inclusive)
    pub until_date: Option<NaiveDate>,
    /// Selected sellers
    pub sellers: Option<HashSet<Seller>>,
    /// Selected purchase locations
    pub locations: Option<HashSet<Location>>,
    /// Buyer rating range (inclusive)
    pub rating: Option<(u8, u8)>,
    /// Selected payment types
    pub payment_types: Option<HashSet<String>>,
    /// Installment count range (inclusive)
    pub installments: Option<(u32, u32)>,
}

impl SaleFilter {
    /// Create a new filter with no restrictions
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given product names
    pub fn with_products(mut self, products: impl IntoIterator<Item = String>) -> Self {
        self.products = Some(products.into_iter().collect());
        self
    }

    /// Restrict to the given categories
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = String>) -> Self {
        self.categories = Some(categories.into_iter().map(Category::new).collect());
        self
    }

    /// Set the unit price range (inclusive)
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price = Some((min, max));
        self
    }

    /// Set the freight cost range (inclusive)
    pub fn with_freight_range(mut self, min: f64, max: f64) -> Self {
        self.freight = Some((min, max));
        self
    }

    /// Set the start date filter
    pub fn with_since(mut self, date: NaiveDate) -> Self {
        self.since_date = Some(date);
        self
    }

    /// Set the end date filter
    pub fn with_until(mut self, date: NaiveDate) -> Self {
        self.until_date = Some(date);
        self
    }

    /// Restrict to the given sellers
    pub fn with_sellers(mut self, sellers: impl IntoIterator<Item = String>) -> Self {
        self.sellers = Some(sellers.into_iter().map(Seller::new).collect());
        self
    }

    /// Restrict to the given purchase locations
    pub fn with_locations(mut self, locations: impl IntoIterator<Item = String>) -> Self {
        self.locations = Some(locations.into_iter().map(Location::new).collect());
        self
    }

    /// Set the buyer rating range (inclusive)
    pub fn with_rating_range(mut self, min: u8, max: u8) -> Self {
        self.rating = Some((min, max));
        self
    }

    /// Restrict to the given payment types
    pub fn with_payment_types(mut self, payment_types: impl IntoIterator<Item = String>) -> Self {
        self.payment_types = Some(payment_types.into_iter().collect());
        self
    }

    /// Set the installment count range (inclusive)
    pub fn with_installments_range(mut self, min: u32, max: u32) -> Self {
        self.installments = Some((min, max));
        self
    }

    /// Check if a record passes every configured predicate
    ///
    /// Scalar range checks run before the set-membership checks; the
    /// ordering is not semantically significant.
    pub fn matches(&self, record: &SaleRecord) -> bool {
        if let Some((min, max)) = self.price {
            if record.price < min || record.price > max {
                return false;
            }
        }

        if let Some((min, max)) = self.freight {
            if record.freight < min || record.freight > max {
                return false;
            }
        }

        if let Some((min, max)) = self.rating {
            if record.rating < min || record.rating > max {
                return false;
            }
        }

        if let Some((min, max)) = self.installments {
            if record.installments < min || record.installments > max {
                return false;
            }
        }

        let date = record.purchase_date.inner();
        if let Some(since) = &self.since_date {
            if date < since {
                return false;
            }
        }
        if let Some(until) = &self.until_date {
            if date > until {
                return false;
            }
        }

        if let Some(products) = &self.products {
            if !products.contains(&record.product) {
                return false;
            }
        }

        if let Some(categories) = &self.categories {
            if !categories.contains(&record.category) {
                return false;
            }
        }

        if let Some(sellers) = &self.sellers {
            if !sellers.contains(&record.seller) {
                return false;
            }
        }

        if let Some(locations) = &self.locations {
            if !locations.contains(&record.location) {
                return false;
            }
        }

        if let Some(payment_types) = &self.payment_types {
            if !payment_types.contains(&record.payment_type) {
                return false;
            }
        }

        true
    }

    /// Return the matching subset of records, preserving input order
    pub fn apply(&self, records: &[SaleRecord]) -> Vec<SaleRecord> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

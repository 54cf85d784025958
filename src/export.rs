//! CSV export module for salestat
//!
//! This module serializes a filtered record set, restricted to a column
//! selection, back to CSV for download. Encoding goes through the `csv`
//! crate; the header row carries the upstream column names and dates keep
//! their wire format.
//!
//! [`CsvCache`] memoizes the encoded bytes for one export action, keyed by
//! a content hash of the record set and column selection. The cache is
//! explicit and explicitly invalidated; encoding is deterministic for
//! identical content, so a hit is purely an allocation saver.
//!
//! # Examples
//!
//! ```
//! use salestat::export::{Column, csv_file_name, write_csv};
//!
//! let records = Vec::new();
//! let mut out = Vec::new();
//! write_csv(&records, &Column::all(), &mut out).unwrap();
//!
//! assert!(String::from_utf8(out).unwrap().starts_with("Product,Category,Price"));
//! assert_eq!(csv_file_name("report"), "report.csv");
//! ```

use crate::error::{Result, SalestatError};
use crate::types::SaleRecord;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::Write;
use std::str::FromStr;

/// One exportable column of the sale-record table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Product,
    Category,
    Price,
    Freight,
    PurchaseDate,
    Seller,
    PurchaseLocation,
    Latitude,
    Longitude,
    BuyerRating,
    PaymentType,
    InstallmentCount,
}

impl Column {
    /// Every column, in upstream table order (the default selection)
    pub fn all() -> Vec<Column> {
        vec![
            Self::Product,
            Self::Category,
            Self::Price,
            Self::Freight,
            Self::PurchaseDate,
            Self::Seller,
            Self::PurchaseLocation,
            Self::Latitude,
            Self::Longitude,
            Self::BuyerRating,
            Self::PaymentType,
            Self::InstallmentCount,
        ]
    }

    /// Cell value of this column for one record
    pub fn value_of(&self, record: &SaleRecord) -> String {
        match self {
            Self::Product => record.product.clone(),
            Self::Category => record.category.to_string(),
            Self::Price => record.price.to_string(),
            Self::Freight => record.freight.to_string(),
            Self::PurchaseDate => record.purchase_date.to_string(),
            Self::Seller => record.seller.to_string(),
            Self::PurchaseLocation => record.location.to_string(),
            Self::Latitude => record.latitude.to_string(),
            Self::Longitude => record.longitude.to_string(),
            Self::BuyerRating => record.rating.to_string(),
            Self::PaymentType => record.payment_type.clone(),
            Self::InstallmentCount => record.installments.to_string(),
        }
    }
}

impl fmt::Display for Column {
    /// Header name, matching the upstream JSON keys
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Product => "Product",
            Self::Category => "Category",
            Self::Price => "Price",
            Self::Freight => "Freight",
            Self::PurchaseDate => "Purchase Date",
            Self::Seller => "Seller",
            Self::PurchaseLocation => "Purchase Location",
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
            Self::BuyerRating => "Buyer Rating",
            Self::PaymentType => "Payment Type",
            Self::InstallmentCount => "Installment Count",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Column {
    type Err = SalestatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "product" => Ok(Self::Product),
            "category" => Ok(Self::Category),
            "price" => Ok(Self::Price),
            "freight" => Ok(Self::Freight),
            "purchase-date" => Ok(Self::PurchaseDate),
            "seller" => Ok(Self::Seller),
            "purchase-location" => Ok(Self::PurchaseLocation),
            "latitude" => Ok(Self::Latitude),
            "longitude" => Ok(Self::Longitude),
            "buyer-rating" => Ok(Self::BuyerRating),
            "payment-type" => Ok(Self::PaymentType),
            "installment-count" => Ok(Self::InstallmentCount),
            _ => Err(SalestatError::InvalidArgument(format!("unknown column: {s}"))),
        }
    }
}

/// Enforce the `.csv` suffix on a user-supplied file name
///
/// # Examples
/// ```
/// use salestat::export::csv_file_name;
///
/// assert_eq!(csv_file_name("sales"), "sales.csv");
/// assert_eq!(csv_file_name("sales.csv"), "sales.csv");
/// ```
pub fn csv_file_name(name: &str) -> String {
    if name.to_lowercase().ends_with(".csv") {
        name.to_string()
    } else {
        format!("{name}.csv")
    }
}

/// Write records restricted to the selected columns as CSV
///
/// Header row = column names; one row per record, in input order; UTF-8,
/// comma-separated.
pub fn write_csv<W: Write>(records: &[SaleRecord], columns: &[Column], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(columns.iter().map(Column::to_string))?;
    for record in records {
        wtr.write_record(columns.iter().map(|c| c.value_of(record)))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Encode records restricted to the selected columns as CSV bytes
pub fn encode_csv(records: &[SaleRecord], columns: &[Column]) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_csv(records, columns, &mut bytes)?;
    Ok(bytes)
}

/// Memoized CSV encoding for one export action
///
/// Keyed by a content hash of the record set plus column selection; a
/// changed filter or column choice re-encodes, identical content reuses
/// the previous bytes.
#[derive(Debug, Default)]
pub struct CsvCache {
    entry: Option<(u64, Vec<u8>)>,
}

impl CsvCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode the records, reusing the cached bytes on a content match
    pub fn encode(&mut self, records: &[SaleRecord], columns: &[Column]) -> Result<&[u8]> {
        let key = content_key(records, columns);

        let hit = matches!(&self.entry, Some((cached, _)) if *cached == key);
        if !hit {
            let bytes = encode_csv(records, columns)?;
            self.entry = Some((key, bytes));
        }

        Ok(&self.entry.as_ref().unwrap().1)
    }

    /// Drop the cached encoding
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

/// Content hash over the record fields and column selection
///
/// f64 fields hash through their bit pattern, so any value change (and
/// nothing else) changes the key.
fn content_key(records: &[SaleRecord], columns: &[Column]) -> u64 {
    let mut hasher = DefaultHasher::new();

    columns.hash(&mut hasher);
    records.len().hash(&mut hasher);
    for record in records {
        record.product.hash(&mut hasher);
        record.category.hash(&mut hasher);
        record.price.to_bits().hash(&mut hasher);
        record.freight.to_bits().hash(&mut hasher);
        record.purchase_date.hash(&mut hasher);
        record.seller.hash(&mut hasher);
        record.location.hash(&mut hasher);
        record.latitude.to_bits().hash(&mut hasher);
        record.longitude.to_bits().hash(&mut hasher);
        record.rating.hash(&mut hasher);
        record.payment_type.hash(&mut hasher);
        record.installments.hash(&mut hasher);
    }

    hasher.finish()
}

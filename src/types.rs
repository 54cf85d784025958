//! Core domain types for salestat
//!
//! This module contains the fundamental types used throughout the salestat
//! library. These types provide strong typing for common concepts like
//! sellers, purchase locations, categories and purchase dates, plus the
//! wire-format record fetched from the sales API.

use chrono::{Datelike, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Textual wire format of the purchase-date column
pub const PURCHASE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Strongly-typed product category wrapper
///
/// # Examples
/// ```
/// use salestat::types::Category;
///
/// let category = Category::new("electronics");
/// assert_eq!(category.as_str(), "electronics");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Create a new Category from any string-like type
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strongly-typed seller name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seller(String);

impl Seller {
    /// Create a new Seller
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Seller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Seller {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strongly-typed purchase location (state) name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location(String);

impl Location {
    /// Create a new Location
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Purchase date wrapper
///
/// The sales API sends dates as `DD/MM/YYYY` text; parsing is strict and a
/// malformed value fails deserialization of the whole response.
///
/// # Examples
/// ```
/// use salestat::types::PurchaseDate;
/// use chrono::NaiveDate;
///
/// let date = PurchaseDate::new(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
/// assert_eq!(date.to_string(), "15/03/2023");
/// assert_eq!(date.year(), 2023);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PurchaseDate(NaiveDate);

impl PurchaseDate {
    /// Create a new PurchaseDate
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the inner NaiveDate
    pub fn inner(&self) -> &NaiveDate {
        &self.0
    }

    /// Calendar year of the purchase
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Calendar month of the purchase (1-12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Truncate to the calendar month bucket
    pub fn month_key(&self) -> MonthKey {
        MonthKey::new(self.0.year(), self.0.month())
    }
}

impl fmt::Display for PurchaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(PURCHASE_DATE_FORMAT))
    }
}

impl AsRef<NaiveDate> for PurchaseDate {
    fn as_ref(&self) -> &NaiveDate {
        &self.0
    }
}

impl Serialize for PurchaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PurchaseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let date = NaiveDate::parse_from_str(&text, PURCHASE_DATE_FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid purchase date '{text}': {e}")))?;
        Ok(Self(date))
    }
}

/// Calendar month bucket used for monthly aggregation
///
/// Ordering is chronological: first by year, then by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
}

impl MonthKey {
    /// Create a new MonthKey
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// English month name, matching the labels charted by the dashboard
    ///
    /// # Examples
    /// ```
    /// use salestat::types::MonthKey;
    ///
    /// assert_eq!(MonthKey::new(2023, 1).month_name(), "January");
    /// assert_eq!(MonthKey::new(2021, 12).month_name(), "December");
    /// ```
    pub fn month_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES[(self.month.saturating_sub(1) as usize) % 12]
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Server-side region filter
///
/// The sales API understands a `regiao` query parameter holding the
/// lowercase region name; an empty value means no server-side filtering.
/// `Brasil` is the whole country and maps to the empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Whole country (no server-side filter)
    Brasil,
    CentroOeste,
    Nordeste,
    Norte,
    Sudeste,
    Sul,
}

impl Region {
    /// Value sent as the `regiao` query parameter
    pub fn query_value(&self) -> &'static str {
        match self {
            Self::Brasil => "",
            Self::CentroOeste => "centro_oeste",
            Self::Nordeste => "nordeste",
            Self::Norte => "norte",
            Self::Sudeste => "sudeste",
            Self::Sul => "sul",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brasil => write!(f, "Brasil"),
            Self::CentroOeste => write!(f, "Centro-Oeste"),
            Self::Nordeste => write!(f, "Nordeste"),
            Self::Norte => write!(f, "Norte"),
            Self::Sudeste => write!(f, "Sudeste"),
            Self::Sul => write!(f, "Sul"),
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .to_lowercase()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .collect();
        match normalized.as_str() {
            "brasil" | "brazil" => Ok(Self::Brasil),
            "centrooeste" => Ok(Self::CentroOeste),
            "nordeste" => Ok(Self::Nordeste),
            "norte" => Ok(Self::Norte),
            "sudeste" => Ok(Self::Sudeste),
            "sul" => Ok(Self::Sul),
            _ => Err(format!("Invalid region: {s}")),
        }
    }
}

/// One product-sale record fetched from the sales API
///
/// Field names map 1:1 to the upstream JSON keys. All fields are immutable
/// once fetched; derived tables never mutate records, they copy from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Product name
    #[serde(rename = "Product")]
    pub product: String,
    /// Product category
    #[serde(rename = "Category")]
    pub category: Category,
    /// Unit price; revenue sums this column and excludes freight
    #[serde(rename = "Price")]
    pub price: f64,
    /// Freight cost
    #[serde(rename = "Freight")]
    pub freight: f64,
    /// Purchase date (`DD/MM/YYYY` on the wire)
    #[serde(rename = "Purchase Date")]
    pub purchase_date: PurchaseDate,
    /// Seller name
    #[serde(rename = "Seller")]
    pub seller: Seller,
    /// Purchase location (state)
    #[serde(rename = "Purchase Location")]
    pub location: Location,
    /// Location latitude
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Location longitude
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// Buyer rating (1-5)
    #[serde(rename = "Buyer Rating")]
    pub rating: u8,
    /// Payment type
    #[serde(rename = "Payment Type")]
    pub payment_type: String,
    /// Installment count
    #[serde(rename = "Installment Count")]
    pub installments: u32,
}
